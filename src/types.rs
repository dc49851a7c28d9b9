//! Result types shared between the core and the presentation layer.

use std::collections::BTreeMap;
use std::fmt;

/// Which weak-pattern check fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeakPattern {
    CommonWord,
    KeyboardWalk,
    Repetition,
    Sequence,
}

impl WeakPattern {
    /// Fixed warning shown for this pattern.
    pub fn message(self) -> &'static str {
        match self {
            WeakPattern::CommonWord => "⚠️ Avoid using very common words or phrases.",
            WeakPattern::KeyboardWalk => "⚠️ Avoid simple keyboard patterns.",
            WeakPattern::Repetition => "⚠️ Avoid repeating characters (e.g., \"aaa\").",
            WeakPattern::Sequence => "⚠️ Avoid sequential characters (e.g., \"abc\" or \"123\").",
        }
    }
}

/// Outcome of the pattern detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternResult {
    pub is_weak: bool,
    pub message: String,
    pub kind: Option<WeakPattern>,
}

impl PatternResult {
    pub fn clean() -> Self {
        Self {
            is_weak: false,
            message: String::new(),
            kind: None,
        }
    }

    pub fn weak(kind: WeakPattern) -> Self {
        Self {
            is_weak: true,
            message: kind.message().to_string(),
            kind: Some(kind),
        }
    }
}

/// One row of the per-criterion checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Symbol,
    Breach,
}

impl Criterion {
    /// The five composition criteria, in display order.
    pub const COMPOSITION: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Number,
        Criterion::Symbol,
    ];

    pub const ALL: [Criterion; 6] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Number,
        Criterion::Symbol,
        Criterion::Breach,
    ];
}

/// Composition score, 0..=5, with the individual pass/fail of each check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionScore {
    pub score: u8,
    pub checks: BTreeMap<Criterion, bool>,
}

impl CompositionScore {
    pub fn passed(&self, criterion: Criterion) -> bool {
        self.checks.get(&criterion).copied().unwrap_or(false)
    }
}

/// Result of a range lookup against the breach corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreachResult {
    pub is_pwned: bool,
    pub count: u64,
}

impl BreachResult {
    /// The conservative "not found" result, also used when a lookup fails.
    pub fn safe() -> Self {
        Self::default()
    }

    pub fn pwned(count: u64) -> Self {
        Self {
            is_pwned: true,
            count,
        }
    }
}

/// State of the breach row while an evaluation is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Loading,
    Done(BreachResult),
}

/// Display state of a single checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionStatus {
    Neutral,
    Pass,
    Fail,
    Loading,
    Safe,
    Pwned,
}

/// Status of every checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaReport {
    statuses: BTreeMap<Criterion, CriterionStatus>,
}

impl CriteriaReport {
    /// All rows neutral: nothing typed yet.
    pub fn idle() -> Self {
        Self {
            statuses: Criterion::ALL
                .iter()
                .map(|&c| (c, CriterionStatus::Neutral))
                .collect(),
        }
    }

    pub fn from_parts(composition: &CompositionScore, breach: BreachStatus) -> Self {
        let mut statuses: BTreeMap<_, _> = Criterion::COMPOSITION
            .iter()
            .map(|&c| {
                let status = if composition.passed(c) {
                    CriterionStatus::Pass
                } else {
                    CriterionStatus::Fail
                };
                (c, status)
            })
            .collect();

        let breach_status = match breach {
            BreachStatus::Loading => CriterionStatus::Loading,
            BreachStatus::Done(r) if r.is_pwned => CriterionStatus::Pwned,
            BreachStatus::Done(_) => CriterionStatus::Safe,
        };
        statuses.insert(Criterion::Breach, breach_status);

        Self { statuses }
    }

    pub fn status(&self, criterion: Criterion) -> CriterionStatus {
        self.statuses
            .get(&criterion)
            .copied()
            .unwrap_or(CriterionStatus::Neutral)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, CriterionStatus)> + '_ {
        self.statuses.iter().map(|(&c, &s)| (c, s))
    }
}

/// Overall strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Idle,
    Pwned,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Idle => "Enter a password to see its strength.",
            StrengthTier::Pwned => "PWNED!",
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Maps a composition score onto a tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Moderate,
            _ => StrengthTier::Strong,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color category of the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Neutral,
    Danger,
    Weak,
    Fair,
    Good,
}

impl BarColor {
    pub fn as_hex(self) -> Option<&'static str> {
        match self {
            BarColor::Neutral => None,
            BarColor::Danger => Some("#ef4444"),
            BarColor::Weak => Some("#f87171"),
            BarColor::Fair => Some("#facc15"),
            BarColor::Good => Some("#4ade80"),
        }
    }
}

/// Everything the presentation layer needs to render one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthVerdict {
    pub tier: StrengthTier,
    pub bar_percent: u8,
    pub bar_color: BarColor,
    pub warning: String,
    pub criteria: CriteriaReport,
}

impl StrengthVerdict {
    /// Reset state for an empty input.
    pub fn idle() -> Self {
        Self {
            tier: StrengthTier::Idle,
            bar_percent: 0,
            bar_color: BarColor::Neutral,
            warning: String::new(),
            criteria: CriteriaReport::idle(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }

    /// True for the top tier, where the bar gets its extra effect.
    pub fn highlight(&self) -> bool {
        self.tier == StrengthTier::Strong
    }
}

/// Formats a count with comma thousands separators.
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//! Strength evaluator - combines composition, patterns and breach status.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use crate::breach::{BreachChecker, RangeClient};
#[cfg(feature = "async")]
use crate::generator::{GeneratorConfig, GeneratorError, generate};

use crate::composition::score_composition;
use crate::detector::detect_pattern;
use crate::types::{
    BarColor, BreachResult, BreachStatus, CompositionScore, CriteriaReport, PatternResult,
    StrengthTier, StrengthVerdict, group_thousands,
};

/// Bar fill used for the two worst tiers.
const FLOOR_PERCENT: u8 = 10;

/// Synchronous half of an evaluation, ready before the breach lookup finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAssessment {
    pub composition: CompositionScore,
    pub pattern: PatternResult,
}

impl LocalAssessment {
    /// Runs the composition scorer and pattern detector.
    ///
    /// Returns `None` for an empty password, which is the idle state.
    pub fn of(password: &SecretString) -> Option<Self> {
        if password.expose_secret().is_empty() {
            return None;
        }
        Some(Self {
            composition: score_composition(password),
            pattern: detect_pattern(password),
        })
    }

    pub fn criteria(&self, breach: BreachStatus) -> CriteriaReport {
        CriteriaReport::from_parts(&self.composition, breach)
    }

    /// Reduces the assessment and a finished breach lookup to a verdict.
    ///
    /// A breach hit outranks a weak pattern, which outranks the score.
    pub fn verdict(&self, breach: BreachResult) -> StrengthVerdict {
        let criteria = self.criteria(BreachStatus::Done(breach));

        if breach.is_pwned {
            let warning = if breach.count > 0 {
                format!("Seen in breaches {} times.", group_thousands(breach.count))
            } else {
                "Seen in breaches.".to_string()
            };
            return StrengthVerdict {
                tier: StrengthTier::Pwned,
                bar_percent: FLOOR_PERCENT,
                bar_color: BarColor::Danger,
                warning,
                criteria,
            };
        }

        if self.pattern.is_weak {
            return StrengthVerdict {
                tier: StrengthTier::VeryWeak,
                bar_percent: FLOOR_PERCENT,
                bar_color: BarColor::Danger,
                warning: self.pattern.message.clone(),
                criteria,
            };
        }

        let score = self.composition.score.min(5);
        let tier = StrengthTier::from_score(score);
        let bar_color = match tier {
            StrengthTier::Strong => BarColor::Good,
            StrengthTier::Moderate => BarColor::Fair,
            _ => BarColor::Weak,
        };

        StrengthVerdict {
            tier,
            bar_percent: score * 20,
            bar_color,
            warning: String::new(),
            criteria,
        }
    }
}

/// Evaluates a password against an already-known breach result.
pub fn evaluate_with_breach(password: &SecretString, breach: BreachResult) -> StrengthVerdict {
    match LocalAssessment::of(password) {
        Some(local) => local.verdict(breach),
        None => StrengthVerdict::idle(),
    }
}

/// Evaluates a password, awaiting the breach lookup.
///
/// The lookup fails closed, so this never errors.
#[cfg(feature = "async")]
pub async fn evaluate<C: RangeClient>(
    password: &SecretString,
    checker: &BreachChecker<C>,
) -> StrengthVerdict {
    let Some(local) = LocalAssessment::of(password) else {
        return StrengthVerdict::idle();
    };
    let breach = checker.check(password).await;
    local.verdict(breach)
}

/// Generates a password and evaluates it like a typed one.
#[cfg(feature = "async")]
pub async fn generate_and_evaluate<C: RangeClient>(
    config: &GeneratorConfig,
    checker: &BreachChecker<C>,
) -> Result<(SecretString, StrengthVerdict), GeneratorError> {
    let password = generate(config)?;
    let verdict = evaluate(&password, checker).await;
    Ok((password, verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Criterion, CriterionStatus};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_empty_password_is_idle() {
        let verdict = evaluate_with_breach(&secret(""), BreachResult::pwned(10));
        assert_eq!(verdict, StrengthVerdict::idle());
        assert_eq!(verdict.label(), "Enter a password to see its strength.");
        assert_eq!(verdict.bar_percent, 0);
        assert!(
            verdict
                .criteria
                .iter()
                .all(|(_, s)| s == CriterionStatus::Neutral)
        );
    }

    #[test]
    fn test_breach_overrides_everything() {
        let verdict = evaluate_with_breach(&secret("Ab3!xk9#Qm2$"), BreachResult::pwned(1234567));
        assert_eq!(verdict.tier, StrengthTier::Pwned);
        assert_eq!(verdict.bar_percent, 10);
        assert_eq!(verdict.bar_color, BarColor::Danger);
        assert_eq!(verdict.warning, "Seen in breaches 1,234,567 times.");
        assert_eq!(verdict.criteria.status(Criterion::Breach), CriterionStatus::Pwned);
        assert_eq!(verdict.criteria.status(Criterion::Symbol), CriterionStatus::Pass);
    }

    #[test]
    fn test_breach_overrides_pattern() {
        let verdict = evaluate_with_breach(&secret("password"), BreachResult::pwned(3));
        assert_eq!(verdict.tier, StrengthTier::Pwned);
        assert_eq!(verdict.warning, "Seen in breaches 3 times.");
    }

    #[test]
    fn test_pattern_overrides_score() {
        let verdict = evaluate_with_breach(&secret("Password123!xyz"), BreachResult::safe());
        assert_eq!(verdict.tier, StrengthTier::VeryWeak);
        assert_eq!(verdict.label(), "Very Weak");
        assert_eq!(verdict.bar_percent, 10);
        assert_eq!(verdict.warning, "⚠️ Avoid using very common words or phrases.");
        assert_eq!(verdict.criteria.status(Criterion::Breach), CriterionStatus::Safe);
    }

    #[test]
    fn test_score_tiers() {
        let cases = [
            ("zk", StrengthTier::Weak, 20, BarColor::Weak),
            ("Zk7", StrengthTier::Moderate, 60, BarColor::Fair),
            ("Zk7!", StrengthTier::Moderate, 80, BarColor::Fair),
            ("Ab3!ab3!ab3!", StrengthTier::Strong, 100, BarColor::Good),
        ];
        for (pwd, tier, percent, color) in cases {
            let verdict = evaluate_with_breach(&secret(pwd), BreachResult::safe());
            assert_eq!(verdict.tier, tier, "{}", pwd);
            assert_eq!(verdict.bar_percent, percent, "{}", pwd);
            assert_eq!(verdict.bar_color, color, "{}", pwd);
            assert!(verdict.warning.is_empty());
        }
    }

    #[test]
    fn test_strong_is_highlighted() {
        let verdict = evaluate_with_breach(&secret("Ab3!ab3!ab3!"), BreachResult::safe());
        assert!(verdict.highlight());
        let verdict = evaluate_with_breach(&secret("Zk7"), BreachResult::safe());
        assert!(!verdict.highlight());
    }

    #[test]
    fn test_loading_criteria() {
        let local = LocalAssessment::of(&secret("Zk7")).unwrap();
        let report = local.criteria(BreachStatus::Loading);
        assert_eq!(report.status(Criterion::Breach), CriterionStatus::Loading);
        assert_eq!(report.status(Criterion::Length), CriterionStatus::Fail);
        assert_eq!(report.status(Criterion::Number), CriterionStatus::Pass);
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::breach::stub::StubRangeClient;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_breached() {
        let checker = BreachChecker::with_client(StubRangeClient::body(
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\n",
        ));
        let verdict = evaluate(&secret("password"), &checker).await;
        assert_eq!(verdict.tier, StrengthTier::Pwned);
        assert_eq!(verdict.warning, "Seen in breaches 42 times.");
    }

    #[tokio::test]
    async fn test_evaluate_lookup_failure_falls_back_to_score() {
        let checker = BreachChecker::with_client(StubRangeClient::status(503));
        let verdict = evaluate(&secret("Ab3!ab3!ab3!"), &checker).await;
        assert_eq!(verdict.tier, StrengthTier::Strong);
    }

    #[tokio::test]
    async fn test_generate_and_evaluate() {
        let checker = BreachChecker::with_client(StubRangeClient::body(""));
        let config = GeneratorConfig {
            length: 24,
            ..GeneratorConfig::default()
        };
        let (password, verdict) = generate_and_evaluate(&config, &checker).await.unwrap();
        assert_eq!(password.expose_secret().len(), 24);
        assert_eq!(verdict, evaluate_with_breach(&password, Default::default()));
        assert_eq!(checker.client().requested().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_and_evaluate_rejects_zero_length() {
        let checker = BreachChecker::with_client(StubRangeClient::body(""));
        let config = GeneratorConfig {
            length: 0,
            ..GeneratorConfig::default()
        };
        let err = generate_and_evaluate(&config, &checker).await.unwrap_err();
        assert_eq!(err, GeneratorError::ZeroLength);
        assert!(checker.client().requested().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_empty_skips_lookup() {
        let checker = BreachChecker::with_client(StubRangeClient::body(""));
        let verdict = evaluate(&secret(""), &checker).await;
        assert_eq!(verdict, StrengthVerdict::idle());
        assert!(checker.client().requested().is_empty());
    }
}

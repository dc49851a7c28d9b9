//! Composition scorer - length and character-class diversity.

use std::collections::BTreeMap;

use secrecy::SecretString;

use crate::sections::{
    CompositionSection, digit_section, length_section, lowercase_section, symbol_section,
    uppercase_section,
};
use crate::types::{CompositionScore, Criterion};

/// Scores a password from 0 to 5, one point per satisfied criterion.
///
/// All five checks always run so the caller can render every row of the
/// checklist. Callers treat the empty string as "no input" before getting here.
pub fn score_composition(password: &SecretString) -> CompositionScore {
    let sections: [(Criterion, CompositionSection); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Number, digit_section),
        (Criterion::Symbol, symbol_section),
    ];

    let checks: BTreeMap<Criterion, bool> = sections
        .into_iter()
        .map(|(criterion, section_fn)| (criterion, section_fn(password)))
        .collect();
    let score = checks.values().filter(|&&passed| passed).count() as u8;

    CompositionScore { score, checks }
}

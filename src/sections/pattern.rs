//! Pattern analysis section - detects repetitive and sequential patterns.

use super::WeakPattern;
use secrecy::{ExposeSecret, SecretString};

fn lowered_chars(password: &SecretString) -> Vec<char> {
    password.expose_secret().to_lowercase().chars().collect()
}

/// Flags any character repeated three or more times in a row (case-insensitive).
pub fn repetition_section(password: &SecretString) -> Option<WeakPattern> {
    let chars = lowered_chars(password);
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
        .then_some(WeakPattern::Repetition)
}

/// Flags any three consecutive characters whose code points step by exactly +1 or -1.
pub fn sequence_section(password: &SecretString) -> Option<WeakPattern> {
    let chars = lowered_chars(password);
    chars
        .windows(3)
        .any(|w| {
            let (a, b, c) = (w[0] as i64, w[1] as i64, w[2] as i64);
            (a + 1 == b && b + 1 == c) || (a - 1 == b && b - 1 == c)
        })
        .then_some(WeakPattern::Sequence)
}

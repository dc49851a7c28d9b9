//! Word-list section - substring checks against common passwords and keyboard walks.

use super::WeakPattern;
use secrecy::{ExposeSecret, SecretString};

/// Common passwords and words, lowercase.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "123456789",
    "qwerty",
    "iloveyou",
    "111111",
    "password123",
    "123123",
    "football",
    "secret",
];

/// QWERTY row and column walks, lowercase.
pub const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1q2w3e4r"];

fn contains_any(password: &SecretString, list: &[&str]) -> bool {
    let pwd = password.expose_secret().to_lowercase();
    list.iter().any(|word| pwd.contains(word))
}

/// Flags passwords that contain a common password anywhere (case-insensitive).
pub fn common_word_section(password: &SecretString) -> Option<WeakPattern> {
    contains_any(password, COMMON_PASSWORDS).then_some(WeakPattern::CommonWord)
}

/// Flags passwords that contain a keyboard walk anywhere (case-insensitive).
pub fn keyboard_walk_section(password: &SecretString) -> Option<WeakPattern> {
    contains_any(password, KEYBOARD_PATTERNS).then_some(WeakPattern::KeyboardWalk)
}

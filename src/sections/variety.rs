//! Character variety sections - uppercase, lowercase, digits and symbols.

use secrecy::{ExposeSecret, SecretString};

/// Punctuation accepted as a symbol.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// Checks if the password contains an ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_uppercase())
}

/// Checks if the password contains an ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_lowercase())
}

/// Checks if the password contains an ASCII digit.
pub fn digit_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_digit())
}

/// Checks if the password contains a character from `SYMBOLS`.
pub fn symbol_section(password: &SecretString) -> bool {
    any_char(password, |c| SYMBOLS.contains(c))
}

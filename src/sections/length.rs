//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 12;

/// Checks if the password has at least `MIN_LENGTH` characters.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!abcd".to_string().into());
        assert!(!length_section(&pwd));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("123456789012".to_string().into());
        assert!(length_section(&pwd));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        let pwd = SecretString::new("ééééééééééé".to_string().into());
        assert!(!length_section(&pwd));
    }
}

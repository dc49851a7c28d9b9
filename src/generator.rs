//! Password generator - random passwords with guaranteed character classes.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use secrecy::SecretString;
use thiserror::Error;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    ZeroLength,
    #[error("Password length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },
    #[error("Password length {length} cannot fit {required} required characters")]
    LengthTooShort { length: usize, required: usize },
}

/// Options for [`generate`]. Lowercase letters are always part of the charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    pub const MAX_LENGTH: usize = 1024;

    /// Character classes that get a guaranteed slot.
    fn required_classes(&self) -> Vec<&'static [u8]> {
        [
            (self.include_uppercase, UPPERCASE),
            (self.include_numbers, DIGITS),
            (self.include_symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect()
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.length == 0 {
            return Err(GeneratorError::ZeroLength);
        }
        if self.length > Self::MAX_LENGTH {
            return Err(GeneratorError::TooLong {
                length: self.length,
                max: Self::MAX_LENGTH,
            });
        }
        let required = self.required_classes().len();
        if required > self.length {
            return Err(GeneratorError::LengthTooShort {
                length: self.length,
                required,
            });
        }
        Ok(())
    }
}

/// Generates a password from the operating system's CSPRNG.
pub fn generate(config: &GeneratorConfig) -> Result<SecretString, GeneratorError> {
    generate_with_rng(config, &mut OsRng)
}

/// Generates a password from the given cryptographically secure source.
///
/// One character from each selected class is placed first, plus a
/// lowercase letter when the length leaves room for it. The rest is filled
/// uniformly from the combined charset and the whole sequence is shuffled
/// with Fisher-Yates. Every draw uses `rng`.
pub fn generate_with_rng<R: RngCore + CryptoRng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    if let Err(e) = config.validate() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Rejected generator config: {}", e);
        return Err(e);
    }

    let required = config.required_classes();
    let mut charset = LOWERCASE.to_vec();
    for class in &required {
        charset.extend_from_slice(class);
    }

    let mut password: Vec<u8> = Vec::with_capacity(config.length);
    for class in &required {
        password.push(class[rng.gen_range(0..class.len())]);
    }
    if password.len() < config.length {
        password.push(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]);
    }
    while password.len() < config.length {
        password.push(charset[rng.gen_range(0..charset.len())]);
    }
    password.shuffle(rng);

    // Every charset is ASCII.
    let password: String = password.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into_boxed_str()))
}

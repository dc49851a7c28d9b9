//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of a password. Weak-pattern
//! sections report which pattern they found; composition sections report
//! whether their criterion is met.

mod length;
mod pattern;
mod variety;
mod wordlist;

pub use length::length_section;
pub use pattern::{repetition_section, sequence_section};
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};
pub use wordlist::{
    COMMON_PASSWORDS, KEYBOARD_PATTERNS, common_word_section, keyboard_walk_section,
};

use crate::types::WeakPattern;
use secrecy::SecretString;

/// Result type for weak-pattern sections.
/// - `Some(kind)` - Section found a weak pattern
/// - `None` - Section passed
pub type PatternSection = fn(&SecretString) -> Option<WeakPattern>;

/// Result type for composition sections: `true` when the criterion is met.
pub type CompositionSection = fn(&SecretString) -> bool;

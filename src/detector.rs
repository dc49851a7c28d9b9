//! Weak-pattern detector.

use secrecy::SecretString;

use crate::sections::{
    PatternSection, common_word_section, keyboard_walk_section, repetition_section,
    sequence_section,
};
use crate::types::PatternResult;

/// Scans a password for weak patterns.
///
/// Sections run in priority order and the first hit wins: common words,
/// keyboard walks, repeated characters, then sequential runs. A password
/// that trips none of them yields a clean result with an empty message.
pub fn detect_pattern(password: &SecretString) -> PatternResult {
    let sections: [(&str, PatternSection); 4] = [
        ("common_word", common_word_section),
        ("keyboard_walk", keyboard_walk_section),
        ("repetition", repetition_section),
        ("sequence", sequence_section),
    ];

    for (_section_name, section_fn) in sections {
        if let Some(kind) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("weak pattern detected by section: {}", _section_name);
            return PatternResult::weak(kind);
        }
    }

    PatternResult::clean()
}

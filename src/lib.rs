//! Password auditing library
//!
//! Evaluates password strength while the user types and generates strong
//! random passwords.
//!
//! An evaluation combines three independent checks:
//!
//! - a composition score (length and character classes, 0 to 5),
//! - weak-pattern detection (common words, keyboard walks, repeats, runs),
//! - a k-anonymity lookup against the Pwned Passwords corpus, where only
//!   the first five hex characters of the SHA-1 digest leave the process.
//!
//! # Features
//!
//! - `async` (default): breach lookup, async evaluation and the debounced
//!   [`EvaluationSession`]
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{BreachResult, GeneratorConfig, evaluate_with_breach, generate};
//! use secrecy::SecretString;
//!
//! // Evaluate against a known breach result (no network)
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = evaluate_with_breach(&password, BreachResult::safe());
//! println!("{} ({}%)", verdict.label(), verdict.bar_percent);
//!
//! // Generate a password with every character class
//! let generated = generate(&GeneratorConfig::default()).expect("valid config");
//!
//! // Evaluate with a live breach lookup
//! #[cfg(feature = "async")]
//! async fn with_lookup(password: &SecretString) -> Result<(), pwd_audit::BreachError> {
//!     let config = pwd_audit::BreachConfig::default();
//!     let checker = pwd_audit::BreachChecker::new(&config)?;
//!     let verdict = pwd_audit::evaluate(password, &checker).await;
//!     println!("{}", verdict.label());
//!     Ok(())
//! }
//! # let _ = generated;
//! ```

mod composition;
mod detector;
mod evaluator;
mod generator;
mod sections;
mod types;

#[cfg(feature = "async")]
mod breach;
#[cfg(feature = "async")]
mod session;

// Public API
pub use composition::score_composition;
pub use sections::{COMMON_PASSWORDS, KEYBOARD_PATTERNS};
pub use detector::detect_pattern;
pub use evaluator::{LocalAssessment, evaluate_with_breach};
pub use generator::{GeneratorConfig, GeneratorError, generate, generate_with_rng};
pub use types::{
    BarColor, BreachResult, BreachStatus, CompositionScore, CriteriaReport, Criterion,
    CriterionStatus, PatternResult, StrengthTier, StrengthVerdict, WeakPattern,
};

#[cfg(feature = "async")]
pub use breach::{
    BreachChecker, BreachConfig, BreachError, HashRange, HttpRangeClient, RangeClient,
    parse_range,
};
#[cfg(feature = "async")]
pub use evaluator::{evaluate, generate_and_evaluate};
#[cfg(feature = "async")]
pub use session::{DisplayState, EvaluationSession, SessionConfig, SessionUpdate};

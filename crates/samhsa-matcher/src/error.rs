//! Matcher error types.

use thiserror::Error;

/// A category predicate was handed a coding from a different system.
///
/// This is a routing bug in the caller, not bad claim data: category
/// predicates may only see codings already known to carry that category's
/// system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Illegal coding system: expected '{expected}', found '{}'", .found.as_deref().unwrap_or("<none>"))]
pub struct SystemMismatch {
    /// The system the predicate requires.
    pub expected: String,
    /// The system actually present on the coding.
    pub found: Option<String>,
}

/// Errors reading matcher configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognized rule generation name.
    #[error("Invalid rule generation '{value}' in {variable} (expected 'base' or 'r4')")]
    InvalidGeneration {
        /// The environment variable that held the value.
        variable: String,
        /// The rejected value.
        value: String,
    },
}

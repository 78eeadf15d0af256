//! Domain error types

use thiserror::Error;

/// Errors raised while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Validation failed (e.g., value outside its allowed range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside their allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if !(0.0..=1.0).contains(&level) {
    ///     return Err(DomainError::validation("Volume must be within [0, 1]"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

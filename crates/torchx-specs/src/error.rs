//! Error types for the torchx-specs crate.

use thiserror::Error;

/// The main error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecsError {
    /// Error when a string does not name a known retry policy.
    #[error("Unknown retry policy: {name}")]
    UnknownRetryPolicy {
        /// The name that failed to parse.
        name: String,
    },
}

/// A specialized Result type for spec operations.
pub type Result<T> = std::result::Result<T, SpecsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecsError::UnknownRetryPolicy {
            name: "NEVER".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown retry policy: NEVER");
    }
}

//! Lazy macro tokens mirroring Python `torchx.specs.api.macros`.
//!
//! These are literal placeholder strings, never resolved in this repository.
//! The scheduler that consumes a [`Role`](crate::Role) substitutes them at
//! submission time, which is why e.g. a rendezvous id can reference the
//! application id before the application has been submitted.

/// Unique id of the current application, scoped per submission.
pub const APP_ID: &str = "${app_id}";

/// Path prefix where the container's image files are mounted at runtime.
pub const IMG_ROOT: &str = "${img_root}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_placeholder_sentinels() {
        // Downstream substitution keys off the ${...} shape.
        assert!(APP_ID.starts_with("${") && APP_ID.ends_with('}'));
        assert!(IMG_ROOT.starts_with("${") && IMG_ROOT.ends_with('}'));
    }
}

//! Package version and the container images published for it.
//!
//! Mirrors Python `torchx/version.py`.

use once_cell::sync::Lazy;

/// Version of the torchx-rs crates.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The github container registry image corresponding to the current package
/// version.
pub static TORCHX_IMAGE: Lazy<String> =
    Lazy::new(|| format!("ghcr.io/pytorch/torchx:{}", VERSION));

/// The examples image corresponding to the current package version.
pub static EXAMPLES_IMAGE: Lazy<String> =
    Lazy::new(|| format!("ghcr.io/pytorch/torchx-examples:{}", VERSION));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_track_package_version() {
        assert!(TORCHX_IMAGE.ends_with(VERSION));
        assert!(EXAMPLES_IMAGE.ends_with(VERSION));
        assert!(TORCHX_IMAGE.starts_with("ghcr.io/pytorch/torchx:"));
    }
}

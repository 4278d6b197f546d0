//! Container descriptors mirroring Python `torchx.specs.api.Container`.

use serde::{Deserialize, Serialize};

/// An opaque descriptor of the image a role's replicas run in.
///
/// The component layer passes containers through unchanged; image pulling and
/// resource semantics belong to the scheduler that consumes the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Image identifier, e.g. a docker tag or an fbpkg name.
    pub image: String,
}

impl Container {
    /// Creates a container descriptor for the given image.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

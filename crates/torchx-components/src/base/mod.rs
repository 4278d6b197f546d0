//! Base components mirroring Python `torchx/components/base/`.
//!
//! These are the building blocks other components compose; currently the
//! torchelastic proxy role builder.

pub mod roles;

pub use roles::{create_torch_dist_role, LaunchOpts, LaunchValue, TorchDistRoleConfig};

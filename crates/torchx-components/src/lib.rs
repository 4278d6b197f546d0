//! Launch components for torchx-rs.
//!
//! Components translate user launch parameters (entrypoint, arguments,
//! environment, replica count, retry policy) into the [`Role`] descriptors
//! the submission layer hands to a scheduler. Everything in this crate is a
//! pure, synchronous transformation; spawning, rendezvous, and retries happen
//! in the torchelastic agent and the scheduler, not here.
//!
//! # Example
//!
//! ```
//! use torchx_components::base::{create_torch_dist_role, LaunchOpts, TorchDistRoleConfig};
//! use torchx_specs::Container;
//!
//! let trainer = create_torch_dist_role(
//!     "trainer",
//!     Container::new("my_image:latest"),
//!     "train.py",
//!     TorchDistRoleConfig {
//!         num_replicas: 2,
//!         launch_opts: LaunchOpts::new().set("nproc_per_node", 8_i64),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(trainer.name, "trainer");
//! ```
//!
//! [`Role`]: torchx_specs::Role

pub mod base;

pub use base::{create_torch_dist_role, LaunchOpts, LaunchValue, TorchDistRoleConfig};

//! Scheduler-facing job specification types for torchx-rs.
//!
//! This crate provides the descriptor types that components build and
//! schedulers consume. Nothing here runs anything: a [`Role`] is a pure value
//! describing how one logical unit of a distributed job should eventually be
//! launched.
//!
//! # Modules
//!
//! - [`role`]: [`Role`] descriptors and [`RetryPolicy`].
//! - [`container`]: opaque [`Container`] image descriptors.
//! - [`macros`]: lazy `${...}` tokens substituted at submission time.
//! - [`version`]: package version and the images published for it.
//! - [`error`]: error types for the crate.

pub mod container;
pub mod error;
pub mod macros;
pub mod role;
pub mod version;

// Re-export commonly used types at the crate root for convenience
pub use container::Container;
pub use error::{Result, SpecsError};
pub use role::{RetryPolicy, Role};
pub use version::{EXAMPLES_IMAGE, TORCHX_IMAGE, VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_reexports() {
        let role = Role::new("test").on(Container::new("img"));
        assert_eq!(role.retry_policy, RetryPolicy::Application);

        let _err: Result<()> = Ok(());
        assert_eq!(macros::APP_ID, "${app_id}");
    }
}

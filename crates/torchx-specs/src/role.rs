//! Role descriptors mirroring Python `torchx.specs.api.Role`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::{Result, SpecsError};

/// Retry policy applied to a role's replicas by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// Restart only the failed replica.
    Replica,
    /// Restart the whole application when any replica fails.
    Application,
}

impl RetryPolicy {
    /// Parses a Python-style policy name (e.g. `"APPLICATION"`).
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "REPLICA" => Ok(Self::Replica),
            "APPLICATION" => Ok(Self::Application),
            _ => Err(SpecsError::UnknownRetryPolicy {
                name: s.to_string(),
            }),
        }
    }

    /// Returns the canonical Python name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryPolicy::Replica => "REPLICA",
            RetryPolicy::Application => "APPLICATION",
        }
    }
}

/// A scheduler-facing descriptor of one logical unit of a distributed job:
/// name, run command, container, replica count, and retry policy.
///
/// Roles are assembled with chained builder calls and then handed off to the
/// submission layer; nothing here spawns processes.
///
/// ```
/// use std::collections::HashMap;
/// use torchx_specs::{Container, RetryPolicy, Role};
///
/// let role = Role::new("trainer")
///     .runs(
///         "python",
///         vec!["train.py".to_string()],
///         HashMap::new(),
///     )
///     .on(Container::new("my_image:latest"))
///     .replicas(2)
///     .with_retry_policy(RetryPolicy::Application, 1);
///
/// assert_eq!(role.name, "trainer");
/// assert_eq!(role.num_replicas, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Name of the role.
    pub name: String,

    /// Program each replica executes; set by [`Role::runs`].
    pub entrypoint: String,

    /// Arguments passed to the entrypoint, in order.
    pub args: Vec<String>,

    /// Environment variables set on each replica's process.
    pub env: HashMap<String, String>,

    /// Container the replicas run in, if one was attached.
    pub container: Option<Container>,

    /// Number of replicas of this role to run.
    pub num_replicas: usize,

    /// Max number of retries before giving up.
    pub max_retries: u32,

    /// Retry policy applied on replica failure.
    pub retry_policy: RetryPolicy,
}

impl Role {
    /// Creates a role with the given name and TorchX's defaults: one replica,
    /// no retries, `APPLICATION` retry policy, no container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entrypoint: String::new(),
            args: Vec::new(),
            env: HashMap::new(),
            container: None,
            num_replicas: 1,
            max_retries: 0,
            retry_policy: RetryPolicy::Application,
        }
    }

    /// Sets the run command: program, argument list, and environment.
    pub fn runs(
        mut self,
        entrypoint: impl Into<String>,
        args: Vec<String>,
        env: HashMap<String, String>,
    ) -> Self {
        self.entrypoint = entrypoint.into();
        self.args = args;
        self.env = env;
        self
    }

    /// Attaches the container the replicas run in.
    pub fn on(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets the number of replicas.
    pub fn replicas(mut self, num_replicas: usize) -> Self {
        self.num_replicas = num_replicas;
        self
    }

    /// Sets the retry policy and the max retry count together.
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy, max_retries: u32) -> Self {
        self.retry_policy = retry_policy;
        self.max_retries = max_retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_parse() {
        assert_eq!(
            RetryPolicy::parse("APPLICATION").unwrap(),
            RetryPolicy::Application
        );
        assert_eq!(RetryPolicy::parse("REPLICA").unwrap(), RetryPolicy::Replica);

        let err = RetryPolicy::parse("NEVER").unwrap_err();
        assert_eq!(err.to_string(), "Unknown retry policy: NEVER");
    }

    #[test]
    fn test_retry_policy_round_trips_names() {
        for policy in [RetryPolicy::Replica, RetryPolicy::Application] {
            assert_eq!(RetryPolicy::parse(policy.as_str()).unwrap(), policy);
        }
    }

    #[test]
    fn test_role_defaults() {
        let role = Role::new("worker");
        assert_eq!(role.name, "worker");
        assert_eq!(role.num_replicas, 1);
        assert_eq!(role.max_retries, 0);
        assert_eq!(role.retry_policy, RetryPolicy::Application);
        assert!(role.container.is_none());
        assert!(role.args.is_empty());
        assert!(role.env.is_empty());
    }

    #[test]
    fn test_role_fluent_chain() {
        let mut env = HashMap::new();
        env.insert("RANK".to_string(), "0".to_string());

        let role = Role::new("ps")
            .runs("python", vec!["-m".to_string(), "server".to_string()], env)
            .on(Container::new("img"))
            .replicas(3)
            .with_retry_policy(RetryPolicy::Replica, 5);

        assert_eq!(role.entrypoint, "python");
        assert_eq!(role.args, vec!["-m", "server"]);
        assert_eq!(role.env.get("RANK").map(String::as_str), Some("0"));
        assert_eq!(role.container, Some(Container::new("img")));
        assert_eq!(role.num_replicas, 3);
        assert_eq!(role.max_retries, 5);
        assert_eq!(role.retry_policy, RetryPolicy::Replica);
    }

    #[test]
    fn test_role_serializes_for_submission() {
        let role = Role::new("trainer").runs("python", vec![], HashMap::new());
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["name"], "trainer");
        assert_eq!(json["entrypoint"], "python");
        assert_eq!(json["retry_policy"], "Application");
    }
}

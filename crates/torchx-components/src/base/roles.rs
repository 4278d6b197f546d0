//! Elastic-launch role builder mirroring Python `torchx/components/base/roles.py`.
//!
//! The Python module builds a `Role` whose command line invokes the user's
//! entrypoint through the torchelastic agent (`python -m
//! torch.distributed.launch`). The agent, not this module, spawns and
//! supervises the worker copies; everything here is a pure translation from
//! launch parameters to a descriptor.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use torchx_specs::macros;
use torchx_specs::{Container, RetryPolicy, Role};

/// A dynamically-typed launch argument value, the Rust stand-in for Python's
/// `**launch_kwargs`.
///
/// Booleans get flag treatment when the command line is built: `true` emits
/// `--key` alone, `false` emits nothing. Every other variant emits `--key`
/// followed by its textual form, so an `Int(1)` is `--key 1`, not a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LaunchValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for LaunchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchValue::Bool(v) => write!(f, "{}", v),
            LaunchValue::Int(v) => write!(f, "{}", v),
            LaunchValue::Float(v) => write!(f, "{}", v),
            LaunchValue::String(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from {
    ($t:ty, $variant:ident) => {
        impl From<$t> for LaunchValue {
            fn from(value: $t) -> Self {
                LaunchValue::$variant(value)
            }
        }
    };
}

impl_from!(bool, Bool);
impl_from!(i64, Int);
impl_from!(f64, Float);
impl_from!(String, String);

impl From<&str> for LaunchValue {
    fn from(value: &str) -> Self {
        LaunchValue::String(value.to_string())
    }
}

/// Insertion-ordered launch arguments.
///
/// Python iterates `launch_kwargs` in dict insertion order and that order is
/// contractual for the generated command line, so this is a small vec-backed
/// map rather than a `HashMap`/`BTreeMap`: explicit keys keep the position
/// they were first set at, and defaults land wherever [`set_default`]
/// appends them.
///
/// [`set_default`]: LaunchOpts::set_default
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOpts {
    entries: Vec<(String, LaunchValue)>,
}

impl LaunchOpts {
    /// Creates an empty set of launch arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, overwriting in place if the key is already
    /// present so its position in iteration order is preserved.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<LaunchValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Appends `key = value` only if the key is absent, like Python's
    /// `dict.setdefault`. An explicit value is never overridden.
    pub fn set_default(&mut self, key: &str, value: impl Into<LaunchValue>) {
        if !self.entries.iter().any(|(k, _)| k == key) {
            self.entries.push((key.to_string(), value.into()));
        }
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&LaunchValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LaunchValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Optional parameters of [`create_torch_dist_role`], the Rust counterpart of
/// the Python function's keyword arguments. Fields left at `..Default::default()`
/// match the Python defaults.
#[derive(Debug, Clone)]
pub struct TorchDistRoleConfig {
    /// User provided arguments, appended after the entrypoint.
    pub script_args: Vec<String>,

    /// Env. variables set on the worker process that runs the entrypoint.
    pub script_envs: HashMap<String, String>,

    /// Number of role replicas to run.
    ///
    /// MUST lie within any `nnodes` range passed in `launch_opts`; the
    /// builder does not check this and an inconsistent value results in
    /// undefined behavior downstream.
    pub num_replicas: usize,

    /// Max number of retries.
    pub max_retries: u32,

    /// Retry policy that is applied to the role.
    pub retry_policy: RetryPolicy,

    /// Arguments used to launch the torchelastic agent, e.g.
    /// `nproc_per_node`, `nnodes`, `max_restarts`.
    pub launch_opts: LaunchOpts,
}

impl Default for TorchDistRoleConfig {
    fn default() -> Self {
        Self {
            script_args: Vec::new(),
            script_envs: HashMap::new(),
            num_replicas: 1,
            max_retries: 0,
            retry_policy: RetryPolicy::Application,
            launch_opts: LaunchOpts::new(),
        }
    }
}

/// Builds a [`Role`] whose `entrypoint` is executed through the torchelastic
/// agent in the container. The agent invokes multiple copies of `entrypoint`,
/// so the generated command is `python -m torch.distributed.launch <agent
/// args> <entrypoint> <script args>`.
///
/// Unless already present in `launch_opts`, three agent arguments are filled
/// in: `rdzv_backend=etcd`, `rdzv_id=${app_id}`, and `role=<name>`. The
/// `${app_id}` macro is substituted by the scheduler at submission time. A
/// relative `entrypoint` is rewritten under `${img_root}`; absolute paths and
/// paths already under the macro are left alone.
///
/// It is the responsibility of the user to ensure that the container's image
/// includes torchelastic; no validation of any input happens here.
///
/// The following builds 4 replicas of an elastic `my_train_script.py` that is
/// allowed to scale between 2 to 4 nodes, 8 workers per node:
///
/// ```
/// use torchx_components::base::roles::{create_torch_dist_role, LaunchOpts, TorchDistRoleConfig};
/// use torchx_specs::Container;
///
/// let role = create_torch_dist_role(
///     "trainer",
///     Container::new("my_image:latest"),
///     "my_train_script.py",
///     TorchDistRoleConfig {
///         script_args: vec!["--script_arg".into(), "foo".into()],
///         num_replicas: 4,
///         max_retries: 1,
///         launch_opts: LaunchOpts::new()
///             .set("nproc_per_node", 8_i64)
///             .set("nnodes", "2:4")
///             .set("max_restarts", 3_i64),
///         ..Default::default()
///     },
/// );
/// // effectively runs:
/// //    python -m torch.distributed.launch
/// //        --nproc_per_node 8 --nnodes 2:4 --max_restarts 3
/// //        --rdzv_backend etcd --rdzv_id ${app_id} --role trainer
/// //        ${img_root}/my_train_script.py --script_arg foo
/// assert_eq!(role.entrypoint, "python");
/// assert_eq!(role.num_replicas, 4);
/// ```
pub fn create_torch_dist_role(
    name: &str,
    container: Container,
    entrypoint: &str,
    config: TorchDistRoleConfig,
) -> Role {
    let mut launch_opts = config.launch_opts;
    launch_opts.set_default("rdzv_backend", "etcd");
    launch_opts.set_default("rdzv_id", macros::APP_ID);
    launch_opts.set_default("role", name);

    let mut args: Vec<String> = vec!["-m".to_string(), "torch.distributed.launch".to_string()];
    for (key, value) in launch_opts.iter() {
        match value {
            // treat boolean launch arg as a flag
            LaunchValue::Bool(true) => args.push(format!("--{}", key)),
            LaunchValue::Bool(false) => {}
            other => {
                args.push(format!("--{}", key));
                args.push(other.to_string());
            }
        }
    }

    // make entrypoint relative to ${img_root} ONLY if it is not an absolute path
    let entrypoint = if Path::new(entrypoint).is_absolute()
        || entrypoint.starts_with(macros::IMG_ROOT)
    {
        entrypoint.to_string()
    } else {
        Path::new(macros::IMG_ROOT)
            .join(entrypoint)
            .to_string_lossy()
            .into_owned()
    };

    args.push(entrypoint);
    args.extend(config.script_args);

    tracing::debug!(role = name, args = ?args, "built torch.distributed.launch command");

    Role::new(name)
        .runs("python", args, config.script_envs)
        .on(container)
        .replicas(config.num_replicas)
        .with_retry_policy(config.retry_policy, config.max_retries)
}

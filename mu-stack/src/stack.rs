//! Stack AST types.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of a Mufile: one infrastructure stack.
///
/// Targets and services keep their declaration order, so "the first default
/// target" is well defined.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stack {
    /// Stack name
    #[serde(default)]
    pub name: String,

    /// Optional version string
    pub version: Option<String>,

    /// Optional description
    pub description: Option<String>,

    /// Declared deployment targets, keyed by target name
    #[serde(default)]
    pub targets: IndexMap<String, Target>,

    /// Services making up the stack, keyed by service name
    #[serde(default)]
    pub services: IndexMap<String, Service>,
}

impl Stack {
    /// Look up a declared target by exact name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// All targets marked `default = true`, in declaration order.
    pub fn default_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values().filter(|t| t.default)
    }

    /// The first declared default target, if any.
    pub fn default_target(&self) -> Option<&Target> {
        self.default_targets().next()
    }
}

/// A named deployment configuration declared inside a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Target name (taken from the map key, not from the Mufile body)
    #[serde(skip)]
    pub name: String,

    /// Cloud name, empty when unspecified
    #[serde(default)]
    pub cloud: String,

    /// Scheduler name, empty when unspecified
    #[serde(default)]
    pub scheduler: String,

    /// Whether this target is selected when none is requested
    #[serde(default)]
    pub default: bool,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_cloud(mut self, cloud: impl Into<String>) -> Self {
        self.cloud = cloud.into();
        self
    }

    pub fn with_scheduler(mut self, scheduler: impl Into<String>) -> Self {
        self.scheduler = scheduler.into();
        self
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// A service declared in the stack.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    /// Service type in `namespace/name` form (e.g. `mu/container`)
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Free-form properties passed through to the backend
    #[serde(default)]
    pub properties: IndexMap<String, serde_json::Value>,
}

//! Cluster-wide settings, the lowest-precedence source of targets.

use mu_stack::Target;

/// Lookup of targets defined outside the stack, in cluster-wide settings.
///
/// The resolver consults this only when a requested target is not declared
/// in the stack itself.
pub trait ClusterSettings: Send + Sync {
    /// Find a target by exact name.
    fn find_target(&self, name: &str) -> Option<Target>;
}

/// Cluster settings with no targets.
///
/// Cluster files are not supported yet, so this is the lookup every compiler
/// starts with.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClusterSettings;

impl ClusterSettings for NoClusterSettings {
    fn find_target(&self, _name: &str) -> Option<Target> {
        None
    }
}

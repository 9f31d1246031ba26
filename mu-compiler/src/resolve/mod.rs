//! Target and architecture resolution.
//!
//! Target and architecture settings may come from three places, in order of
//! precedence:
//!
//! 1. the compiler options (command line),
//! 2. the targets declared in the stack,
//! 3. cluster-wide settings ([`ClusterSettings`]).
//!
//! A higher tier fills in what a lower tier leaves unset, but never silently
//! overrides it: a concrete architecture in the options that disagrees with
//! the selected target is reported as a conflict.

mod cluster;

pub use cluster::{ClusterSettings, NoClusterSettings};
use mu_core::{Arch, Cloud, Document, Scheduler};
use mu_stack::{Stack, Target};
use tracing::debug;
use uuid::Uuid;

use crate::{
    CompileError, Options,
    pipeline::phases::{RESOLVE, is_legal_name},
};

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The selected (or synthesized) target.
    pub target: Target,
    /// The merged architecture. The cloud axis is always set.
    pub arch: Arch,
    /// True when the target was synthesized rather than declared.
    pub anonymous: bool,
}

/// Determines the single effective target and architecture for a build.
pub struct TargetResolver<'a> {
    options: &'a Options,
    clusters: &'a dyn ClusterSettings,
}

impl<'a> TargetResolver<'a> {
    pub fn new(options: &'a Options, clusters: &'a dyn ClusterSettings) -> Self {
        Self { options, clusters }
    }

    /// Resolve the target for `stack`.
    ///
    /// On failure exactly one diagnostic is reported to the options' sink,
    /// located in `doc`, and `None` is returned.
    pub fn resolve(&self, doc: &Document, stack: &Stack) -> Option<Resolution> {
        match self.try_resolve(stack) {
            Ok(resolution) => {
                debug!(
                    stack = %stack.name,
                    target = %resolution.target.name,
                    arch = %resolution.arch,
                    anonymous = resolution.anonymous,
                    "resolved target"
                );
                Some(resolution)
            }
            Err(err) => {
                self.options.diag.error(RESOLVE, err, Some(doc));
                None
            }
        }
    }

    /// Resolve the target for `stack`, returning the error instead of
    /// reporting it.
    pub fn try_resolve(&self, stack: &Stack) -> Result<Resolution, CompileError> {
        let arch = self.options.arch;

        // An explicitly requested target must exist; there is no fallback.
        let mut target = match &self.options.target {
            Some(name) => Some(self.find_target(stack, name)?),
            None => None,
        };
        if target.is_none() {
            target = stack.default_target().cloned();
        }

        let Some(target) = target else {
            if arch.cloud.is_none() {
                return Err(CompileError::MissingTarget);
            }
            return Ok(Resolution {
                target: anonymous_target(arch),
                arch,
                anonymous: true,
            });
        };

        let arch = merge(&target, arch)?;
        if arch.cloud.is_none() {
            return Err(CompileError::MissingCloudArch {
                target: target.name,
            });
        }

        Ok(Resolution {
            target,
            arch,
            anonymous: false,
        })
    }

    fn find_target(&self, stack: &Stack, name: &str) -> Result<Target, CompileError> {
        if let Some(target) = stack.target(name) {
            return Ok(target.clone());
        }

        let mut target = self
            .clusters
            .find_target(name)
            .ok_or_else(|| CompileError::CloudTargetNotFound(name.to_string()))?;
        if target.name.is_empty() {
            target.name = name.to_string();
        }
        // Cluster targets skip the analyzer, and their names end up in file names.
        if !is_legal_name(&target.name) {
            return Err(CompileError::IllegalName {
                kind: "target",
                name: target.name,
            });
        }
        Ok(target)
    }
}

/// Merge a target's declared architecture into `existing`.
///
/// Declared names are translated first; an unrecognized cloud is reported
/// before the scheduler is looked at. Each axis then takes the target's value
/// when declared and the existing value otherwise. An axis that was already
/// set in `existing` must agree with the result.
pub fn merge(target: &Target, existing: Arch) -> Result<Arch, CompileError> {
    let cloud = if target.cloud.is_empty() {
        existing.cloud
    } else {
        let cloud = Cloud::from_name(&target.cloud)
            .ok_or_else(|| CompileError::UnrecognizedCloudArch(target.cloud.clone()))?;
        Some(cloud)
    };

    let scheduler = if target.scheduler.is_empty() {
        existing.scheduler
    } else {
        let scheduler = Scheduler::from_name(&target.scheduler)
            .ok_or_else(|| CompileError::UnrecognizedSchedulerArch(target.scheduler.clone()))?;
        Some(scheduler)
    };

    let resolved = Arch::new(cloud, scheduler);
    let cloud_conflict = existing.cloud.is_some() && existing.cloud != resolved.cloud;
    let scheduler_conflict =
        existing.scheduler.is_some() && existing.scheduler != resolved.scheduler;
    if cloud_conflict || scheduler_conflict {
        return Err(CompileError::ConflictingTargetArchSelection {
            existing,
            target: target.name.clone(),
            resolved,
        });
    }

    Ok(resolved)
}

/// Synthesize a target for a build that declared none.
///
/// The name is a fresh random UUID; names are not cached across runs.
pub fn anonymous_target(arch: Arch) -> Target {
    Target {
        name: Uuid::new_v4().to_string(),
        cloud: arch.cloud_name().to_string(),
        scheduler: arch.scheduler_name().to_string(),
        default: false,
    }
}

//! Code generation backends.
//!
//! A backend turns one [`Compiland`] into deployment artifacts for one
//! architecture. [`new`] maps every architecture to a backend, so dispatch
//! never fails to find one; pairs that have no generator yet get an
//! [`UnsupportedBackend`] which reports that fact to the sink.
//!
//! | Cloud | Scheduler | Backend                                 |
//! |-------|-----------|-----------------------------------------|
//! | aws   | (none)    | [`AwsBackend`]                          |
//! | aws   | awsecs    | [`EcsBackend`] wrapping [`AwsBackend`]  |
//! | *     | *         | [`UnsupportedBackend`]                  |

mod aws;
mod ecs;
mod unsupported;

use std::{path::Path, sync::Arc};

pub use aws::AwsBackend;
pub use ecs::EcsBackend;
use mu_core::{Arch, Cloud, Scheduler};
use tracing::debug;
pub use unsupported::UnsupportedBackend;

use crate::{Compiland, pipeline::Sink};

/// A code generator for one architecture.
///
/// Backends report failures to the sink they were constructed with.
pub trait Backend {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Generate artifacts for `comp`.
    fn codegen(&self, comp: &Compiland<'_>);
}

/// Select the backend for `arch`, writing into `output`.
pub fn new(arch: Arch, diag: Arc<dyn Sink>, output: &Path) -> Box<dyn Backend> {
    match (arch.cloud, arch.scheduler) {
        (Some(Cloud::Aws), None) => Box::new(AwsBackend::new(diag, output)),
        (Some(Cloud::Aws), Some(Scheduler::AwsEcs)) => {
            Box::new(EcsBackend::new(AwsBackend::new(diag, output)))
        }
        _ => Box::new(UnsupportedBackend::new(arch, diag)),
    }
}

/// Run `backend` once over `comp`.
pub fn dispatch(backend: &dyn Backend, comp: &Compiland<'_>) {
    debug!(
        backend = backend.name(),
        stack = %comp.stack.name,
        target = %comp.target.name,
        "dispatching to backend"
    );
    backend.codegen(comp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DiagnosticSink;

    fn backend_name(arch: Arch) -> &'static str {
        new(arch, Arc::new(DiagnosticSink::new()), Path::new("out")).name()
    }

    #[test]
    fn test_mapping_is_total() {
        assert_eq!(backend_name(Arch::for_cloud(Cloud::Aws)), "aws");
        assert_eq!(
            backend_name(Arch::for_cloud(Cloud::Aws).with_scheduler(Scheduler::AwsEcs)),
            "aws:awsecs"
        );

        for cloud in Cloud::ALL {
            for scheduler in Scheduler::ALL {
                if cloud == Cloud::Aws && scheduler == Scheduler::AwsEcs {
                    continue;
                }
                let arch = Arch::for_cloud(cloud).with_scheduler(scheduler);
                assert_eq!(backend_name(arch), "unsupported", "{}", arch);
            }
        }
        assert_eq!(backend_name(Arch::for_cloud(Cloud::Gcp)), "unsupported");
        assert_eq!(backend_name(Arch::NONE), "unsupported");
    }
}

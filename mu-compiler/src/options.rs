use std::sync::Arc;

use mu_core::Arch;

use crate::pipeline::Sink;

/// Compiler settings for one run.
///
/// Options are fixed for the duration of a build. The diagnostics sink is
/// carried here so that every stage receives the same handle.
#[derive(Clone)]
pub struct Options {
    /// Requested architecture; either axis may be unset.
    pub arch: Arch,
    /// Name of a declared target to select.
    pub target: Option<String>,
    /// Stop after binding, without resolving a target or generating code.
    pub skip_codegen: bool,
    /// Diagnostics sink shared by every stage.
    pub diag: Arc<dyn Sink>,
}

impl Options {
    /// Options with no architecture, no target, and code generation enabled.
    pub fn new(diag: Arc<dyn Sink>) -> Self {
        Self {
            arch: Arch::NONE,
            target: None,
            skip_codegen: false,
            diag,
        }
    }

    pub fn with_arch(mut self, arch: Arch) -> Self {
        self.arch = arch;
        self
    }

    /// Select a target by name. An empty name leaves the target unset.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        self.target = (!target.is_empty()).then_some(target);
        self
    }

    pub fn with_skip_codegen(mut self, skip: bool) -> Self {
        self.skip_codegen = skip;
        self
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("arch", &self.arch)
            .field("target", &self.target)
            .field("skip_codegen", &self.skip_codegen)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DiagnosticSink;

    #[test]
    fn test_empty_target_is_unset() {
        let opts = Options::new(Arc::new(DiagnosticSink::new())).with_target("");
        assert!(opts.target.is_none());

        let opts = opts.with_target("prod");
        assert_eq!(opts.target.as_deref(), Some("prod"));
    }
}

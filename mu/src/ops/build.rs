//! Build operation - runs the compiler and collects its diagnostics.

use std::{path::Path, sync::Arc};

use mu_compiler::{Compiler, DiagnosticSink, Options};
use tracing::debug;

use crate::reports::BuildReport;

/// Execute a build of the Mufile at or above `input`.
///
/// `configure` receives default options wired to a fresh sink and returns the
/// options to build with.
pub fn build(
    input: &Path,
    output: &Path,
    configure: impl FnOnce(Options) -> Options,
) -> BuildReport {
    let sink = Arc::new(DiagnosticSink::new());
    let options = configure(Options::new(sink.clone()));
    debug!(?options, "starting build");

    let outcome = Compiler::new(options).build(input, output);

    BuildReport::new(input, output, outcome, sink.diagnostics())
}

#[cfg(test)]
mod tests {
    use mu_compiler::BuildOutcome;
    use mu_core::{Arch, Cloud};

    use super::*;

    const MUFILE: &str = "name = \"web\"\n[services.api]\ntype = \"mu/container\"\n";

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Mufile.toml"), MUFILE).unwrap();
        dir
    }

    #[test]
    fn test_check_only() {
        let dir = project();

        let report = build(dir.path(), dir.path(), |o| o.with_skip_codegen(true));

        assert_eq!(report.outcome, BuildOutcome::Checked);
        assert!(report.is_success());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_generate() {
        let dir = project();
        let out = dir.path().join("out");

        let report = build(dir.path(), &out, |o| o.with_arch(Arch::for_cloud(Cloud::Aws)));

        assert!(report.is_success());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn test_failure_collects_diagnostics() {
        let dir = project();

        let report = build(dir.path(), dir.path(), |o| o);

        assert!(!report.is_success());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].code.as_deref(), Some("MU110"));
    }
}

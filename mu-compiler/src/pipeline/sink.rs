//! Diagnostics sink shared by every stage of a build.

use std::sync::{Mutex, PoisonError};

use mu_core::Document;

use super::{Diagnostic, Severity};
use crate::{CompileError, CompileWarning};

/// An append-only accumulator of diagnostics.
///
/// Every stage receives the sink as an explicit collaborator. Stages report
/// failures here instead of returning errors; the orchestrator polls
/// [`Sink::errors`] after each stage to decide whether to continue.
///
/// Implementations must tolerate concurrent use when one sink is shared by
/// several builds.
pub trait Sink: Send + Sync {
    /// Record a diagnostic.
    fn report(&self, diagnostic: Diagnostic);

    /// Number of error diagnostics recorded so far.
    fn errors(&self) -> usize;

    /// Number of warning diagnostics recorded so far.
    fn warnings(&self) -> usize;

    /// Record a compile error, located in `doc` when given.
    fn error(&self, phase: &str, err: CompileError, doc: Option<&Document>) {
        let mut diagnostic = Diagnostic::from_report(Severity::Error, phase, &err);
        if let Some(doc) = doc {
            diagnostic = diagnostic.at(&doc.file);
        }
        self.report(diagnostic);
    }

    /// Record a compile warning, located in `doc` when given.
    fn warn(&self, phase: &str, warning: CompileWarning, doc: Option<&Document>) {
        let mut diagnostic = Diagnostic::from_report(Severity::Warning, phase, &warning);
        if let Some(doc) = doc {
            diagnostic = diagnostic.at(&doc.file);
        }
        self.report(diagnostic);
    }
}

/// The default in-memory [`Sink`].
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every diagnostic recorded so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Codes of all recorded diagnostics, in report order.
    pub fn codes(&self) -> Vec<String> {
        self.lock().iter().filter_map(|d| d.code.clone()).collect()
    }

    fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|d| d.severity == severity).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // Records are only ever appended, so a poisoned list is still consistent.
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!(
            severity = %diagnostic.severity,
            phase = %diagnostic.phase,
            code = diagnostic.code.as_deref().unwrap_or_default(),
            "{}",
            diagnostic.message
        );
        self.lock().push(diagnostic);
    }

    fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_counts() {
        let sink = DiagnosticSink::new();

        sink.report(Diagnostic::error("test", "test error"));
        sink.report(Diagnostic::warning("test", "test warning"));
        sink.report(Diagnostic::info("test", "just info"));

        assert_eq!(sink.errors(), 1);
        assert_eq!(sink.warnings(), 1);
        assert_eq!(sink.diagnostics().len(), 3);
    }

    #[test]
    fn test_error_helper_locates_document() {
        let sink = DiagnosticSink::new();
        let doc = Document::new("Mufile.toml", "");

        sink.error("resolve", CompileError::MissingTarget, Some(&doc));

        let diags = sink.diagnostics();
        assert_eq!(diags[0].location.as_deref(), Some("Mufile.toml"));
        assert_eq!(sink.codes(), vec!["MU110"]);
    }

    #[test]
    fn test_warn_helper() {
        let sink = DiagnosticSink::new();
        sink.warn("bind", CompileWarning::EmptyStack("web".into()), None);

        assert_eq!(sink.warnings(), 1);
        assert_eq!(sink.errors(), 0);
        assert!(sink.diagnostics()[0].location.is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let sink = Arc::new(DiagnosticSink::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    sink.report(Diagnostic::error("test", format!("error {}", i)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.errors(), 4);
    }
}

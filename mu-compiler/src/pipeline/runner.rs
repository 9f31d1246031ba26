//! Build orchestrator.

use std::{path::Path, sync::Arc};

use mu_core::{Arch, Document};
use mu_stack::workspace::{MUFILE, detect_mufile};
use tracing::{debug, info};

use super::{
    Phase, Sink,
    phases::{self, Binder, INPUT, PostParseAnalyzer},
};
use crate::{
    CompileError, Compiland, Options, backends,
    resolve::{ClusterSettings, NoClusterSettings, TargetResolver},
};

/// The result of one build.
///
/// The sink is the source of truth for what went wrong; the outcome only
/// says how far the build got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// At least one error was reported.
    Failed,
    /// The stack was checked and code generation was skipped.
    Checked,
    /// A backend ran for the resolved target.
    Generated {
        target: String,
        arch: Arch,
        anonymous: bool,
    },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, BuildOutcome::Failed)
    }
}

/// The compilation orchestrator.
///
/// Runs parse, the built-in phases (post-parse analysis, binding), any user
/// phases, target resolution and backend dispatch in that order. After each
/// step the sink's error count is compared with its value at the start of the
/// build, and the build stops as soon as it has grown.
///
/// # Example
///
/// ```no_run
/// use std::{path::Path, sync::Arc};
///
/// use mu_compiler::{Compiler, DiagnosticSink, Options};
///
/// let sink = Arc::new(DiagnosticSink::new());
/// let compiler = Compiler::new(Options::new(sink.clone()).with_target("prod"));
///
/// let outcome = compiler.build(Path::new("."), Path::new("out"));
/// for diag in sink.diagnostics() {
///     eprintln!("{}", diag);
/// }
/// if !outcome.is_success() {
///     std::process::exit(1);
/// }
/// ```
pub struct Compiler {
    options: Options,
    phases: Vec<Box<dyn Phase>>,
    clusters: Box<dyn ClusterSettings>,
}

impl Compiler {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            phases: vec![Box::new(PostParseAnalyzer), Box::new(Binder)],
            clusters: Box::new(NoClusterSettings),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Use `clusters` to look up targets the stack does not declare.
    pub fn clusters(mut self, clusters: impl ClusterSettings + 'static) -> Self {
        self.clusters = Box::new(clusters);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn diag(&self) -> &dyn Sink {
        self.options.diag.as_ref()
    }

    /// Build the Mufile found at or above `input`, writing artifacts to
    /// `output`.
    pub fn build(&self, input: &Path, output: &Path) -> BuildOutcome {
        let Some(path) = detect_mufile(input) else {
            self.diag().error(
                INPUT,
                CompileError::MissingMufile {
                    path: input.to_path_buf(),
                },
                None,
            );
            return BuildOutcome::Failed;
        };

        debug!(path = %path.display(), "found Mufile");
        let doc = match Document::read(&path) {
            Ok(doc) => doc,
            Err(source) => {
                self.diag()
                    .error(INPUT, CompileError::CouldNotReadMufile { path, source }, None);
                return BuildOutcome::Failed;
            }
        };

        self.build_document(&doc, output)
    }

    /// Build an in-memory Mufile whose syntax is given by `ext` (e.g. `.json`
    /// or `json`).
    pub fn build_file(&self, body: impl Into<Vec<u8>>, ext: &str, output: &Path) -> BuildOutcome {
        let ext = ext.trim_start_matches('.');
        let file = if ext.is_empty() {
            MUFILE.to_string()
        } else {
            format!("{}.{}", MUFILE, ext)
        };
        self.build_document(&Document::new(file, body), output)
    }

    /// Build `doc`, writing artifacts to `output`.
    pub fn build_document(&self, doc: &Document, output: &Path) -> BuildOutcome {
        let diag = self.diag();
        let baseline = diag.errors();
        let failed = || diag.errors() > baseline;

        info!(file = %doc.file, "building stack");

        let Some(mut stack) = phases::parse(doc, diag) else {
            return BuildOutcome::Failed;
        };
        if failed() {
            return BuildOutcome::Failed;
        }

        for phase in &self.phases {
            phase.run(doc, &mut stack, diag);
            debug!(
                phase = phase.name(),
                errors = diag.errors() - baseline,
                warnings = diag.warnings(),
                "phase complete"
            );
            if failed() {
                return BuildOutcome::Failed;
            }
        }

        if self.options.skip_codegen {
            info!(stack = %stack.name, "checked stack; code generation skipped");
            return BuildOutcome::Checked;
        }

        let resolver = TargetResolver::new(&self.options, self.clusters.as_ref());
        let Some(resolution) = resolver.resolve(doc, &stack) else {
            return BuildOutcome::Failed;
        };

        info!(
            stack = %stack.name,
            target = %resolution.target.name,
            arch = %resolution.arch,
            "generating code"
        );
        let backend = backends::new(resolution.arch, Arc::clone(&self.options.diag), output);
        let comp = Compiland::new(&resolution.target, doc, &stack);
        backends::dispatch(backend.as_ref(), &comp);
        if failed() {
            return BuildOutcome::Failed;
        }

        BuildOutcome::Generated {
            target: resolution.target.name,
            arch: resolution.arch,
            anonymous: resolution.anonymous,
        }
    }
}

//! Compilation pipeline.
//!
//! The [`Compiler`] drives a Mufile through its stages:
//!
//! 1. input - locate and read the Mufile
//! 2. parse - decode it into a [`Stack`](mu_stack::Stack)
//! 3. [`PostParseAnalyzer`](phases::PostParseAnalyzer) - structural checks
//! 4. [`Binder`](phases::Binder), then any user [`Phase`]s - semantic checks
//! 5. resolve - pick the target and architecture
//! 6. codegen - dispatch to the backend for that architecture
//!
//! Every stage reports problems to a shared [`Sink`] instead of returning
//! errors, and the compiler stops at the first stage that added an error.

mod diagnostic;
mod phase;
pub mod phases;
mod runner;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::{BuildOutcome, Compiler};
pub use sink::{DiagnosticSink, Sink};

//! The Mu stack compiler.
//!
//! This crate turns a parsed Mufile into deployment artifacts for a single
//! target. It is organized as a pipeline that reports everything through a
//! diagnostics sink rather than returning errors.
//!
//! # Module Organization
//!
//! - [`pipeline`] - the [`Compiler`] orchestrator, phases and the diagnostics sink
//! - [`resolve`] - target and architecture resolution
//! - [`backends`] - per-architecture code generators

pub mod backends;
mod compiland;
mod errors;
mod options;
pub mod pipeline;
pub mod resolve;

pub use compiland::Compiland;
pub use errors::{CompileError, CompileWarning};
pub use options::Options;
pub use pipeline::{BuildOutcome, Compiler, Diagnostic, DiagnosticSink, Severity, Sink};

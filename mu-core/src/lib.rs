//! Core utilities and types for the Mu stack compiler.
//!
//! This crate provides the architecture name tables, the source document
//! type, and generated-file helpers shared across the Mu crates.

mod arch;
mod document;
mod file;
mod utils;

// Architecture selection
pub use arch::{Arch, Cloud, Scheduler};
// Source documents
pub use document::Document;
// File operations
pub use file::{File, GeneratedFile};
// String utilities
pub use utils::to_pascal_case;

//! Core operations.
//!
//! This module contains the business logic for mu commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;

pub use build::build;

//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build;
mod output;

pub use build::BuildReport;
use eyre::Result;
use output::{Report, TerminalOutput};
use serde::Serialize;

/// Print `report` to the terminal, or as pretty JSON on stdout.
pub fn emit<R: Report + Serialize>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        report.render(&mut TerminalOutput::new());
    }
    Ok(())
}

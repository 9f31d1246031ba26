use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;

use super::exit_on_failure;
use crate::{ops, reports};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to a Mufile, or a directory to search upwards from
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        // Nothing is written when code generation is skipped.
        let report = ops::build(&self.path, Path::new("."), |options| {
            options.with_skip_codegen(true)
        });

        reports::emit(&report, self.json)?;
        exit_on_failure(report.is_success());
        Ok(())
    }
}

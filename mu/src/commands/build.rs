use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mu_core::Arch;

use super::exit_on_failure;
use crate::{ops, reports};

#[derive(Args)]
pub struct BuildCommand {
    /// Path to a Mufile, or a directory to search upwards from
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory to write generated artifacts into
    #[arg(short, long, default_value = "out")]
    pub out: PathBuf,

    /// Architecture to build for, as `cloud[:scheduler]` (e.g. `aws:awsecs`)
    #[arg(short, long)]
    pub arch: Option<Arch>,

    /// Name of the stack target to build
    #[arg(short, long)]
    pub target: Option<String>,

    /// Stop after semantic checks, without resolving a target
    #[arg(long)]
    pub skip_codegen: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::build(&self.path, &self.out, |options| {
            options
                .with_arch(self.arch.unwrap_or_default())
                .with_target(self.target.clone().unwrap_or_default())
                .with_skip_codegen(self.skip_codegen)
        });

        reports::emit(&report, self.json)?;
        exit_on_failure(report.is_success());
        Ok(())
    }
}

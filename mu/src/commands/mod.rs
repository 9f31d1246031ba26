mod build;
mod check;
mod completions;

use build::BuildCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;

#[derive(Parser)]
#[command(name = "mu")]
#[command(version)]
#[command(about = "Compile Mu stacks into cloud deployment templates")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Mufile into deployment artifacts
    Build(BuildCommand),

    /// Validate a Mufile without resolving a target or generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Exit with status 1 after a build that reported errors.
pub(crate) fn exit_on_failure(success: bool) {
    if !success {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::try_parse_from([
            "mu", "-vv", "build", "stacks/web", "-o", "dist", "-a", "aws:awsecs", "-t", "prod",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Build(cmd) = &cli.command else {
            panic!("expected the build command");
        };
        assert_eq!(cmd.path, std::path::Path::new("stacks/web"));
        assert_eq!(cmd.out, std::path::Path::new("dist"));
        assert_eq!(cmd.arch.map(|a| a.to_string()).as_deref(), Some("aws:awsecs"));
        assert_eq!(cmd.target.as_deref(), Some("prod"));
        assert!(!cmd.skip_codegen);
    }

    #[test]
    fn test_rejects_unknown_arch() {
        assert!(Cli::try_parse_from(["mu", "build", "--arch", "openstack"]).is_err());
    }
}

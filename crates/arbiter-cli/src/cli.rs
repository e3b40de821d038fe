//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arbiter CLI - Evaluate structured scientific claims through the judge pipeline.
#[derive(Debug, Parser)]
#[command(name = "arbiter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Evaluation profile (core or nuclear)
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (final verdict only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single claim file
    Eval(EvalArgs),

    /// Run the batch experiment lab over a claims directory
    Lab(LabArgs),
}

/// Arguments for the eval command.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Path to the claim file (JSON)
    pub claim: PathBuf,

    /// Exit with status 1 when the final verdict is not a PASS
    #[arg(long)]
    pub fail_on_non_pass: bool,
}

/// Arguments for the lab command.
#[derive(Debug, Parser)]
pub struct LabArgs {
    /// Directory containing claim files (*.json)
    #[arg(long)]
    pub claims: PathBuf,

    /// Recurse into subdirectories when discovering claims
    #[arg(long)]
    pub recursive: bool,

    /// Profiles to evaluate each claim under (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub profiles: Vec<String>,

    /// Output directory for lab artifacts
    #[arg(long)]
    pub out: PathBuf,

    /// Exit with status 1 when any run is not a PASS
    #[arg(long)]
    pub fail_on_non_pass: bool,

    /// Print the full JSON payload instead of the summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval_with_profile() {
        let cli = Cli::parse_from(["arbiter", "eval", "claim.json", "--profile", "nuclear"]);
        assert_eq!(cli.profile.as_deref(), Some("nuclear"));
        match cli.command {
            Command::Eval(args) => assert_eq!(args.claim, PathBuf::from("claim.json")),
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_parse_lab_profile_list() {
        let cli = Cli::parse_from([
            "arbiter", "lab", "--claims", "claims", "--out", "out",
            "--profiles", "core,nuclear",
        ]);
        match cli.command {
            Command::Lab(args) => assert_eq!(args.profiles, vec!["core", "nuclear"]),
            _ => panic!("expected lab command"),
        }
    }
}

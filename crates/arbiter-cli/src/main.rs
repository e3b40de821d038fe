//! Arbiter CLI - Command-line interface for the Arbiter claim evaluator.

use anyhow::Context;
use arbiter_cli::commands;
use arbiter_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine evaluation profile
    let profile = match &cli.profile {
        Some(raw) => raw
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("unrecognized --profile")?,
        None => config.default_profile()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    let exit_code = match &cli.command {
        Command::Eval(args) => commands::execute_eval(args, profile, &formatter)?,
        Command::Lab(args) => commands::execute_lab(args, profile, &formatter)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

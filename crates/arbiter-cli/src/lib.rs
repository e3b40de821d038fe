//! Arbiter CLI - Command-line interface for the Arbiter claim evaluator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::{Config, OutputFormat, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;

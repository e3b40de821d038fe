//! Lab error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the experiment lab.
#[derive(Error, Debug)]
pub enum LabError {
    /// I/O error reading claims or writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Claim file contains invalid JSON
    #[error("Claim file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Claims directory does not exist
    #[error("Claims directory not found: {}", .0.display())]
    ClaimsDirNotFound(PathBuf),

    /// Directory exists but holds no claim files
    #[error("No claim files found in: {}", .0.display())]
    NoClaimFiles(PathBuf),
}

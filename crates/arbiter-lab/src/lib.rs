//! Arbiter Lab
//!
//! Batch experiment lab: runs multiple claim files across one or more judge
//! profiles and generates auditable comparative artifacts (JSON, CSV,
//! Markdown verdict matrix).
//!
//! The aggregation logic (per-profile stats, verdict matrix, divergence
//! detection) is pure and testable on its own; file discovery, claim
//! loading and artifact writing sit at the edges.

#![warn(missing_docs)]

mod claims;
mod error;
mod lab;
mod stats;

pub use claims::{discover_claim_files, load_claim_file};
pub use error::LabError;
pub use lab::{
    run_lab, LabArtifacts, LabConfig, LabReport, LabRow, LabRunConfig, LabTotals,
    LAB_REPORT_SCHEMA,
};
pub use stats::{divergence, profile_stats, verdict_class, verdict_matrix, Divergence, ProfileStats};

//! Experiment lab runner
//!
//! Evaluates every (claim, profile) pair, aggregates the results, and
//! writes the comparative artifacts into the output directory.

use crate::claims::load_claim_file;
use crate::error::LabError;
use crate::stats::{divergence, profile_stats, verdict_class, verdict_matrix, Divergence, ProfileStats};
use arbiter_domain::access::{as_text, field};
use arbiter_domain::Profile;
use arbiter_judges::Pipeline;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Schema identifier for serialized lab reports.
pub const LAB_REPORT_SCHEMA: &str = "arbiter.lab_report.v1";

/// Lab run configuration.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Claim files to evaluate.
    pub claim_paths: Vec<PathBuf>,

    /// Profiles to evaluate each claim under.
    pub profiles: Vec<Profile>,

    /// Directory receiving the artifacts.
    pub out_dir: PathBuf,
}

/// One (claim, profile) evaluation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabRow {
    /// Claim identifier (declared claim_id, else file stem).
    pub claim_id: String,

    /// Claim title (declared title, else file stem).
    pub title: String,

    /// Path of the claim file.
    pub claim_path: String,

    /// Profile the run used.
    pub profile: String,

    /// Rendered final verdict.
    pub verdict: String,

    /// Verdict class (PASS / FAIL / NO-EVAL / UNKNOWN).
    pub verdict_class: String,

    /// Code of the first non-PASS judge.
    pub first_reason: String,

    /// Wall-clock duration of the evaluation in milliseconds.
    pub duration_ms: u64,
}

/// Verdict-class totals across all runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabTotals {
    /// Total runs.
    pub runs: usize,
    /// Passing runs.
    pub pass: usize,
    /// Failing runs.
    pub fail: usize,
    /// Not-evaluable runs.
    pub no_eval: usize,
    /// Runs with an unrecognized verdict.
    pub unknown: usize,
}

/// Paths of the artifacts a lab run wrote.
#[derive(Debug, Clone, Serialize)]
pub struct LabArtifacts {
    /// Full JSON payload.
    pub json: PathBuf,
    /// Per-run result rows.
    pub results_csv: PathBuf,
    /// Per-profile summary.
    pub profile_csv: PathBuf,
    /// Claim × profile verdict matrix.
    pub matrix_md: PathBuf,
}

/// Config echo embedded in the report payload.
#[derive(Debug, Clone, Serialize)]
pub struct LabRunConfig {
    /// Profile names in run order.
    pub profiles: Vec<String>,
    /// Number of claim files evaluated.
    pub claim_count: usize,
    /// Output directory.
    pub out_dir: PathBuf,
}

/// Aggregate payload of one lab run.
#[derive(Debug, Clone, Serialize)]
pub struct LabReport {
    /// Report schema identifier.
    pub schema: &'static str,

    /// Version of the evaluating engine.
    pub engine_version: &'static str,

    /// Unix-epoch milliseconds at report creation.
    pub generated_at_ms: u64,

    /// Config echo.
    pub config: LabRunConfig,

    /// Verdict-class totals.
    pub totals: LabTotals,

    /// Per-profile stats, sorted by profile name.
    pub profile_stats: Vec<ProfileStats>,

    /// Number of diverging claims.
    pub divergence_count: usize,

    /// Claims whose verdict class differs across profiles.
    pub divergence: Vec<Divergence>,

    /// Every evaluation row.
    pub results: Vec<LabRow>,

    /// Artifact paths.
    pub artifacts: LabArtifacts,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn declared_or_stem(claim: &Value, key: &str, path: &Path) -> String {
    let declared = claim
        .as_object()
        .map(|map| as_text(field(map, key)))
        .unwrap_or_default();
    if declared.is_empty() {
        file_stem(path)
    } else {
        declared
    }
}

/// Run the experiment lab and write its artifacts.
pub fn run_lab(config: &LabConfig) -> Result<LabReport, LabError> {
    let mut rows = Vec::new();
    for claim_path in &config.claim_paths {
        let claim = load_claim_file(claim_path)?;
        let claim_id = declared_or_stem(&claim, "claim_id", claim_path);
        let title = declared_or_stem(&claim, "title", claim_path);

        for profile in &config.profiles {
            let pipeline = Pipeline::for_profile(*profile);
            let started = Instant::now();
            let outcome = pipeline.evaluate(&claim);
            let duration_ms = started.elapsed().as_millis() as u64;

            info!(
                claim = %claim_id,
                profile = %profile,
                verdict = %outcome.verdict,
                "lab run complete"
            );

            let verdict = outcome.verdict.to_string();
            rows.push(LabRow {
                claim_id: claim_id.clone(),
                title: title.clone(),
                claim_path: claim_path.display().to_string(),
                profile: profile.to_string(),
                verdict_class: verdict_class(&verdict).to_string(),
                verdict,
                first_reason: outcome.first_reason,
                duration_ms,
            });
        }
    }

    let mut totals = LabTotals {
        runs: rows.len(),
        ..LabTotals::default()
    };
    for row in &rows {
        match row.verdict_class.as_str() {
            "PASS" => totals.pass += 1,
            "FAIL" => totals.fail += 1,
            "NO-EVAL" => totals.no_eval += 1,
            _ => totals.unknown += 1,
        }
    }

    let profile_names: Vec<String> = config.profiles.iter().map(|p| p.to_string()).collect();
    let stats = profile_stats(&rows);
    let matrix = verdict_matrix(&rows, &profile_names);
    let diverging = divergence(&rows);

    fs::create_dir_all(&config.out_dir)?;
    let artifacts = LabArtifacts {
        json: config.out_dir.join("lab_report.json"),
        results_csv: config.out_dir.join("lab_results.csv"),
        profile_csv: config.out_dir.join("lab_profile_summary.csv"),
        matrix_md: config.out_dir.join("lab_verdict_matrix.md"),
    };

    let report = LabReport {
        schema: LAB_REPORT_SCHEMA,
        engine_version: env!("CARGO_PKG_VERSION"),
        generated_at_ms: now_ms(),
        config: LabRunConfig {
            profiles: profile_names.clone(),
            claim_count: config.claim_paths.len(),
            out_dir: config.out_dir.clone(),
        },
        totals,
        profile_stats: stats,
        divergence_count: diverging.len(),
        divergence: diverging,
        results: rows,
        artifacts,
    };

    fs::write(
        &report.artifacts.json,
        serde_json::to_string_pretty(&report)?,
    )?;
    write_rows_csv(&report.artifacts.results_csv, &report.results)?;
    write_profile_csv(&report.artifacts.profile_csv, &report.profile_stats)?;
    write_matrix_markdown(&report.artifacts.matrix_md, &matrix, &profile_names)?;

    Ok(report)
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn write_rows_csv(path: &Path, rows: &[LabRow]) -> Result<(), LabError> {
    let mut lines =
        vec!["claim_id,title,claim_path,profile,verdict,first_reason,duration_ms".to_string()];
    for row in rows {
        lines.push(
            [
                csv_field(&row.claim_id),
                csv_field(&row.title),
                csv_field(&row.claim_path),
                csv_field(&row.profile),
                csv_field(&row.verdict),
                csv_field(&row.first_reason),
                row.duration_ms.to_string(),
            ]
            .join(","),
        );
    }
    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

fn write_profile_csv(path: &Path, stats: &[ProfileStats]) -> Result<(), LabError> {
    let mut lines = vec!["profile,runs,pass,fail,no_eval,unknown,pass_rate".to_string()];
    for item in stats {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            csv_field(&item.profile),
            item.runs,
            item.pass,
            item.fail,
            item.no_eval,
            item.unknown,
            item.pass_rate
        ));
    }
    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

fn write_matrix_markdown(
    path: &Path,
    matrix: &BTreeMap<String, BTreeMap<String, String>>,
    profiles: &[String],
) -> Result<(), LabError> {
    let mut headers = vec!["Claim".to_string()];
    headers.extend(profiles.iter().cloned());

    let mut lines = vec![
        format!("| {} |", headers.join(" | ")),
        format!(
            "| {} |",
            headers.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
        ),
    ];
    for (claim_id, claim_row) in matrix {
        let mut cells = vec![claim_id.clone()];
        for profile in profiles {
            cells.push(claim_row.get(profile).cloned().unwrap_or_else(|| "-".to_string()));
        }
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_field_escaping() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_declared_or_stem() {
        let path = Path::new("/claims/neutron_capture.json");
        let with_id = json!({"claim_id": "CLAIM-7"});
        assert_eq!(declared_or_stem(&with_id, "claim_id", path), "CLAIM-7");

        let without = json!({});
        assert_eq!(
            declared_or_stem(&without, "claim_id", path),
            "neutron_capture"
        );

        let blank = json!({"claim_id": "   "});
        assert_eq!(declared_or_stem(&blank, "claim_id", path), "neutron_capture");
    }
}

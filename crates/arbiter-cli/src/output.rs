//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use arbiter_domain::VerdictClass;
use arbiter_judges::JudgeReport;
use arbiter_lab::LabReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a judge report.
    pub fn format_report(&self, report: &JudgeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => self.format_report_table(report),
            OutputFormat::Quiet => Ok(report.verdict.to_string()),
        }
    }

    /// Format a judge report as a header plus per-judge table.
    fn format_report_table(&self, report: &JudgeReport) -> Result<String> {
        let mut lines = Vec::new();
        if let Some(claim_id) = &report.claim_id {
            lines.push(format!("Claim:   {}", claim_id));
        }
        if let Some(title) = &report.title {
            lines.push(format!("Title:   {}", title));
        }
        lines.push(format!("Profile: {}", report.profile));
        lines.push(format!(
            "Verdict: {}",
            self.paint_verdict(&report.verdict.to_string())
        ));
        if !report.first_reason.is_empty() {
            lines.push(format!("Reason:  {}", report.first_reason));
        }
        lines.push(String::new());

        let mut builder = Builder::default();
        builder.push_record(["Judge", "Verdict", "Message"]);
        for outcome in &report.judges {
            let verdict = self.paint_verdict(&outcome.verdict.to_string());
            builder.push_record([
                outcome.judge.as_str(),
                verdict.as_str(),
                outcome.message.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        lines.push(table.to_string());
        Ok(lines.join("\n"))
    }

    /// Format a lab report summary.
    pub fn format_lab_summary(&self, report: &LabReport) -> Result<String> {
        let totals = &report.totals;
        let mut lines = vec![format!(
            "Lab runs: {} (pass {}, fail {}, no-eval {})",
            totals.runs, totals.pass, totals.fail, totals.no_eval
        )];

        let mut builder = Builder::default();
        builder.push_record(["Profile", "Runs", "Pass", "Fail", "No-Eval", "Pass rate"]);
        for stats in &report.profile_stats {
            builder.push_record([
                stats.profile.clone(),
                stats.runs.to_string(),
                stats.pass.to_string(),
                stats.fail.to_string(),
                stats.no_eval.to_string(),
                format!("{:.2}%", stats.pass_rate * 100.0),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        lines.push(table.to_string());

        lines.push(format!("Diverging claims: {}", report.divergence_count));
        lines.push(format!(
            "Artifacts: {}",
            report.artifacts.json.parent().unwrap_or(std::path::Path::new(".")).display()
        ));
        Ok(lines.join("\n"))
    }

    /// Colorize a rendered verdict by its class.
    fn paint_verdict(&self, verdict: &str) -> String {
        if !self.color_enabled {
            return verdict.to_string();
        }

        match VerdictClass::of(verdict) {
            Some(VerdictClass::Pass) => verdict.green().to_string(),
            Some(VerdictClass::Fail) => verdict.red().to_string(),
            Some(VerdictClass::NoEval) => verdict.yellow().to_string(),
            None => verdict.to_string(),
        }
    }
}

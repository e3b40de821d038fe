//! Judge report envelope
//!
//! Serializable audit wrapper around a pipeline outcome. The envelope is
//! what carries identifiers and timestamps; the wrapped `PipelineOutcome`
//! itself stays bit-identical across repeat evaluations of the same claim.

use crate::pipeline::Pipeline;
use arbiter_domain::access::{as_text, field};
use arbiter_domain::{JudgeOutcome, Verdict};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Schema identifier for serialized judge reports.
pub const JUDGE_REPORT_SCHEMA: &str = "arbiter.judge_report.v1";

/// Schema version for serialized judge reports.
pub const JUDGE_REPORT_SCHEMA_VERSION: &str = "1.0";

/// Unique identifier for a judge report, based on UUIDv7.
///
/// Chronologically sortable and generated without coordination, so batch
/// runs can mint ids freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(u128);

impl ReportId {
    /// Generate a new UUIDv7-based ReportId.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ReportId from a raw u128 value.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ReportId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Audit envelope around one pipeline evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct JudgeReport {
    /// Report schema identifier.
    pub schema: &'static str,

    /// Report schema version.
    pub schema_version: &'static str,

    /// Version of the evaluating engine.
    pub engine_version: &'static str,

    /// Unique id of this report.
    pub report_id: ReportId,

    /// Unix-epoch milliseconds at report creation.
    pub generated_at_ms: u64,

    /// Claim id lifted from the claim, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,

    /// Claim title lifted from the claim, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Profile the pipeline ran under.
    pub profile: String,

    /// Judge names in run order.
    pub judge_set: Vec<String>,

    /// Final verdict.
    pub verdict: Verdict,

    /// Code of the first non-PASS judge; empty when everything passed.
    pub first_reason: String,

    /// Per-judge outcomes in run order.
    pub judges: Vec<JudgeOutcome>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn declared_text(claim: &Value, key: &str) -> Option<String> {
    let text = claim
        .as_object()
        .map(|map| as_text(field(map, key)))
        .unwrap_or_default();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl Pipeline {
    /// Evaluate a claim and wrap the outcome in an audit report.
    pub fn report(&self, claim: &Value) -> JudgeReport {
        let outcome = self.evaluate(claim);
        JudgeReport {
            schema: JUDGE_REPORT_SCHEMA,
            schema_version: JUDGE_REPORT_SCHEMA_VERSION,
            engine_version: env!("CARGO_PKG_VERSION"),
            report_id: ReportId::new(),
            generated_at_ms: now_ms(),
            claim_id: declared_text(claim, "claim_id"),
            title: declared_text(claim, "title"),
            profile: self.profile().to_string(),
            judge_set: self.judge_names(),
            verdict: outcome.verdict,
            first_reason: outcome.first_reason,
            judges: outcome.judges,
        }
    }
}

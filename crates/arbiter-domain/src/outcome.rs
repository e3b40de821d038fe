//! Outcome records produced by judges and the pipeline

use crate::verdict::{Verdict, VerdictClass};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of a single judge evaluation.
///
/// Immutable once built: created by a judge, appended to the pipeline's
/// outcome list, never mutated. The `code` mirrors the verdict's code so
/// report consumers can key on it without parsing the rendered verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeOutcome {
    /// Judge identifier.
    pub judge: String,

    /// Verdict with its reason code.
    pub verdict: Verdict,

    /// Short reason code (same as the verdict's code).
    pub code: String,

    /// Human-readable explanation.
    pub message: String,

    /// Flat audit details (lock_id, lock_class, z_score, ...).
    ///
    /// Ordered map so repeat evaluations serialize bit-identically.
    pub details: BTreeMap<String, String>,
}

impl JudgeOutcome {
    fn new(judge: &str, verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            judge: judge.to_string(),
            code: verdict.code.clone(),
            verdict,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// A passing outcome.
    pub fn pass(judge: &str, code: &str, message: impl Into<String>) -> Self {
        Self::new(judge, Verdict::pass(code), message)
    }

    /// A failing outcome.
    pub fn fail(judge: &str, code: &str, message: impl Into<String>) -> Self {
        Self::new(judge, Verdict::fail(code), message)
    }

    /// A not-evaluable outcome.
    pub fn no_eval(judge: &str, code: &str, message: impl Into<String>) -> Self {
        Self::new(judge, Verdict::no_eval(code), message)
    }

    /// Attach an audit detail.
    pub fn with_detail(mut self, key: &str, value: impl Into<String>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// Aggregate result of one pipeline run.
///
/// Holds the reduced final verdict plus every judge outcome in execution
/// order — all judges always run to completion; only the reported verdict
/// short-circuits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    /// Final verdict (first non-PASS outcome wins, NO-EVAL before FAIL).
    pub verdict: Verdict,

    /// Code of the first non-PASS judge; empty when everything passed.
    pub first_reason: String,

    /// Ordered outcomes of every judge that ran.
    pub judges: Vec<JudgeOutcome>,
}

impl PipelineOutcome {
    /// Whether the aggregate verdict is a pass.
    pub fn passed(&self) -> bool {
        self.verdict.class == VerdictClass::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_code_mirrors_verdict() {
        let outcome = JudgeOutcome::no_eval("domain", "DOM1", "missing domain");
        assert_eq!(outcome.code, "DOM1");
        assert_eq!(outcome.verdict.to_string(), "NO-EVAL(DOM1)");
    }

    #[test]
    fn test_with_detail_preserves_order() {
        let outcome = JudgeOutcome::pass("nuclear_guard", "J4", "ok")
            .with_detail("z_score", "0.5833")
            .with_detail("lock_id", "L4");
        let keys: Vec<_> = outcome.details.keys().cloned().collect();
        assert_eq!(keys, vec!["lock_id", "z_score"]);
    }

    #[test]
    fn test_pipeline_outcome_passed() {
        let ok = PipelineOutcome {
            verdict: Verdict::clean_pass(),
            first_reason: String::new(),
            judges: vec![],
        };
        assert!(ok.passed());

        let blocked = PipelineOutcome {
            verdict: Verdict::no_eval("UV1"),
            first_reason: "UV1".to_string(),
            judges: vec![],
        };
        assert!(!blocked.passed());
    }
}

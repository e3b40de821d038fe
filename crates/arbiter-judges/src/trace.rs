//! Traceability judge
//!
//! Placeholder judge kept so the judge list stays uniform across profiles.
//! Source traceability is optional in the built-in profiles, so this judge
//! always passes with a fixed code and no branching.

use arbiter_domain::access::ClaimMap;
use arbiter_domain::{Judge, JudgeOutcome};

/// Judge noting that source traceability is optional.
pub struct TraceJudge;

impl Judge for TraceJudge {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn evaluate(&self, _claim: &ClaimMap) -> JudgeOutcome {
        JudgeOutcome::pass(
            self.name(),
            "TR0",
            "Source traceability is optional in this profile.",
        )
    }
}

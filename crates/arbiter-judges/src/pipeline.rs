//! Judge pipeline
//!
//! Runs the judge list for a profile in fixed order and reduces the outcome
//! list to a final verdict. Execution never short-circuits — every judge
//! runs to completion so reports always carry the full outcome list; only
//! the reported verdict follows the first-failure rule.

use crate::domain::DomainJudge;
use crate::nuclear::NuclearGuardJudge;
use crate::trace::TraceJudge;
use crate::uv_guard::UvGuardJudge;
use arbiter_domain::{Judge, JudgeOutcome, PipelineOutcome, Profile, Verdict, VerdictClass};
use serde_json::Value;
use tracing::{debug, info};

/// Build the ordered judge list for a profile.
///
/// Domain runs first, the nuclear lock package (nuclear profile only)
/// second, then the UV guard and the trace stub.
pub fn judges_for(profile: Profile) -> Vec<Box<dyn Judge>> {
    let mut judges: Vec<Box<dyn Judge>> = vec![Box::new(DomainJudge)];
    if profile.includes_nuclear() {
        judges.push(Box::new(NuclearGuardJudge));
    }
    judges.push(Box::new(UvGuardJudge));
    judges.push(Box::new(TraceJudge));
    judges
}

/// Reduce an ordered outcome list to `(final_verdict, first_reason_code)`.
///
/// Priority: NO-EVAL > FAIL > PASS. The first outcome of the winning class
/// in run order supplies the verdict and code; an all-pass list reduces to
/// the bare aggregate PASS with an empty code.
pub fn combine(outcomes: &[JudgeOutcome]) -> (Verdict, String) {
    for outcome in outcomes {
        if outcome.verdict.class == VerdictClass::NoEval {
            return (outcome.verdict.clone(), outcome.code.clone());
        }
    }
    for outcome in outcomes {
        if outcome.verdict.class == VerdictClass::Fail {
            return (outcome.verdict.clone(), outcome.code.clone());
        }
    }
    (Verdict::clean_pass(), String::new())
}

/// The judge pipeline for one profile.
pub struct Pipeline {
    profile: Profile,
    judges: Vec<Box<dyn Judge>>,
}

impl Pipeline {
    /// Build the pipeline for a profile.
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            judges: judges_for(profile),
        }
    }

    /// The profile this pipeline was built for.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Names of the judges in run order.
    pub fn judge_names(&self) -> Vec<String> {
        self.judges.iter().map(|j| j.name().to_string()).collect()
    }

    /// Evaluate a parsed claim.
    ///
    /// A claim that is not a mapping at all never reaches the judges: it is
    /// caught at this boundary and reduced to a single synthetic
    /// `NO-EVAL(PARSE)` outcome, so malformed input is a verdict, not an
    /// error escaping to the caller.
    pub fn evaluate(&self, claim: &Value) -> PipelineOutcome {
        let Some(map) = claim.as_object() else {
            let outcome = JudgeOutcome::no_eval(
                "pipeline",
                "PARSE",
                "Claim must be a mapping of string keys to values.",
            );
            info!(profile = %self.profile, verdict = %outcome.verdict, "claim rejected at boundary");
            return PipelineOutcome {
                verdict: outcome.verdict.clone(),
                first_reason: outcome.code.clone(),
                judges: vec![outcome],
            };
        };

        let mut results = Vec::with_capacity(self.judges.len());
        for judge in &self.judges {
            let outcome = judge.evaluate(map);
            debug!(judge = judge.name(), verdict = %outcome.verdict, "judge evaluated");
            results.push(outcome);
        }

        let (verdict, first_reason) = combine(&results);
        info!(profile = %self.profile, verdict = %verdict, "pipeline evaluated");
        PipelineOutcome {
            verdict,
            first_reason,
            judges: results,
        }
    }
}

/// Evaluate a claim under a profile with a freshly built pipeline.
pub fn evaluate(claim: &Value, profile: Profile) -> PipelineOutcome {
    Pipeline::for_profile(profile).evaluate(claim)
}

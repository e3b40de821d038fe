//! UV reinjection guard judge
//!
//! This judge is intentionally conservative: it does not try to solve UV
//! physics. It checks that the claim's parameterization does not rely on
//! inaccessible knobs that materially affect the stated observables.
//!
//! The parameter format is minimal and pragmatic:
//!
//! ```json
//! {"parameters": [
//!     {"name": "theta", "accessible": false, "affects_observables": true}
//! ]}
//! ```
//!
//! Both flags are read through the boolean accessor, so an absent or
//! malformed flag counts as false. In particular a parameter declaring only
//! `affects_observables: true` is treated as inaccessible and flagged.

use arbiter_domain::access::{as_flag, as_list, as_mapping, as_text, field, ClaimMap};
use arbiter_domain::{Judge, JudgeOutcome};

/// Judge flagging inaccessible parameters that affect observables.
pub struct UvGuardJudge;

impl Judge for UvGuardJudge {
    fn name(&self) -> &'static str {
        "uv_guard"
    }

    fn evaluate(&self, claim: &ClaimMap) -> JudgeOutcome {
        let params = as_list(field(claim, "parameters"));

        // First offender in declaration order wins; the rest are not reported.
        for raw in params {
            let Some(entry) = as_mapping(Some(raw)) else {
                continue;
            };
            let accessible = as_flag(field(entry, "accessible"));
            let affects = as_flag(field(entry, "affects_observables"));
            if !accessible && affects {
                let mut name = as_text(field(entry, "name"));
                if name.is_empty() {
                    name = "unnamed_parameter".to_string();
                }
                return JudgeOutcome::no_eval(
                    self.name(),
                    "UV1",
                    format!(
                        "Potential UV reinjection: inaccessible parameter '{}' affects observables.",
                        name
                    ),
                )
                .with_detail("parameter", name)
                .with_detail("reason", "inaccessible_affects");
            }
        }

        JudgeOutcome::pass(
            self.name(),
            "UV",
            "No obvious UV reinjection via inaccessible parameters.",
        )
        .with_detail("n_parameters", params.len().to_string())
    }
}

//! Domain judge
//!
//! Enforces a minimal operational domain declaration: a `domain` mapping
//! with a non-empty `observables` list.

use arbiter_domain::access::{as_list, as_mapping, as_text, field, ClaimMap};
use arbiter_domain::{Judge, JudgeOutcome};

/// Judge requiring a minimally declared operational domain.
pub struct DomainJudge;

impl Judge for DomainJudge {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn evaluate(&self, claim: &ClaimMap) -> JudgeOutcome {
        let Some(domain) = as_mapping(field(claim, "domain")) else {
            return JudgeOutcome::no_eval(
                self.name(),
                "DOM1",
                "Missing domain declaration (expected mapping under 'domain').",
            );
        };

        let observables = as_list(field(domain, "observables"));
        if observables.is_empty() {
            return JudgeOutcome::no_eval(
                self.name(),
                "DOM2",
                "Domain must declare a non-empty list of observables.",
            );
        }

        let names: Vec<String> = observables.iter().map(|x| as_text(Some(x))).collect();
        JudgeOutcome::pass(
            self.name(),
            "DOM",
            "Operational domain declaration present.",
        )
        .with_detail("observables", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eval(claim: serde_json::Value) -> JudgeOutcome {
        DomainJudge.evaluate(claim.as_object().unwrap())
    }

    #[test]
    fn test_missing_domain() {
        let outcome = eval(json!({"title": "no domain here"}));
        assert_eq!(outcome.verdict.to_string(), "NO-EVAL(DOM1)");
        assert_eq!(outcome.code, "DOM1");
    }

    #[test]
    fn test_domain_not_a_mapping() {
        let outcome = eval(json!({"domain": "astrophysics"}));
        assert_eq!(outcome.code, "DOM1");
    }

    #[test]
    fn test_missing_observables() {
        let outcome = eval(json!({"domain": {"sector": "optics"}}));
        assert_eq!(outcome.verdict.to_string(), "NO-EVAL(DOM2)");
    }

    #[test]
    fn test_empty_observables() {
        let outcome = eval(json!({"domain": {"observables": []}}));
        assert_eq!(outcome.code, "DOM2");
    }

    #[test]
    fn test_pass_joins_observable_names() {
        let outcome = eval(json!({
            "domain": {"observables": ["flux", "decay_rate"]}
        }));
        assert_eq!(outcome.verdict.to_string(), "PASS(DOM)");
        assert_eq!(outcome.details["observables"], "flux,decay_rate");
    }
}

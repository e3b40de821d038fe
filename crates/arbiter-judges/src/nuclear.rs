//! Nuclear-domain lock package
//!
//! A domain lock set (Class C / Class E), not a foundational judge. Class C
//! locks cover operational closure for the nuclear domain (energy range,
//! isotopes, reaction channel, detectors); Class E locks cover the evidence
//! anchor (observed vs. predicted cross-section with provenance and a
//! z-score tolerance check).
//!
//! The package only applies to claims the applicability heuristic tags as
//! nuclear; everything else short-circuits to a neutral pass so the judge
//! never blocks a non-nuclear claim evaluated under the nuclear profile.

use arbiter_domain::access::{as_list, as_mapping, as_number, as_text, field, ClaimMap};
use arbiter_domain::{Judge, JudgeOutcome};

const JUDGE_NAME: &str = "nuclear_guard";

/// Substrings that tag a claim as belonging to the nuclear domain.
const NUCLEAR_HINTS: [&str; 6] = [
    "nuclear", "reactor", "fission", "fusion", "neutron", "isotope",
];

/// Heuristic: does this claim belong to the nuclear domain?
///
/// True when any of `domain.sector`, `domain.field`, `domain.discipline`,
/// `domain.domain_type` (case-folded) contains a nuclear hint substring, or
/// when the joined observables text does. Substring matching, not
/// whole-word matching: a sector of "ISOTOPEX" matches "isotope".
pub fn claim_is_nuclear(claim: &ClaimMap) -> bool {
    let Some(domain) = as_mapping(field(claim, "domain")) else {
        return false;
    };

    for key in ["sector", "field", "discipline", "domain_type"] {
        let text = as_text(field(domain, key)).to_lowercase();
        if NUCLEAR_HINTS.iter().any(|hint| text.contains(hint)) {
            return true;
        }
    }

    let merged = as_list(field(domain, "observables"))
        .iter()
        .map(|x| as_text(Some(x)).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    NUCLEAR_HINTS.iter().any(|hint| merged.contains(hint))
}

fn lock_no_eval(code: &str, class: &str, legacy: &str, message: &str) -> JudgeOutcome {
    JudgeOutcome::no_eval(JUDGE_NAME, code, message)
        .with_detail("judge_id", "J4")
        .with_detail("lock_id", code)
        .with_detail("lock_class", class)
        .with_detail("legacy_code", legacy)
}

fn lock_fail(code: &str, class: &str, legacy: &str, message: &str) -> JudgeOutcome {
    JudgeOutcome::fail(JUDGE_NAME, code, message)
        .with_detail("judge_id", "J4")
        .with_detail("lock_id", code)
        .with_detail("lock_class", class)
        .with_detail("legacy_code", legacy)
}

/// Judge enforcing the J4 nuclear lock package (L4C* / L4E*).
pub struct NuclearGuardJudge;

impl Judge for NuclearGuardJudge {
    fn name(&self) -> &'static str {
        JUDGE_NAME
    }

    fn evaluate(&self, claim: &ClaimMap) -> JudgeOutcome {
        if !claim_is_nuclear(claim) {
            return JudgeOutcome::pass(
                self.name(),
                "J4NA",
                "Nuclear lock package not applicable for this claim.",
            )
            .with_detail("judge_id", "J4")
            .with_detail("legacy_code", "NUC0");
        }

        let Some(domain) = as_mapping(field(claim, "domain")) else {
            return lock_no_eval(
                "L4C1",
                "C",
                "NUC1",
                "Nuclear claims must declare a domain mapping.",
            );
        };

        // Class C: operational closure for the nuclear domain.
        let Some(energy) = as_mapping(field(domain, "energy_range_mev")) else {
            return lock_no_eval(
                "L4C2",
                "C",
                "NUC2",
                "Missing Class-C lock: domain.energy_range_mev.",
            );
        };

        let min_mev = as_number(field(energy, "min_mev"));
        let max_mev = as_number(field(energy, "max_mev"));
        let (Some(min_mev), Some(max_mev)) = (min_mev, max_mev) else {
            return lock_fail(
                "L4C3",
                "C",
                "NUC3",
                "Class-C lock violation: energy_range_mev bounds must be numeric.",
            );
        };
        if min_mev < 0.0 || max_mev <= min_mev {
            return lock_fail(
                "L4C4",
                "C",
                "NUC4",
                "Class-C lock violation: expected 0 <= min_mev < max_mev.",
            );
        }

        let isotopes = as_list(field(domain, "isotopes"));
        if isotopes.is_empty() {
            return lock_no_eval(
                "L4C5",
                "C",
                "NUC5",
                "Missing Class-C lock: domain.isotopes[] must be non-empty.",
            );
        }

        let reaction_channel = as_text(field(domain, "reaction_channel"));
        if reaction_channel.is_empty() {
            return lock_no_eval(
                "L4C6",
                "C",
                "NUC6",
                "Missing Class-C lock: domain.reaction_channel.",
            );
        }

        let detectors = as_list(field(domain, "detectors"));
        if detectors.is_empty() {
            return lock_no_eval(
                "L4C7",
                "C",
                "NUC7",
                "Missing Class-C lock: domain.detectors[] must be non-empty.",
            );
        }

        // Class E: evidence anchor, z = |pred - obs| / sigma <= z_max.
        let Some(evidence) = as_mapping(field(claim, "evidence")) else {
            return lock_no_eval(
                "L4E1",
                "E",
                "NUC8E",
                "Missing Class-E lock: evidence anchor not declared.",
            );
        };

        let observed = as_number(field(evidence, "observed_cross_section_barns"));
        let sigma = as_number(field(evidence, "sigma_cross_section_barns"));
        let (Some(observed), Some(sigma)) = (observed, sigma) else {
            return lock_no_eval(
                "L4E2",
                "E",
                "NUC9E",
                "Invalid Class-E anchor: observed_cross_section_barns and sigma>0 required.",
            );
        };
        if sigma <= 0.0 {
            return lock_no_eval(
                "L4E2",
                "E",
                "NUC9E",
                "Invalid Class-E anchor: observed_cross_section_barns and sigma>0 required.",
            );
        }

        let Some(model) = as_mapping(field(claim, "model")) else {
            return lock_no_eval(
                "L4E3",
                "E",
                "NUC10E",
                "Missing model prediction for Class-E anchor comparison.",
            );
        };

        let Some(predicted) = as_number(field(model, "predicted_cross_section_barns")) else {
            return lock_no_eval(
                "L4E4",
                "E",
                "NUC11E",
                "Missing model.predicted_cross_section_barns.",
            );
        };

        let z_max = match as_number(field(evidence, "max_sigma")) {
            Some(x) if x > 0.0 => x,
            _ => 3.0,
        };

        let dataset_ref = as_text(field(evidence, "dataset_ref"));
        if dataset_ref.is_empty() {
            return lock_no_eval(
                "L4E6",
                "E",
                "NUC13E",
                "Missing Class-E provenance: evidence.dataset_ref must cite the observational source.",
            );
        }

        let has_doi = !as_text(field(evidence, "dataset_doi")).is_empty();
        let has_url = !as_text(field(evidence, "source_url")).is_empty();
        if !(has_doi || has_url) {
            return lock_no_eval(
                "L4E7",
                "E",
                "NUC14E",
                "Missing Class-E provenance locator: provide evidence.source_url or evidence.dataset_doi.",
            );
        }

        let z_score = (predicted - observed).abs() / sigma;
        if z_score > z_max {
            return lock_fail(
                "L4E5",
                "E",
                "NUC12E",
                "Class-E lock violation: prediction inconsistent with declared evidence anchor.",
            )
            .with_detail("z_score", format!("{:.4}", z_score))
            .with_detail("z_max", format!("{:.4}", z_max))
            .with_detail("equation", "z = |sigma_pred - sigma_obs| / sigma_obs_err");
        }

        let isotope_names: Vec<String> = isotopes.iter().map(|x| as_text(Some(x))).collect();
        let detector_names: Vec<String> = detectors.iter().map(|x| as_text(Some(x))).collect();
        JudgeOutcome::pass(
            self.name(),
            "J4",
            "Nuclear lock package satisfied (Class C + Class E).",
        )
        .with_detail("judge_id", "J4")
        .with_detail("lock_id", "L4")
        .with_detail("lock_classes", "C,E")
        .with_detail("legacy_code", "NUC")
        .with_detail("min_mev", min_mev.to_string())
        .with_detail("max_mev", max_mev.to_string())
        .with_detail("isotopes", isotope_names.join(","))
        .with_detail("reaction_channel", reaction_channel)
        .with_detail("detectors", detector_names.join(","))
        .with_detail("z_score", format!("{:.4}", z_score))
        .with_detail("z_max", format!("{:.4}", z_max))
        .with_detail("equation", "z = |sigma_pred - sigma_obs| / sigma_obs_err")
    }
}

//! Pure aggregation over lab result rows

use crate::lab::LabRow;
use arbiter_domain::VerdictClass;
use serde::Serialize;
use std::collections::BTreeMap;

/// Classify a rendered verdict string; unrecognized prefixes are "UNKNOWN".
pub fn verdict_class(raw: &str) -> &'static str {
    VerdictClass::of(raw)
        .map(|c| c.as_str())
        .unwrap_or("UNKNOWN")
}

/// Per-profile verdict counts and pass rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    /// Profile name.
    pub profile: String,
    /// Total runs under this profile.
    pub runs: usize,
    /// Runs that passed.
    pub pass: usize,
    /// Runs that failed.
    pub fail: usize,
    /// Runs that were not evaluable.
    pub no_eval: usize,
    /// Runs with an unrecognized verdict.
    pub unknown: usize,
    /// pass / runs, rounded to 4 places.
    pub pass_rate: f64,
}

/// Aggregate rows into per-profile stats, sorted by profile name.
pub fn profile_stats(rows: &[LabRow]) -> Vec<ProfileStats> {
    let mut by_profile: BTreeMap<String, ProfileStats> = BTreeMap::new();
    for row in rows {
        let item = by_profile
            .entry(row.profile.clone())
            .or_insert_with(|| ProfileStats {
                profile: row.profile.clone(),
                runs: 0,
                pass: 0,
                fail: 0,
                no_eval: 0,
                unknown: 0,
                pass_rate: 0.0,
            });
        item.runs += 1;
        match verdict_class(&row.verdict) {
            "PASS" => item.pass += 1,
            "FAIL" => item.fail += 1,
            "NO-EVAL" => item.no_eval += 1,
            _ => item.unknown += 1,
        }
    }

    let mut stats: Vec<ProfileStats> = by_profile.into_values().collect();
    for item in &mut stats {
        if item.runs > 0 {
            item.pass_rate = (item.pass as f64 / item.runs as f64 * 10_000.0).round() / 10_000.0;
        }
    }
    stats
}

/// Build the claim × profile verdict matrix; missing cells are `-`.
pub fn verdict_matrix(
    rows: &[LabRow],
    profiles: &[String],
) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut table: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for row in rows {
        table
            .entry(row.claim_id.clone())
            .or_default()
            .insert(row.profile.clone(), row.verdict.clone());
    }
    for claim_row in table.values_mut() {
        for profile in profiles {
            claim_row
                .entry(profile.clone())
                .or_insert_with(|| "-".to_string());
        }
    }
    table
}

/// One profile's verdict inside a divergence record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergenceEntry {
    /// Profile name.
    pub profile: String,
    /// Rendered verdict under that profile.
    pub verdict: String,
    /// First non-PASS code under that profile.
    pub first_reason: String,
}

/// A claim whose verdict class differs across profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divergence {
    /// Claim identifier.
    pub claim_id: String,
    /// Per-profile verdicts for the claim.
    pub profiles: Vec<DivergenceEntry>,
}

/// Find claims whose verdict class differs across profiles, sorted by id.
pub fn divergence(rows: &[LabRow]) -> Vec<Divergence> {
    let mut by_claim: BTreeMap<String, Vec<&LabRow>> = BTreeMap::new();
    for row in rows {
        by_claim.entry(row.claim_id.clone()).or_default().push(row);
    }

    let mut out = Vec::new();
    for (claim_id, claim_rows) in by_claim {
        let classes: std::collections::BTreeSet<&str> = claim_rows
            .iter()
            .map(|row| verdict_class(&row.verdict))
            .collect();
        if classes.len() <= 1 {
            continue;
        }
        out.push(Divergence {
            claim_id,
            profiles: claim_rows
                .iter()
                .map(|row| DivergenceEntry {
                    profile: row.profile.clone(),
                    verdict: row.verdict.clone(),
                    first_reason: row.first_reason.clone(),
                })
                .collect(),
        });
    }
    out
}

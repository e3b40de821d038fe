//! Lab integration tests: artifact generation on a temp directory.

use arbiter_domain::Profile;
use arbiter_lab::{discover_claim_files, run_lab, LabConfig};
use std::fs;

fn write_claim(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_lab_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let claim = write_claim(
        dir.path(),
        "claim.json",
        r#"{
            "claim_id": "CLAIM-LAB-001",
            "title": "Lab pass claim",
            "domain": {"observables": ["O1"]},
            "parameters": [
                {"name": "theta", "accessible": true, "affects_observables": true}
            ]
        }"#,
    );

    let out_dir = dir.path().join("lab_out");
    let report = run_lab(&LabConfig {
        claim_paths: vec![claim],
        profiles: vec![Profile::Core, Profile::Nuclear],
        out_dir: out_dir.clone(),
    })
    .unwrap();

    assert_eq!(report.schema, "arbiter.lab_report.v1");
    assert_eq!(report.totals.runs, 2);
    assert_eq!(report.totals.pass, 2);
    assert!(report.artifacts.json.is_file());
    assert!(report.artifacts.results_csv.is_file());
    assert!(report.artifacts.profile_csv.is_file());
    assert!(report.artifacts.matrix_md.is_file());

    let results_csv = fs::read_to_string(&report.artifacts.results_csv).unwrap();
    assert!(results_csv.starts_with("claim_id,title,claim_path,profile,verdict"));
    assert!(results_csv.contains("CLAIM-LAB-001"));

    let matrix_md = fs::read_to_string(&report.artifacts.matrix_md).unwrap();
    assert!(matrix_md.contains("| Claim | core | nuclear |"));
}

#[test]
fn test_lab_counts_non_pass_runs() {
    let dir = tempfile::tempdir().unwrap();
    // Nuclear-tagged claim without a reaction channel: NO-EVAL under the
    // nuclear profile, PASS under core.
    let claim = write_claim(
        dir.path(),
        "nuclear_noeval.json",
        r#"{
            "claim_id": "CLAIM-LAB-002",
            "domain": {
                "sector": "nuclear",
                "observables": ["Differential cross section"],
                "energy_range_mev": {"min_mev": 1.0, "max_mev": 14.0},
                "isotopes": ["Fe-56"],
                "detectors": ["Time-of-flight spectrometer"]
            }
        }"#,
    );

    let report = run_lab(&LabConfig {
        claim_paths: vec![claim],
        profiles: vec![Profile::Core, Profile::Nuclear],
        out_dir: dir.path().join("out"),
    })
    .unwrap();

    assert_eq!(report.totals.runs, 2);
    assert_eq!(report.totals.pass, 1);
    assert_eq!(report.totals.no_eval, 1);
    assert_eq!(report.divergence_count, 1);
    assert_eq!(report.divergence[0].claim_id, "CLAIM-LAB-002");

    let nuclear_row = report
        .results
        .iter()
        .find(|r| r.profile == "nuclear")
        .unwrap();
    assert_eq!(nuclear_row.verdict, "NO-EVAL(L4C6)");
    assert_eq!(nuclear_row.first_reason, "L4C6");
}

#[test]
fn test_lab_survives_non_mapping_claim() {
    let dir = tempfile::tempdir().unwrap();
    let claim = write_claim(dir.path(), "list.json", "[1, 2, 3]");

    let report = run_lab(&LabConfig {
        claim_paths: vec![claim],
        profiles: vec![Profile::Core],
        out_dir: dir.path().join("out"),
    })
    .unwrap();

    assert_eq!(report.totals.no_eval, 1);
    assert_eq!(report.results[0].verdict, "NO-EVAL(PARSE)");
    assert_eq!(report.results[0].claim_id, "list");
}

#[test]
fn test_discovery_feeds_the_lab() {
    let dir = tempfile::tempdir().unwrap();
    write_claim(dir.path(), "b.json", r#"{"domain": {"observables": ["O1"]}}"#);
    write_claim(dir.path(), "a.json", r#"{"domain": {"observables": ["O1"]}}"#);

    let files = discover_claim_files(dir.path(), false).unwrap();
    let report = run_lab(&LabConfig {
        claim_paths: files,
        profiles: vec![Profile::Core],
        out_dir: dir.path().join("out"),
    })
    .unwrap();

    assert_eq!(report.totals.runs, 2);
    assert_eq!(report.results[0].claim_id, "a");
}

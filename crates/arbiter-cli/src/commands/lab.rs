//! Lab command: run the batch experiment lab.

use crate::cli::LabArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use arbiter_domain::Profile;
use arbiter_lab::{discover_claim_files, run_lab, LabConfig};

fn resolve_profiles(args: &LabArgs, default_profile: Profile) -> Result<Vec<Profile>> {
    if args.profiles.is_empty() {
        return Ok(vec![default_profile]);
    }
    args.profiles
        .iter()
        .map(|raw| {
            Profile::parse(raw).ok_or_else(|| CliError::InvalidInput(format!("Invalid profile: {}", raw)))
        })
        .collect()
}

/// Run the experiment lab and print its summary (or full JSON payload).
///
/// Returns the process exit code: 1 when `--fail-on-non-pass` is set and
/// any run is not a PASS, otherwise 0.
pub fn execute_lab(args: &LabArgs, default_profile: Profile, formatter: &Formatter) -> Result<i32> {
    let profiles = resolve_profiles(args, default_profile)?;
    let claim_paths = discover_claim_files(&args.claims, args.recursive)?;

    let report = run_lab(&LabConfig {
        claim_paths,
        profiles,
        out_dir: args.out.clone(),
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", formatter.format_lab_summary(&report)?);
    }

    if args.fail_on_non_pass && report.totals.pass != report.totals.runs {
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use std::path::PathBuf;

    fn lab_args(claims: PathBuf, out: PathBuf, profiles: Vec<String>) -> LabArgs {
        LabArgs {
            claims,
            recursive: false,
            profiles,
            out,
            fail_on_non_pass: true,
            json: false,
        }
    }

    #[test]
    fn test_resolve_profiles_defaults() {
        let args = lab_args("claims".into(), "out".into(), vec![]);
        let profiles = resolve_profiles(&args, Profile::Nuclear).unwrap();
        assert_eq!(profiles, vec![Profile::Nuclear]);
    }

    #[test]
    fn test_resolve_profiles_rejects_unknown() {
        let args = lab_args("claims".into(), "out".into(), vec!["strict".to_string()]);
        assert!(matches!(
            resolve_profiles(&args, Profile::Core),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_lab_fail_on_non_pass() {
        let dir = tempfile::tempdir().unwrap();
        let claims_dir = dir.path().join("claims");
        fs::create_dir(&claims_dir).unwrap();
        fs::write(
            claims_dir.join("nuclear_noeval.json"),
            r#"{
                "claim_id": "CLAIM-LAB-NOEVAL",
                "domain": {
                    "sector": "nuclear",
                    "observables": ["Differential cross section"],
                    "energy_range_mev": {"min_mev": 1.0, "max_mev": 14.0},
                    "isotopes": ["Fe-56"],
                    "detectors": ["Time-of-flight spectrometer"]
                }
            }"#,
        )
        .unwrap();

        let args = lab_args(
            claims_dir,
            dir.path().join("out"),
            vec!["nuclear".to_string()],
        );
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let code = execute_lab(&args, Profile::Core, &formatter).unwrap();
        assert_eq!(code, 1);
    }
}

//! Eval command: evaluate a single claim file.

use crate::cli::EvalArgs;
use crate::error::Result;
use crate::output::Formatter;
use arbiter_domain::Profile;
use arbiter_judges::Pipeline;
use arbiter_lab::load_claim_file;

/// Evaluate one claim file and print its judge report.
///
/// Returns the process exit code: 1 when `--fail-on-non-pass` is set and
/// the final verdict is not a PASS, otherwise 0.
pub fn execute_eval(args: &EvalArgs, profile: Profile, formatter: &Formatter) -> Result<i32> {
    let claim = load_claim_file(&args.claim)?;
    let report = Pipeline::for_profile(profile).report(&claim);
    println!("{}", formatter.format_report(&report)?);

    if args.fail_on_non_pass && !report.verdict.is_pass() {
        Ok(1)
    } else {
        Ok(0)
    }
}

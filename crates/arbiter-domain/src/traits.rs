//! Trait definitions for judge implementations
//!
//! The trait defines the boundary between the domain vocabulary and the
//! judge implementations, which live in `arbiter-judges`.

use crate::access::ClaimMap;
use crate::outcome::JudgeOutcome;

/// A judge: a pure function mapping a claim to a verdict outcome for one
/// concern.
///
/// Judges are synchronous, side-effect-free, and infallible — problems with
/// the claim are reported through the verdict, never through an error
/// channel. The claim has already passed the pipeline's mapping boundary
/// check when a judge sees it.
pub trait Judge {
    /// Judge identifier used in outcomes and reports.
    fn name(&self) -> &'static str;

    /// Evaluate the claim for this judge's concern.
    fn evaluate(&self, claim: &ClaimMap) -> JudgeOutcome;
}

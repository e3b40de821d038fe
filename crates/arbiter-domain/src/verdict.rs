//! Verdict vocabulary
//!
//! Every judge outcome and the pipeline aggregate render to one of exactly
//! three prefixes — `PASS`, `FAIL`, `NO-EVAL` — optionally followed by a
//! parenthesized reason code. The rendered strings are a wire contract with
//! downstream report consumers and must not drift.

use serde::{Serialize, Serializer};
use std::fmt;

/// The three-way evaluability class of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerdictClass {
    /// The check holds.
    #[serde(rename = "PASS")]
    Pass,

    /// The claim is evaluable and contradicted.
    #[serde(rename = "FAIL")]
    Fail,

    /// The claim cannot be evaluated as declared.
    #[serde(rename = "NO-EVAL")]
    NoEval,
}

impl VerdictClass {
    /// Get the class prefix as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictClass::Pass => "PASS",
            VerdictClass::Fail => "FAIL",
            VerdictClass::NoEval => "NO-EVAL",
        }
    }

    /// Classify a rendered verdict string by its prefix.
    pub fn of(raw: &str) -> Option<Self> {
        if raw.starts_with("NO-EVAL") {
            Some(VerdictClass::NoEval)
        } else if raw.starts_with("FAIL") {
            Some(VerdictClass::Fail)
        } else if raw.starts_with("PASS") {
            Some(VerdictClass::Pass)
        } else {
            None
        }
    }
}

impl fmt::Display for VerdictClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict: class plus short reason code.
///
/// Renders as `PASS(DOM)` / `FAIL(L4E5)` / `NO-EVAL(DOM1)`. The empty code
/// renders the bare class and is reserved for the pipeline's aggregate
/// success — individual judges always carry a code, including on PASS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Evaluability class.
    pub class: VerdictClass,

    /// Short reason code, empty only for the aggregate clean pass.
    pub code: String,
}

impl Verdict {
    /// A passing verdict with a code.
    pub fn pass(code: impl Into<String>) -> Self {
        Self {
            class: VerdictClass::Pass,
            code: code.into(),
        }
    }

    /// A failing verdict with a code.
    pub fn fail(code: impl Into<String>) -> Self {
        Self {
            class: VerdictClass::Fail,
            code: code.into(),
        }
    }

    /// A not-evaluable verdict with a code.
    pub fn no_eval(code: impl Into<String>) -> Self {
        Self {
            class: VerdictClass::NoEval,
            code: code.into(),
        }
    }

    /// The bare aggregate PASS (no code).
    pub fn clean_pass() -> Self {
        Self {
            class: VerdictClass::Pass,
            code: String::new(),
        }
    }

    /// Whether this verdict is a pass (with or without a code).
    pub fn is_pass(&self) -> bool {
        self.class == VerdictClass::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.class)
        } else {
            write!(f, "{}({})", self.class, self.code)
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(Verdict::pass("DOM").to_string(), "PASS(DOM)");
        assert_eq!(Verdict::fail("L4E5").to_string(), "FAIL(L4E5)");
        assert_eq!(Verdict::no_eval("DOM1").to_string(), "NO-EVAL(DOM1)");
        assert_eq!(Verdict::clean_pass().to_string(), "PASS");
    }

    #[test]
    fn test_prefix_classification() {
        assert_eq!(VerdictClass::of("PASS"), Some(VerdictClass::Pass));
        assert_eq!(VerdictClass::of("PASS(UV)"), Some(VerdictClass::Pass));
        assert_eq!(VerdictClass::of("FAIL(L4C3)"), Some(VerdictClass::Fail));
        assert_eq!(VerdictClass::of("NO-EVAL(UV1)"), Some(VerdictClass::NoEval));
        assert_eq!(VerdictClass::of("UNKNOWN"), None);
        assert_eq!(VerdictClass::of(""), None);
    }

    #[test]
    fn test_serializes_as_rendered_string() {
        let json = serde_json::to_string(&Verdict::no_eval("L4C6")).unwrap();
        assert_eq!(json, "\"NO-EVAL(L4C6)\"");
        let json = serde_json::to_string(&Verdict::clean_pass()).unwrap();
        assert_eq!(json, "\"PASS\"");
    }
}

//! Profile module - named judge-set configurations

/// Evaluation profile selecting which optional judges run.
///
/// Profiles are always passed explicitly through the pipeline call — never
/// held as ambient state — so batch evaluation across profiles is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Core judge set (domain, uv-guard, trace).
    Core,

    /// Core set plus the nuclear-domain lock package.
    Nuclear,
}

impl Profile {
    /// Get the profile name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Core => "core",
            Profile::Nuclear => "nuclear",
        }
    }

    /// Parse a profile from a string (internal use).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "core" => Some(Profile::Core),
            "nuclear" => Some(Profile::Nuclear),
            _ => None,
        }
    }

    /// Whether this profile activates the nuclear-domain judge.
    pub fn includes_nuclear(&self) -> bool {
        matches!(self, Profile::Nuclear)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Core
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid profile: {}", s))
    }
}

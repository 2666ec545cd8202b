use std::fmt;
use std::str::FromStr;

use crate::error::TmxError;

/// A TMX format version, always rendered as `<major>.<minor>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TmxVersion {
    major: String,
    minor: String,
}

impl TmxVersion {
    /// Returns `true` if documents of this version can be read back.
    pub fn is_supported(&self) -> bool {
        self.to_string() == super::SUPPORTED_VERSION
    }
}

impl Default for TmxVersion {
    fn default() -> Self {
        Self {
            major: "1".to_string(),
            minor: "4".to_string(),
        }
    }
}

impl FromStr for TmxVersion {
    type Err = TmxError;

    /// Parses `<major>[.<minor>]`; a missing fraction becomes `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (major, minor) = trimmed.split_once('.').unwrap_or((trimmed, "0"));

        let is_number = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_number(major) || !is_number(minor) {
            return Err(TmxError::InvalidVersion(s.to_string()));
        }

        Ok(Self {
            major: major.to_string(),
            minor: minor.to_string(),
        })
    }
}

impl fmt::Display for TmxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

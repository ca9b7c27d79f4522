//! Coat length classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coat length of a breed.
///
/// Upstream records rarely state this directly; `felis-transform` infers it
/// from an explicit hairless flag or from name/description cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatType {
    Short,
    Medium,
    Long,
    Hairless,
}

impl CoatType {
    /// String form used in JSON output and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Hairless => "hairless",
        }
    }
}

impl fmt::Display for CoatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a coat type from user input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown coat type `{0}` (expected short, medium, long, or hairless)")]
pub struct ParseCoatTypeError(String);

impl FromStr for CoatType {
    type Err = ParseCoatTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "hairless" => Ok(Self::Hairless),
            _ => Err(ParseCoatTypeError(s.to_string())),
        }
    }
}

//! Posture context selector

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Activity being evaluated; selects the rule battery and tip map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureContext {
    /// Squatting exercise form
    Squat,
    /// Seated desk posture
    Desk,
}

impl PostureContext {
    /// Wire representation ("squat" / "desk")
    pub fn as_str(&self) -> &'static str {
        match self {
            PostureContext::Squat => "squat",
            PostureContext::Desk => "desk",
        }
    }

    pub fn all_variants() -> &'static [PostureContext] {
        &[PostureContext::Squat, PostureContext::Desk]
    }
}

impl FromStr for PostureContext {
    type Err = Error;

    /// Case-insensitive parse. Anything other than squat/desk is rejected
    /// instead of defaulting to desk.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(PostureContext::Squat),
            "desk" => Ok(PostureContext::Desk),
            _ => Err(Error::InvalidContext(format!(
                "'{}' (expected 'squat' or 'desk')",
                s
            ))),
        }
    }
}

impl std::fmt::Display for PostureContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

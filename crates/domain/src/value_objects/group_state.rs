//! Lifecycle state of a study group

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Where a study group is in its lifecycle.
///
/// The enum carries no transition logic; the `StudyGroup` aggregate decides
/// which moves are legal (`Recruiting -> InProgress -> Ended`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupState {
    /// Accepting new members
    Recruiting,
    /// Study sessions are running; attendance can be recorded
    InProgress,
    /// Terminal
    Ended,
}

impl GroupState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiting => "RECRUITING",
            Self::InProgress => "IN_PROGRESS",
            Self::Ended => "ENDED",
        }
    }
}

impl fmt::Display for GroupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RECRUITING" => Ok(Self::Recruiting),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "ENDED" => Ok(Self::Ended),
            _ => Err(DomainError::parse(format!("Unknown group state: {}", s))),
        }
    }
}

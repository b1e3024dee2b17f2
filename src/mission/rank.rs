//! Crew ranks.

use crate::validation::ClosedSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank held by a crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Trainee.
    Cadet,
    /// Officer.
    Officer,
    /// Lieutenant.
    Lieutenant,
    /// Captain; holds command.
    Captain,
    /// Commander; holds command.
    Commander,
}

impl Rank {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cadet => "cadet",
            Self::Officer => "officer",
            Self::Lieutenant => "lieutenant",
            Self::Captain => "captain",
            Self::Commander => "commander",
        }
    }

    /// Returns `true` for ranks that can lead a mission.
    #[must_use]
    pub const fn holds_command(self) -> bool {
        matches!(self, Self::Captain | Self::Commander)
    }
}

impl ClosedSet for Rank {
    const ALL: &'static [Self] = &[
        Self::Cadet,
        Self::Officer,
        Self::Lieutenant,
        Self::Captain,
        Self::Commander,
    ];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Means by which a contact was made.

use crate::validation::ClosedSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel through which an alien contact occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    /// Radio transmission.
    Radio,
    /// Visual sighting.
    Visual,
    /// Physical encounter.
    Physical,
    /// Telepathic communication.
    Telepathic,
}

impl ContactType {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Visual => "visual",
            Self::Physical => "physical",
            Self::Telepathic => "telepathic",
        }
    }
}

impl ClosedSet for ContactType {
    const ALL: &'static [Self] = &[Self::Radio, Self::Visual, Self::Physical, Self::Telepathic];

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

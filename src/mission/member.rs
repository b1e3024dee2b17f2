//! Crew member record and its raw draft.

use super::Rank;
use crate::validation::{self, ValidationResult, constraints};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated input for a [`CrewMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMemberDraft {
    /// Member identifier, 3 to 10 characters.
    pub member_id: String,
    /// Full name, 2 to 50 characters.
    pub name: String,
    /// Rank name (`cadet`, `officer`, `lieutenant`, `captain`, `commander`).
    pub rank: String,
    /// Age in years, 18 to 80.
    pub age: i128,
    /// Area of expertise, 3 to 30 characters.
    pub specialization: String,
    /// Years of experience, 0 to 50.
    pub years_experience: i128,
    /// Whether the member is on active duty.
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

const fn active_by_default() -> bool {
    true
}

impl CrewMemberDraft {
    /// Creates an active crew member draft.
    #[must_use]
    pub fn new(
        member_id: impl Into<String>,
        name: impl Into<String>,
        rank: impl Into<String>,
        age: i128,
        specialization: impl Into<String>,
        years_experience: i128,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            rank: rank.into(),
            age,
            specialization: specialization.into(),
            years_experience,
            is_active: active_by_default(),
        }
    }

    /// Sets the active-duty flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// A validated crew member, owned by its mission.
///
/// Read back a serialised member through [`CrewMember::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewMember {
    member_id: String,
    name: String,
    rank: Rank,
    age: u8,
    specialization: String,
    years_experience: u8,
    is_active: bool,
}

impl CrewMember {
    /// Validates a draft and builds the crew member.
    ///
    /// Crew members have no cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::FieldConstraintViolation`] for
    /// the first field, in declaration order, that is out of bounds.
    pub fn new(draft: CrewMemberDraft) -> ValidationResult<Self> {
        Ok(Self {
            member_id: constraints::length("member_id", draft.member_id, 3..=10)?,
            name: constraints::length("name", draft.name, 2..=50)?,
            rank: constraints::one_of("rank", &draft.rank)?,
            age: constraints::int_range("age", draft.age, 18..=80)?,
            specialization: constraints::length("specialization", draft.specialization, 3..=30)?,
            years_experience: constraints::int_range(
                "years_experience",
                draft.years_experience,
                0..=50,
            )?,
            is_active: draft.is_active,
        })
    }

    /// Builds a crew member from a JSON field mapping.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::MalformedInput`] when the mapping
    /// does not describe a draft, otherwise the same errors as
    /// [`CrewMember::new`].
    pub fn from_json(fields: serde_json::Value) -> ValidationResult<Self> {
        Self::new(validation::read_draft(fields)?)
    }

    /// Returns the member identifier.
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// Returns the member's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the member's age.
    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    /// Returns the member's specialization.
    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Returns the member's years of experience.
    #[must_use]
    pub const fn years_experience(&self) -> u8 {
        self.years_experience
    }

    /// Returns whether the member is on active duty.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

//! Space mission record and its raw draft.

use super::crew::{all_active, has_command_rank, majority_experienced};
use super::{CrewMember, CrewMemberDraft};
use crate::validation::{self, Rule, RuleSet, ValidationResult, constraints};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Missions lasting longer than this many days are long missions.
const LONG_MISSION_DAYS: u16 = 365;

const DEFAULT_STATUS: &str = "planned";

const MISSION_RULES: [Rule<SpaceMission>; 4] = [
    Rule::new("Mission ID must start with 'M'", |m: &SpaceMission| {
        m.mission_id.starts_with('M')
    }),
    Rule::new(
        "Must have at least one Commander or Captain",
        |m: &SpaceMission| has_command_rank(&m.crew),
    ),
    Rule::new(
        "Long missions (> 365 days) need 50% experienced crew (5+ years)",
        |m: &SpaceMission| {
            m.duration_days <= LONG_MISSION_DAYS || majority_experienced(&m.crew)
        },
    ),
    Rule::new("All crew members must be active", |m: &SpaceMission| {
        all_active(&m.crew)
    }),
];

/// Raw, unvalidated input for a [`SpaceMission`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDraft {
    /// Mission identifier, 5 to 15 characters, expected to start with `M`.
    pub mission_id: String,
    /// Mission name, 3 to 100 characters.
    pub mission_name: String,
    /// Destination, 3 to 50 characters.
    pub destination: String,
    /// Launch date; defaults to the clock's current time.
    #[serde(default)]
    pub launch_date: Option<DateTime<Utc>>,
    /// Planned duration in days, 1 to 3650.
    pub duration_days: i128,
    /// Crew roster in order, 1 to 12 members.
    pub crew: Vec<CrewMemberDraft>,
    /// Free-form mission status.
    #[serde(default = "planned_status")]
    pub mission_status: String,
    /// Budget in millions, 1 to 10000.
    pub budget_millions: f64,
}

fn planned_status() -> String {
    DEFAULT_STATUS.to_owned()
}

impl MissionDraft {
    /// Creates a planned mission draft launching at the clock's current time.
    #[must_use]
    pub fn new(
        mission_id: impl Into<String>,
        mission_name: impl Into<String>,
        destination: impl Into<String>,
        duration_days: i128,
        crew: Vec<CrewMemberDraft>,
        budget_millions: f64,
    ) -> Self {
        Self {
            mission_id: mission_id.into(),
            mission_name: mission_name.into(),
            destination: destination.into(),
            launch_date: None,
            duration_days,
            crew,
            mission_status: planned_status(),
            budget_millions,
        }
    }

    /// Sets an explicit launch date.
    #[must_use]
    pub const fn with_launch_date(mut self, at: DateTime<Utc>) -> Self {
        self.launch_date = Some(at);
        self
    }

    /// Sets the mission status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.mission_status = status.into();
        self
    }
}

/// A validated space mission with its crew roster.
///
/// There is no direct deserialisation: the serialised form is a valid
/// [`MissionDraft`] and is read back through [`SpaceMission::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceMission {
    mission_id: String,
    mission_name: String,
    destination: String,
    launch_date: DateTime<Utc>,
    duration_days: u16,
    crew: Vec<CrewMember>,
    mission_status: String,
    budget_millions: f64,
}

impl SpaceMission {
    /// Cross-field rules in evaluation order.
    pub const RULES: RuleSet<Self> = RuleSet::new(&MISSION_RULES);

    /// Validates a draft, including every crew member, and builds the
    /// mission.
    ///
    /// The crew size is checked before the members themselves; a member's
    /// field violation is reported as `crew[<index>].<field>`.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::FieldConstraintViolation`] for
    /// the first out-of-bounds field in declaration order, or
    /// [`validation::ValidationError::CrossFieldViolation`] for the first
    /// failing rule in [`SpaceMission::RULES`].
    pub fn new(draft: MissionDraft, clock: &impl Clock) -> ValidationResult<Self> {
        let candidate = Self {
            mission_id: constraints::length("mission_id", draft.mission_id, 5..=15)?,
            mission_name: constraints::length("mission_name", draft.mission_name, 3..=100)?,
            destination: constraints::length("destination", draft.destination, 3..=50)?,
            launch_date: draft.launch_date.unwrap_or_else(|| clock.utc()),
            duration_days: constraints::int_range("duration_days", draft.duration_days, 1..=3650)?,
            crew: validate_crew(draft.crew)?,
            mission_status: draft.mission_status,
            budget_millions: constraints::float_range(
                "budget_millions",
                draft.budget_millions,
                1.0..=10_000.0,
            )?,
        };
        Self::RULES.evaluate(&candidate)?;
        Ok(candidate)
    }

    /// Builds a mission from a JSON field mapping.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::MalformedInput`] when the mapping
    /// does not describe a draft, otherwise the same errors as
    /// [`SpaceMission::new`].
    pub fn from_json(fields: serde_json::Value, clock: &impl Clock) -> ValidationResult<Self> {
        Self::new(validation::read_draft(fields)?, clock)
    }

    /// Returns the mission identifier.
    #[must_use]
    pub fn mission_id(&self) -> &str {
        &self.mission_id
    }

    /// Returns the mission name.
    #[must_use]
    pub fn mission_name(&self) -> &str {
        &self.mission_name
    }

    /// Returns the destination.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the launch date.
    #[must_use]
    pub const fn launch_date(&self) -> DateTime<Utc> {
        self.launch_date
    }

    /// Returns the planned duration in days.
    #[must_use]
    pub const fn duration_days(&self) -> u16 {
        self.duration_days
    }

    /// Returns the crew roster in order.
    #[must_use]
    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    /// Returns the mission status.
    #[must_use]
    pub fn mission_status(&self) -> &str {
        &self.mission_status
    }

    /// Returns the budget in millions.
    #[must_use]
    pub const fn budget_millions(&self) -> f64 {
        self.budget_millions
    }
}

fn validate_crew(drafts: Vec<CrewMemberDraft>) -> ValidationResult<Vec<CrewMember>> {
    constraints::count("crew", &drafts, 1..=12)?;
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            CrewMember::new(draft).map_err(|err| err.within(&format!("crew[{index}]")))
        })
        .collect()
}

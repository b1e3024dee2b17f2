//! Space station record and its raw draft.

use crate::validation::{self, RuleSet, ValidationResult, constraints};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

const MAX_NOTES_LENGTH: usize = 200;

/// Raw, unvalidated input for a [`SpaceStation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDraft {
    /// Station identifier, 3 to 10 characters.
    pub station_id: String,
    /// Station name, 1 to 50 characters.
    pub name: String,
    /// Number of crew aboard, 1 to 20.
    pub crew_size: i128,
    /// Power level percentage, 0 to 100.
    pub power_level: f64,
    /// Oxygen level percentage, 0 to 100.
    pub oxygen_level: f64,
    /// Last maintenance time; defaults to the clock's current time.
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    /// Whether the station is operational.
    #[serde(default = "operational_by_default")]
    pub is_operational: bool,
    /// Free-form notes, at most 200 characters.
    #[serde(default)]
    pub notes: Option<String>,
}

const fn operational_by_default() -> bool {
    true
}

impl StationDraft {
    /// Creates a draft from the required fields, leaving the rest at their
    /// defaults.
    #[must_use]
    pub fn new(
        station_id: impl Into<String>,
        name: impl Into<String>,
        crew_size: i128,
        power_level: f64,
        oxygen_level: f64,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
            crew_size,
            power_level,
            oxygen_level,
            last_maintenance: None,
            is_operational: operational_by_default(),
            notes: None,
        }
    }

    /// Sets an explicit last maintenance time.
    #[must_use]
    pub const fn with_last_maintenance(mut self, at: DateTime<Utc>) -> Self {
        self.last_maintenance = Some(at);
        self
    }

    /// Sets the operational flag.
    #[must_use]
    pub const fn with_operational(mut self, is_operational: bool) -> Self {
        self.is_operational = is_operational;
        self
    }

    /// Attaches notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A validated space station record.
///
/// There is no direct deserialisation: the serialised form is a valid
/// [`StationDraft`] and is read back through [`SpaceStation::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceStation {
    station_id: String,
    name: String,
    crew_size: u8,
    power_level: f64,
    oxygen_level: f64,
    last_maintenance: DateTime<Utc>,
    is_operational: bool,
    notes: Option<String>,
}

impl SpaceStation {
    /// Station records have no cross-field rules.
    pub const RULES: RuleSet<Self> = RuleSet::empty();

    /// Validates a draft and builds the station.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::FieldConstraintViolation`] for
    /// the first field, in declaration order, that is out of bounds.
    pub fn new(draft: StationDraft, clock: &impl Clock) -> ValidationResult<Self> {
        let candidate = Self {
            station_id: constraints::length("station_id", draft.station_id, 3..=10)?,
            name: constraints::length("name", draft.name, 1..=50)?,
            crew_size: constraints::int_range("crew_size", draft.crew_size, 1..=20)?,
            power_level: constraints::float_range("power_level", draft.power_level, 0.0..=100.0)?,
            oxygen_level: constraints::float_range(
                "oxygen_level",
                draft.oxygen_level,
                0.0..=100.0,
            )?,
            last_maintenance: draft.last_maintenance.unwrap_or_else(|| clock.utc()),
            is_operational: draft.is_operational,
            notes: constraints::optional_length("notes", draft.notes, MAX_NOTES_LENGTH)?,
        };
        Self::RULES.evaluate(&candidate)?;
        Ok(candidate)
    }

    /// Builds a station from a JSON field mapping.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::MalformedInput`] when the mapping
    /// does not describe a draft, otherwise the same errors as
    /// [`SpaceStation::new`].
    pub fn from_json(fields: serde_json::Value, clock: &impl Clock) -> ValidationResult<Self> {
        Self::new(validation::read_draft(fields)?, clock)
    }

    /// Returns the station identifier.
    #[must_use]
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Returns the station name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the crew size.
    #[must_use]
    pub const fn crew_size(&self) -> u8 {
        self.crew_size
    }

    /// Returns the power level percentage.
    #[must_use]
    pub const fn power_level(&self) -> f64 {
        self.power_level
    }

    /// Returns the oxygen level percentage.
    #[must_use]
    pub const fn oxygen_level(&self) -> f64 {
        self.oxygen_level
    }

    /// Returns the last maintenance time.
    #[must_use]
    pub const fn last_maintenance(&self) -> DateTime<Utc> {
        self.last_maintenance
    }

    /// Returns whether the station is operational.
    #[must_use]
    pub const fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

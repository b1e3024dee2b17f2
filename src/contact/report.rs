//! Alien-contact report record and its raw draft.

use super::ContactType;
use crate::validation::{self, Rule, RuleSet, ValidationResult, constraints};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Signal strength above which a received message is required.
const STRONG_SIGNAL_THRESHOLD: f64 = 7.0;

/// Minimum witnesses for a telepathic contact.
const TELEPATHIC_MIN_WITNESSES: u8 = 3;

const CONTACT_RULES: [Rule<AlienContact>; 4] = [
    Rule::new("Contact ID must start with 'AC' (Alien Contact)", |c: &AlienContact| {
        c.contact_id.starts_with("AC")
    }),
    Rule::new("physical contact reports must be verified", |c: &AlienContact| {
        c.contact_type != ContactType::Physical || c.is_verified
    }),
    Rule::new(
        "telepathic contact requires at least 3 witnesses",
        |c: &AlienContact| {
            c.contact_type != ContactType::Telepathic
                || c.witness_count >= TELEPATHIC_MIN_WITNESSES
        },
    ),
    Rule::new(
        "Strong signals (> 7.0) should include received messages",
        |c: &AlienContact| {
            c.signal_strength <= STRONG_SIGNAL_THRESHOLD || c.message_received.is_some()
        },
    ),
];

/// Raw, unvalidated input for an [`AlienContact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Report identifier, 5 to 15 characters, expected to start with `AC`.
    pub contact_id: String,
    /// Time of contact; defaults to the clock's current time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Where the contact happened, 3 to 100 characters.
    pub location: String,
    /// Contact channel name (`radio`, `visual`, `physical`, `telepathic`).
    pub contact_type: String,
    /// Signal strength, 0 to 10.
    pub signal_strength: f64,
    /// Contact duration in minutes, 1 to 1440.
    pub duration_minutes: i128,
    /// Number of witnesses, 1 to 100.
    pub witness_count: i128,
    /// Message received during the contact, if any.
    #[serde(default)]
    pub message_received: Option<String>,
    /// Whether the report has been verified.
    #[serde(default)]
    pub is_verified: bool,
}

impl ContactDraft {
    /// Creates a draft from the required fields, leaving the rest at their
    /// defaults.
    #[must_use]
    pub fn new(
        contact_id: impl Into<String>,
        location: impl Into<String>,
        contact_type: impl Into<String>,
        signal_strength: f64,
        duration_minutes: i128,
        witness_count: i128,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            timestamp: None,
            location: location.into(),
            contact_type: contact_type.into(),
            signal_strength,
            duration_minutes,
            witness_count,
            message_received: None,
            is_verified: false,
        }
    }

    /// Sets an explicit contact time.
    #[must_use]
    pub const fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Attaches the received message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message_received = Some(message.into());
        self
    }

    /// Sets the verification flag.
    #[must_use]
    pub const fn with_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }
}

/// A validated alien-contact report.
///
/// There is no direct deserialisation: the serialised form is a valid
/// [`ContactDraft`] and is read back through [`AlienContact::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlienContact {
    contact_id: String,
    timestamp: DateTime<Utc>,
    location: String,
    contact_type: ContactType,
    signal_strength: f64,
    duration_minutes: u16,
    witness_count: u8,
    message_received: Option<String>,
    is_verified: bool,
}

impl AlienContact {
    /// Cross-field rules in evaluation order.
    pub const RULES: RuleSet<Self> = RuleSet::new(&CONTACT_RULES);

    /// Validates a draft and builds the report.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::FieldConstraintViolation`] for
    /// the first out-of-bounds field in declaration order, or
    /// [`validation::ValidationError::CrossFieldViolation`] for the first
    /// failing rule in [`AlienContact::RULES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mockable::DefaultClock;
    /// use space_records::contact::{AlienContact, ContactDraft};
    ///
    /// let draft = ContactDraft::new("AC2471PEP", "Area 42, Lyon", "telepathic", 4.2, 42, 1);
    /// let err = AlienContact::new(draft, &DefaultClock).expect_err("too few witnesses");
    /// assert_eq!(err.message(), "telepathic contact requires at least 3 witnesses");
    /// ```
    pub fn new(draft: ContactDraft, clock: &impl Clock) -> ValidationResult<Self> {
        let candidate = Self {
            contact_id: constraints::length("contact_id", draft.contact_id, 5..=15)?,
            timestamp: draft.timestamp.unwrap_or_else(|| clock.utc()),
            location: constraints::length("location", draft.location, 3..=100)?,
            contact_type: constraints::one_of("contact_type", &draft.contact_type)?,
            signal_strength: constraints::float_range(
                "signal_strength",
                draft.signal_strength,
                0.0..=10.0,
            )?,
            duration_minutes: constraints::int_range(
                "duration_minutes",
                draft.duration_minutes,
                1..=1440,
            )?,
            witness_count: constraints::int_range("witness_count", draft.witness_count, 1..=100)?,
            message_received: draft.message_received,
            is_verified: draft.is_verified,
        };
        Self::RULES.evaluate(&candidate)?;
        Ok(candidate)
    }

    /// Builds a report from a JSON field mapping.
    ///
    /// # Errors
    ///
    /// Returns [`validation::ValidationError::MalformedInput`] when the mapping
    /// does not describe a draft, otherwise the same errors as
    /// [`AlienContact::new`].
    pub fn from_json(fields: serde_json::Value, clock: &impl Clock) -> ValidationResult<Self> {
        Self::new(validation::read_draft(fields)?, clock)
    }

    /// Returns the report identifier.
    #[must_use]
    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    /// Returns the time of contact.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the contact location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the contact channel.
    #[must_use]
    pub const fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    /// Returns the signal strength.
    #[must_use]
    pub const fn signal_strength(&self) -> f64 {
        self.signal_strength
    }

    /// Returns the contact duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.duration_minutes
    }

    /// Returns the number of witnesses.
    #[must_use]
    pub const fn witness_count(&self) -> u8 {
        self.witness_count
    }

    /// Returns the received message, if any.
    #[must_use]
    pub fn message_received(&self) -> Option<&str> {
        self.message_received.as_deref()
    }

    /// Returns whether the report is verified.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.is_verified
    }
}

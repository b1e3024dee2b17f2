//! Integration tests for building records from JSON and summarising them.
//!
//! These tests drive the public API end to end: a raw JSON mapping is read
//! into a draft, validated into a record, and rendered as summary lines.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use space_records::contact::AlienContact;
use space_records::display::{contact_lines, mission_lines, station_lines};
use space_records::mission::SpaceMission;
use space_records::station::SpaceStation;
use space_records::validation::ValidationError;

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn mission_payload() -> Value {
    json!({
        "mission_id": "M2024_MARS",
        "mission_name": "Mars Colony Establishment",
        "destination": "Mars",
        "launch_date": "2030-05-01T12:00:00Z",
        "duration_days": 900,
        "budget_millions": 2500.0,
        "mission_status": "approved",
        "crew": [
            {
                "member_id": "Person005",
                "name": "Sarah Connor",
                "rank": "commander",
                "age": 37,
                "specialization": "Mission Command",
                "years_experience": 5
            },
            {
                "member_id": "Person006",
                "name": "John Smith",
                "rank": "lieutenant",
                "age": 63,
                "specialization": "Navigation",
                "years_experience": 17
            },
            {
                "member_id": "Person007",
                "name": "Alice Johnson",
                "rank": "officer",
                "age": 58,
                "specialization": "Engineering",
                "years_experience": 20
            }
        ]
    })
}

#[rstest]
fn station_payload_renders_summary(clock: DefaultClock) {
    let station = SpaceStation::from_json(
        json!({
            "station_id": "ISS001",
            "name": "International Space Station",
            "crew_size": 6,
            "power_level": 85.5,
            "oxygen_level": 92.3,
            "is_operational": false,
            "notes": "Solar array inspection pending"
        }),
        &clock,
    )
    .expect("valid station");

    let lines = station_lines(&station).expect("rendered");

    assert_eq!(station.notes(), Some("Solar array inspection pending"));
    assert_eq!(lines.last().map(String::as_str), Some("Status: Non Operational"));
}

#[rstest]
fn contact_payload_with_explicit_timestamp_is_preserved(clock: DefaultClock) {
    let contact = AlienContact::from_json(
        json!({
            "contact_id": "AC2024001",
            "timestamp": "2024-07-02T23:15:00Z",
            "location": "Area 51, Nevada",
            "contact_type": "visual",
            "signal_strength": 6.5,
            "duration_minutes": 121,
            "witness_count": 12,
            "is_verified": true
        }),
        &clock,
    )
    .expect("valid contact");

    assert_eq!(contact.timestamp().to_rfc3339(), "2024-07-02T23:15:00+00:00");
    assert!(contact.is_verified());
    let lines = contact_lines(&contact).expect("rendered");
    assert!(lines.contains(&"Duration: 2 hours 1 minute".to_owned()));
    assert!(lines.contains(&"Signal: 6.5/10".to_owned()));
}

#[rstest]
fn mission_payload_renders_crew_roster(clock: DefaultClock, mission_payload: Value) {
    let mission = SpaceMission::from_json(mission_payload, &clock).expect("valid mission");

    assert_eq!(mission.mission_status(), "approved");
    assert_eq!(mission.launch_date().to_rfc3339(), "2030-05-01T12:00:00+00:00");
    let lines = mission_lines(&mission).expect("rendered");
    assert_eq!(
        lines.get(6..),
        Some(
            &[
                "Crew members:".to_owned(),
                "- Sarah Connor (commander) - Mission Command".to_owned(),
                "- John Smith (lieutenant) - Navigation".to_owned(),
                "- Alice Johnson (officer) - Engineering".to_owned(),
            ][..]
        )
    );
}

#[rstest]
fn mission_payload_with_invalid_member_names_the_member(
    clock: DefaultClock,
    mut mission_payload: Value,
) {
    if let Some(rank) = mission_payload.pointer_mut("/crew/2/rank") {
        *rank = json!("admiral");
    }

    let err = SpaceMission::from_json(mission_payload, &clock).expect_err("unknown rank");

    assert_eq!(err.field_name(), Some("crew[2].rank"));
}

#[rstest]
fn mission_payload_with_non_numeric_age_is_malformed(
    clock: DefaultClock,
    mut mission_payload: Value,
) {
    if let Some(age) = mission_payload.pointer_mut("/crew/0/age") {
        *age = json!("thirty-seven");
    }

    let err = SpaceMission::from_json(mission_payload, &clock).expect_err("wrong type");

    assert!(matches!(err, ValidationError::MalformedInput { .. }));
}

#[rstest]
fn unknown_fields_are_ignored(clock: DefaultClock, mut mission_payload: Value) {
    if let Some(fields) = mission_payload.as_object_mut() {
        fields.insert("flight_director".to_owned(), json!("Gene Kranz"));
    }

    assert!(SpaceMission::from_json(mission_payload, &clock).is_ok());
}

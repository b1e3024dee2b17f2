//! Unit tests for record summaries.

use super::{contact_lines, format_duration, mission_lines, station_lines};
use crate::contact::{AlienContact, ContactDraft};
use crate::mission::{CrewMemberDraft, MissionDraft, SpaceMission};
use crate::station::{SpaceStation, StationDraft};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn crew_member(name: &str, rank: &str, specialization: &str) -> CrewMemberDraft {
    CrewMemberDraft::new("P001", name, rank, 40, specialization, 10)
}

#[rstest]
#[case::zero(0, "0 minutes")]
#[case::one_minute(1, "1 minute")]
#[case::minutes_only(45, "45 minutes")]
#[case::just_under_an_hour(59, "59 minutes")]
#[case::one_hour(60, "1 hour")]
#[case::hour_and_a_minute(61, "1 hour 1 minute")]
#[case::hour_and_minutes(90, "1 hour 30 minutes")]
#[case::two_hours(120, "2 hours")]
#[case::hours_and_a_minute(121, "2 hours 1 minute")]
#[case::full_day(1440, "24 hours")]
fn duration_phrase_uses_singular_only_for_one(#[case] minutes: u32, #[case] expected: &str) {
    assert_eq!(format_duration(minutes), expected);
}

#[rstest]
fn operational_station_summary(clock: DefaultClock) {
    let station = SpaceStation::new(
        StationDraft::new("ISS001", "International Space Station", 6, 85.5, 92.3),
        &clock,
    )
    .expect("valid station");

    let lines = station_lines(&station).expect("rendered");

    assert_eq!(
        lines,
        vec![
            "ID: ISS001",
            "Name: International Space Station",
            "Crew: 6",
            "Power: 85.5",
            "Oxygen: 92.3",
            "Status: Operational",
        ]
    );
}

#[rstest]
fn grounded_station_reports_non_operational(clock: DefaultClock) {
    let station = SpaceStation::new(
        StationDraft::new("TGU01", "Tiangong", 3, 100.0, 40.0).with_operational(false),
        &clock,
    )
    .expect("valid station");

    let lines = station_lines(&station).expect("rendered");

    assert_eq!(lines.get(3).map(String::as_str), Some("Power: 100.0"));
    assert_eq!(lines.last().map(String::as_str), Some("Status: Non Operational"));
}

#[rstest]
fn contact_summary_includes_received_message(clock: DefaultClock) {
    let contact = AlienContact::new(
        ContactDraft::new("AC2024001", "Area 51, Nevada", "radio", 8.5, 45, 5)
            .with_message("Greetings from Zeta Reticuli"),
        &clock,
    )
    .expect("valid contact");

    let lines = contact_lines(&contact).expect("rendered");

    assert_eq!(
        lines,
        vec![
            "ID: AC2024001",
            "Type: radio",
            "Location: Area 51, Nevada",
            "Signal: 8.5/10",
            "Duration: 45 minutes",
            "Witness: 5",
            "Message: 'Greetings from Zeta Reticuli'",
        ]
    );
}

#[rstest]
fn contact_summary_omits_missing_message(clock: DefaultClock) {
    let contact = AlienContact::new(
        ContactDraft::new("AC2024002", "Roswell", "visual", 3.0, 90, 2),
        &clock,
    )
    .expect("valid contact");

    let lines = contact_lines(&contact).expect("rendered");

    assert_eq!(lines.len(), 6);
    assert_eq!(lines.get(3).map(String::as_str), Some("Signal: 3.0/10"));
    assert_eq!(lines.get(4).map(String::as_str), Some("Duration: 1 hour 30 minutes"));
    assert!(lines.iter().all(|line| !line.starts_with("Message")));
}

#[rstest]
fn mission_summary_lists_crew_in_roster_order(clock: DefaultClock) {
    let mission = SpaceMission::new(
        MissionDraft::new(
            "M2024_MARS",
            "Mars Colony Establishment",
            "Mars",
            900,
            vec![
                crew_member("Sarah Connor", "commander", "Mission Command"),
                crew_member("John Smith", "lieutenant", "Navigation"),
            ],
            2500.0,
        ),
        &clock,
    )
    .expect("valid mission");

    let lines = mission_lines(&mission).expect("rendered");

    assert_eq!(
        lines,
        vec![
            "Mission: Mars Colony Establishment",
            "ID: M2024_MARS",
            "Destination: Mars",
            "Duration: 900 days",
            "Budget: $2500.00M",
            "Crew size: 2",
            "Crew members:",
            "- Sarah Connor (commander) - Mission Command",
            "- John Smith (lieutenant) - Navigation",
        ]
    );
}

#[rstest]
fn one_day_mission_uses_singular(clock: DefaultClock) {
    let mission = SpaceMission::new(
        MissionDraft::new(
            "M_HOP",
            "Orbital Hop",
            "Low Earth Orbit",
            1,
            vec![crew_member("Ada Vance", "captain", "Piloting")],
            1.25,
        ),
        &clock,
    )
    .expect("valid mission");

    let lines = mission_lines(&mission).expect("rendered");

    assert!(lines.contains(&"Duration: 1 day".to_owned()));
    assert!(lines.contains(&"Budget: $1.25M".to_owned()));
}

#[rstest]
fn multi_line_field_stays_on_its_own_line(clock: DefaultClock) {
    let mission = SpaceMission::new(
        MissionDraft::new(
            "M2024_MARS",
            "Mars\n\nColony",
            "Mars",
            900,
            vec![
                crew_member("Sarah Connor", "commander", "Mission Command"),
                crew_member("John Smith", "lieutenant", "Navigation"),
            ],
            2500.0,
        ),
        &clock,
    )
    .expect("valid mission");

    let lines = mission_lines(&mission).expect("rendered");

    assert_eq!(lines.len(), 9);
    assert_eq!(lines.first().map(String::as_str), Some("Mission: Mars\n\nColony"));
    assert_eq!(lines.get(1).map(String::as_str), Some("ID: M2024_MARS"));
}

#[rstest]
fn empty_message_still_gets_its_line(clock: DefaultClock) {
    let contact = AlienContact::new(
        ContactDraft::new("AC2024003", "Roswell", "radio", 9.0, 5, 1).with_message(""),
        &clock,
    )
    .expect("valid contact");

    let lines = contact_lines(&contact).expect("rendered");

    assert_eq!(lines.last().map(String::as_str), Some("Message: ''"));
}

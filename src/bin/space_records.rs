//! Runs the record validation exercises and prints their outcomes.
//!
//! Usage:
//!
//! ```text
//! space_records [station|contact|mission|all] [payload.json]
//! ```
//!
//! With no arguments every exercise runs against its built-in pair of
//! inputs: one record that validates and one that is expected to fail. When
//! a single exercise is named, an optional JSON payload may be supplied in
//! place of the built-in inputs. A representative mission payload is:
//!
//! ```json
//! {
//!   "mission_id": "M2024_MARS",
//!   "mission_name": "Mars Colony Establishment",
//!   "destination": "Mars",
//!   "duration_days": 900,
//!   "budget_millions": 2500.0,
//!   "crew": [
//!     {
//!       "member_id": "Person005",
//!       "name": "Sarah Connor",
//!       "rank": "commander",
//!       "age": 37,
//!       "specialization": "Mission Command",
//!       "years_experience": 5
//!     }
//!   ]
//! }
//! ```
//!
//! Outcomes go to stdout. Diagnostics are emitted through `tracing` on
//! stderr and filtered by `RUST_LOG` (default `info`).

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::{Clock, DefaultClock};
use space_records::contact::{AlienContact, ContactDraft};
use space_records::display::{self, DisplayError};
use space_records::mission::{CrewMemberDraft, MissionDraft, SpaceMission};
use space_records::station::{SpaceStation, StationDraft};
use space_records::validation::{ValidationError, ValidationResult};
use std::env;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const SEPARATOR: &str = "========================================";

/// Errors that can occur while running the exercises.
#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read payload: {0}")]
    PayloadRead(#[source] io::Error),
    #[error("failed to parse payload: {0}")]
    PayloadParse(#[source] serde_json::Error),
    #[error("failed to render record: {0}")]
    Render(#[from] DisplayError),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exercise {
    Station,
    Contact,
    Mission,
}

impl Exercise {
    const ALL: [Self; 3] = [Self::Station, Self::Contact, Self::Mission];

    fn parse(arg: &str) -> Result<Self, DemoError> {
        match arg {
            "station" => Ok(Self::Station),
            "contact" => Ok(Self::Contact),
            "mission" => Ok(Self::Mission),
            other => Err(DemoError::InvalidArgs(format!(
                "unknown exercise '{other}'; expected station, contact, mission, or all"
            ))),
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Station => "station",
            Self::Contact => "contact",
            Self::Mission => "mission",
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Station => "Space Station Data Validation",
            Self::Contact => "Alien Contact Log Validation",
            Self::Mission => "Space Mission Crew Validation",
        }
    }

    const fn accepted_label(self) -> &'static str {
        match self {
            Self::Station => "Valid station created:",
            Self::Contact => "Valid contact report:",
            Self::Mission => "Valid mission created:",
        }
    }
}

/// Which exercises to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Single(Exercise),
    All,
}

impl Selection {
    fn exercises(&self) -> &[Exercise] {
        match self {
            Self::Single(exercise) => std::slice::from_ref(exercise),
            Self::All => &Exercise::ALL,
        }
    }
}

/// Runtime settings parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DemoConfig {
    /// Run the built-in inputs for the selected exercises.
    Builtin(Selection),
    /// Validate a JSON payload as a record of one exercise.
    Payload {
        exercise: Exercise,
        path: Utf8PathBuf,
    },
}

/// The result of validating one input.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Accepted(Vec<String>),
    Rejected(ValidationError),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = parse_args(collect_args()?)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &DefaultClock, &mut out)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn collect_args() -> Result<Vec<String>, DemoError> {
    env::args_os()
        .skip(1)
        .map(|arg_os| {
            arg_os
                .into_string()
                .map_err(|_| DemoError::InvalidArgs("argument is not valid UTF-8".into()))
        })
        .collect()
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<DemoConfig, DemoError> {
    let mut args = args.into_iter();
    let selection = match args.next().as_deref() {
        None | Some("all") => Selection::All,
        Some(arg) => Selection::Single(Exercise::parse(arg)?),
    };
    let payload = args.next().map(Utf8PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(DemoError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    match (selection, payload) {
        (_, None) => Ok(DemoConfig::Builtin(selection)),
        (Selection::Single(exercise), Some(path)) => Ok(DemoConfig::Payload { exercise, path }),
        (Selection::All, Some(_)) => Err(DemoError::InvalidArgs(
            "a payload requires a single exercise: station, contact, or mission".into(),
        )),
    }
}

fn run(config: &DemoConfig, clock: &impl Clock, out: &mut impl Write) -> Result<(), DemoError> {
    match config {
        DemoConfig::Builtin(selection) => {
            for (position, &exercise) in selection.exercises().iter().enumerate() {
                if position > 0 {
                    writeln!(out).map_err(DemoError::Output)?;
                }
                info!(exercise = exercise.as_str(), "running built-in inputs");
                let outcomes = builtin_outcomes(exercise, clock)?;
                write_report(out, exercise, &outcomes, "Expected validation error:")?;
            }
            Ok(())
        }
        DemoConfig::Payload { exercise, path } => {
            info!(exercise = exercise.as_str(), %path, "validating payload");
            let outcomes = [payload_outcome(*exercise, path, clock)?];
            write_report(out, *exercise, &outcomes, "Validation error:")
        }
    }
}

fn write_report(
    out: &mut impl Write,
    exercise: Exercise,
    outcomes: &[Outcome],
    rejected_label: &str,
) -> Result<(), DemoError> {
    writeln!(out, "{}", exercise.title()).map_err(DemoError::Output)?;
    for (position, outcome) in outcomes.iter().enumerate() {
        if position > 0 {
            writeln!(out).map_err(DemoError::Output)?;
        }
        writeln!(out, "{SEPARATOR}").map_err(DemoError::Output)?;
        match outcome {
            Outcome::Accepted(lines) => {
                writeln!(out, "{}", exercise.accepted_label()).map_err(DemoError::Output)?;
                for line in lines {
                    writeln!(out, "{line}").map_err(DemoError::Output)?;
                }
            }
            Outcome::Rejected(error) => {
                writeln!(out, "{rejected_label}").map_err(DemoError::Output)?;
                writeln!(out, "{}", error.message()).map_err(DemoError::Output)?;
            }
        }
    }
    Ok(())
}

fn outcome<R>(
    result: ValidationResult<R>,
    render: fn(&R) -> Result<Vec<String>, DisplayError>,
) -> Result<Outcome, DemoError> {
    match result {
        Ok(record) => Ok(Outcome::Accepted(render(&record)?)),
        Err(error) => {
            warn!(%error, "input rejected");
            Ok(Outcome::Rejected(error))
        }
    }
}

fn builtin_outcomes(exercise: Exercise, clock: &impl Clock) -> Result<Vec<Outcome>, DemoError> {
    match exercise {
        Exercise::Station => Ok(vec![
            outcome(
                SpaceStation::new(
                    StationDraft::new("ISS001", "International Space Station", 6, 85.5, 92.3),
                    clock,
                ),
                display::station_lines,
            )?,
            outcome(
                SpaceStation::new(
                    StationDraft::new("100SSI", "Station Space International", 25, 85.5, 92.3)
                        .with_operational(false),
                    clock,
                ),
                display::station_lines,
            )?,
        ]),
        Exercise::Contact => Ok(vec![
            outcome(
                AlienContact::new(
                    ContactDraft::new("AC_2024_001", "Area 51, Nevada", "radio", 8.5, 45, 5)
                        .with_message("Greetings from Zeta Reticuli"),
                    clock,
                ),
                display::contact_lines,
            )?,
            outcome(
                AlienContact::new(
                    ContactDraft::new("AC_2471_PEP", "Area 42, Lyon", "telepathic", 4.2, 42, 1)
                        .with_message("Greetings from CRAPPO the First"),
                    clock,
                ),
                display::contact_lines,
            )?,
        ]),
        Exercise::Mission => Ok(vec![
            outcome(
                SpaceMission::new(mars_mission("M2024_MARS", "commander", 20), clock),
                display::mission_lines,
            )?,
            outcome(
                SpaceMission::new(mars_mission("M2026_MARS", "cadet", 21), clock),
                display::mission_lines,
            )?,
        ]),
    }
}

fn mars_mission(mission_id: &str, leader_rank: &str, engineer_years: i128) -> MissionDraft {
    let crew = vec![
        CrewMemberDraft::new("Person005", "Sarah Connor", leader_rank, 37, "Mission Command", 5),
        CrewMemberDraft::new("Person006", "John Smith", "lieutenant", 63, "Navigation", 17),
        CrewMemberDraft::new(
            "Person007",
            "Alice Johnson",
            "officer",
            58,
            "Engineering",
            engineer_years,
        ),
    ];
    MissionDraft::new(
        mission_id,
        "Mars Colony Establishment",
        "Mars",
        900,
        crew,
        2500.0,
    )
}

fn payload_outcome(
    exercise: Exercise,
    path: &Utf8Path,
    clock: &impl Clock,
) -> Result<Outcome, DemoError> {
    let contents = read_payload(path)?;
    let fields: serde_json::Value =
        serde_json::from_str(&contents).map_err(DemoError::PayloadParse)?;
    match exercise {
        Exercise::Station => outcome(SpaceStation::from_json(fields, clock), display::station_lines),
        Exercise::Contact => outcome(AlienContact::from_json(fields, clock), display::contact_lines),
        Exercise::Mission => outcome(SpaceMission::from_json(fields, clock), display::mission_lines),
    }
}

fn read_payload(path: &Utf8Path) -> Result<String, DemoError> {
    let file_name = path.file_name().ok_or_else(|| {
        DemoError::InvalidArgs(format!("payload path '{path}' does not name a file"))
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(DemoError::PayloadRead)?;
    dir.read_to_string(file_name).map_err(DemoError::PayloadRead)
}

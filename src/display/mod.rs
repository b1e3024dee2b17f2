//! Human-readable summaries of validated records.
//!
//! Each summary line is rendered from its own `minijinja` template and the
//! lines are returned in order, leaving the caller to decide where they go.

mod duration;

pub use duration::format_duration;

use crate::contact::AlienContact;
use crate::mission::SpaceMission;
use crate::station::SpaceStation;
use minijinja::Environment;
use serde_json::{Map, Value, json};
use thiserror::Error;

const STATION_LINES: [&str; 6] = [
    "ID: {{ station_id }}",
    "Name: {{ name }}",
    "Crew: {{ crew_size }}",
    "Power: {{ power_level }}",
    "Oxygen: {{ oxygen_level }}",
    "Status: {% if not is_operational %}Non {% endif %}Operational",
];

const CONTACT_LINES: [&str; 6] = [
    "ID: {{ contact_id }}",
    "Type: {{ contact_type }}",
    "Location: {{ location }}",
    "Signal: {{ signal_strength }}/10",
    "Duration: {{ duration }}",
    "Witness: {{ witness_count }}",
];

const CONTACT_MESSAGE_LINE: &str = "Message: '{{ message }}'";

const MISSION_LINES: [&str; 7] = [
    "Mission: {{ mission_name }}",
    "ID: {{ mission_id }}",
    "Destination: {{ destination }}",
    "Duration: {{ duration_days }} day{% if duration_days > 1 %}s{% endif %}",
    "Budget: ${{ budget_millions }}M",
    "Crew size: {{ crew_size }}",
    "Crew members:",
];

const CREW_MEMBER_LINE: &str = "- {{ name }} ({{ rank }}) - {{ specialization }}";

/// Errors raised while rendering a record summary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayError {
    /// The summary template failed to render.
    #[error("failed to render {record} summary: {reason}")]
    Template {
        /// Kind of record being rendered.
        record: &'static str,
        /// Renderer error description.
        reason: String,
    },
}

/// Renders the summary lines for a space station.
///
/// # Errors
///
/// Returns [`DisplayError::Template`] if the template fails to render.
pub fn station_lines(station: &SpaceStation) -> Result<Vec<String>, DisplayError> {
    let context = into_context(json!({
        "station_id": station.station_id(),
        "name": station.name(),
        "crew_size": station.crew_size(),
        "power_level": format!("{:.1}", station.power_level()),
        "oxygen_level": format!("{:.1}", station.oxygen_level()),
        "is_operational": station.is_operational(),
    }));
    render_lines("station", &STATION_LINES, &context)
}

/// Renders the summary lines for an alien-contact report.
///
/// The `Message` line only appears when a message was received.
///
/// # Errors
///
/// Returns [`DisplayError::Template`] if the template fails to render.
pub fn contact_lines(contact: &AlienContact) -> Result<Vec<String>, DisplayError> {
    let context = into_context(json!({
        "contact_id": contact.contact_id(),
        "contact_type": contact.contact_type().as_str(),
        "location": contact.location(),
        "signal_strength": format!("{:.1}", contact.signal_strength()),
        "duration": format_duration(u32::from(contact.duration_minutes())),
        "witness_count": contact.witness_count(),
        "message": contact.message_received(),
    }));
    let mut lines = render_lines("contact", &CONTACT_LINES, &context)?;
    if contact.message_received().is_some() {
        lines.push(render_line("contact", CONTACT_MESSAGE_LINE, &context)?);
    }
    Ok(lines)
}

/// Renders the summary lines for a space mission, one line per crew member
/// after the header.
///
/// # Errors
///
/// Returns [`DisplayError::Template`] if the template fails to render.
pub fn mission_lines(mission: &SpaceMission) -> Result<Vec<String>, DisplayError> {
    let context = into_context(json!({
        "mission_name": mission.mission_name(),
        "mission_id": mission.mission_id(),
        "destination": mission.destination(),
        "duration_days": mission.duration_days(),
        "budget_millions": format!("{:.2}", mission.budget_millions()),
        "crew_size": mission.crew().len(),
    }));
    let mut lines = render_lines("mission", &MISSION_LINES, &context)?;
    for member in mission.crew() {
        let member_context = into_context(json!({
            "name": member.name(),
            "rank": member.rank().as_str(),
            "specialization": member.specialization(),
        }));
        lines.push(render_line("mission", CREW_MEMBER_LINE, &member_context)?);
    }
    Ok(lines)
}

fn into_context(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Renders one line per template, so a field value never spills onto
/// another line.
fn render_lines(
    record: &'static str,
    templates: &[&str],
    context: &Map<String, Value>,
) -> Result<Vec<String>, DisplayError> {
    templates
        .iter()
        .map(|template| render_line(record, template, context))
        .collect()
}

fn render_line(
    record: &'static str,
    template: &str,
    context: &Map<String, Value>,
) -> Result<String, DisplayError> {
    Environment::new()
        .render_str(template, context)
        .map_err(|error| DisplayError::Template {
            record,
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests;

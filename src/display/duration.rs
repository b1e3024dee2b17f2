//! Duration phrases for contact summaries.

const MINUTES_PER_HOUR: u32 = 60;

/// Formats a minute count as an hours-and-minutes phrase.
///
/// Whole hours omit the minute part, and counts under an hour omit the hour
/// part. Units are singular only when their count is exactly one.
///
/// # Examples
///
/// ```
/// use space_records::display::format_duration;
///
/// assert_eq!(format_duration(45), "45 minutes");
/// assert_eq!(format_duration(60), "1 hour");
/// assert_eq!(format_duration(61), "1 hour 1 minute");
/// ```
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes.div_euclid(MINUTES_PER_HOUR);
    let remainder = minutes.rem_euclid(MINUTES_PER_HOUR);
    match (hours, remainder) {
        (0, _) => unit_phrase(remainder, "minute"),
        (_, 0) => unit_phrase(hours, "hour"),
        _ => format!(
            "{} {}",
            unit_phrase(hours, "hour"),
            unit_phrase(remainder, "minute")
        ),
    }
}

fn unit_phrase(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

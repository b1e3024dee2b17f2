//! Aggregate predicates over a crew roster.

use super::CrewMember;

/// Members with more than this many years of experience count as
/// experienced.
pub const EXPERIENCED_AFTER_YEARS: u8 = 5;

/// Returns `true` if at least one member is a commander or a captain.
#[must_use]
pub fn has_command_rank(crew: &[CrewMember]) -> bool {
    crew.iter().any(|member| member.rank().holds_command())
}

/// Returns `true` if every member is on active duty.
///
/// An empty roster is vacuously active.
#[must_use]
pub fn all_active(crew: &[CrewMember]) -> bool {
    crew.iter().all(CrewMember::is_active)
}

/// Returns `true` if at least half of the crew is experienced.
///
/// Half is taken exactly: a crew of three needs two experienced members.
#[must_use]
pub fn majority_experienced(crew: &[CrewMember]) -> bool {
    let experienced = crew
        .iter()
        .filter(|member| member.years_experience() > EXPERIENCED_AFTER_YEARS)
        .count();
    experienced.saturating_mul(2) >= crew.len()
}

//! Space missions and their crew rosters.
//!
//! A mission embeds an ordered list of [`CrewMember`] records, each validated
//! on its own before the mission's cross-field rules run. The mission rules
//! (see [`SpaceMission::RULES`]) are evaluated in this order:
//!
//! 1. The mission ID starts with `M`.
//! 2. At least one crew member is a commander or captain.
//! 3. Missions longer than 365 days have at least 50% experienced crew.
//! 4. Every crew member is active.
//!
//! The crew predicates behind rules 2 to 4 live in [`crew`].

pub mod crew;
mod member;
mod rank;
mod record;

pub use member::{CrewMember, CrewMemberDraft};
pub use rank::Rank;
pub use record::{MissionDraft, SpaceMission};

#[cfg(test)]
mod tests;

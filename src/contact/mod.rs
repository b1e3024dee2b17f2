//! Alien-contact reports.
//!
//! A report is validated field by field, then against four ordered
//! cross-field rules (see [`AlienContact::RULES`]):
//!
//! 1. The contact ID starts with `AC`.
//! 2. Physical contacts are verified.
//! 3. Telepathic contacts have at least three witnesses.
//! 4. Strong signals (above 7.0) carry a received message.

mod kind;
mod report;

pub use kind::ContactType;
pub use report::{AlienContact, ContactDraft};

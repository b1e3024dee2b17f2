//! Space station status records.
//!
//! A station record carries field constraints only; there are no cross-field
//! rules. Its `last_maintenance` timestamp defaults to the injected clock's
//! current time.

mod record;

pub use record::{SpaceStation, StationDraft};

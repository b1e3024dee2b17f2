//! Space records: validated schemas for space-domain data.
//!
//! This crate defines three independent record schemas (a space station
//! status record, an alien-contact report, and a space mission with its crew
//! roster). Each record is built from a raw *draft* in a single atomic step:
//! field constraints are checked in declaration order, then the schema's
//! ordered cross-field rules run, and the first violation wins.
//!
//! # Modules
//!
//! - [`validation`]: Field-constraint layer, cross-field rule engine and
//!   error taxonomy shared by every schema
//! - [`station`]: Space station records
//! - [`contact`]: Alien-contact reports
//! - [`mission`]: Space missions and their crew members
//! - [`display`]: Human-readable summaries of validated records
//!
//! # Example
//!
//! ```
//! use mockable::DefaultClock;
//! use space_records::contact::{AlienContact, ContactDraft};
//!
//! let clock = DefaultClock;
//! let draft = ContactDraft::new("AC2024001", "Area 51, Nevada", "radio", 8.5, 45, 5)
//!     .with_message("Greetings from Zeta Reticuli");
//! let contact = AlienContact::new(draft, &clock).expect("valid contact");
//! assert_eq!(contact.contact_id(), "AC2024001");
//! ```

pub mod contact;
pub mod display;
pub mod mission;
pub mod station;
pub mod validation;

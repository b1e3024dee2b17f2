//! Validation building blocks shared by every record schema.
//!
//! Validation happens in two layers:
//!
//! 1. **Field constraints** ([`constraints`]): each field is checked on its
//!    own against a range, length or membership bound.
//! 2. **Cross-field rules** ([`rules`]): an ordered list of predicates over
//!    the fully assembled candidate record.
//!
//! Both layers stop at the first failure, so a failed construction always
//! reports exactly one [`ValidationError`].

pub mod constraints;
mod error;
pub mod rules;

pub use constraints::{ClosedSet, Constraint};
pub use error::{ValidationError, ValidationResult};
pub use rules::{Rule, RuleSet};

use serde::de::DeserializeOwned;

/// Reads a raw JSON field mapping into a draft.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedInput`] when a required field is
/// missing or a value has the wrong JSON type.
pub fn read_draft<D: DeserializeOwned>(fields: serde_json::Value) -> ValidationResult<D> {
    serde_json::from_value(fields).map_err(|err| ValidationError::malformed(err.to_string()))
}

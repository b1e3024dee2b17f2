//! Field-constraint checks.
//!
//! Each check is a pure function that validates one field. Checks return the
//! (possibly converted) value on success or a
//! [`ValidationError::FieldConstraintViolation`] naming the field.

use super::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A declared bound on a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// String length within `[min, max]` characters.
    Length {
        /// Minimum length, inclusive.
        min: usize,
        /// Maximum length, inclusive.
        max: usize,
    },
    /// Optional string no longer than `max` characters.
    MaxLength {
        /// Maximum length, inclusive.
        max: usize,
    },
    /// Integer within `[min, max]`.
    IntRange {
        /// Lower bound, inclusive.
        min: i128,
        /// Upper bound, inclusive.
        max: i128,
    },
    /// Float within `[min, max]`.
    FloatRange {
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
    /// Value must be one of a closed set of names.
    OneOf {
        /// Accepted names.
        allowed: Vec<String>,
    },
    /// List length within `[min, max]` items.
    Count {
        /// Minimum number of items, inclusive.
        min: usize,
        /// Maximum number of items, inclusive.
        max: usize,
    },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { min, max } => {
                write!(f, "length must be between {min} and {max} characters")
            }
            Self::MaxLength { max } => write!(f, "length must be at most {max} characters"),
            Self::IntRange { min, max } => write!(f, "value must be between {min} and {max}"),
            Self::FloatRange { min, max } => write!(f, "value must be between {min} and {max}"),
            Self::OneOf { allowed } => write!(f, "value must be one of: {}", allowed.join(", ")),
            Self::Count { min, max } => write!(f, "must contain between {min} and {max} items"),
        }
    }
}

/// A closed enumeration validated by name membership.
pub trait ClosedSet: Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Returns the canonical name of this member.
    fn as_str(self) -> &'static str;
}

/// Checks that a string's length in characters lies within `bounds`.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] when the length is
/// out of range.
pub fn length(
    field: &str,
    value: String,
    bounds: RangeInclusive<usize>,
) -> ValidationResult<String> {
    let len = value.chars().count();
    if !bounds.contains(&len) {
        let (min, max) = bounds.into_inner();
        return Err(ValidationError::field(
            field,
            Constraint::Length { min, max },
            format!("'{value}'"),
        ));
    }
    Ok(value)
}

/// Checks that an optional string, when present, is at most `max`
/// characters long.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] when the value is
/// present and too long.
pub fn optional_length(
    field: &str,
    value: Option<String>,
    max: usize,
) -> ValidationResult<Option<String>> {
    match value {
        Some(text) if text.chars().count() > max => Err(ValidationError::field(
            field,
            Constraint::MaxLength { max },
            format!("'{text}'"),
        )),
        other => Ok(other),
    }
}

/// Checks that an integer lies within `bounds` and converts it into the
/// record's storage type.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] when the value is
/// out of range or does not fit `T`.
pub fn int_range<T>(
    field: &str,
    value: i128,
    bounds: RangeInclusive<i128>,
) -> ValidationResult<T>
where
    T: TryFrom<i128>,
{
    let in_range = bounds.contains(&value);
    let (min, max) = bounds.into_inner();
    let violation = || ValidationError::field(field, Constraint::IntRange { min, max }, value);
    if !in_range {
        return Err(violation());
    }
    T::try_from(value).map_err(|_| violation())
}

/// Checks that a float lies within `bounds`. `NaN` never does.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] when the value is
/// out of range.
pub fn float_range(field: &str, value: f64, bounds: RangeInclusive<f64>) -> ValidationResult<f64> {
    if !bounds.contains(&value) {
        let (min, max) = bounds.into_inner();
        return Err(ValidationError::field(
            field,
            Constraint::FloatRange { min, max },
            value,
        ));
    }
    Ok(value)
}

/// Resolves a name to a member of the closed set `E`.
///
/// Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] listing the accepted
/// names when `value` is not one of them.
pub fn one_of<E: ClosedSet>(field: &str, value: &str) -> ValidationResult<E> {
    E::ALL
        .iter()
        .copied()
        .find(|member| member.as_str() == value)
        .ok_or_else(|| {
            ValidationError::field(
                field,
                Constraint::OneOf {
                    allowed: E::ALL.iter().map(|m| m.as_str().to_owned()).collect(),
                },
                format!("'{value}'"),
            )
        })
}

/// Checks that the number of items in a list lies within `bounds`.
///
/// # Errors
///
/// Returns [`ValidationError::FieldConstraintViolation`] when the item count
/// is out of range.
pub fn count<T>(field: &str, items: &[T], bounds: RangeInclusive<usize>) -> ValidationResult<()> {
    let len = items.len();
    if !bounds.contains(&len) {
        let (min, max) = bounds.into_inner();
        return Err(ValidationError::field(
            field,
            Constraint::Count { min, max },
            format!("{len} items"),
        ));
    }
    Ok(())
}

//! Error types for record validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::Constraint;
use thiserror::Error;

/// Errors that can occur while constructing a validated record.
///
/// Construction surfaces exactly one error: the first field constraint
/// violated in declaration order, or, when every field is individually
/// valid, the first failing cross-field rule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A single field falls outside its declared bounds.
    #[error("{field}: {constraint} (got {value})")]
    FieldConstraintViolation {
        /// Name of the offending field.
        field: String,
        /// The constraint the value failed.
        constraint: Constraint,
        /// Rendering of the rejected value.
        value: String,
    },

    /// Every field is valid but a cross-field business rule failed.
    #[error("{message}")]
    CrossFieldViolation {
        /// The failing rule's fixed message.
        message: String,
    },

    /// The raw field mapping could not be read as a draft.
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// Description of the shape error.
        reason: String,
    },
}

impl ValidationError {
    /// Creates a field constraint violation.
    #[must_use]
    pub fn field(
        field: impl Into<String>,
        constraint: Constraint,
        value: impl ToString,
    ) -> Self {
        Self::FieldConstraintViolation {
            field: field.into(),
            constraint,
            value: value.to_string(),
        }
    }

    /// Creates a cross-field rule violation.
    #[must_use]
    pub fn cross_field(message: impl Into<String>) -> Self {
        Self::CrossFieldViolation {
            message: message.into(),
        }
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Returns the single user-visible message for this failure.
    ///
    /// For cross-field violations this is the rule's message verbatim.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the offending field name for field constraint violations.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::FieldConstraintViolation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns `true` if this error is a field constraint violation.
    #[must_use]
    pub const fn is_field_violation(&self) -> bool {
        matches!(self, Self::FieldConstraintViolation { .. })
    }

    /// Returns `true` if this error is a cross-field rule violation.
    #[must_use]
    pub const fn is_cross_field_violation(&self) -> bool {
        matches!(self, Self::CrossFieldViolation { .. })
    }

    /// Prefixes the field name with `parent`, for errors raised by a
    /// nested record.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::FieldConstraintViolation {
                field,
                constraint,
                value,
            } => Self::FieldConstraintViolation {
                field: format!("{parent}.{field}"),
                constraint,
                value,
            },
            other => other,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

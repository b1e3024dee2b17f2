//! Ordered cross-field rule evaluation.
//!
//! A [`RuleSet`] is a fixed, statically declared list of [`Rule`]s. Rules are
//! evaluated in declaration order against a candidate record whose fields
//! have already passed their individual constraints; evaluation stops at the
//! first rule that does not hold.

use super::{ValidationError, ValidationResult};
use std::fmt;

/// A business rule over a candidate record.
///
/// The predicate returns `true` when the rule holds.
pub struct Rule<T> {
    message: &'static str,
    holds: fn(&T) -> bool,
}

impl<T> Rule<T> {
    /// Creates a rule from its failure message and predicate.
    #[must_use]
    pub const fn new(message: &'static str, holds: fn(&T) -> bool) -> Self {
        Self { message, holds }
    }

    /// Returns the message reported when this rule fails.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Returns `true` if the rule holds for `candidate`.
    #[must_use]
    pub fn holds(&self, candidate: &T) -> bool {
        (self.holds)(candidate)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// An ordered list of cross-field rules with first-failure semantics.
///
/// # Examples
///
/// ```
/// use space_records::validation::{Rule, RuleSet, ValidationError};
///
/// static RULES: [Rule<u32>; 2] = [
///     Rule::new("must be even", |n| *n % 2 == 0),
///     Rule::new("must be small", |n| *n < 10),
/// ];
///
/// let rules = RuleSet::new(&RULES);
/// assert!(rules.evaluate(&4).is_ok());
/// assert_eq!(
///     rules.evaluate(&13),
///     Err(ValidationError::cross_field("must be even"))
/// );
/// ```
pub struct RuleSet<T: 'static> {
    rules: &'static [Rule<T>],
}

impl<T: 'static> RuleSet<T> {
    /// Creates a rule set over a static, ordered slice of rules.
    #[must_use]
    pub const fn new(rules: &'static [Rule<T>]) -> Self {
        Self { rules }
    }

    /// Creates a rule set with no rules; every candidate passes.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: &[] }
    }

    /// Returns the first rule that does not hold for `candidate`.
    #[must_use]
    pub fn first_failure(&self, candidate: &T) -> Option<&'static Rule<T>> {
        self.rules.iter().find(|rule| !rule.holds(candidate))
    }

    /// Evaluates the rules in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CrossFieldViolation`] carrying the message
    /// of the first failing rule.
    pub fn evaluate(&self, candidate: &T) -> ValidationResult<()> {
        match self.first_failure(candidate) {
            Some(rule) => Err(ValidationError::cross_field(rule.message())),
            None => Ok(()),
        }
    }

    /// Returns the number of rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Rule<T>> {
        self.rules.iter()
    }

    /// Returns the failure messages in evaluation order.
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::message).collect()
    }
}

impl<T: 'static> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RuleSet<T> {}

impl<T: 'static> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

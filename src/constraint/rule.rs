//! Predicate-backed leaf constraints.

use crate::error::Violation;
use crate::{Checked, Constraint, Verdict};

/// Builds a leaf constraint from a predicate and a failure message.
///
/// The constraint is valid exactly when the predicate holds; otherwise it
/// produces a single violation carrying the message at the root path.
///
/// # Example
///
/// ```rust
/// use verdict::{rule, Constraint};
///
/// let constraint = rule(|s: &str| s.contains('a'), "must contain an 'a'");
///
/// assert!(constraint.validate("cat").unwrap().is_valid());
///
/// let verdict = constraint.validate("dog").unwrap();
/// assert_eq!(verdict.violations().len(), 1);
/// assert_eq!(verdict.violations()[0].message(), "must contain an 'a'");
/// assert_eq!(verdict.violations()[0].path().to_string(), ".");
/// ```
pub fn rule<V, F>(predicate: F, message: impl Into<String>) -> Rule<F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    Rule {
        predicate,
        message: message.into(),
    }
}

/// A predicate-backed leaf constraint. See [`rule`].
pub struct Rule<F> {
    predicate: F,
    message: String,
}

impl<F> Rule<F> {
    /// Replaces the failure message.
    ///
    /// ```rust
    /// use verdict::constraint::string::min_length;
    /// use verdict::Constraint;
    ///
    /// let constraint = min_length(5).with_message("username is too short");
    /// let verdict = constraint.validate("ab").unwrap();
    /// assert_eq!(verdict.violations()[0].message(), "username is too short");
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<V, F> Constraint<V> for Rule<F>
where
    V: ?Sized,
    F: Fn(&V) -> bool + Send + Sync,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        if (self.predicate)(value) {
            Ok(Verdict::valid(value))
        } else {
            Ok(Verdict::invalid(value, Violation::new(self.message.clone())))
        }
    }
}

//! The constraint algebra.
//!
//! A [`Constraint`] is a pure mapping from a borrowed value to a
//! [`Verdict`](crate::Verdict). Leaf constraints are built from predicates
//! with [`rule`]; composites are built with the combinator methods on the
//! trait ([`and`](Constraint::and), [`or`](Constraint::or),
//! [`or_break`](Constraint::or_break), [`or_fatal`](Constraint::or_fatal))
//! and with the lifters in [`collection`] and [`value`]. Stock leaf
//! constraints live in [`string`], [`numeric`] and [`json`].
//!
//! # Example
//!
//! ```rust
//! use verdict::constraint::string::{contains, max_length, min_length};
//! use verdict::Constraint;
//!
//! // "at most 2 chars, or at least 4, and it must contain an 'a'"
//! let constraint = max_length(2).or(min_length(4)).and(contains("a"));
//!
//! assert!(constraint.validate("ab").unwrap().is_valid());
//! assert!(constraint.validate("abcd").unwrap().is_valid());
//! assert!(!constraint.validate("abc").unwrap().is_valid());
//! ```

pub mod collection;
pub mod combinators;
pub mod json;
pub mod numeric;
pub mod rule;
pub mod string;
pub mod value;

use std::sync::Arc;

pub use collection::{entries, items, Entries, Items};
pub use combinators::{And, Or, OrBreak, OrFatal, OrFatalWith};
pub use rule::{rule, Rule};
pub use value::{optional, required, some, SomeOf};

use crate::Checked;

/// A boxed constraint, for storing heterogeneous constraints together.
pub type BoxConstraint<V> = Box<dyn Constraint<V>>;

/// A pure mapping from a value to a verdict.
///
/// Constraints are stateless at evaluation time; configuration (bounds,
/// messages, sub-schemas) is closed over at construction time, so validating
/// the same value twice yields structurally equal verdicts. The `Send + Sync`
/// supertraits let constructed constraints be shared across threads.
pub trait Constraint<V: ?Sized>: Send + Sync {
    /// Validates a value, producing a verdict or aborting with a fatal error.
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V>;

    /// Requires both this constraint and `other` to hold.
    ///
    /// Evaluates this constraint first; if its verdict is marked break, it is
    /// returned immediately and `other` never runs. Otherwise `other` always
    /// runs, so independent failures from one conjunction surface in a single
    /// pass: when both sides are invalid the verdict merges all violations,
    /// this side's first.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
        C: Constraint<V>,
    {
        And::new(self, other)
    }

    /// Requires this constraint or `other` to hold.
    ///
    /// A valid side yields a fresh valid verdict with all violations
    /// discarded. A break verdict from this side is a veto and is returned
    /// without evaluating `other`. If both sides are invalid the verdict
    /// merges both sides' violations, so a reader can see why neither
    /// alternative matched.
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
        C: Constraint<V>,
    {
        Or::new(self, other)
    }

    /// Marks invalid verdicts as break, stopping an enclosing `and` chain.
    ///
    /// The verdict is otherwise unchanged: its violations are still reported
    /// normally by enclosing schemas and choices. Use it for prerequisite
    /// checks that make downstream checks meaningless:
    ///
    /// ```rust
    /// use verdict::constraint::{required, some};
    /// use verdict::constraint::numeric::greater_than;
    /// use verdict::Constraint;
    ///
    /// let age = required().or_break().and(some(greater_than(18)));
    ///
    /// // The range check never runs against a missing value.
    /// let verdict = age.validate(&None::<i64>).unwrap();
    /// assert_eq!(verdict.violations().len(), 1);
    /// assert_eq!(verdict.violations()[0].message(), "must not be null");
    /// ```
    fn or_break(self) -> OrBreak<Self>
    where
        Self: Sized,
    {
        OrBreak::new(self)
    }

    /// Escalates invalid verdicts into a [`Fatal`](crate::error::Fatal)
    /// error, aborting the whole call chain instead of reporting violations.
    fn or_fatal(self) -> OrFatal<Self>
    where
        Self: Sized,
    {
        OrFatal::new(self)
    }

    /// Like [`or_fatal`](Constraint::or_fatal), attaching a cause produced by
    /// `cause` to the fatal error.
    fn or_fatal_with<F>(self, cause: F) -> OrFatalWith<Self, F>
    where
        Self: Sized,
        F: Fn() -> Box<dyn std::error::Error + Send + Sync> + Send + Sync,
    {
        OrFatalWith::new(self, cause)
    }

    /// Boxes this constraint for storage as a trait object.
    fn boxed(self) -> BoxConstraint<V>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<V: ?Sized, C: Constraint<V> + ?Sized> Constraint<V> for &C {
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        (**self).validate(value)
    }
}

impl<V: ?Sized, C: Constraint<V> + ?Sized> Constraint<V> for Box<C> {
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        (**self).validate(value)
    }
}

impl<V: ?Sized, C: Constraint<V> + ?Sized> Constraint<V> for Arc<C> {
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        (**self).validate(value)
    }
}

/// Adapts a bare function into a constraint.
///
/// The function receives the value and returns a full [`Checked`] result, so
/// it can produce violations, mark breaks, or abort fatally. Useful for
/// one-off checks that do not fit the predicate shape of [`rule`].
///
/// # Example
///
/// ```rust
/// use verdict::{from_fn, Constraint, Verdict, Violation};
///
/// let even = from_fn(|value: &i64| {
///     if value % 2 == 0 {
///         Ok(Verdict::valid(value))
///     } else {
///         Ok(Verdict::invalid(value, Violation::new("must be even")))
///     }
/// });
///
/// assert!(even.validate(&4).unwrap().is_valid());
/// assert!(!even.validate(&3).unwrap().is_valid());
/// ```
pub fn from_fn<V, F>(f: F) -> FromFn<F>
where
    V: ?Sized,
    F: for<'a> Fn(&'a V) -> Checked<'a, V> + Send + Sync,
{
    FromFn(f)
}

/// See [`from_fn`].
pub struct FromFn<F>(F);

impl<V, F> Constraint<V> for FromFn<F>
where
    V: ?Sized,
    F: for<'a> Fn(&'a V) -> Checked<'a, V> + Send + Sync,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        (self.0)(value)
    }
}

/// Rebuilds a verdict over a projected field into a verdict over its
/// container, carrying the violations and break flag across.
pub(crate) fn lift<'a, V, T, C>(container: &'a V, field: &'a T, constraint: &C) -> Checked<'a, V>
where
    V: ?Sized,
    T: ?Sized,
    C: Constraint<T>,
{
    let (violations, is_break) = constraint.validate(field)?.into_parts();
    let mut verdict = crate::Verdict::with_violations(container, violations);
    verdict.set_break(is_break);
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verdict;

    #[test]
    fn test_boxed_constraint_validates() {
        let constraint = rule(|v: &i64| *v > 0, "must be positive").boxed();
        assert!(constraint.validate(&1).unwrap().is_valid());
        assert!(!constraint.validate(&-1).unwrap().is_valid());
    }

    #[test]
    fn test_reference_to_constraint_is_a_constraint() {
        let constraint = rule(|v: &i64| *v > 0, "must be positive");
        let by_ref = &constraint;
        assert!(by_ref.validate(&1).unwrap().is_valid());
    }

    #[test]
    fn test_arc_constraint_is_shared() {
        let constraint = Arc::new(rule(|v: &i64| *v > 0, "must be positive"));
        let clone = Arc::clone(&constraint);
        assert!(clone.validate(&1).unwrap().is_valid());
    }

    #[test]
    fn test_from_fn_passes_verdicts_through() {
        let constraint = from_fn(|value: &str| Ok(Verdict::valid(value)));
        assert!(constraint.validate("anything").unwrap().is_valid());
    }
}

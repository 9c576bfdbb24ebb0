//! Presence constraints over optional values.

use crate::{Checked, Constraint, Rule, Verdict};

use super::rule;

/// Requires an optional value to be present.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::required;
/// use verdict::Constraint;
///
/// let constraint = required::<String>();
/// assert!(constraint.validate(&Some("x".to_string())).unwrap().is_valid());
/// assert!(!constraint.validate(&None).unwrap().is_valid());
/// ```
pub fn required<T>() -> Rule<impl Fn(&Option<T>) -> bool + Send + Sync> {
    rule(|value: &Option<T>| value.is_some(), "must not be null")
}

/// Requires an optional value to be absent.
pub fn optional<T>() -> Rule<impl Fn(&Option<T>) -> bool + Send + Sync> {
    rule(|value: &Option<T>| value.is_none(), "must be null")
}

/// Applies a constraint to the present value of an `Option`.
///
/// Absent values pass vacuously; presence itself is checked with
/// [`required`]. The two compose into the usual chains for nested values:
/// `required().or_break().and(some(inner))` for mandatory children and
/// `optional().or(some(inner))` for optional ones.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::some;
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
///
/// let constraint = some(min_length(2));
///
/// assert!(constraint.validate(&None::<String>).unwrap().is_valid());
/// assert!(constraint.validate(&Some("ab".to_string())).unwrap().is_valid());
/// assert!(!constraint.validate(&Some("a".to_string())).unwrap().is_valid());
/// ```
pub fn some<C>(inner: C) -> SomeOf<C> {
    SomeOf { inner }
}

/// See [`some`].
pub struct SomeOf<C> {
    inner: C,
}

impl<T, C> Constraint<Option<T>> for SomeOf<C>
where
    C: Constraint<T>,
{
    fn validate<'a>(&self, value: &'a Option<T>) -> Checked<'a, Option<T>> {
        match value {
            None => Ok(Verdict::valid(value)),
            Some(present) => {
                let (violations, is_break) = self.inner.validate(present)?.into_parts();
                let mut verdict = Verdict::with_violations(value, violations);
                verdict.set_break(is_break);
                Ok(verdict)
            }
        }
    }
}

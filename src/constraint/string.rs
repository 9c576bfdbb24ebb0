//! Stock string constraints.
//!
//! All constructors are generic over `S: AsRef<str> + ?Sized`, so the same
//! constraint vocabulary works against `str`, `String` and anything else
//! string-shaped. Lengths count characters, not bytes.

use regex::Regex;

use crate::{Constraint, Rule};

use super::rule;

/// The string must have at least `min` characters.
///
/// ```rust
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
///
/// assert!(min_length(2).validate("ab").unwrap().is_valid());
/// assert!(!min_length(2).validate("a").unwrap().is_valid());
/// ```
pub fn min_length<S>(min: usize) -> Rule<impl Fn(&S) -> bool + Send + Sync>
where
    S: AsRef<str> + ?Sized,
{
    rule(
        move |s: &S| s.as_ref().chars().count() >= min,
        format!("must have at least {} chars", min),
    )
}

/// The string must have at most `max` characters.
pub fn max_length<S>(max: usize) -> Rule<impl Fn(&S) -> bool + Send + Sync>
where
    S: AsRef<str> + ?Sized,
{
    rule(
        move |s: &S| s.as_ref().chars().count() <= max,
        format!("must have at most {} chars", max),
    )
}

/// The string length must fall within `min..=max` characters.
pub fn length_range<S>(min: usize, max: usize) -> impl Constraint<S>
where
    S: AsRef<str> + ?Sized,
{
    min_length(min).and(max_length(max))
}

/// The string must contain the given substring.
pub fn contains<S>(needle: impl Into<String>) -> Rule<impl Fn(&S) -> bool + Send + Sync>
where
    S: AsRef<str> + ?Sized,
{
    let needle = needle.into();
    let message = format!("must contain {}", needle);
    rule(move |s: &S| s.as_ref().contains(&needle), message)
}

/// The string must match the given regex pattern.
///
/// Returns an error if the pattern itself is invalid.
///
/// ```rust
/// use verdict::constraint::string::matches;
/// use verdict::Constraint;
///
/// let constraint = matches(r"^\d+$").unwrap();
/// assert!(constraint.validate("12345").unwrap().is_valid());
/// assert!(!constraint.validate("12a45").unwrap().is_valid());
/// ```
pub fn matches<S>(pattern: &str) -> Result<Rule<impl Fn(&S) -> bool + Send + Sync>, regex::Error>
where
    S: AsRef<str> + ?Sized,
{
    let regex = Regex::new(pattern)?;
    let message = format!("must match pattern {}", pattern);
    Ok(rule(move |s: &S| regex.is_match(s.as_ref()), message))
}

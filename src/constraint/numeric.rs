//! Stock numeric constraints.
//!
//! Constructors are generic over any ordered `Copy` number type.

use std::fmt::Display;

use crate::{Constraint, Rule};

use super::rule;

/// The value must be at least `min` (inclusive).
///
/// ```rust
/// use verdict::constraint::numeric::min;
/// use verdict::Constraint;
///
/// assert!(min(18).validate(&18).unwrap().is_valid());
/// assert!(!min(18).validate(&17).unwrap().is_valid());
/// ```
pub fn min<N>(min: N) -> Rule<impl Fn(&N) -> bool + Send + Sync>
where
    N: PartialOrd + Copy + Display + Send + Sync,
{
    rule(move |v: &N| *v >= min, format!("must be at least {}", min))
}

/// The value must be at most `max` (inclusive).
pub fn max<N>(max: N) -> Rule<impl Fn(&N) -> bool + Send + Sync>
where
    N: PartialOrd + Copy + Display + Send + Sync,
{
    rule(move |v: &N| *v <= max, format!("must be at most {}", max))
}

/// The value must be strictly greater than `min`.
pub fn greater_than<N>(min: N) -> Rule<impl Fn(&N) -> bool + Send + Sync>
where
    N: PartialOrd + Copy + Display + Send + Sync,
{
    rule(move |v: &N| *v > min, format!("must be greater than {}", min))
}

/// The value must be strictly less than `max`.
pub fn less_than<N>(max: N) -> Rule<impl Fn(&N) -> bool + Send + Sync>
where
    N: PartialOrd + Copy + Display + Send + Sync,
{
    rule(move |v: &N| *v < max, format!("must be less than {}", max))
}

/// The value must fall within `low..=high`.
pub fn range<N>(low: N, high: N) -> impl Constraint<N>
where
    N: PartialOrd + Copy + Display + Send + Sync,
{
    min(low).and(max(high))
}

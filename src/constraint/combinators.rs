//! Composition of constraints: conjunction, alternation and escalation.
//!
//! The adapter types here are returned by the combinator methods on
//! [`Constraint`] and are rarely named directly. Two escalation wrappers
//! exist on purpose and do very different things: [`OrBreak`] returns a
//! verdict marked break (still reported normally), while [`OrFatal`] aborts
//! the whole call with an error.

use crate::error::Fatal;
use crate::{Checked, Constraint, Verdict, Violation};

/// Conjunction of two constraints. See [`Constraint::and`].
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<V, A, B> Constraint<V> for And<A, B>
where
    V: ?Sized,
    A: Constraint<V>,
    B: Constraint<V>,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let first = self.first.validate(value)?;
        if first.is_break() {
            return Ok(first);
        }

        let second = self.second.validate(value)?;
        match (first.is_valid(), second.is_valid()) {
            (true, true) => Ok(Verdict::valid(value)),
            (false, true) => Ok(first),
            (true, false) => Ok(second),
            (false, false) => {
                let mut violations = first.into_violations();
                violations.extend(second.into_violations());
                // A merged verdict never carries the break flag.
                Ok(Verdict::with_violations(value, violations))
            }
        }
    }
}

/// Alternation of two constraints. See [`Constraint::or`].
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<V, A, B> Constraint<V> for Or<A, B>
where
    V: ?Sized,
    A: Constraint<V>,
    B: Constraint<V>,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let first = self.first.validate(value)?;
        if first.is_valid() {
            return Ok(Verdict::valid(value));
        }
        // A break on the left is a veto, not a candidate for recovery.
        if first.is_break() {
            return Ok(first);
        }

        let second = self.second.validate(value)?;
        if second.is_valid() {
            return Ok(Verdict::valid(value));
        }

        let mut violations = first.into_violations();
        violations.extend(second.into_violations());
        Ok(Verdict::with_violations(value, violations))
    }
}

/// Marks invalid verdicts as break. See [`Constraint::or_break`].
pub struct OrBreak<C> {
    inner: C,
}

impl<C> OrBreak<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<V, C> Constraint<V> for OrBreak<C>
where
    V: ?Sized,
    C: Constraint<V>,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let mut verdict = self.inner.validate(value)?;
        if !verdict.is_valid() {
            verdict.set_break(true);
        }
        Ok(verdict)
    }
}

/// Escalates invalid verdicts into [`Fatal::Escalated`]. See
/// [`Constraint::or_fatal`].
pub struct OrFatal<C> {
    inner: C,
}

impl<C> OrFatal<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

fn escalation_message(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl<V, C> Constraint<V> for OrFatal<C>
where
    V: ?Sized,
    C: Constraint<V>,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let verdict = self.inner.validate(value)?;
        if verdict.is_valid() {
            return Ok(verdict);
        }
        Err(Fatal::Escalated {
            message: escalation_message(verdict.violations()),
            source: None,
        })
    }
}

/// Escalates invalid verdicts into [`Fatal::Escalated`] with a supplied
/// cause. See [`Constraint::or_fatal_with`].
pub struct OrFatalWith<C, F> {
    inner: C,
    cause: F,
}

impl<C, F> OrFatalWith<C, F> {
    pub(crate) fn new(inner: C, cause: F) -> Self {
        Self { inner, cause }
    }
}

impl<V, C, F> Constraint<V> for OrFatalWith<C, F>
where
    V: ?Sized,
    C: Constraint<V>,
    F: Fn() -> Box<dyn std::error::Error + Send + Sync> + Send + Sync,
{
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let verdict = self.inner.validate(value)?;
        if verdict.is_valid() {
            return Ok(verdict);
        }
        Err(Fatal::Escalated {
            message: escalation_message(verdict.violations()),
            source: Some((self.cause)()),
        })
    }
}

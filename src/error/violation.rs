//! Constraint violation types.
//!
//! This module provides [`Violation`] for single failed checks and
//! [`Violations`] for non-empty accumulated collections of them.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::{ContextPath, Segment};

/// A single failed check: a message and the location it failed at.
///
/// A violation is created by a leaf constraint with the root path `"."` and
/// knows nothing about its surroundings. Each enclosing composite (schema
/// field, sequence index, map key) calls [`Violation::enclose`] to prepend its
/// own scope while the violation bubbles upward; once the outermost constraint
/// has returned, the path is final.
///
/// # Example
///
/// ```rust
/// use verdict::{Segment, Violation};
///
/// let mut violation = Violation::new("must have at least 2 chars");
/// assert_eq!(violation.path().to_string(), ".");
///
/// violation.enclose(Segment::field("name"));
/// assert_eq!(violation.path().to_string(), ".name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    message: String,
    path: ContextPath,
}

impl Violation {
    /// Creates a violation at the root path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: ContextPath::root(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location of the failure.
    pub fn path(&self) -> &ContextPath {
        &self.path
    }

    /// Prepends an enclosing scope onto this violation's path.
    pub fn enclose(&mut self, segment: Segment) {
        self.path.enclose(segment);
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for Violation {}

// Violation stays Send + Sync as long as its fields are owned types.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
};

/// A non-empty collection of violations.
///
/// `Violations` wraps a `NonEmptyVec<Violation>` so a failure always carries
/// at least one violation. It is the failure payload of
/// [`Verdict::into_validation`](crate::Verdict::into_validation) and
/// implements `Semigroup`, so failures from independent validations combine:
///
/// ```rust
/// use stillwater::prelude::*;
/// use verdict::{Violation, Violations};
///
/// let a = Violations::single(Violation::new("must not be null"));
/// let b = Violations::single(Violation::new("must be at least 18"));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Creates a `Violations` containing a single violation.
    pub fn single(violation: Violation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    /// Creates a `Violations` from a `Vec<Violation>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(violations: Vec<Violation>) -> Self {
        Self(NonEmptyVec::from_vec(violations).expect("Violations requires at least one violation"))
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns the first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Returns all violations at the given path.
    pub fn at_path(&self, path: &ContextPath) -> Vec<&Violation> {
        self.0.iter().filter(|v| v.path() == path).collect()
    }

    /// Converts this collection into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0.into_vec()
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} violation(s):", self.len())?;
        for (i, violation) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = Box<dyn Iterator<Item = &'a Violation> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

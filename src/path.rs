//! Context paths for locating violations in nested values.
//!
//! This module provides [`ContextPath`] and [`Segment`] for describing where
//! inside a nested value a constraint failed. Paths are built bottom-up: the
//! leaf constraint knows nothing about its surroundings, and each enclosing
//! scope (schema field, sequence index, map key) prepends its own segment as
//! the result bubbles outward.

use std::fmt::{self, Display};

/// A single scope of a context path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A named field of a record or keyed container (e.g. `.address`).
    Field(String),
    /// A position in an ordered sequence (e.g. `[2]`).
    Index(usize),
    /// A key in a keyed mapping (e.g. `[x]`).
    Key(String),
}

impl Segment {
    /// Creates a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        Segment::Field(name.into())
    }

    /// Creates an index segment.
    pub fn index(index: usize) -> Self {
        Segment::Index(index)
    }

    /// Creates a key segment. The key is rendered in its natural string form.
    pub fn key(key: impl ToString) -> Self {
        Segment::Key(key.to_string())
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, ".{}", name),
            Segment::Index(index) => write!(f, "[{}]", index),
            Segment::Key(key) => write!(f, "[{}]", key),
        }
    }
}

/// The location of a violation inside a nested value.
///
/// An empty path is the root sentinel and displays as `"."`: the location of
/// a failure reported by a bare leaf constraint. [`ContextPath::enclose`]
/// prepends a segment; the first segment prepended onto the root sentinel
/// replaces it outright, which here is simply the empty list gaining its
/// first element.
///
/// # Example
///
/// ```rust
/// use verdict::{ContextPath, Segment};
///
/// let mut path = ContextPath::root();
/// assert_eq!(path.to_string(), ".");
///
/// path.enclose(Segment::index(2));
/// path.enclose(Segment::field("tags"));
/// assert_eq!(path.to_string(), ".tags[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContextPath {
    segments: Vec<Segment>,
}

impl ContextPath {
    /// Creates the root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if this is the root sentinel (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Prepends an enclosing scope onto this path.
    pub fn enclose(&mut self, segment: Segment) {
        self.segments.insert(0, segment);
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

impl Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, ".");
        }
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

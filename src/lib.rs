//! # Verdict
//!
//! A composable validation engine. Constraints are pure functions from a
//! value to a [`Verdict`]; they compose with `and`/`or`, escalate with
//! break or fatal semantics, lift over sequences and mappings, aggregate
//! into field schemas, and dispatch through classified choices. Every
//! violation they produce carries a context path describing exactly where in
//! the value it happened.
//!
//! ## Overview
//!
//! Validation never stops at the first failure unless told to: `and`
//! surfaces all independent failures of a conjunction in one pass, schemas
//! evaluate every field even when earlier fields failed, and container
//! lifters check every element. The two escape hatches are explicit:
//! [`or_break`](Constraint::or_break) stops the enclosing `and` chain for
//! prerequisite checks, and [`or_fatal`](Constraint::or_fatal) aborts the
//! whole call through the [`Fatal`] error channel.
//!
//! ## Core Types
//!
//! - [`Constraint`]: a pure mapping from a value to a verdict
//! - [`Verdict`]: the outcome of one validation call: value, violations,
//!   break flag
//! - [`Violation`]: one failed check, with a message and a [`ContextPath`]
//! - [`Schema`]: named field-level constraints over a container, with
//!   field-name path prefixing
//! - [`Choice`] / [`ConstraintChoice`]: handler dispatch on a computed
//!   classification
//! - [`Fatal`]: the unrecoverable failure channel
//!
//! ## Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use verdict::constraint::json::{as_int, as_str, non_null};
//! use verdict::constraint::numeric::greater_than;
//! use verdict::constraint::string::length_range;
//! use verdict::{Constraint, Schema};
//!
//! let schema = Schema::<Value>::new()
//!     .field("name", non_null().or_break().and(as_str(length_range(2, 5))))
//!     .field("age", non_null().or_break().and(as_int(greater_than(18))));
//!
//! let input = json!({"name": "ab", "age": 42});
//! let verdict = schema.validate(&input).unwrap();
//! assert!(verdict.is_valid());
//!
//! let input = json!({"name": "abcdef", "age": 15});
//! let verdict = schema.validate(&input).unwrap();
//! for violation in verdict.violations() {
//!     println!("{}", violation); // .name: must have at most 5 chars ...
//! }
//! ```

pub mod choice;
pub mod constraint;
pub mod error;
pub mod path;
pub mod schema;
pub mod verdict;

pub use choice::{constraint_choice, Choice, ConstraintChoice};
pub use constraint::{from_fn, rule, BoxConstraint, Constraint, Rule};
pub use error::{Fatal, Violation, Violations};
pub use path::{ContextPath, Segment};
pub use schema::{FieldLookup, Schema};
pub use verdict::Verdict;

/// The result of evaluating a constraint: a verdict, or a [`Fatal`] that
/// aborted the call.
pub type Checked<'a, V> = Result<Verdict<'a, V>, Fatal>;

//! Named, ordered collections of field-level constraints.
//!
//! A [`Schema`] attaches constraints to the fields of a container value.
//! Field values are reached through a projection supplied at registration
//! time: an explicit typed lens ([`Schema::projection`]), a keyed lookup on
//! the container ([`Schema::field`], for containers implementing
//! [`FieldLookup`]), or the identity ([`Schema::constraint`], for cross-field
//! invariants). A schema is itself a constraint, so schemas nest and their
//! field names chain into paths like `.address.street`.

mod lookup;

pub use lookup::FieldLookup;

use indexmap::IndexMap;

use crate::constraint::lift;
use crate::path::Segment;
use crate::{Checked, Constraint, Verdict};

pub(crate) type FieldCheck<V> =
    Box<dyn for<'a> Fn(&'a V) -> Checked<'a, V> + Send + Sync>;

/// A named, ordered collection of field-level constraints over `V`.
///
/// Validation always evaluates **every** registered check, in declaration
/// order, even when earlier fields failed; only `and` chains inside one
/// field's own constraint can short-circuit, via break. Each check's
/// violations get the field name prepended onto their paths before all
/// fields' violations are merged, declaration-first, into one verdict.
///
/// Field names are unique within a schema; re-registering a name replaces
/// the previous constraint. A schema is built once and reused across calls.
///
/// # Example
///
/// ```rust
/// use verdict::constraint::numeric::greater_than;
/// use verdict::constraint::string::length_range;
/// use verdict::constraint::{required, some};
/// use verdict::{Constraint, Schema};
///
/// struct Customer {
///     name: Option<String>,
///     age: Option<i64>,
/// }
///
/// let schema = Schema::new()
///     .projection(
///         "name",
///         |c: &Customer| &c.name,
///         required().or_break().and(some(length_range(2, 5))),
///     )
///     .projection(
///         "age",
///         |c: &Customer| &c.age,
///         required().or_break().and(some(greater_than(18))),
///     );
///
/// let customer = Customer {
///     name: Some("abcdef".to_string()),
///     age: Some(15),
/// };
///
/// let verdict = schema.validate(&customer).unwrap();
/// let paths: Vec<_> = verdict
///     .violations()
///     .iter()
///     .map(|v| v.path().to_string())
///     .collect();
/// assert_eq!(paths, vec![".name", ".age"]);
/// ```
pub struct Schema<V: ?Sized> {
    checks: IndexMap<String, FieldCheck<V>>,
}

impl<V: ?Sized> Schema<V> {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self {
            checks: IndexMap::new(),
        }
    }

    /// Registers a constraint evaluated against the container itself.
    ///
    /// The projection is the identity, which makes this the place for
    /// invariants spanning several fields. Violations are prefixed with the
    /// given label exactly like field violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{rule, Constraint, Schema};
    ///
    /// struct Signup {
    ///     password: String,
    ///     confirmation: String,
    /// }
    ///
    /// let schema = Schema::new().constraint(
    ///     "passwords",
    ///     rule(
    ///         |s: &Signup| s.password == s.confirmation,
    ///         "password and confirmation must match",
    ///     ),
    /// );
    ///
    /// let signup = Signup {
    ///     password: "a".to_string(),
    ///     confirmation: "b".to_string(),
    /// };
    /// let verdict = schema.validate(&signup).unwrap();
    /// assert_eq!(verdict.violations()[0].path().to_string(), ".passwords");
    /// ```
    pub fn constraint<C>(mut self, name: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint<V> + 'static,
    {
        let check: FieldCheck<V> =
            Box::new(move |container: &V| lift(container, container, &constraint));
        self.checks.insert(name.into(), check);
        self
    }

    /// Registers a constraint against the value a typed lens projects out of
    /// the container.
    ///
    /// The lens is the object-property flavor of field projection: a compiled
    /// accessor registered per declared container type, typically just a
    /// field borrow like `|c: &Customer| &c.name`.
    pub fn projection<T, L, C>(mut self, name: impl Into<String>, lens: L, constraint: C) -> Self
    where
        T: ?Sized + 'static,
        L: for<'a> Fn(&'a V) -> &'a T + Send + Sync + 'static,
        C: Constraint<T> + 'static,
    {
        let check: FieldCheck<V> =
            Box::new(move |container: &V| lift(container, lens(container), &constraint));
        self.checks.insert(name.into(), check);
        self
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub(crate) fn register(&mut self, name: String, check: FieldCheck<V>) {
        self.checks.insert(name, check);
    }
}

impl<V: ?Sized> Default for Schema<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> Constraint<V> for Schema<V> {
    fn validate<'a>(&self, value: &'a V) -> Checked<'a, V> {
        let mut violations = Vec::new();
        for (name, check) in &self.checks {
            let mut verdict = check(value)?;
            verdict.enclose(Segment::field(name));
            violations.extend(verdict.into_violations());
        }
        // Break never escapes a field: it only ever stops the and-chain
        // inside that field's own constraint.
        Ok(Verdict::with_violations(value, violations))
    }
}

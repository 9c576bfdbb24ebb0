//! Bridges from `serde_json::Value` into the typed constraint vocabulary.
//!
//! JSON values are dynamically typed, so each bridge first checks the runtime
//! type and reports a mismatch as an ordinary violation ("expected string,
//! got number") before handing the typed view to the inner constraint. No
//! coercion is performed. Callers who consider a mismatch unrecoverable can
//! escalate with [`or_fatal`](crate::Constraint::or_fatal).

use serde_json::{Map, Value};

use crate::constraint::collection::Entries;
use crate::constraint::lift;
use crate::error::Violation;
use crate::path::Segment;
use crate::{Checked, Constraint, Rule, Verdict};

use super::rule;

/// Runs a string constraint against a JSON string.
///
/// ```rust
/// use verdict::constraint::json::as_str;
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
/// use serde_json::json;
///
/// let constraint = as_str(min_length(2));
///
/// assert!(constraint.validate(&json!("ab")).unwrap().is_valid());
/// assert!(!constraint.validate(&json!("a")).unwrap().is_valid());
///
/// let input = json!(42);
/// let verdict = constraint.validate(&input).unwrap();
/// assert_eq!(verdict.violations()[0].message(), "expected string, got number");
/// ```
pub fn as_str<C>(inner: C) -> AsStr<C>
where
    C: Constraint<str>,
{
    AsStr { inner }
}

/// See [`as_str`].
pub struct AsStr<C> {
    inner: C,
}

impl<C> Constraint<Value> for AsStr<C>
where
    C: Constraint<str>,
{
    fn validate<'a>(&self, value: &'a Value) -> Checked<'a, Value> {
        match value.as_str() {
            Some(s) => lift(value, s, &self.inner),
            None => Ok(type_mismatch(value, "string")),
        }
    }
}

/// Runs an integer constraint against a JSON integer.
///
/// Floats are not integers; `1.5` reports a type mismatch.
pub fn as_int<C>(inner: C) -> AsInt<C>
where
    C: Constraint<i64>,
{
    AsInt { inner }
}

/// See [`as_int`].
pub struct AsInt<C> {
    inner: C,
}

impl<C> Constraint<Value> for AsInt<C>
where
    C: Constraint<i64>,
{
    fn validate<'a>(&self, value: &'a Value) -> Checked<'a, Value> {
        match value.as_i64() {
            Some(n) => {
                let (violations, is_break) = self.inner.validate(&n)?.into_parts();
                let mut verdict = Verdict::with_violations(value, violations);
                verdict.set_break(is_break);
                Ok(verdict)
            }
            None => Ok(type_mismatch(value, "integer")),
        }
    }
}

/// Runs a sequence constraint against a JSON array.
///
/// ```rust
/// use verdict::constraint::items;
/// use verdict::constraint::json::{as_array, as_int};
/// use verdict::constraint::numeric::max;
/// use verdict::Constraint;
/// use serde_json::json;
///
/// let constraint = as_array(items(as_int(max(5))));
/// let input = json!([1, 3, 7, 2]);
/// let verdict = constraint.validate(&input).unwrap();
///
/// assert_eq!(verdict.violations()[0].path().to_string(), "[2]");
/// ```
pub fn as_array<C>(inner: C) -> AsArray<C>
where
    C: Constraint<[Value]>,
{
    AsArray { inner }
}

/// See [`as_array`].
pub struct AsArray<C> {
    inner: C,
}

impl<C> Constraint<Value> for AsArray<C>
where
    C: Constraint<[Value]>,
{
    fn validate<'a>(&self, value: &'a Value) -> Checked<'a, Value> {
        match value.as_array() {
            Some(array) => lift(value, array.as_slice(), &self.inner),
            None => Ok(type_mismatch(value, "array")),
        }
    }
}

/// Runs a keyed-mapping constraint against a JSON object.
pub fn as_object<C>(inner: C) -> AsObject<C>
where
    C: Constraint<Map<String, Value>>,
{
    AsObject { inner }
}

/// See [`as_object`].
pub struct AsObject<C> {
    inner: C,
}

impl<C> Constraint<Value> for AsObject<C>
where
    C: Constraint<Map<String, Value>>,
{
    fn validate<'a>(&self, value: &'a Value) -> Checked<'a, Value> {
        match value.as_object() {
            Some(object) => lift(value, object, &self.inner),
            None => Ok(type_mismatch(value, "object")),
        }
    }
}

/// The JSON value must not be null.
pub fn non_null() -> Rule<impl Fn(&Value) -> bool + Send + Sync> {
    rule(|value: &Value| !value.is_null(), "must not be null")
}

/// Lets null pass; validates everything else with the inner constraint.
///
/// ```rust
/// use verdict::constraint::json::{as_str, nullable};
/// use verdict::constraint::string::min_length;
/// use verdict::Constraint;
/// use serde_json::json;
///
/// let constraint = nullable(as_str(min_length(2)));
///
/// assert!(constraint.validate(&json!(null)).unwrap().is_valid());
/// assert!(!constraint.validate(&json!("a")).unwrap().is_valid());
/// ```
pub fn nullable<C>(inner: C) -> Nullable<C>
where
    C: Constraint<Value>,
{
    Nullable { inner }
}

/// See [`nullable`].
pub struct Nullable<C> {
    inner: C,
}

impl<C> Constraint<Value> for Nullable<C>
where
    C: Constraint<Value>,
{
    fn validate<'a>(&self, value: &'a Value) -> Checked<'a, Value> {
        if value.is_null() {
            Ok(Verdict::valid(value))
        } else {
            self.inner.validate(value)
        }
    }
}

/// Entry-wise validation of JSON objects, keys annotated as `[key]`.
///
/// Entries are visited in the map's own deterministic iteration order.
impl<C> Constraint<Map<String, Value>> for Entries<C>
where
    C: Constraint<Value>,
{
    fn validate<'a>(&self, value: &'a Map<String, Value>) -> Checked<'a, Map<String, Value>> {
        let mut violations = Vec::new();
        for (key, entry) in value {
            let mut verdict = self.element().validate(entry)?;
            verdict.enclose(Segment::key(key));
            violations.extend(verdict.into_violations());
        }
        Ok(Verdict::with_violations(value, violations))
    }
}

fn type_mismatch<'a>(value: &'a Value, expected: &str) -> Verdict<'a, Value> {
    Verdict::invalid(
        value,
        Violation::new(format!("expected {}, got {}", expected, type_name(value))),
    )
}

/// Returns the JSON type name for a value.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

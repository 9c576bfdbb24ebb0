//! The keyed-container flavor of field projection.

use serde_json::{Map, Value};

use crate::constraint::lift;
use crate::error::Fatal;
use crate::Constraint;

use super::{FieldCheck, Schema};

/// Pluggable field projection for keyed containers.
///
/// Containers implementing `FieldLookup` can register schema fields by name
/// alone (see [`Schema::field`]); the container resolves the name to a value
/// at validation time. A name that cannot be resolved on the container it is
/// given (not merely absent, but unresolvable, like any field on a JSON
/// string) is a [`Fatal::Projection`], the configuration-failure channel.
pub trait FieldLookup {
    /// The projected field value type.
    type Field: ?Sized;

    /// Resolves a declared field name on this container.
    fn lookup_field<'a>(&'a self, name: &str) -> Result<&'a Self::Field, Fatal>;
}

static NULL: Value = Value::Null;

/// JSON-object lookup. A missing key projects `Value::Null`, keeping
/// absence in the validation channel (pair with
/// [`non_null`](crate::constraint::json::non_null)); a non-object container
/// cannot resolve any field name and fails fatally.
impl FieldLookup for Value {
    type Field = Value;

    fn lookup_field<'a>(&'a self, name: &str) -> Result<&'a Value, Fatal> {
        match self {
            Value::Object(map) => Ok(map.get(name).unwrap_or(&NULL)),
            other => Err(Fatal::Projection {
                field: name.to_string(),
                container: type_name(other),
            }),
        }
    }
}

/// Plain map lookup; a missing key projects `Value::Null`.
impl FieldLookup for Map<String, Value> {
    type Field = Value;

    fn lookup_field<'a>(&'a self, name: &str) -> Result<&'a Value, Fatal> {
        Ok(self.get(name).unwrap_or(&NULL))
    }
}

impl<V: FieldLookup + ?Sized> Schema<V> {
    /// Registers a constraint against the value the container resolves for
    /// `name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::{json, Value};
    /// use verdict::constraint::json::{as_int, as_str, non_null};
    /// use verdict::constraint::numeric::greater_than;
    /// use verdict::constraint::string::length_range;
    /// use verdict::{Constraint, Schema};
    ///
    /// let schema = Schema::<Value>::new()
    ///     .field("name", non_null().or_break().and(as_str(length_range(2, 5))))
    ///     .field("age", non_null().or_break().and(as_int(greater_than(18))));
    ///
    /// let input = json!({"name": "abcdef", "age": 15});
    /// let verdict = schema.validate(&input).unwrap();
    ///
    /// let paths: Vec<_> = verdict
    ///     .violations()
    ///     .iter()
    ///     .map(|v| v.path().to_string())
    ///     .collect();
    /// assert_eq!(paths, vec![".name", ".age"]);
    /// ```
    pub fn field<C>(mut self, name: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint<V::Field> + 'static,
    {
        let name = name.into();
        let label = name.clone();
        let check: FieldCheck<V> = Box::new(move |container: &V| {
            let field = container.lookup_field(&label)?;
            lift(container, field, &constraint)
        });
        self.register(name, check);
        self
    }
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

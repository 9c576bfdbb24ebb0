use serde_json::{json, Value};
use verdict::constraint::json::{as_array, as_int, as_object, as_str, non_null, nullable};
use verdict::constraint::numeric::greater_than;
use verdict::constraint::string::{length_range, max_length, min_length};
use verdict::constraint::{entries, items};
use verdict::{Constraint, Fatal, Schema};

fn address_schema() -> Schema<Value> {
    Schema::new().field(
        "street",
        non_null().or_break().and(as_str(max_length(10))),
    )
}

fn customer_schema() -> Schema<Value> {
    Schema::new()
        .field(
            "name",
            non_null().or_break().and(as_str(length_range(2, 5))),
        )
        .field(
            "age",
            non_null().or_break().and(as_int(greater_than(18))),
        )
        .field("address", non_null().or_break().and(address_schema()))
}

#[test]
fn json_schema_nested_valid() {
    let input = json!({
        "name": "abcde",
        "age": 25,
        "address": {"street": "0123456789"}
    });
    let verdict = customer_schema().validate(&input).unwrap();
    assert!(verdict.is_valid());
}

#[test]
fn json_schema_nested_invalid_contexts() {
    let input = json!({
        "name": "abcde",
        "age": 15,
        "address": {"street": "0123456789x"}
    });
    let verdict = customer_schema().validate(&input).unwrap();

    let paths: Vec<_> = verdict
        .violations()
        .iter()
        .map(|v| v.path().to_string())
        .collect();
    assert_eq!(paths, vec![".age", ".address.street"]);
}

#[test]
fn json_schema_missing_keys_are_null_violations() {
    let input = json!({});
    let verdict = customer_schema().validate(&input).unwrap();

    assert_eq!(verdict.violations().len(), 3);
    for violation in verdict.violations() {
        assert_eq!(violation.message(), "must not be null");
    }
    let paths: Vec<_> = verdict
        .violations()
        .iter()
        .map(|v| v.path().to_string())
        .collect();
    assert_eq!(paths, vec![".name", ".age", ".address"]);
}

#[test]
fn json_schema_on_non_object_is_fatal() {
    match customer_schema().validate(&json!("not an object")) {
        Err(Fatal::Projection { field, container }) => {
            assert_eq!(field, "name");
            assert_eq!(container, "string");
        }
        _ => panic!("expected a projection failure"),
    }
}

#[test]
fn json_schema_fatal_returns_no_partial_verdict() {
    // The age field would also fail, but the fatal from the first field
    // aborts the whole call.
    let schema = Schema::<Value>::new()
        .field("name", as_str(min_length(2)).or_fatal())
        .field("age", non_null());

    let input = json!({"name": "a", "age": null});
    let result = schema.validate(&input);
    assert!(matches!(result, Err(Fatal::Escalated { .. })));
}

#[test]
fn json_type_mismatch_is_an_ordinary_violation() {
    let input = json!({
        "name": 42,
        "age": 25,
        "address": {"street": "ok"}
    });
    let verdict = customer_schema().validate(&input).unwrap();

    assert_eq!(verdict.violations().len(), 1);
    assert_eq!(
        verdict.violations()[0].message(),
        "expected string, got number"
    );
    assert_eq!(verdict.violations()[0].path().to_string(), ".name");
}

#[test]
fn json_array_field_annotates_indices() {
    let schema = Schema::<Value>::new().field(
        "items",
        non_null()
            .or_break()
            .and(as_array(items(as_int(greater_than(0))))),
    );

    let input = json!({"items": [1, -2, 3, -4]});
    let verdict = schema.validate(&input).unwrap();

    let paths: Vec<_> = verdict
        .violations()
        .iter()
        .map(|v| v.path().to_string())
        .collect();
    assert_eq!(paths, vec![".items[1]", ".items[3]"]);
}

#[test]
fn json_object_field_annotates_keys() {
    let schema = Schema::<Value>::new().field(
        "meta",
        non_null()
            .or_break()
            .and(as_object(entries(as_str(min_length(1))))),
    );

    let input = json!({"meta": {"x": ""}});
    let verdict = schema.validate(&input).unwrap();
    assert_eq!(verdict.violations()[0].path().to_string(), ".meta[x]");
}

#[test]
fn nullable_fields_skip_validation_when_null() {
    let schema = Schema::<Value>::new()
        .field("nickname", nullable(as_str(min_length(2))));

    assert!(schema.validate(&json!({})).unwrap().is_valid());
    assert!(schema
        .validate(&json!({"nickname": null}))
        .unwrap()
        .is_valid());

    let input = json!({"nickname": "a"});
    let verdict = schema.validate(&input).unwrap();
    assert_eq!(verdict.violations()[0].path().to_string(), ".nickname");
}

#[test]
fn plain_map_schema_never_fails_projection() {
    let schema = Schema::<serde_json::Map<String, Value>>::new()
        .field("name", non_null().or_break().and(as_str(min_length(2))));

    let value = json!({"name": "ok"});
    let verdict = schema.validate(value.as_object().unwrap()).unwrap();
    assert!(verdict.is_valid());

    let empty = serde_json::Map::new();
    let verdict = schema.validate(&empty).unwrap();
    assert_eq!(verdict.violations()[0].message(), "must not be null");
}

#[test]
fn verdict_bridges_into_applicative_validation() {
    let input = json!({
        "name": "abcdef",
        "age": 15,
        "address": {"street": "ok"}
    });
    let verdict = customer_schema().validate(&input).unwrap();

    let validation = verdict.into_validation();
    assert!(validation.is_failure());
    let violations = validation.into_result().unwrap_err();
    assert_eq!(violations.len(), 2);
    assert!(violations.to_string().contains("2 violation(s)"));
}

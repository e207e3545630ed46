//! Escaping values through the public API, the way a filter builder uses it.

use tabula_env::db::{all_of, field_equals, try_escape_json, EscapeError};
use tabula_env::{escape_value, RawValue};

#[test]
fn test_documented_scenarios() {
    assert_eq!(escape_value("O'Reilly").as_deref(), Some("O''Reilly"));
    assert_eq!(escape_value(RawValue::Absent), None);
    assert_eq!(escape_value("").as_deref(), Some(""));
    assert_eq!(escape_value("''").as_deref(), Some("''''"));
    assert_eq!(escape_value(42i32).as_deref(), Some("42"));
    assert_eq!(escape_value("no quotes here").as_deref(), Some("no quotes here"));
}

#[test]
fn test_escaped_value_stays_inside_literal() {
    // A value trying to close the literal and append its own clause.
    let hostile = "x' , TRUE(), '";
    let clause = field_equals("Name", hostile).unwrap();
    assert_eq!(clause, "{Name}='x'' , TRUE(), '''");

    // Every quote inside the literal body comes in pairs.
    let body = &clause["{Name}='".len()..clause.len() - 1];
    assert_eq!(body.replace("''", "").matches('\'').count(), 0);
}

#[test]
fn test_optional_filters_drop_out() {
    let city: Option<&str> = None;
    let name = Some("D'Angelo");
    let formula = all_of([field_equals("City", city), field_equals("Name", name)]);
    assert_eq!(formula.as_deref(), Some("{Name}='D''Angelo'"));
}

#[test]
fn test_json_input() {
    let payload = serde_json::json!({ "name": "it's", "age": 30, "tags": ["a"] });
    assert_eq!(try_escape_json(&payload["name"]), Ok(Some("it''s".to_string())));
    assert_eq!(try_escape_json(&payload["age"]), Ok(Some("30".to_string())));
    assert_eq!(try_escape_json(&payload["missing"]), Ok(None));
    assert!(matches!(
        try_escape_json(&payload["tags"]),
        Err(EscapeError::InvalidArgument(_))
    ));
}

#[test]
fn test_escaping_is_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || escape_value(format!("worker '{i}'"))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(format!("worker ''{i}''")));
    }
}

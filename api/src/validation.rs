//! Field-level checks for inbound request bodies.
//!
//! Clients send bodies where values may arrive either already typed
//! (JSON numbers, booleans) or as strings carried over from form-encoded
//! transport; the same predicate must accept both consistently. The
//! classifier works on raw [`serde_json::Value`]s instead of deserializing
//! into typed structs so a mismatch produces a 400 naming the field, not a
//! generic body-rejection.

use chrono::NaiveDateTime;
use regex::Regex;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};
use std::str::FromStr;
use std::sync::LazyLock;

/// The fixed wire format for every timestamp, inbound and outbound.
pub const WIRE_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // local part, one @, domain with at least one dot
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._%+-]*@[A-Za-z0-9][A-Za-z0-9-]*(\.[A-Za-z0-9-]+)+$")
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    Email,
    String,
    DateTime,
}

/// Whether `value` can be read as `kind`. Never fails; a mismatch is `false`.
///
/// `String` deliberately rejects numeric-looking strings: `"123"` reads as
/// an integer, so it is not a string. Compatibility behavior, relied on by
/// the name-field checks across every controller.
pub fn classify(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Integer => integer_value(value).is_some(),
        FieldKind::Float => match value {
            Value::Number(_) => true,
            Value::String(s) => s.parse::<f64>().is_ok(),
            _ => false,
        },
        FieldKind::Boolean => boolean_value(value).is_some(),
        FieldKind::Email => matches!(value, Value::String(s) if EMAIL_PATTERN.is_match(s)),
        FieldKind::String => {
            matches!(value, Value::String(_))
                && !classify(value, FieldKind::Integer)
                && !classify(value, FieldKind::Float)
        }
        FieldKind::DateTime => matches!(
            value,
            Value::String(s) if NaiveDateTime::parse_from_str(s, WIRE_DATETIME_FORMAT).is_ok()
        ),
    }
}

fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

/// Accepts a JSON boolean or the literal string tokens `"true"`/`"false"`
/// (form-transport carryover); anything else is not a boolean.
fn boolean_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

pub fn as_object(body: &Value) -> AppResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| AppError::InvalidField("request body is not a JSON object".into()))
}

pub fn require<'a>(body: &'a Map<String, Value>, key: &'static str) -> AppResult<&'a Value> {
    body.get(key).ok_or(AppError::MissingField(key))
}

/// Rejects a field that must never appear in an update body.
pub fn reject_field(body: &Map<String, Value>, key: &str, msg: &'static str) -> AppResult<()> {
    if body.contains_key(key) {
        return Err(AppError::ImmutableField(msg));
    }
    Ok(())
}

pub fn required_integer(body: &Map<String, Value>, key: &'static str) -> AppResult<i32> {
    let value = require(body, key)?;
    extract_integer(value, key)
}

pub fn optional_integer(body: &Map<String, Value>, key: &'static str) -> AppResult<Option<i32>> {
    match body.get(key) {
        None => Ok(None),
        Some(value) => extract_integer(value, key).map(Some),
    }
}

fn extract_integer(value: &Value, key: &'static str) -> AppResult<i32> {
    integer_value(value)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::InvalidField(format!("{key} is not an integer")))
}

pub fn optional_float(body: &Map<String, Value>, key: &'static str) -> AppResult<Option<f64>> {
    let Some(value) = body.get(key) else {
        return Ok(None);
    };
    if !classify(value, FieldKind::Float) {
        return Err(AppError::InvalidField(format!("{key} is not a float")));
    }
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| AppError::InvalidField(format!("{key} is not a float")))
}

pub fn optional_boolean(body: &Map<String, Value>, key: &'static str) -> AppResult<Option<bool>> {
    match body.get(key) {
        None => Ok(None),
        Some(value) => boolean_value(value)
            .map(Some)
            .ok_or_else(|| AppError::InvalidField(format!("{key} is not a boolean"))),
    }
}

pub fn required_string(body: &Map<String, Value>, key: &'static str) -> AppResult<String> {
    let value = require(body, key)?;
    extract_string(value, key)
}

pub fn optional_string(body: &Map<String, Value>, key: &'static str) -> AppResult<Option<String>> {
    match body.get(key) {
        None => Ok(None),
        Some(value) => extract_string(value, key).map(Some),
    }
}

fn extract_string(value: &Value, key: &'static str) -> AppResult<String> {
    match value {
        Value::String(s) if classify(value, FieldKind::String) => Ok(s.clone()),
        _ => Err(AppError::InvalidField(format!("{key} is not a string"))),
    }
}

/// Plain textual check for free-form content (passwords, review messages)
/// where the numeric-string policy of [`FieldKind::String`] does not apply.
pub fn required_text(body: &Map<String, Value>, key: &'static str) -> AppResult<String> {
    let value = require(body, key)?;
    extract_text(value, key)
}

pub fn optional_text(body: &Map<String, Value>, key: &'static str) -> AppResult<Option<String>> {
    match body.get(key) {
        None => Ok(None),
        Some(value) => extract_text(value, key).map(Some),
    }
}

fn extract_text(value: &Value, key: &'static str) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(AppError::InvalidField(format!("{key} is not a string"))),
    }
}

pub fn required_email(body: &Map<String, Value>, key: &'static str) -> AppResult<String> {
    let value = require(body, key)?;
    match value {
        Value::String(s) => {
            if classify(value, FieldKind::Email) {
                Ok(s.clone())
            } else {
                Err(AppError::InvalidField(format!("{key} is not valid")))
            }
        }
        _ => Err(AppError::InvalidField(format!("{key} is not a string"))),
    }
}

pub fn required_datetime(body: &Map<String, Value>, key: &'static str) -> AppResult<NaiveDateTime> {
    let value = require(body, key)?;
    extract_datetime(value, key)
}

pub fn optional_datetime(
    body: &Map<String, Value>,
    key: &'static str,
) -> AppResult<Option<NaiveDateTime>> {
    match body.get(key) {
        None => Ok(None),
        Some(value) => extract_datetime(value, key).map(Some),
    }
}

fn extract_datetime(value: &Value, key: &'static str) -> AppResult<NaiveDateTime> {
    match value {
        Value::String(s) => NaiveDateTime::parse_from_str(s, WIRE_DATETIME_FORMAT)
            .map_err(|_| AppError::InvalidField(format!("{key} is not formatted correctly"))),
        _ => Err(AppError::InvalidField(format!("{key} is not a string"))),
    }
}

/// Path identifiers of the wrong shape resolve to "does not exist" rather
/// than a client error, so lookups stay deterministic 404s.
pub fn parse_path_id<T: FromStr>(raw: &str, entity: &'static str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("{entity} ({raw}) was not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_accepts_typed_and_string_forms() {
        assert!(classify(&json!(42), FieldKind::Integer));
        assert!(classify(&json!("42"), FieldKind::Integer));
        assert!(classify(&json!("-7"), FieldKind::Integer));
        assert!(!classify(&json!(3.5), FieldKind::Integer));
        assert!(!classify(&json!("3.5"), FieldKind::Integer));
        assert!(!classify(&json!("42abc"), FieldKind::Integer));
        assert!(!classify(&json!(true), FieldKind::Integer));
    }

    #[test]
    fn float_accepts_any_number_or_decimal_string() {
        assert!(classify(&json!(3.5), FieldKind::Float));
        assert!(classify(&json!(3), FieldKind::Float));
        assert!(classify(&json!("3.5"), FieldKind::Float));
        assert!(!classify(&json!("three"), FieldKind::Float));
        assert!(!classify(&json!(null), FieldKind::Float));
    }

    #[test]
    fn boolean_accepts_only_canonical_tokens() {
        assert!(classify(&json!(true), FieldKind::Boolean));
        assert!(classify(&json!(false), FieldKind::Boolean));
        assert!(classify(&json!("true"), FieldKind::Boolean));
        assert!(classify(&json!("false"), FieldKind::Boolean));
        assert!(!classify(&json!("True"), FieldKind::Boolean));
        assert!(!classify(&json!("yes"), FieldKind::Boolean));
        assert!(!classify(&json!(1), FieldKind::Boolean));
    }

    #[test]
    fn email_wants_local_part_and_dotted_domain() {
        assert!(classify(&json!("guest@example.com"), FieldKind::Email));
        assert!(classify(&json!("first.last+tag@mail.example.org"), FieldKind::Email));
        assert!(!classify(&json!("guest@example"), FieldKind::Email));
        assert!(!classify(&json!("example.com"), FieldKind::Email));
        assert!(!classify(&json!("@example.com"), FieldKind::Email));
        assert!(!classify(&json!(7), FieldKind::Email));
    }

    #[test]
    fn numeric_looking_strings_are_not_strings() {
        assert!(classify(&json!("Lodge"), FieldKind::String));
        assert!(!classify(&json!("123"), FieldKind::String));
        assert!(!classify(&json!("3.5"), FieldKind::String));
        assert!(!classify(&json!(123), FieldKind::String));
    }

    #[test]
    fn datetime_wants_the_exact_wire_format() {
        assert!(classify(&json!("2024/03/10 14:30:00"), FieldKind::DateTime));
        assert!(!classify(&json!("2024-03-10 14:30:00"), FieldKind::DateTime));
        assert!(!classify(&json!("2024/03/10"), FieldKind::DateTime));
        assert!(!classify(&json!("2024/13/40 99:00:00"), FieldKind::DateTime));
    }

    #[test]
    fn require_reports_the_missing_key() {
        let body = json!({"user_id": 2});
        let map = body.as_object().unwrap();
        assert!(require(map, "user_id").is_ok());
        let err = require(map, "date_start").unwrap_err();
        assert!(matches!(err, AppError::MissingField("date_start")));
    }

    #[test]
    fn extraction_names_the_offending_field() {
        let body = json!({"user_id": "abc"});
        let map = body.as_object().unwrap();
        let err = required_integer(map, "user_id").unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "user_id is not an integer"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reject_field_is_a_forbidden_class_failure() {
        let body = json!({"user_id": 5});
        let map = body.as_object().unwrap();
        let err = reject_field(map, "user_id", "User cannot be changed").unwrap_err();
        assert!(matches!(err, AppError::ImmutableField(_)));
    }

    #[test]
    fn malformed_path_ids_resolve_to_not_found() {
        use kernel::model::id::PlaceId;
        assert!(parse_path_id::<PlaceId>("17", "place").is_ok());
        let err = parse_path_id::<PlaceId>("seventeen", "place").unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[test]
    fn passwords_may_look_numeric() {
        let body = json!({"password": "123456"});
        let map = body.as_object().unwrap();
        assert_eq!(required_text(map, "password").unwrap(), "123456");
        assert!(required_string(map, "password").is_err());
    }
}

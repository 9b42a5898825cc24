//! Field predicates used by [`FieldRule`](super::FieldRule).
//!
//! Each predicate receives `None` for a missing field and treats JSON `null`
//! as missing.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static INT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").expect("integer pattern is valid")
});

static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?([0-9]*\.)?[0-9]+$").expect("numeric pattern is valid")
});

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Integer string: optional sign, no leading zeros
pub fn is_int(value: Option<&Value>) -> bool {
    match present(value) {
        Some(Value::String(s)) => INT_PATTERN.is_match(s),
        Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

/// String with at least one character
pub fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(present(value), Some(Value::String(s)) if !s.is_empty())
}

/// Present, not null, and not the empty string
pub fn is_present(value: Option<&Value>) -> bool {
    match present(value) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// Numeric value of a JSON number or numeric string
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    match present(value)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC_PATTERN.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// JSON number or numeric string
pub fn is_numeric(value: Option<&Value>) -> bool {
    as_number(value).is_some()
}

/// Numeric and strictly greater than zero
pub fn is_positive(value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| n > 0.0)
}

/// Boolean value accepted in loose form: `true`, `false`, `"true"`,
/// `"false"`, `"1"`, `"0"`, `1`, `0`
pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match present(value)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    as_bool(value).is_some()
}

/// Missing, or a boolean in the loose form of [`as_bool`]
pub fn is_optional_boolean(value: Option<&Value>) -> bool {
    present(value).is_none() || is_boolean(value)
}

//! Guarded JSON helpers.
//!
//! Parsing and serialisation failures are turned into collected
//! [`ValidationIssue`]s or `None` so callers can keep gathering problems
//! instead of aborting on the first one.

use serde::Serialize;
use serde_json::Value;

use super::error::ValidationIssue;

/// Parses a button's parameters string, recording a failure in `errors`.
///
/// Returns `None` when the string is not valid JSON.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::json::safe_json_parse;
///
/// let mut errors = Vec::new();
/// assert!(safe_json_parse("{\"id\":\"a\"}", &mut errors, 0, "quick_reply").is_some());
/// assert!(safe_json_parse("{oops", &mut errors, 1, "quick_reply").is_none());
/// assert_eq!(errors.len(), 1);
/// ```
pub fn safe_json_parse(
    raw: &str,
    errors: &mut Vec<ValidationIssue>,
    index: usize,
    name: &str,
) -> Option<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(ValidationIssue::InvalidParamsJson {
                index,
                name: name.to_owned(),
                reason: error.to_string(),
            });
            None
        }
    }
}

/// Serialises a value to a JSON string, returning `None` on failure.
#[must_use]
pub fn safe_json_stringify<T>(value: &T) -> Option<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).ok()
}

/// Returns `true` when a JSON value would count as present in a loosely
/// typed payload.
///
/// `null`, `false`, `0`, `NaN`-like numbers and the empty string count as
/// absent; arrays and objects always count as present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Looks up `key` on an object value and returns it only when truthy.
#[must_use]
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|field| is_truthy(field))
}

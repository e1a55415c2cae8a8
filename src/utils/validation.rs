//! Building blocks for request validation.
//!
//! Every check returns `Result<_, Rejection>` so validators are plain
//! sequences of `?`: the first failing check ends the request and nothing
//! after it runs.

use axum::{http::StatusCode, response::IntoResponse};
use serde_json::{Number, Value};

use super::response;

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: StatusCode,
    pub message: String,
}

impl Rejection {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> axum::response::Response {
        response::error(self.status, self.message)
    }
}

pub type Checked<T> = Result<T, Rejection>;

/// Present and not `null`.
pub fn required<'a>(value: &'a Option<Value>, message: &str) -> Checked<&'a Value> {
    match value {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(Rejection::bad_request(message)),
    }
}

/// A non-empty string.
pub fn required_text(value: &Option<Value>, message: &str) -> Checked<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(Rejection::bad_request(message)),
    }
}

/// A JSON number strictly greater than zero, returned as it was written.
pub fn positive_number(value: &Value, message: &str) -> Checked<Number> {
    match value {
        Value::Number(number) if number.as_f64().is_some_and(|number| number > 0.0) => {
            Ok(number.clone())
        }
        _ => Err(Rejection::bad_request(message)),
    }
}

/// A whole JSON number strictly greater than zero. `2.0` counts as `2`.
pub fn positive_integer(value: Option<&Value>, message: &str) -> Checked<u32> {
    value
        .and_then(Value::as_f64)
        .filter(|number| {
            number.fract() == 0.0 && *number >= 1.0 && *number <= f64::from(u32::MAX)
        })
        .map(|number| number as u32)
        .ok_or_else(|| Rejection::bad_request(message))
}

/// A non-empty JSON array.
pub fn non_empty_array<'a>(value: &'a Value, message: &str) -> Checked<&'a Vec<Value>> {
    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        _ => Err(Rejection::bad_request(message)),
    }
}

/// Parses `raw` into one of a closed set of values.
pub fn one_of<T: std::str::FromStr>(raw: &str, message: &str) -> Checked<T> {
    raw.parse::<T>()
        .map_err(|_| Rejection::bad_request(message))
}

/// The id carried in a request body, if it carries a meaningful one.
/// Absent, `null` and `""` all mean "not supplied".
pub fn supplied_id(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) if id.is_empty() => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Fails when the body supplies an id different from the route's.
pub fn id_matches(
    body_id: &Option<Value>,
    route_id: &str,
    message: impl FnOnce(&str) -> String,
) -> Checked<()> {
    match supplied_id(body_id) {
        Some(id) if id != route_id => Err(Rejection::bad_request(message(&id))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_rejects_missing_and_null() {
        assert!(required(&None, "missing").is_err());
        assert!(required(&Some(Value::Null), "missing").is_err());
        assert_eq!(required(&Some(json!(0)), "missing"), Ok(&json!(0)));
    }

    #[test]
    fn required_text_wants_a_non_empty_string() {
        let err = required_text(&Some(json!("")), "Dish must include a name").unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Dish must include a name");
        assert!(required_text(&Some(json!(42)), "nope").is_err());
        assert_eq!(
            required_text(&Some(json!("Tofu")), "nope"),
            Ok(String::from("Tofu"))
        );
    }

    #[test]
    fn positive_number_rejects_zero_negatives_and_strings() {
        assert!(positive_number(&json!(0), "bad").is_err());
        assert!(positive_number(&json!(-3.5), "bad").is_err());
        assert!(positive_number(&json!("17"), "bad").is_err());
        assert_eq!(
            positive_number(&json!(12.99), "bad"),
            Ok(Number::from_f64(12.99).unwrap())
        );
        assert_eq!(positive_number(&json!(6), "bad"), Ok(Number::from(6)));
    }

    #[test]
    fn positive_integer_rejects_fractions() {
        assert!(positive_integer(Some(&json!(1.5)), "bad").is_err());
        assert!(positive_integer(Some(&json!(0)), "bad").is_err());
        assert!(positive_integer(Some(&json!("2")), "bad").is_err());
        assert!(positive_integer(None, "bad").is_err());
        assert_eq!(positive_integer(Some(&json!(3)), "bad"), Ok(3));
    }

    #[test]
    fn positive_integer_accepts_whole_floats() {
        assert_eq!(positive_integer(Some(&json!(2.0)), "bad"), Ok(2));
        assert!(positive_integer(Some(&json!(0.0)), "bad").is_err());
        assert!(positive_integer(Some(&json!(1e12)), "bad").is_err());
    }

    #[test]
    fn blank_body_ids_are_not_compared() {
        let message = |id: &str| format!("mismatch {id}");

        assert!(id_matches(&None, "abc", message).is_ok());
        assert!(id_matches(&Some(Value::Null), "abc", message).is_ok());
        assert!(id_matches(&Some(json!("")), "abc", message).is_ok());
        assert!(id_matches(&Some(json!("abc")), "abc", message).is_ok());
        assert_eq!(
            id_matches(&Some(json!("xyz")), "abc", message)
                .unwrap_err()
                .message,
            "mismatch xyz"
        );
    }
}

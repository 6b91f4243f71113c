//! Request body checks shared by the body gates.

use crate::error::AppError;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Parse a raw request body. An empty body is treated as `{}`.
    pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_slice(bytes).map_err(|_| AppError::Validation("malformed JSON body".into()))
    }

    /// Return `field` when the body is an object holding a non-empty string under it.
    pub fn required_text(body: &Value, field: &str) -> Result<String, AppError> {
        match body.get(field).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(AppError::Validation(format!("missing required {} field", field))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_an_empty_object() {
        assert_eq!(RequestValidator::parse_body(b"").unwrap(), json!({}));
        assert_eq!(RequestValidator::parse_body(b" \n").unwrap(), json!({}));
    }

    #[test]
    fn malformed_body_is_a_validation_error() {
        let err = RequestValidator::parse_body(b"{name:").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "malformed JSON body"));
    }

    #[test]
    fn required_text_accepts_non_empty_strings() {
        let body = json!({ "name": "Bob", "extra": 1 });
        assert_eq!(RequestValidator::required_text(&body, "name").unwrap(), "Bob");
    }

    #[test]
    fn required_text_rejects_missing_empty_and_non_strings() {
        for body in [json!({}), json!({ "text": "" }), json!({ "text": null }), json!({ "text": 5 }), json!(["text"])] {
            let err = RequestValidator::required_text(&body, "text").unwrap_err();
            assert_eq!(err.to_string(), "missing required text field");
        }
    }
}

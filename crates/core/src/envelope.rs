//! The `{ success, message?, data?, errors? }` wrapper every endpoint returns.
//!
//! Error responses also carry a machine-readable `code` so clients can tell
//! failure categories apart without looking at HTTP status codes.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
            code: None,
        }
    }

    /// Successful response carrying both a human-readable message and `data`.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
            code: None,
        }
    }

    /// Failure response.
    pub fn failure(
        code: impl Into<String>,
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
    ) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors,
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let value = serde_json::to_value(Envelope::<()>::message("Server is running")).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "Server is running" }));
    }

    #[test]
    fn failure_carries_field_errors() {
        let env = Envelope::<()>::failure(
            "VALIDATION_ERROR",
            "Validation failed",
            Some(vec![FieldError::new("email", "Please provide a valid email")]),
        );
        let value = serde_json::to_value(env).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["field"], "email");
        assert_eq!(value["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn parses_minimal_body() {
        let env: Envelope<Vec<String>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
        assert!(env.message.is_none());
    }
}

//! AppError and the API response envelope

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error raised by the booking rules, the form and configuration loading
///
/// `details` carries machine-readable context such as the offending field
/// or the raw input.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the stock message of `code`
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Missing form field; the field name goes into `details.field`
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", field))
            .with_detail("field", field)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Response body of the reservation API
///
/// Every field but `data` may be missing; a bare `{"data": ...}` is a
/// successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// No code, or code 0
    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_stock_message() {
        let err = AppError::new(ErrorCode::ReservationNotFound);
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
        assert_eq!(err.message, "Reservation not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::validation("first_name is too long")
            .with_detail("field", "first_name")
            .with_detail("max", 200);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "first_name");
        assert_eq!(details.get("max").unwrap(), 200);
    }

    #[test]
    fn test_required_names_the_field() {
        let err = AppError::required("mobile_number");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "mobile_number is required");
        assert_eq!(err.details.unwrap().get("field").unwrap(), "mobile_number");
        assert_eq!(AppError::config("bad tz").code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_error_envelope() {
        let response: ApiResponse<Value> =
            serde_json::from_str(r#"{"code":4101,"message":"closed","details":{"day":"Tue"}}"#)
                .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.code, Some(4101));
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_bare_data_envelope() {
        let response: ApiResponse<i32> = serde_json::from_str(r#"{"data":42}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.data, Some(42));
        assert!(response.message.is_empty());
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let response = ApiResponse {
            code: None,
            message: String::new(),
            data: Some("ok"),
            details: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"","data":"ok"}"#);
    }
}

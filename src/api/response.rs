//! API error response types.
//!
//! This module maps engine errors to the structured error bodies and HTTP
//! status codes returned by the API.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A structured API error body.
///
/// Every failed request returns `{"error": {"code": ..., "message": ...}}`
/// so clients can branch on the machine-readable code and show the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// The error payload.
    pub error: ApiErrorBody,
}

/// The payload of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// A stable machine-readable error code.
    pub code: String,
    /// A human-readable description of the failure.
    pub message: String,
}

impl ApiError {
    /// Creates an error body from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    /// The error body for an unparseable request payload.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An API error paired with the HTTP status it should be served with.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl From<EngineError> for ApiErrorResponse {
    /// Maps engine errors onto HTTP semantics: domain validation failures
    /// are unprocessable input (422), configuration problems are server
    /// faults (500).
    fn from(err: EngineError) -> Self {
        let (status, code) = match &err {
            EngineError::InvalidTimeFormat { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_TIME_FORMAT")
            }
            EngineError::InvalidShiftWindow { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SHIFT_WINDOW")
            }
            EngineError::InvalidPayInput { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PAY_INPUT")
            }
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigInvalid { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
        };

        Self {
            status,
            error: ApiError::new(code, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_maps_to_422() {
        let response: ApiErrorResponse = EngineError::InvalidTimeFormat {
            value: "25:00".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.error.code, "INVALID_TIME_FORMAT");
        assert!(response.error.error.message.contains("25:00"));
    }

    #[test]
    fn test_invalid_pay_input_maps_to_422() {
        let response: ApiErrorResponse = EngineError::InvalidPayInput {
            field: "hourly_rate".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.error.code, "INVALID_PAY_INPUT");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.error.code, "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_api_error_serializes_with_nested_body() {
        let error = ApiError::new("INVALID_PAY_INPUT", "bad rate");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"code\":\"INVALID_PAY_INPUT\""));
        assert!(json.contains("\"message\":\"bad rate\""));
    }

    #[test]
    fn test_malformed_json_helper() {
        let error = ApiError::malformed_json("unexpected end of input");
        assert_eq!(error.error.code, "MALFORMED_JSON");
    }
}

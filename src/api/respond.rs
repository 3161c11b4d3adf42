//! Error-to-response translation for the API surface.

use crate::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON error envelope returned by every failing route.
///
/// Built exactly once per failure; the transport finalizes it through
/// `IntoResponse`, so no handler ever writes a response twice.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    /// Map a failure onto the wire envelope.
    ///
    /// Status resolution: the upstream status when one exists, otherwise
    /// the status implied by the error kind, otherwise 500. Message
    /// resolution: the upstream reason text, otherwise the error's own
    /// display text, otherwise the literal `"Server Error"`. The failure
    /// is logged before the envelope is built.
    pub fn from_error(err: &Error) -> Self {
        log::error!("{}", err);

        let code = match err {
            Error::Upstream { status, .. } => *status,
            Error::MissingParameter(_) | Error::InvalidInput(_) => 400,
            Error::MethodNotAllowed(_) => 405,
            _ => 500,
        };

        let message = match err {
            Error::Upstream { reason, .. } if !reason.is_empty() => reason.clone(),
            _ => {
                let text = err.to_string();
                if text.is_empty() {
                    "Server Error".to_string()
                } else {
                    text
                }
            }
        };

        Self {
            success: false,
            code,
            message,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_defaults_to_500() {
        let body = ErrorResponse::from_error(&Error::Other("boom".to_string()));
        assert!(!body.success);
        assert_eq!(body.code, 500);
        assert_eq!(body.message, "boom");
    }

    #[test]
    fn test_empty_message_falls_back_to_server_error() {
        let body = ErrorResponse::from_error(&Error::Other(String::new()));
        assert_eq!(body.code, 500);
        assert_eq!(body.message, "Server Error");
    }

    #[test]
    fn test_upstream_status_wins() {
        let body = ErrorResponse::from_error(&Error::Upstream {
            status: 403,
            reason: "Forbidden".to_string(),
        });
        assert_eq!(body.code, 403);
        assert_eq!(body.message, "Forbidden");
    }

    #[test]
    fn test_missing_parameter_is_client_error() {
        let body = ErrorResponse::from_error(&Error::MissingParameter(
            "Missing required parameter: url".to_string(),
        ));
        assert_eq!(body.code, 400);
        assert_eq!(body.message, "Missing required parameter: url");
    }

    #[test]
    fn test_method_not_allowed_shape() {
        let body = ErrorResponse::from_error(&Error::MethodNotAllowed("POST".to_string()));
        assert_eq!(body.code, 405);
        assert_eq!(body.message, "Method POST Not Allowed");
    }

    #[test]
    fn test_envelope_serializes_success_false() {
        let body = ErrorResponse::from_error(&Error::Other("boom".to_string()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["code"], serde_json::json!(500));
    }
}

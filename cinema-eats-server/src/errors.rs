use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::mailing_list::MailingListError;

pub type AppResult<T> = Result<T, AppError>;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Subscription failed";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<MailingListError> for AppError {
    fn from(err: MailingListError) -> Self {
        match err {
            MailingListError::Rejected { status, message } => {
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                let message = message
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
                Self::new(status, message)
            }
            other => {
                error!("Mailing list request failed: {}", other);
                Self::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_keeps_upstream_status_and_message() {
        let err = AppError::from(MailingListError::Rejected {
            status: 400,
            message: Some("Invalid email address".into()),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid email address");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let err = AppError::from(MailingListError::Rejected {
            status: 401,
            message: None,
        });
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, REJECTED_FALLBACK_MESSAGE);
    }

    #[test]
    fn other_failures_are_internal() {
        let err = AppError::from(MailingListError::Endpoint(
            url::ParseError::EmptyHost,
        ));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
    }
}

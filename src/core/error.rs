use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{MSG_DELIVERY_FAILED, MSG_INTERNAL_ERROR, MSG_ROUTE_NOT_FOUND};
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid email format: {0}")]
    InvalidEmailFormat(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Provider call failed. `details` carries the provider text only when
    /// error-detail exposure is enabled.
    #[error("Delivery error")]
    Delivery { details: Option<String> },

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MissingField(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InvalidEmailFormat(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg, None),
            AppError::Delivery { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_DELIVERY_FAILED.to_string(),
                details,
            ),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MSG_ROUTE_NOT_FOUND.to_string(), None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_INTERNAL_ERROR.to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(error, details));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::MissingField("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidEmailFormat("x".into()), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::PayloadTooLarge("x".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::Delivery { details: None },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::RouteNotFound, StatusCode::NOT_FOUND),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}

// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::notifications::SubmissionError;
use crate::services::pricing::PricingError;

/// Shown to visitors whenever the notification sink fails.
pub const RETRY_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Pricing(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Submission(err) => {
                tracing::warn!(error = %err, "submission failed");
                (StatusCode::BAD_GATEWAY, RETRY_MESSAGE.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

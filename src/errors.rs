use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::FieldError;
use crate::services::forms::SubmissionError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Submission(SubmissionError),
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::NotConfigured(_) => AppError::Config(err.to_string()),
            other => AppError::Submission(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Submission(_) => StatusCode::BAD_GATEWAY,
        };

        let body = match &self {
            AppError::Validation(errors) => {
                serde_json::json!({ "error": self.to_string(), "fields": errors })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::domain::bank::error::BankError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DatabaseError(String),

    #[error("request timed out")]
    Timeout,
}

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::NotFound(_) => AppError::NotFound(err.to_string()),
            BankError::Store { .. } => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

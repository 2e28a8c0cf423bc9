use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the member API, each mapped to one HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Member not found")]
    NotFound,

    #[error("A member with this id already exists")]
    Conflict,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound | ApiError::Conflict => status.into_response(),
            ApiError::MalformedInput(detail) => {
                (status, Json(json!({ "error": detail }))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "Unexpected store failure");
                (
                    status,
                    Json(json!({ "error": "An internal error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup failures. Any of these means the process must exit before it
/// binds a socket.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read question data from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed question data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Question data contains zero records")]
    Empty,
}

/// Request-scoped failures, translated at the handler boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Question store is empty")]
    EmptyStore,

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Too many requests")]
    RateLimited,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyStore => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        };

        (status, self.to_string()).into_response()
    }
}

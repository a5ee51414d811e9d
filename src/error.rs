// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorBody;
use crate::services::assistant::AssistantError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Assistant(AssistantError::Configuration(msg)) => {
                error!("configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Configuration error: {msg}"),
                )
            }
            AppError::Assistant(AssistantError::Generation(err)) => {
                error!(error = ?err, "generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing request: {err}"),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

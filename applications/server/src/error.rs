/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tome_chapters::ChapterError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chapter extraction failed: {0}")]
    Extraction(#[from] ChapterError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            // Failures before any bytes could be parsed map to 502
            ServerError::Extraction(ChapterError::EmptyBody) => {
                tracing::warn!("upstream returned no body");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "No response body" })),
                )
                    .into_response()
            }
            ServerError::Extraction(ref e) if e.is_upstream() => {
                tracing::warn!("upstream fetch failed: {}", e);
                let mut body = json!({ "error": "Failed to fetch audio" });
                if let Some(status) = e.upstream_status() {
                    body["status"] = json!(status);
                }
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
            // Parse errors and timeouts are our side of the fence: 500
            ServerError::Extraction(e) => {
                tracing::error!("chapter extraction failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Chapter extraction failed",
                        "detail": e.to_string(),
                    })),
                )
                    .into_response()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Configuration error" })),
                )
                    .into_response()
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "IO error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Chapter extraction API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tome_core::Chapter;

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

/// GET /api/chapters - Extract the chapter list from the configured
/// audio resource.
///
/// Always a fresh fetch and parse; the response is marked
/// non-cacheable so a stale list never sticks. Failures map to 502
/// (upstream) or 500 (parse) via `ServerError`.
pub async fn chapters(State(state): State<AppState>) -> Result<Response> {
    let chapters = state
        .extractor
        .extract(&state.config.media.audio_url)
        .await?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(ChaptersResponse { chapters }),
    )
        .into_response())
}

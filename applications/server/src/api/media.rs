/// Audiobook descriptor API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use tome_core::Chapter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub title: String,
    pub author: String,
    pub audio_url: String,
    pub art_url: String,
    /// Chapters the client should fall back to when `/api/chapters` fails
    pub fallback_chapters: Vec<Chapter>,
}

/// GET /api/media - The configured audiobook descriptor
pub async fn media(State(state): State<AppState>) -> Json<MediaResponse> {
    let media = &state.config.media;
    Json(MediaResponse {
        title: media.title.clone(),
        author: media.author.clone(),
        audio_url: media.audio_url.clone(),
        art_url: media.art_url.clone(),
        fallback_chapters: media.fallback_chapters.clone(),
    })
}

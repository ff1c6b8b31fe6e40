/// Shared application state
use crate::config::ServerConfig;
use std::sync::Arc;
use tome_chapters::ChapterExtractor;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub extractor: Arc<ChapterExtractor>,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>, extractor: Arc<ChapterExtractor>) -> Self {
        Self { config, extractor }
    }
}

/// Tome server library
pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{routing::get, Router};
use state::AppState;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router: JSON API under `/api`, SPA static
/// files with index fallback everywhere else.
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/media", get(api::media::media))
        .route("/chapters", get(api::chapters::chapters));

    let web_dir = app_state.config.server.web_dir.clone();
    let spa = ServeDir::new(&web_dir).not_found_service(ServeFile::new(web_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

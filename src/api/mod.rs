pub mod charts;
pub mod history;

use crate::services::{ChartHistory, EnrichmentResolver};
use axum::{routing::get, Router};
use std::sync::Arc;

pub use charts::chart_routes;
pub use history::history_routes;

pub struct AppState {
    pub resolver: EnrichmentResolver,
    pub chart_playlist_id: String,
    pub genre_probes: Vec<String>,
    pub chart_history: Option<ChartHistory>,
}

/// All API routes, without transport middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .merge(chart_routes())
                .merge(history_routes())
                .route("/health", get(|| async { "ok" }))
                .with_state(state),
        )
}

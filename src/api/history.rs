use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::Trajectory;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn history_routes() -> Router<Arc<AppState>> {
    Router::new().route("/history/number-ones", get(number_ones))
}

async fn number_ones(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Trajectory>>> {
    let history = state
        .chart_history
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No chart history configured".to_string()))?;

    Ok(Json(history.number_one_trajectories()))
}

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::{Artist, AudioFeature, ScatterSeries, Track, TrackTable};
use crate::services::aggregator::{most_frequent_artist, scatter_by_genre, to_table};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct TopArtistResponse {
    artist: Arc<Artist>,
    track_count: usize,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ScatterQuery {
    x: String,
    y: String,
    genre: String,
}

pub fn chart_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/charts/hot100", get(hot100))
        .route("/playlists/:id/tracks", get(playlist_tracks))
        .route("/playlists/:id/table", get(playlist_table))
        .route("/playlists/:id/top-artist", get(top_artist))
        .route("/playlists/:id/scatter", get(scatter))
}

async fn hot100(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Track>>> {
    let tracks = state.resolver.resolve(&state.chart_playlist_id).await?;
    Ok(Json(tracks))
}

async fn playlist_tracks(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Track>>> {
    let tracks = state.resolver.resolve(&id).await?;
    Ok(Json(tracks))
}

async fn playlist_table(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrackTable>> {
    let tracks = state.resolver.resolve(&id).await?;
    Ok(Json(to_table(&tracks, &state.genre_probes)))
}

async fn top_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TopArtistResponse>> {
    let tracks = state.resolver.resolve(&id).await?;
    let (artist, track_count) = most_frequent_artist(&tracks)?;

    let message = format!(
        "{} has the most number of tracks on this week's Hot 100 at a whopping {} tracks!",
        artist.name, track_count
    );
    tracing::info!("{}", message);

    Ok(Json(TopArtistResponse {
        artist,
        track_count,
        message,
    }))
}

async fn scatter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ScatterSeries>> {
    let x: AudioFeature = query.x.parse().map_err(AppError::Validation)?;
    let y: AudioFeature = query.y.parse().map_err(AppError::Validation)?;
    if query.genre.trim().is_empty() {
        return Err(AppError::Validation("genre must not be empty".to_string()));
    }

    let tracks = state.resolver.resolve(&id).await?;
    Ok(Json(scatter_by_genre(&tracks, x, y, query.genre.trim())))
}

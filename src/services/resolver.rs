use crate::error::{AppError, Result};
use crate::models::{Artist, AudioFeatures, PlaylistEntry, Track};
use crate::services::catalog::{CatalogClient, ARTIST_BATCH_LIMIT};
use futures::future::try_join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns a chart playlist into fully joined `Track`s.
///
/// The catalog answers batch lookups in arbitrary order, so every join is
/// keyed by id. The artist and audio indexes live only for the duration of
/// one `resolve` call.
pub struct EnrichmentResolver {
    catalog: Arc<dyn CatalogClient>,
}

impl EnrichmentResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Either every entry resolves or the whole call fails; partial results
    /// are never returned.
    pub async fn resolve(&self, playlist_id: &str) -> Result<Vec<Track>> {
        if playlist_id.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.catalog.get_playlist_entries(playlist_id).await?;
        if entries.is_empty() {
            info!("Playlist {} is empty", playlist_id);
            return Ok(Vec::new());
        }

        let track_ids: Vec<String> = entries.iter().map(|e| e.track_id.clone()).collect();
        let audio_index = self.fetch_audio_features(&track_ids).await?;

        let artist_ids = unique_artist_ids(&entries);
        let artist_index = self.fetch_artists(&artist_ids).await?;

        let tracks = entries
            .into_iter()
            .map(|entry| join_entry(entry, &audio_index, &artist_index))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Resolved {} tracks with {} distinct artists from playlist {}",
            tracks.len(),
            artist_index.len(),
            playlist_id
        );

        Ok(tracks)
    }

    async fn fetch_audio_features(&self, track_ids: &[String]) -> Result<HashMap<String, AudioFeatures>> {
        let features = self.catalog.get_audio_features(track_ids).await?;

        Ok(features.into_iter().map(|f| (f.id.clone(), f)).collect())
    }

    async fn fetch_artists(&self, artist_ids: &[String]) -> Result<HashMap<String, Arc<Artist>>> {
        let chunks = chunk_ids(artist_ids, ARTIST_BATCH_LIMIT);
        debug!(
            "Looking up {} artists in {} batches",
            artist_ids.len(),
            chunks.len()
        );

        let batches = try_join_all(chunks.iter().map(|chunk| self.catalog.get_artists(chunk))).await?;

        Ok(batches
            .into_iter()
            .flatten()
            .map(|record| {
                let artist = Artist {
                    id: record.id,
                    name: record.name,
                    genres: record.genres,
                };
                (artist.id.clone(), Arc::new(artist))
            })
            .collect())
    }
}

/// Distinct artist ids across all entries, in first-seen order.
pub fn unique_artist_ids(entries: &[PlaylistEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .flat_map(|e| e.artist_ids.iter())
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Consecutive chunks of at most `size` ids; the last one may be partial.
pub fn chunk_ids(ids: &[String], size: usize) -> Vec<&[String]> {
    ids.chunks(size.max(1)).collect()
}

fn join_entry(
    entry: PlaylistEntry,
    audio_index: &HashMap<String, AudioFeatures>,
    artist_index: &HashMap<String, Arc<Artist>>,
) -> Result<Track> {
    if entry.artist_ids.is_empty() {
        return Err(AppError::IncompleteJoin(format!(
            "track {} has no credited artists",
            entry.track_id
        )));
    }

    let audio_features = audio_index.get(&entry.track_id).cloned().ok_or_else(|| {
        AppError::IncompleteJoin(format!("no audio features for track {}", entry.track_id))
    })?;

    let artists = entry
        .artist_ids
        .iter()
        .map(|id| {
            artist_index.get(id).cloned().ok_or_else(|| {
                AppError::IncompleteJoin(format!(
                    "artist {} on track {} was not returned by the catalog",
                    id, entry.track_id
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Track {
        id: entry.track_id,
        name: entry.track_name,
        artists,
        audio_features,
    })
}

//! In-memory catalog and record builders shared by unit tests.

use crate::error::{AppError, Result};
use crate::models::{Artist, ArtistRecord, AudioFeatures, PlaylistEntry, Track};
use crate::services::catalog::CatalogClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn entry(track_id: &str, name: &str, artist_ids: &[&str]) -> PlaylistEntry {
    PlaylistEntry {
        track_id: track_id.to_string(),
        track_name: name.to_string(),
        artist_ids: artist_ids.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn features(track_id: &str) -> AudioFeatures {
    AudioFeatures {
        id: track_id.to_string(),
        danceability: 0.5,
        energy: 0.5,
        key: 5,
        loudness: -6.0,
        mode: 1,
        speechiness: 0.1,
        acousticness: 0.2,
        instrumentalness: 0.0,
        liveness: 0.1,
        valence: 0.5,
        tempo: 120.0,
        duration_ms: 180_000,
        time_signature: 4,
    }
}

pub fn record(id: &str, name: &str, genres: &[&str]) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

pub fn artist(id: &str, genres: &[&str]) -> Arc<Artist> {
    Arc::new(Artist {
        id: id.to_string(),
        name: format!("Artist {}", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    })
}

pub fn track(id: &str, artists: &[&Arc<Artist>]) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        artists: artists.iter().map(|a| Arc::clone(a)).collect(),
        audio_features: features(id),
    }
}

/// Catalog fake that answers batch calls in reverse order and records every
/// request it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub entries: Vec<PlaylistEntry>,
    pub audio: HashMap<String, AudioFeatures>,
    pub artists: HashMap<String, ArtistRecord>,
    pub unavailable: bool,
    pub playlist_calls: Mutex<usize>,
    pub audio_calls: Mutex<Vec<Vec<String>>>,
    pub artist_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeCatalog {
    /// Every referenced track and artist resolvable.
    pub fn complete(entries: Vec<PlaylistEntry>) -> Self {
        let audio = entries
            .iter()
            .map(|e| (e.track_id.clone(), features(&e.track_id)))
            .collect();
        let artists = entries
            .iter()
            .flat_map(|e| e.artist_ids.iter())
            .map(|id| (id.clone(), record(id, &format!("Artist {}", id), &["pop"])))
            .collect();

        Self {
            entries,
            audio,
            artists,
            ..Default::default()
        }
    }

    pub fn audio_calls(&self) -> Vec<Vec<String>> {
        self.audio_calls.lock().unwrap().clone()
    }

    pub fn artist_calls(&self) -> Vec<Vec<String>> {
        self.artist_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn get_playlist_entries(&self, _playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        *self.playlist_calls.lock().unwrap() += 1;
        if self.unavailable {
            return Err(AppError::UpstreamUnavailable("connection refused".to_string()));
        }
        Ok(self.entries.clone())
    }

    async fn get_audio_features(&self, track_ids: &[String]) -> Result<Vec<AudioFeatures>> {
        self.audio_calls.lock().unwrap().push(track_ids.to_vec());
        Ok(track_ids
            .iter()
            .rev()
            .filter_map(|id| self.audio.get(id).cloned())
            .collect())
    }

    async fn get_artists(&self, artist_ids: &[String]) -> Result<Vec<ArtistRecord>> {
        self.artist_calls.lock().unwrap().push(artist_ids.to_vec());
        Ok(artist_ids
            .iter()
            .rev()
            .filter_map(|id| self.artists.get(id).cloned())
            .collect())
    }
}

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ArtistRecord, AudioFeatures, PlaylistEntry};
use crate::services::catalog::{CatalogClient, ARTIST_BATCH_LIMIT, AUDIO_FEATURES_BATCH_LIMIT};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::Mutex;

/// Page size the playlist-items endpoint allows.
const PLAYLIST_PAGE_SIZE: usize = 100;

/// Refresh the access token this long before it actually expires.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug)]
pub struct SpotifyClient {
    api_url: String,
    auth_url: String,
    client_id: String,
    client_secret: String,
    client: Client,
    token: Mutex<Option<CachedToken>>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct PlaylistPage {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    track: Option<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    id: Option<String>,
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtistRef>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtistRef {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AudioFeaturesResponse {
    audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Deserialize)]
struct ArtistsResponse {
    artists: Vec<Option<ArtistRecord>>,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_url: config.spotify_api_url.trim_end_matches('/').to_string(),
            auth_url: config.spotify_auth_url.clone(),
            client_id: config.spotify_client_id.clone(),
            client_secret: config.spotify_client_secret.clone(),
            client,
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() {
                return Ok(token.value.clone());
            }
        }

        tracing::debug!("Requesting client-credentials token from {}", self.auth_url);

        let response = self
            .client
            .post(&self.auth_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Spotify auth error: {} - {}", status, body);
            return Err(AppError::UpstreamUnavailable(format!(
                "Token endpoint returned status: {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to parse token: {}", e)))?;

        let expires_at =
            Utc::now() + Duration::seconds(token.expires_in - TOKEN_EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let token = self.access_token().await?;

        tracing::debug!("Requesting catalog: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Catalog resource not found: {}", url)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Spotify API error: {} - {}", status, body);
            return Err(AppError::UpstreamUnavailable(format!(
                "API returned status: {} - {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::UpstreamUnavailable(format!(
                "Failed to parse response: {} - Response: {}",
                e,
                excerpt(&response_text, 200)
            ))
        })
    }
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn get_playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>> {
        let mut entries = Vec::new();
        let mut page: PlaylistPage = self
            .get_json(
                &format!("{}/playlists/{}/tracks", self.api_url, playlist_id),
                &[("limit", PLAYLIST_PAGE_SIZE.to_string())],
            )
            .await?;

        loop {
            let next = page.next.take();
            entries.extend(entries_from_page(page)?);

            match next {
                Some(url) => page = self.get_json(&url, &[]).await?,
                None => break,
            }
        }

        tracing::debug!("Playlist {} has {} entries", playlist_id, entries.len());
        Ok(entries)
    }

    async fn get_audio_features(&self, track_ids: &[String]) -> Result<Vec<AudioFeatures>> {
        let mut features = Vec::with_capacity(track_ids.len());

        for chunk in track_ids.chunks(AUDIO_FEATURES_BATCH_LIMIT) {
            let response: AudioFeaturesResponse = self
                .get_json(
                    &format!("{}/audio-features", self.api_url),
                    &[("ids", chunk.join(","))],
                )
                .await?;

            // Unknown ids come back as null
            features.extend(response.audio_features.into_iter().flatten());
        }

        Ok(features)
    }

    async fn get_artists(&self, artist_ids: &[String]) -> Result<Vec<ArtistRecord>> {
        if artist_ids.len() > ARTIST_BATCH_LIMIT {
            return Err(AppError::Validation(format!(
                "At most {} artists per lookup, got {}",
                ARTIST_BATCH_LIMIT,
                artist_ids.len()
            )));
        }

        let response: ArtistsResponse = self
            .get_json(
                &format!("{}/artists", self.api_url),
                &[("ids", artist_ids.join(","))],
            )
            .await?;

        Ok(response.artists.into_iter().flatten().collect())
    }
}

/// Items without a catalog track (removed songs, local files) carry no ids
/// to join on and are skipped. A catalog track crediting an artist without
/// an id cannot be joined and fails the whole page.
fn entries_from_page(page: PlaylistPage) -> Result<Vec<PlaylistEntry>> {
    let mut entries = Vec::with_capacity(page.items.len());

    for item in page.items {
        let Some(track) = item.track else {
            continue;
        };
        let Some(track_id) = track.id else {
            tracing::warn!("Skipping playlist item without a track id: {}", track.name);
            continue;
        };
        let artist_ids = track
            .artists
            .into_iter()
            .map(|a| a.id)
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| {
                AppError::IncompleteJoin(format!(
                    "track {} credits an artist without a catalog id",
                    track_id
                ))
            })?;

        entries.push(PlaylistEntry {
            track_id,
            track_name: track.name,
            artist_ids,
        });
    }

    Ok(entries)
}

/// First `max_chars` characters of `text`, for error messages.
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

use crate::error::Result;
use crate::models::{ArtistRecord, AudioFeatures, PlaylistEntry};
use async_trait::async_trait;

/// Most artist ids the catalog accepts in a single lookup.
pub const ARTIST_BATCH_LIMIT: usize = 50;

/// Most track ids the catalog accepts in a single audio-features request.
pub const AUDIO_FEATURES_BATCH_LIMIT: usize = 100;

/// Remote catalog the enrichment pipeline reads from.
///
/// Implementations report transport and auth failures as
/// `AppError::UpstreamUnavailable`. Responses to the batch calls are keyed by
/// id and may come back in any order.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn get_playlist_entries(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>>;

    async fn get_audio_features(&self, track_ids: &[String]) -> Result<Vec<AudioFeatures>>;

    /// `artist_ids` must hold at most `ARTIST_BATCH_LIMIT` ids.
    async fn get_artists(&self, artist_ids: &[String]) -> Result<Vec<ArtistRecord>>;
}

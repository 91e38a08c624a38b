use serde::{Deserialize, Serialize};

/// One chart position as returned by the catalog, before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub track_id: String,
    pub track_name: String,
    /// Artist ids in credit order
    pub artist_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

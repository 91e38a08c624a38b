use crate::models::AudioFeatures;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Flattened per-track record handed to plotting consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRow {
    #[serde(flatten)]
    pub audio_features: AudioFeatures,
    pub track_name: String,
    pub artist_ids: Vec<String>,
    pub artist_names: Vec<String>,
    pub genres: BTreeSet<String>,
    /// Keyed `is_<genre>` for every configured probe genre
    #[serde(flatten)]
    pub genre_flags: BTreeMap<String, bool>,
}

impl TrackRow {
    pub fn flag(&self, genre: &str) -> Option<bool> {
        self.genre_flags.get(&format!("is_{}", genre)).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackTable {
    pub probes: Vec<String>,
    pub rows: Vec<TrackRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub track_name: String,
}

/// Two point groups split on a genre flag, ready for a scatter renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub x_feature: String,
    pub y_feature: String,
    pub genre: String,
    pub matching: Vec<ScatterPoint>,
    pub other: Vec<ScatterPoint>,
}

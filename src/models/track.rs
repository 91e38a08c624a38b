use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

/// Acoustic descriptors for one track, as reported by the catalog.
/// `id` is the owning track's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_ms: i64,
    pub time_signature: i32,
}

/// A fully joined chart track. Artists are listed in credit order and are
/// shared with every other track by the same artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Arc<Artist>>,
    pub audio_features: AudioFeatures,
}

/// Names one scalar column of `AudioFeatures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFeature {
    Danceability,
    Energy,
    Key,
    Loudness,
    Mode,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    DurationMs,
    TimeSignature,
}

impl AudioFeature {
    pub fn name(self) -> &'static str {
        match self {
            AudioFeature::Danceability => "danceability",
            AudioFeature::Energy => "energy",
            AudioFeature::Key => "key",
            AudioFeature::Loudness => "loudness",
            AudioFeature::Mode => "mode",
            AudioFeature::Speechiness => "speechiness",
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Instrumentalness => "instrumentalness",
            AudioFeature::Liveness => "liveness",
            AudioFeature::Valence => "valence",
            AudioFeature::Tempo => "tempo",
            AudioFeature::DurationMs => "duration_ms",
            AudioFeature::TimeSignature => "time_signature",
        }
    }
}

impl std::str::FromStr for AudioFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "danceability" => Ok(AudioFeature::Danceability),
            "energy" => Ok(AudioFeature::Energy),
            "key" => Ok(AudioFeature::Key),
            "loudness" => Ok(AudioFeature::Loudness),
            "mode" => Ok(AudioFeature::Mode),
            "speechiness" => Ok(AudioFeature::Speechiness),
            "acousticness" => Ok(AudioFeature::Acousticness),
            "instrumentalness" => Ok(AudioFeature::Instrumentalness),
            "liveness" => Ok(AudioFeature::Liveness),
            "valence" => Ok(AudioFeature::Valence),
            "tempo" => Ok(AudioFeature::Tempo),
            "duration_ms" => Ok(AudioFeature::DurationMs),
            "time_signature" => Ok(AudioFeature::TimeSignature),
            other => Err(format!("Unknown audio feature: {}", other)),
        }
    }
}

impl AudioFeatures {
    pub fn value(&self, feature: AudioFeature) -> f64 {
        match feature {
            AudioFeature::Danceability => self.danceability,
            AudioFeature::Energy => self.energy,
            AudioFeature::Key => self.key as f64,
            AudioFeature::Loudness => self.loudness,
            AudioFeature::Mode => self.mode as f64,
            AudioFeature::Speechiness => self.speechiness,
            AudioFeature::Acousticness => self.acousticness,
            AudioFeature::Instrumentalness => self.instrumentalness,
            AudioFeature::Liveness => self.liveness,
            AudioFeature::Valence => self.valence,
            AudioFeature::Tempo => self.tempo,
            AudioFeature::DurationMs => self.duration_ms as f64,
            AudioFeature::TimeSignature => self.time_signature as f64,
        }
    }
}

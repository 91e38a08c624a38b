use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the weekly historical chart export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub date: NaiveDate,
    pub title: String,
    pub artist: String,
    pub rank: u32,
    #[serde(rename = "peakPos")]
    pub peak_pos: u32,
    #[serde(rename = "lastPos")]
    pub last_pos: u32,
    #[serde(rename = "isNew", deserialize_with = "flexible_bool")]
    pub is_new: bool,
    pub weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankPoint {
    pub date: NaiveDate,
    pub rank: u32,
    pub artist: String,
}

/// Weekly rank path of one song that reached number one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub title: String,
    pub points: Vec<RankPoint>,
}

/// The chart export writes booleans as `True`/`False`.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid boolean: {}", other))),
    }
}

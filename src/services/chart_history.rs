use crate::error::Result;
use crate::models::{ChartEntry, RankPoint, Trajectory};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Weekly chart rows loaded from the historical export
/// (`date,title,artist,rank,peakPos,lastPos,isNew,weeks`).
#[derive(Debug, Clone, Default)]
pub struct ChartHistory {
    entries: Vec<ChartEntry>,
}

impl ChartHistory {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path)?;
        let history = Self::from_csv_reader(reader)?;
        info!(
            "Loaded {} chart rows from {}",
            history.entries.len(),
            path.display()
        );
        Ok(history)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        Self::from_csv_reader(csv::Reader::from_reader(rdr))
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let entries = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ChartEntry>, csv::Error>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Rank paths of every song that reached number one.
    ///
    /// A row is kept when its title is among the number-one titles and its
    /// artist is among the number-one artists; the two are checked
    /// independently. Points are ordered by date; ranks are raw chart
    /// positions (1 is best).
    pub fn number_one_trajectories(&self) -> Vec<Trajectory> {
        let top_titles: HashSet<&str> = self
            .entries
            .iter()
            .filter(|e| e.rank == 1)
            .map(|e| e.title.as_str())
            .collect();
        let top_artists: HashSet<&str> = self
            .entries
            .iter()
            .filter(|e| e.rank == 1)
            .map(|e| e.artist.as_str())
            .collect();

        let mut by_title: BTreeMap<&str, Vec<RankPoint>> = BTreeMap::new();
        for entry in &self.entries {
            if top_titles.contains(entry.title.as_str()) && top_artists.contains(entry.artist.as_str()) {
                by_title.entry(entry.title.as_str()).or_default().push(RankPoint {
                    date: entry.date,
                    rank: entry.rank,
                    artist: entry.artist.clone(),
                });
            }
        }

        by_title
            .into_iter()
            .map(|(title, mut points)| {
                points.sort_by_key(|p| p.date);
                Trajectory {
                    title: title.to_string(),
                    points,
                }
            })
            .collect()
    }
}

pub mod catalog;
pub mod chart;
pub mod table;
pub mod track;

pub use catalog::{ArtistRecord, PlaylistEntry};
pub use chart::{ChartEntry, RankPoint, Trajectory};
pub use table::{ScatterPoint, ScatterSeries, TrackRow, TrackTable};
pub use track::{Artist, AudioFeature, AudioFeatures, Track};

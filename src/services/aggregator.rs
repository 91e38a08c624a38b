use crate::error::{AppError, Result};
use crate::models::{Artist, AudioFeature, ScatterPoint, ScatterSeries, Track, TrackRow, TrackTable};
use crate::services::genre::{genres_of, has_genre};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// One row per track, in input order. Each probe genre becomes an
/// `is_<genre>` flag computed with `has_genre`.
pub fn to_table(tracks: &[Track], probes: &[String]) -> TrackTable {
    let rows = tracks
        .iter()
        .map(|track| {
            let genre_flags: BTreeMap<String, bool> = probes
                .iter()
                .map(|probe| (format!("is_{}", probe), has_genre(track, probe)))
                .collect();

            TrackRow {
                audio_features: track.audio_features.clone(),
                track_name: track.name.clone(),
                artist_ids: track.artists.iter().map(|a| a.id.clone()).collect(),
                artist_names: track.artists.iter().map(|a| a.name.clone()).collect(),
                genres: genres_of(track),
                genre_flags,
            }
        })
        .collect();

    TrackTable {
        probes: probes.to_vec(),
        rows,
    }
}

/// The artist credited on the most tracks, with that track count.
///
/// A track counts once per artist even if the catalog lists an artist twice
/// on it. When several artists share the top count, which one is returned is
/// unspecified.
pub fn most_frequent_artist(tracks: &[Track]) -> Result<(Arc<Artist>, usize)> {
    let mut tally: HashMap<&str, (&Arc<Artist>, usize)> = HashMap::new();

    for track in tracks {
        let mut credited = HashSet::new();
        for artist in &track.artists {
            if credited.insert(artist.id.as_str()) {
                tally.entry(artist.id.as_str()).or_insert((artist, 0)).1 += 1;
            }
        }
    }

    tally
        .into_values()
        .max_by_key(|(_, count)| *count)
        .map(|(artist, count)| (Arc::clone(artist), count))
        .ok_or_else(|| AppError::EmptyInput("No tracks to count artists over".to_string()))
}

/// Splits tracks into two point groups on whether they carry `genre`, for
/// plotting feature `x` against feature `y`. Track order is kept in each group.
pub fn scatter_by_genre(tracks: &[Track], x: AudioFeature, y: AudioFeature, genre: &str) -> ScatterSeries {
    let (matching, other): (Vec<&Track>, Vec<&Track>) =
        tracks.iter().partition(|track| has_genre(track, genre));

    let points = |group: Vec<&Track>| -> Vec<ScatterPoint> {
        group
            .into_iter()
            .map(|track| ScatterPoint {
                x: track.audio_features.value(x),
                y: track.audio_features.value(y),
                track_name: track.name.clone(),
            })
            .collect()
    };

    ScatterSeries {
        x_feature: x.name().to_string(),
        y_feature: y.name().to_string(),
        genre: genre.to_string(),
        matching: points(matching),
        other: points(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{artist, track};

    fn probes() -> Vec<String> {
        ["pop", "rap", "dance", "country"]
            .iter()
            .map(|g| g.to_string())
            .collect()
    }

    #[test]
    fn test_table_rows_follow_track_order() {
        let pop = artist("p", &["dance pop"]);
        let rapper = artist("r", &["trap", "southern hip hop"]);
        let twang = artist("c", &["contemporary country"]);
        let tracks = vec![
            track("t3", &[&twang]),
            track("t1", &[&pop, &rapper]),
            track("t2", &[&rapper]),
        ];

        let table = to_table(&tracks, &probes());

        let names: Vec<&str> = table.rows.iter().map(|r| r.track_name.as_str()).collect();
        assert_eq!(names, vec!["Track t3", "Track t1", "Track t2"]);
        assert_eq!(table.rows[1].artist_ids, vec!["p".to_string(), "r".to_string()]);
        assert_eq!(
            table.rows[1].artist_names,
            vec!["Artist p".to_string(), "Artist r".to_string()]
        );
        assert_eq!(table.rows[0].audio_features.id, "t3");
    }

    #[test]
    fn test_flags_match_has_genre() {
        let pop = artist("p", &["dance pop"]);
        let rapper = artist("r", &["trap", "southern hip hop"]);
        let tracks = vec![track("t1", &[&pop]), track("t2", &[&rapper]), track("t3", &[&pop, &rapper])];

        let table = to_table(&tracks, &probes());

        for (row, track) in table.rows.iter().zip(&tracks) {
            for probe in probes() {
                assert_eq!(row.flag(&probe), Some(has_genre(track, &probe)));
            }
        }
        // "trap" contains "rap"
        assert_eq!(table.rows[1].flag("rap"), Some(true));
        assert_eq!(table.rows[0].flag("dance"), Some(true));
        assert_eq!(table.rows[0].flag("country"), Some(false));
    }

    #[test]
    fn test_table_serializes_flat_columns() {
        let pop = artist("p", &["pop"]);
        let table = to_table(&[track("t1", &[&pop])], &probes());

        let row = serde_json::to_value(&table.rows[0]).unwrap();

        assert_eq!(row["id"], "t1");
        assert_eq!(row["danceability"], 0.5);
        assert_eq!(row["track_name"], "Track t1");
        assert_eq!(row["is_pop"], true);
        assert_eq!(row["is_rap"], false);
    }

    #[test]
    fn test_most_frequent_artist_clear_winner() {
        let a = artist("a", &[]);
        let b = artist("b", &[]);
        let tracks = vec![
            track("t1", &[&a]),
            track("t2", &[&a, &b]),
            track("t3", &[&a]),
        ];

        let (winner, count) = most_frequent_artist(&tracks).unwrap();

        assert_eq!(winner.id, "a");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_most_frequent_artist_tie_returns_any_tied_artist() {
        let a = artist("a", &[]);
        let b = artist("b", &[]);
        let c = artist("c", &[]);
        let tracks = vec![
            track("t1", &[&a, &b]),
            track("t2", &[&a]),
            track("t3", &[&b, &c]),
        ];

        let (winner, count) = most_frequent_artist(&tracks).unwrap();

        // Tie-break is unspecified; any artist with the top count is acceptable.
        assert_eq!(count, 2);
        assert!(winner.id == "a" || winner.id == "b");
    }

    #[test]
    fn test_repeated_credit_counts_once_per_track() {
        let a = artist("a", &[]);
        let b = artist("b", &[]);
        let tracks = vec![
            track("t1", &[&a, &a, &a]),
            track("t2", &[&b]),
            track("t3", &[&b]),
        ];

        let (winner, count) = most_frequent_artist(&tracks).unwrap();

        assert_eq!(winner.id, "b");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_most_frequent_artist_empty_input() {
        assert!(matches!(most_frequent_artist(&[]), Err(AppError::EmptyInput(_))));
    }

    #[test]
    fn test_scatter_splits_on_genre() {
        let country = artist("c", &["country road"]);
        let rock = artist("r", &["rock"]);
        let mut first = track("t1", &[&country]);
        first.audio_features.acousticness = 0.9;
        let tracks = vec![first, track("t2", &[&rock]), track("t3", &[&country])];

        let series = scatter_by_genre(
            &tracks,
            AudioFeature::Acousticness,
            AudioFeature::Speechiness,
            "country",
        );

        assert_eq!(series.x_feature, "acousticness");
        assert_eq!(series.matching.len(), 2);
        assert_eq!(series.matching[0].track_name, "Track t1");
        assert_eq!(series.matching[0].x, 0.9);
        assert_eq!(series.other.len(), 1);
        assert_eq!(series.other[0].track_name, "Track t2");
    }
}

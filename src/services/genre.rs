use crate::models::Track;
use std::collections::BTreeSet;

/// Every genre tag carried by the track's artists, trimmed and deduplicated.
/// Case is kept as the catalog reports it.
pub fn genres_of(track: &Track) -> BTreeSet<String> {
    track
        .artists
        .iter()
        .flat_map(|artist| artist.genres.iter())
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loose genre test: true when `needle` appears anywhere inside one of the
/// track's tags, so `"pop"` also matches `"dance pop"` and `"k-pop"`.
/// Case-sensitive. Not suitable where exact genre identity matters.
pub fn has_genre(track: &Track, needle: &str) -> bool {
    genres_of(track).iter().any(|tag| tag.contains(needle))
}

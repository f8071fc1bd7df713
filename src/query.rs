//! Search and filtering over a snapshot of the catalog

use crate::domain::track::Track;

/// value of a status or genre criterion that disables it
pub const ALL: &str = "all";

/// Criteria for [`filter`]. Every active criterion must hold for a track to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackQuery {
    /// case-insensitive substring of title, artist name or genre
    pub search: Option<String>,
    /// case-insensitive status label, or [`ALL`]
    pub status: Option<String>,
    /// case-insensitive genre, or [`ALL`]
    pub genre: Option<String>,
}

impl TrackQuery {
    pub fn new(search: Option<String>, status: Option<String>, genre: Option<String>) -> Self {
        Self {
            search,
            status,
            genre,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.status_term().is_none() && self.genre_term().is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn status_term(&self) -> Option<String> {
        selector(self.status.as_deref())
    }

    fn genre_term(&self) -> Option<String> {
        selector(self.genre.as_deref())
    }
}

/// lowercased selector, `None` when absent, empty or "all"
fn selector(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        .map(str::to_lowercase)
}

fn matches_search(track: &Track, term: &str) -> bool {
    [&track.title, &track.artist_name, &track.genre]
        .into_iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Keeps the tracks matching `query`, in their original order.
pub fn filter(tracks: &[Track], query: &TrackQuery) -> Vec<Track> {
    let search = query.search_term();
    let status = query.status_term();
    let genre = query.genre_term();

    tracks
        .iter()
        .filter(|t| search.as_deref().is_none_or(|s| matches_search(t, s)))
        .filter(|t| {
            status
                .as_deref()
                .is_none_or(|s| t.status.label().to_lowercase() == s)
        })
        .filter(|t| genre.as_deref().is_none_or(|g| t.genre.to_lowercase() == g))
        .cloned()
        .collect()
}

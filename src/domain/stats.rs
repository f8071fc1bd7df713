use serde::{Deserialize, Serialize};

use super::track::{Track, TrackStatus};

/// Aggregates shown on the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_tracks: usize,
    pub published_tracks: usize,
    pub total_plays: u64,
    pub total_revenue: f64,
}

impl CatalogStats {
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let published_tracks = tracks
            .iter()
            .filter(|t| t.status == TrackStatus::Published)
            .count();
        let total_plays = tracks.iter().map(|t| t.plays).sum();
        let total_revenue: f64 = tracks.iter().map(|t| t.revenue).sum();

        Self {
            total_tracks: tracks.len(),
            published_tracks,
            total_plays,
            // cents
            total_revenue: (total_revenue * 100.0).round() / 100.0,
        }
    }
}

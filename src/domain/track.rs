use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::TrackId;

pub const DEFAULT_DURATION: &str = "0:00";

/// distribution sentinel for tracks waiting on review
pub const PENDING_REVIEW: &str = "Pending Review";
/// distribution sentinel for tracks that were never sent anywhere
pub const NOT_YET_DISTRIBUTED: &str = "Not Yet Distributed";

/// Publication state of a track.
///
/// Nothing in this crate moves a track between states,
/// new tracks always start as [`TrackStatus::Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackStatus {
    #[default]
    Draft,
    #[serde(rename = "Under Review")]
    UnderReview,
    Published,
}

impl TrackStatus {
    pub const ALL: [TrackStatus; 3] = [Self::Draft, Self::UnderReview, Self::Published];

    pub fn label(&self) -> &'static str {
        match self {
            TrackStatus::Draft => "Draft",
            TrackStatus::UnderReview => "Under Review",
            TrackStatus::Published => "Published",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Represent a music release managed by the dashboard
///
/// Summary and detail views read the same record, the detail fields are simply
/// left out of JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist_name: String,
    pub release_date: String,
    pub genre: String,
    pub status: TrackStatus,
    pub duration: String,
    pub plays: u64,
    pub revenue: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    /// platform names, or one of the distribution sentinels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distributed_to: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: BTreeMap<String, String>,
}

impl Track {
    /// builds a freshly uploaded track with all counters at zero
    pub fn draft(id: TrackId, new: NewTrack, upload_date: Option<String>) -> Self {
        Self {
            id,
            title: new.title,
            artist_name: new.artist_name,
            release_date: new.release_date,
            genre: new.genre,
            status: TrackStatus::Draft,
            duration: DEFAULT_DURATION.to_string(),
            plays: 0,
            revenue: 0.0,
            description: None,
            lyrics: None,
            file_size: None,
            format: None,
            bitrate: None,
            upload_date,
            distributed_to: Vec::new(),
            social_links: BTreeMap::new(),
        }
    }
}

/// Validated fields of a track about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub artist_name: String,
    pub release_date: String,
    pub genre: String,
}

/// Raw upload form, as it arrives from a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSubmission {
    pub title: Option<String>,
    pub artist_name: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackValidationError {
    #[error("missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}

impl TrackSubmission {
    /// checks that every field is present and not blank
    pub fn validate(self) -> Result<NewTrack, TrackValidationError> {
        let mut missing = Vec::new();

        let mut take = |value: Option<String>, name: &'static str| -> String {
            match value.map(|v| v.trim().to_string()) {
                Some(v) if !v.is_empty() => v,
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let title = take(self.title, "title");
        let artist_name = take(self.artist_name, "artistName");
        let release_date = take(self.release_date, "releaseDate");
        let genre = take(self.genre, "genre");

        if !missing.is_empty() {
            return Err(TrackValidationError::MissingFields { missing });
        }

        Ok(NewTrack {
            title,
            artist_name,
            release_date,
            genre,
        })
    }
}

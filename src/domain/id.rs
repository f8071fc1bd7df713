use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of a track.
///
/// Ids are decimal strings handed out by a store's monotonic counter,
/// so they stay unique no matter how the collection changes in size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_seq(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// numeric value of the id, if it was produced by a counter
    pub fn seq(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

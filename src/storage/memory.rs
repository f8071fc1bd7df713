use log::debug;

use crate::{
    domain::{
        id::TrackId,
        track::{NewTrack, Track},
    },
    storage::{TrackStore, error::StoreError, upload_date},
};

/// Catalog kept in a plain vector, newest track first
#[derive(Debug)]
pub struct MemoryStore {
    tracks: Vec<Track>,
    next_seq: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_tracks(Vec::new())
    }
}

impl MemoryStore {
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        let next_seq = tracks.iter().filter_map(|t| t.id.seq()).max().unwrap_or(0) + 1;
        Self { tracks, next_seq }
    }
}

impl TrackStore for MemoryStore {
    fn list(&self) -> Result<Vec<Track>, StoreError> {
        Ok(self.tracks.clone())
    }

    fn get(&self, id: &TrackId) -> Result<Track, StoreError> {
        self.tracks
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::TrackNotFound(id.clone()))
    }

    fn create(&mut self, new: NewTrack) -> Result<Track, StoreError> {
        let id = TrackId::from_seq(self.next_seq);
        self.next_seq += 1;

        let track = Track::draft(id, new, Some(upload_date()));
        debug!("memory store: inserting track {}", track.id);
        self.tracks.insert(0, track.clone());
        Ok(track)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.tracks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::seed::sample_tracks, storage::tests::new_track};

    #[test]
    fn test_empty_store_starts_at_one() -> anyhow::Result<()> {
        let mut store = MemoryStore::default();
        let first = store.create(new_track("first"))?;
        assert_eq!(first.id, TrackId::new("1"));
        Ok(())
    }

    #[test]
    fn test_default_matches_empty_with_tracks() -> anyhow::Result<()> {
        let mut from_default = MemoryStore::default();
        let mut from_empty = MemoryStore::with_tracks(Vec::new());

        assert_eq!(
            from_default.create(new_track("a"))?.id,
            from_empty.create(new_track("a"))?.id
        );
        Ok(())
    }

    #[test]
    fn test_counter_skips_past_highest_seeded_id() -> anyhow::Result<()> {
        let mut tracks = sample_tracks();
        tracks[0].id = TrackId::new("40");

        let mut store = MemoryStore::with_tracks(tracks);
        assert_eq!(store.create(new_track("x"))?.id, TrackId::new("41"));
        Ok(())
    }

    #[test]
    fn test_list_is_a_snapshot() -> anyhow::Result<()> {
        let mut store = MemoryStore::with_tracks(sample_tracks());
        let before = store.list()?;
        store.create(new_track("later"))?;

        assert_eq!(before.len(), 5);
        assert_eq!(store.count()?, 6);
        Ok(())
    }
}

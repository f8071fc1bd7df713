use log::info;

use crate::{
    config::{StoreBackend, StoreConfig},
    domain::{
        id::TrackId,
        seed::sample_tracks,
        track::{NewTrack, Track},
    },
    storage::error::StoreError,
};

pub(crate) mod db;
pub mod error;
pub mod memory;
pub(crate) mod schema;
pub mod sqlite;

/// Owner of the track catalog.
///
/// Implementations keep created tracks in front of older ones
/// and never reuse an id.
pub trait TrackStore {
    /// snapshot of every track, most recently created first
    fn list(&self) -> Result<Vec<Track>, StoreError>;

    fn get(&self, id: &TrackId) -> Result<Track, StoreError>;

    /// stores a new draft track and returns it
    fn create(&mut self, new: NewTrack) -> Result<Track, StoreError>;

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }
}

pub type BoxedStore = Box<dyn TrackStore + Send>;

/// builds the store configured by `config`, seeding it when asked to
pub fn open(config: &StoreConfig) -> Result<BoxedStore, StoreError> {
    let seed = if config.seed {
        sample_tracks()
    } else {
        Vec::new()
    };
    let seeded = seed.len();

    let store: BoxedStore = match config.backend {
        StoreBackend::Memory => Box::new(memory::MemoryStore::with_tracks(seed)),
        StoreBackend::Sqlite => Box::new(sqlite::SqliteStore::open_in_memory(seed)?),
    };

    info!("Opened {:?} track store with {} seeded tracks", config.backend, seeded);
    Ok(store)
}

/// today's date as stamped on uploads
pub(crate) fn upload_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::track::TrackStatus;

    pub fn new_track(title: &str) -> NewTrack {
        NewTrack {
            title: title.to_string(),
            artist_name: "A".to_string(),
            release_date: "2025-01-01".to_string(),
            genre: "Rock".to_string(),
        }
    }

    /// one seeded store per backend
    pub fn seeded_stores() -> Vec<BoxedStore> {
        [StoreBackend::Memory, StoreBackend::Sqlite]
            .into_iter()
            .map(|backend| open(&StoreConfig { backend, seed: true }).unwrap())
            .collect()
    }

    #[test]
    fn test_list_returns_seed_in_order() -> anyhow::Result<()> {
        for store in seeded_stores() {
            assert_eq!(store.list()?, sample_tracks());
            assert_eq!(store.count()?, 5);
        }
        Ok(())
    }

    #[test]
    fn test_unseeded_store_is_empty() -> anyhow::Result<()> {
        for backend in [StoreBackend::Memory, StoreBackend::Sqlite] {
            let store = open(&StoreConfig {
                backend,
                seed: false,
            })?;
            assert!(store.list()?.is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_get_existing_track() -> anyhow::Result<()> {
        for store in seeded_stores() {
            let track = store.get(&TrackId::new("4"))?;
            assert_eq!(track.title, "Bass Drop");
            assert_eq!(track.status, TrackStatus::Draft);
        }
        Ok(())
    }

    #[test]
    fn test_get_unknown_track() {
        for store in seeded_stores() {
            for id in ["0", "99", "abc", ""] {
                let err = store.get(&TrackId::new(id)).unwrap_err();
                assert!(matches!(err, StoreError::TrackNotFound(_)), "{err}");
            }
        }
    }

    #[test]
    fn test_create_prepends_draft() -> anyhow::Result<()> {
        for mut store in seeded_stores() {
            let created = store.create(new_track("New"))?;

            assert_eq!(created.id, TrackId::new("6"));
            assert_eq!(created.status, TrackStatus::Draft);
            assert_eq!(created.duration, "0:00");
            assert_eq!(created.plays, 0);
            assert_eq!(created.revenue, 0.0);
            assert!(created.upload_date.is_some());

            let listed = store.list()?;
            assert_eq!(listed.len(), 6);
            assert_eq!(listed[0], created);
            assert_eq!(listed[1].title, "Midnight Dreams");
            assert_eq!(store.get(&created.id)?, created);
        }
        Ok(())
    }

    #[test]
    fn test_created_ids_are_unique_and_increasing() -> anyhow::Result<()> {
        for mut store in seeded_stores() {
            let a = store.create(new_track("a"))?;
            let b = store.create(new_track("b"))?;
            let c = store.create(new_track("c"))?;

            assert!(a.id.seq() < b.id.seq());
            assert!(b.id.seq() < c.id.seq());

            let titles: Vec<String> = store.list()?.into_iter().map(|t| t.title).collect();
            assert_eq!(&titles[..3], &["c", "b", "a"]);
        }
        Ok(())
    }

    #[test]
    fn test_stores_are_isolated() -> anyhow::Result<()> {
        let mut stores = seeded_stores();
        stores[0].create(new_track("only here"))?;

        assert_eq!(stores[0].count()?, 6);
        assert_eq!(stores[1].count()?, 5);
        Ok(())
    }
}

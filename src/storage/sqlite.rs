use std::collections::BTreeMap;

use anyhow::anyhow;
use log::debug;
use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};

use crate::{
    domain::{
        id::TrackId,
        track::{DEFAULT_DURATION, NewTrack, Track, TrackStatus},
    },
    storage::{
        TrackStore, db,
        error::StoreError,
        schema::{ID, POSITION, STATUS, TRACK_COLUMNS, TRACKS},
        upload_date,
    },
};

/// Catalog kept in a private in-memory SQLite database
pub struct SqliteStore {
    pub(crate) db: Connection,
}

fn conversion_error(
    idx: usize,
    ty: Type,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, ty, err.into())
}

fn row_to_track(row: &Row<'_>) -> Result<Track, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let status: String = row.get(5)?;
    let plays: i64 = row.get(7)?;
    let distributed_to: String = row.get(15)?;
    let social_links: String = row.get(16)?;

    let status = TrackStatus::from_label(&status)
        .ok_or_else(|| conversion_error(5, Type::Text, format!("unknown status {status:?}")))?;
    let plays = u64::try_from(plays).map_err(|e| conversion_error(7, Type::Integer, e))?;
    let distributed_to: Vec<String> =
        serde_json::from_str(&distributed_to).map_err(|e| conversion_error(15, Type::Text, e))?;
    let social_links: BTreeMap<String, String> =
        serde_json::from_str(&social_links).map_err(|e| conversion_error(16, Type::Text, e))?;

    Ok(Track {
        id: TrackId::new(id.to_string()),
        title: row.get(1)?,
        artist_name: row.get(2)?,
        release_date: row.get(3)?,
        genre: row.get(4)?,
        status,
        duration: row.get(6)?,
        plays,
        revenue: row.get(8)?,
        description: row.get(9)?,
        lyrics: row.get(10)?,
        file_size: row.get(11)?,
        format: row.get(12)?,
        bitrate: row.get(13)?,
        upload_date: row.get(14)?,
        distributed_to,
        social_links,
    })
}

impl SqliteStore {
    /// opens a fresh database holding `seed`, in the given order
    pub fn open_in_memory(seed: Vec<Track>) -> Result<Self, StoreError> {
        let mut store = Self::from_existing_conn(db::open_in_memory()?);
        store.insert_seed(&seed)?;
        Ok(store)
    }

    pub fn from_existing_conn(db: Connection) -> Self {
        Self { db }
    }

    fn insert_seed(&mut self, seed: &[Track]) -> Result<(), StoreError> {
        let tx = self.db.transaction()?;

        for (position, track) in seed.iter().enumerate() {
            let id = track
                .id
                .seq()
                .ok_or_else(|| anyhow!("seed track id {} is not numeric", track.id))?;
            let id = i64::try_from(id).map_err(anyhow::Error::from)?;
            let plays = i64::try_from(track.plays).map_err(anyhow::Error::from)?;

            tx.execute(
                &format!(
                    "INSERT INTO {TRACKS} ({TRACK_COLUMNS}, {POSITION}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)"
                ),
                params![
                    id,
                    track.title,
                    track.artist_name,
                    track.release_date,
                    track.genre,
                    track.status.label(),
                    track.duration,
                    plays,
                    track.revenue,
                    track.description,
                    track.lyrics,
                    track.file_size,
                    track.format,
                    track.bitrate,
                    track.upload_date,
                    serde_json::to_string(&track.distributed_to)?,
                    serde_json::to_string(&track.social_links)?,
                    position as i64,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

impl TrackStore for SqliteStore {
    fn list(&self) -> Result<Vec<Track>, StoreError> {
        let mut stmt = self.db.prepare(&format!(
            "SELECT {TRACK_COLUMNS} FROM {TRACKS} ORDER BY {POSITION} ASC"
        ))?;

        let tracks = stmt
            .query_map([], row_to_track)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tracks)
    }

    fn get(&self, id: &TrackId) -> Result<Track, StoreError> {
        // ids are always numeric here, anything else cannot be stored
        let Some(seq) = id.seq().and_then(|s| i64::try_from(s).ok()) else {
            return Err(StoreError::TrackNotFound(id.clone()));
        };

        self.db
            .query_row(
                &format!("SELECT {TRACK_COLUMNS} FROM {TRACKS} WHERE {ID} = ?1"),
                params![seq],
                row_to_track,
            )
            .optional()?
            .ok_or_else(|| StoreError::TrackNotFound(id.clone()))
    }

    fn create(&mut self, new: NewTrack) -> Result<Track, StoreError> {
        let tx = self.db.transaction()?;

        let position: i64 = tx.query_row(
            &format!("SELECT COALESCE(MIN({POSITION}), 1) - 1 FROM {TRACKS}"),
            [],
            |row| row.get(0),
        )?;

        tx.execute(
            &format!(
                "INSERT INTO {TRACKS} \
                 ({POSITION}, title, artist_name, release_date, genre, {STATUS}, duration, plays, revenue, upload_date) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, 0, ?8)"
            ),
            params![
                position,
                new.title,
                new.artist_name,
                new.release_date,
                new.genre,
                TrackStatus::Draft.label(),
                DEFAULT_DURATION,
                upload_date(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("sqlite store: inserted track {id} at position {position}");
        self.get(&TrackId::new(id.to_string()))
    }

    fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .db
            .query_row(&format!("SELECT COUNT(*) FROM {TRACKS}"), [], |row| row.get(0))?;
        Ok(usize::try_from(count).map_err(anyhow::Error::from)?)
    }
}

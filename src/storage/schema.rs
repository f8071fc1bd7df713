use rusqlite::Connection;

pub mod tables {
    pub const TRACKS: &str = "tracks";

    #[cfg(test)]
    pub const ALL_TABLES: &[&str] = &[TRACKS];
}

pub mod columns {
    pub const ID: &str = "id";
    pub const POSITION: &str = "position";
    pub const STATUS: &str = "status";
}

pub use columns::*;
pub use tables::*;

/// columns in the order [`crate::storage::sqlite`] decodes them
pub const TRACK_COLUMNS: &str = "id, title, artist_name, release_date, genre, status, duration, \
     plays, revenue, description, lyrics, file_size, format, bitrate, upload_date, \
     distributed_to, social_links";

// `position` orders the catalog: seeds count up from 0, uploads count down below the minimum.
// `distributed_to` and `social_links` hold JSON.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tracks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    position INTEGER NOT NULL,
    title TEXT NOT NULL,
    artist_name TEXT NOT NULL,
    release_date TEXT NOT NULL,
    genre TEXT NOT NULL,
    status TEXT NOT NULL,
    duration TEXT NOT NULL,
    plays INTEGER NOT NULL CHECK (plays >= 0),
    revenue REAL NOT NULL CHECK (revenue >= 0),
    description TEXT,
    lyrics TEXT,
    file_size TEXT,
    format TEXT,
    bitrate TEXT,
    upload_date TEXT,
    distributed_to TEXT NOT NULL DEFAULT '[]',
    social_links TEXT NOT NULL DEFAULT '{}'
);

CREATE INDEX IF NOT EXISTS tracks_position ON tracks (position);
"#;

pub fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}

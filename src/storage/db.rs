use rusqlite::Connection;

use crate::storage::{error::StoreError, schema};

/// Opens a private in-memory database with the track schema in place.
///
/// Nothing is ever written to disk, the catalog lives as long as the connection.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let db = Connection::open_in_memory()?;
    schema::init(&db)?;
    Ok(db)
}

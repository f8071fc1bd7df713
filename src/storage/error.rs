use thiserror::Error;

use crate::domain::id::TrackId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("track {0} not found")]
    TrackNotFound(TrackId),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

//! Seat map errors

use arsenal_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A data source failed
    #[error("Source error: {0}")]
    Source(#[from] ClientError),

    /// `activate` called on a live view
    #[error("Seat map already active")]
    AlreadyActive,
}

pub type MapResult<T> = Result<T, MapError>;

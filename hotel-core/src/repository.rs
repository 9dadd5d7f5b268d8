use std::path::PathBuf;

use crate::reservation::Reservation;

/// Durable storage for the full reservation set.
///
/// Implementations persist every reservation regardless of status and must
/// hand them back in the order they were saved.
pub trait ReservationStore {
    /// Read the last saved snapshot. A missing snapshot is an empty set, not an error.
    fn load(&self) -> Result<Vec<Reservation>, StoreError>;

    /// Replace the snapshot with `reservations`.
    fn save(&self, reservations: &[Reservation]) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

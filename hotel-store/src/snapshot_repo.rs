use hotel_core::repository::{ReservationStore, StoreError};
use hotel_core::Reservation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    reservations: &'a [Reservation],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    reservations: Vec<Reservation>,
}

/// Reservation snapshot kept as a single JSON document on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReservationStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Reservation>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::Malformed {
                path: self.path.clone(),
                reason: format!("unsupported snapshot version {}", snapshot.version),
            });
        }

        info!(
            "Loaded {} reservation(s) from {}",
            snapshot.reservations.len(),
            self.path.display()
        );
        Ok(snapshot.reservations)
    }

    fn save(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            reservations,
        };
        let body = serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write beside the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(
            "Saved {} reservation(s) to {}",
            reservations.len(),
            self.path.display()
        );
        Ok(())
    }
}

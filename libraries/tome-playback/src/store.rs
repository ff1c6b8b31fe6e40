//! Resume-bookmark persistence
//!
//! Persistence is an optimization, never a correctness requirement:
//! every implementation swallows its own failures, and the engine
//! treats a missing or unreadable bookmark as "no snapshot".

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tome_core::PlaybackSnapshot;
use tracing::debug;

/// Best-effort key-value backing store for the resume bookmark.
///
/// One fixed slot; `save` overwrites, `clear` deletes. Implementations
/// must never panic or surface storage errors.
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, if one is present and decodable
    fn load(&self) -> Option<PlaybackSnapshot>;

    /// Overwrite the stored snapshot; failures are swallowed
    fn save(&self, snapshot: &PlaybackSnapshot);

    /// Delete the stored snapshot; failures are swallowed
    fn clear(&self);
}

/// In-memory store for tests and embedded hosts
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<PlaybackSnapshot>>,
    saves: Mutex<u64>,
}

impl MemorySnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot
    pub fn with_snapshot(snapshot: PlaybackSnapshot) -> Self {
        let store = Self::new();
        *store.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(snapshot);
        store
    }

    /// Number of writes since creation
    pub fn save_count(&self) -> u64 {
        *self
            .saves
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Option<PlaybackSnapshot> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn save(&self, snapshot: &PlaybackSnapshot) {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(snapshot.clone());
        *self
            .saves
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) += 1;
    }

    fn clear(&self) {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}

/// Disk-backed store: one JSON file holds the single snapshot slot.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Option<PlaybackSnapshot> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "discarding unreadable snapshot");
                None
            }
        }
    }

    fn save(&self, snapshot: &PlaybackSnapshot) {
        let Ok(json) = serde_json::to_string(snapshot) else {
            return;
        };
        if let Err(e) = fs::write(&self.path, json) {
            debug!(path = %self.path.display(), error = %e, "snapshot write failed");
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!(path = %self.path.display(), error = %e, "snapshot delete failed");
            }
        }
    }
}

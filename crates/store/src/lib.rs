//! Persistence gateway - one local JSON save slot
//!
//! Saves are written to a temporary sibling file and renamed over the target,
//! so a crash mid-write leaves the previous save intact.
//!
//! Loading is forgiving: a missing, unreadable, partial or corrupt file is
//! reported as "no saved game" ([`SaveStore::load`] returns `None`) and the
//! reason is logged. Callers that need the reason use [`SaveStore::try_load`].
//!
//! # Example
//!
//! ```no_run
//! use tui_2048_core::{SessionState, TileRng};
//! use tui_2048_store::SaveStore;
//! use tui_2048_types::SpawnPolicy;
//!
//! let store = SaveStore::new("savegame.json");
//! let state = store.load().unwrap_or_else(|| {
//!     let mut rng = TileRng::from_entropy();
//!     SessionState::new_game(&mut rng, SpawnPolicy::Classic, 0).0
//! });
//! store.save(&state).ok();
//! ```

pub mod error;
pub mod record;

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use error::StoreError;
pub use record::SaveRecord;

use crate::core::SessionState;

/// Default save file name (in the working directory)
pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

/// A single save slot on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `state` atomically.
    pub fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        let record = SaveRecord::from_state(state);
        let json = serde_json::to_vec(&record)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), bytes = json.len(), "game saved");
        Ok(())
    }

    /// Load the saved session; `Ok(None)` when no save exists.
    pub fn try_load(&self) -> Result<Option<SessionState>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: SaveRecord = serde_json::from_slice(&bytes)?;
        record.into_state().map(Some)
    }

    /// Load the saved session, treating every failure as "no save".
    pub fn load(&self) -> Option<SessionState> {
        match self.try_load() {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unusable save file");
                None
            }
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_SAVE_FILE);

    let mut counter = 0u32;
    let tmp_path = loop {
        let cand = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&cand) {
            Ok(mut tmp) => {
                let written = tmp.write_all(bytes).and_then(|_| tmp.sync_all());
                if let Err(e) = written {
                    let _ = fs::remove_file(&cand);
                    return Err(e);
                }
                break cand;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
                continue;
            }
            Err(e) => return Err(e),
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Ok(dirf) = File::open(dir) {
        let _ = dirf.sync_all();
    }
    Ok(())
}

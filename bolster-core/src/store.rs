//! Snapshot persistence
//!
//! Storage technology is an injected collaborator: the engine only
//! needs somewhere to put a `SessionSnapshot` and get it back. The
//! shipped implementation writes one pretty-printed JSON file per
//! session under a caller-supplied directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::export::SessionSnapshot;

/// Snapshot storage trait
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;
    fn load(&self, session_id: &str) -> Result<SessionSnapshot, StoreError>;
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// File-backed store: `<dir>/<session_id>.json`
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{session_id}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let path = self.path_for(&snapshot.session_id);
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)?;
        debug!(session_id = %snapshot.session_id, path = %path.display(), "snapshot saved");
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<SessionSnapshot, StoreError> {
        let path = self.path_for(session_id);
        if !path.exists() {
            return Err(StoreError::NotFound(session_id.to_string()));
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoachConfig;
    use crate::export::SessionExporter;
    use crate::session::Session;

    fn snapshot_for(id: &str) -> SessionSnapshot {
        let config = CoachConfig::default();
        SessionExporter::new(&config).export(&Session::with_id(id.into()))
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let snapshot = snapshot_for("sess-1");
        store.save(&snapshot).unwrap();

        let loaded = store.load("sess-1").unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn load_missing_session_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let result = store.load("no-such-session");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn list_returns_sorted_session_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save(&snapshot_for("sess-b")).unwrap();
        store.save(&snapshot_for("sess-a")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["sess-a", "sess-b"]);
    }

    #[test]
    fn save_overwrites_existing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.save(&snapshot_for("sess-1")).unwrap();
        let mut updated = snapshot_for("sess-1");
        updated.goals.clear();
        store.save(&updated).unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn stored_file_is_pretty_printed_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save(&snapshot_for("sess-1")).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("sess-1.json")).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"session_id\""));
    }
}

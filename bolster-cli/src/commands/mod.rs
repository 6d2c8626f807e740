//! CLI subcommands

pub mod analyze;
pub mod goals;
pub mod session;

use anyhow::{Context, Result};
use bolster_core::{JsonFileStore, Session, SessionExporter, SnapshotStore};

use crate::config::BolsterConfig;

/// Open the snapshot store under the configured data directory
pub(crate) fn open_store(config: &BolsterConfig) -> Result<JsonFileStore> {
    JsonFileStore::open(&config.data_dir).with_context(|| {
        format!(
            "failed to open session store at {}",
            config.data_dir.display()
        )
    })
}

/// Load a stored session by ID
pub(crate) fn load_session(store: &JsonFileStore, session_id: &str) -> Result<Session> {
    let snapshot = store
        .load(session_id)
        .with_context(|| format!("no stored session {session_id}"))?;
    Ok(snapshot.into_session())
}

/// Export a session and write it back to the store
pub(crate) fn save_session(
    store: &JsonFileStore,
    config: &BolsterConfig,
    session: &Session,
) -> Result<()> {
    let snapshot = SessionExporter::new(&config.engine).export(session);
    store.save(&snapshot)?;
    Ok(())
}

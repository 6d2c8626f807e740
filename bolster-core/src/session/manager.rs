//! SessionManager for managing multiple sessions
//!
//! A session is owned by exactly one coaching context, but a host
//! process may carry several contexts (one per user). The manager
//! hands out access through a callback under the write lock, which
//! serializes appends and keeps the per-session sequence order total.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::info;

use crate::error::SessionError;

use super::types::Session;

/// Manages the live sessions of a host process
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new session and return its ID
    pub fn create_session(&self) -> String {
        let session = Session::new();
        let id = session.session_id().to_string();
        info!(session_id = %id, "session created");
        self.sessions.write().unwrap().insert(id.clone(), session);
        id
    }

    /// Create a session with a specific ID (for resumption)
    pub fn create_session_with_id(&self, id: String) -> Result<String, SessionError> {
        let mut sessions = self.sessions.write().unwrap();
        if sessions.contains_key(&id) {
            return Err(SessionError::DuplicateId(id));
        }
        sessions.insert(id.clone(), Session::with_id(id.clone()));
        Ok(id)
    }

    /// Insert an already-built session (snapshot import)
    pub fn insert_session(&self, session: Session) -> Result<String, SessionError> {
        let id = session.session_id().to_string();
        let mut sessions = self.sessions.write().unwrap();
        if sessions.contains_key(&id) {
            return Err(SessionError::DuplicateId(id));
        }
        sessions.insert(id.clone(), session);
        Ok(id)
    }

    /// Access a session under the write lock.
    ///
    /// Uses the callback pattern to avoid lifetime issues with the
    /// lock guard; all mutation, including appends, goes through here
    /// and is therefore serialized.
    pub fn with_session<F, R>(&self, id: &str, f: F) -> Result<R, SessionError>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        Ok(f(session))
    }

    /// Clone a session's current state for read-only use
    pub fn get_session(&self, id: &str) -> Result<Session, SessionError> {
        let sessions = self.sessions.read().unwrap();
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// List all session IDs
    pub fn list_sessions(&self) -> Vec<String> {
        self.sessions.read().unwrap().keys().cloned().collect()
    }

    /// Mark a session read-only for append
    pub fn end_session(&self, id: &str) -> Result<(), SessionError> {
        self.with_session(id, |session| session.end())
    }

    /// Drop a session from the manager
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().unwrap();
        if sessions.remove(id).is_none() {
            return Err(SessionError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::assess::Reconciler;
    use crate::config::CoachConfig;
    use crate::session::UserMessage;

    #[test]
    fn create_session_returns_unique_id() {
        let manager = SessionManager::new();
        let id1 = manager.create_session();
        let id2 = manager.create_session();
        assert!(!id1.is_empty());
        assert_ne!(id1, id2);
        assert_eq!(manager.session_count(), 2);
    }

    #[test]
    fn create_session_with_duplicate_id_fails() {
        let manager = SessionManager::new();
        manager.create_session_with_id("my-id".into()).unwrap();
        let result = manager.create_session_with_id("my-id".into());
        assert!(matches!(result, Err(SessionError::DuplicateId(_))));
    }

    #[test]
    fn with_session_not_found_returns_error() {
        let manager = SessionManager::new();
        let result = manager.with_session("nonexistent", |_| ());
        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[test]
    fn remove_session_removes_by_id() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        manager.remove_session(&id).unwrap();
        assert_eq!(manager.session_count(), 0);
        assert!(manager.remove_session(&id).is_err());
    }

    #[test]
    fn end_session_makes_ledger_read_only() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        manager.end_session(&id).unwrap();
        assert!(manager.get_session(&id).unwrap().is_ended());
    }

    #[test]
    fn concurrent_appends_preserve_total_order() {
        let config = CoachConfig::default();
        let manager = Arc::new(SessionManager::new());
        let id = manager.create_session();

        let mut handles = vec![];
        for _ in 0..8 {
            let manager = Arc::clone(&manager);
            let id = id.clone();
            let config = config.clone();
            handles.push(std::thread::spawn(move || {
                let msg = UserMessage::new("a message from a thread", &config).unwrap();
                let assessment =
                    Reconciler::new(&config).reconcile("a message from a thread", None, None);
                manager
                    .with_session(&id, |session| {
                        session
                            .append(msg, "reply".into(), assessment, vec![], vec![])
                            .map(|e| e.sequence_index)
                    })
                    .unwrap()
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let session = manager.get_session(&id).unwrap();
        let indices: Vec<u64> = session.exchanges().iter().map(|e| e.sequence_index).collect();
        assert_eq!(indices, (0..8).collect::<Vec<u64>>());
    }
}

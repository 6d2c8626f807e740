//! Error types for bolster-core

use thiserror::Error;

/// Top-level error type for bolster-core
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from message validation and session management
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message too long: {len} characters, maximum is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("Message looks like filler input, please write a real message")]
    LowEffortMessage,

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session ID already exists: {0}")]
    DuplicateId(String),

    #[error("Session has ended: {0}")]
    Ended(String),
}

/// Errors from goal tracking
#[derive(Error, Debug)]
pub enum GoalError {
    #[error("Goal description is empty")]
    EmptyDescription,

    #[error("Goal not found: {0}")]
    NotFound(String),
}

/// Errors from snapshot persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Snapshot not found: {0}")]
    NotFound(String),
}

//! Session entity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assess::ConfidenceAssessment;
use crate::config::CoachConfig;
use crate::error::SessionError;
use crate::goals::GoalTracker;

/// Junk inputs rejected at the boundary
const LOW_EFFORT_WORDS: &[&str] = &["spam", "test123", "asdf"];

/// A validated, immutable user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl UserMessage {
    /// Validate and construct a user message.
    ///
    /// Trims the content, then rejects empty input, input over the
    /// configured length limit, and the known filler words. A message
    /// either passes fully or is never created.
    pub fn new(content: &str, config: &CoachConfig) -> Result<Self, SessionError> {
        Self::with_timestamp(content, config, Utc::now())
    }

    /// Validate with an explicit timestamp (replays, tests)
    pub fn with_timestamp(
        content: &str,
        config: &CoachConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        if trimmed.len() > config.max_message_length {
            return Err(SessionError::MessageTooLong {
                len: trimmed.len(),
                max: config.max_message_length,
            });
        }
        let lowered = trimmed.to_lowercase();
        if LOW_EFFORT_WORDS.iter().any(|w| lowered.contains(w)) {
            return Err(SessionError::LowEffortMessage);
        }

        Ok(Self {
            content: trimmed.to_string(),
            timestamp,
        })
    }
}

/// One immutable coaching turn
///
/// Owned exclusively by the session that appended it; no field is
/// ever mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Position in the ledger, assigned at append time
    pub sequence_index: u64,
    pub user_message: UserMessage,
    /// Raw reply text from the external model collaborator
    pub ai_reply: String,
    pub assessment: ConfidenceAssessment,
    pub tips: Vec<String>,
    pub next_steps: Vec<String>,
}

/// One coaching session: identity, append-only exchange ledger, goals
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) session_id: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) exchanges: Vec<Exchange>,
    pub(crate) goals: GoalTracker,
    pub(crate) ended: bool,
}

impl Session {
    /// Create a session with a fresh UUID
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Create a session with a caller-provided ID
    pub fn with_id(session_id: String) -> Self {
        Self {
            session_id,
            created_at: Utc::now(),
            exchanges: Vec::new(),
            goals: GoalTracker::new(),
            ended: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn goals(&self) -> &GoalTracker {
        &self.goals
    }

    pub fn goals_mut(&mut self) -> &mut GoalTracker {
        &mut self.goals
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

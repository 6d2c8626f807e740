//! Append-only exchange ledger
//!
//! The ledger is the audit trail of the coaching history: exchanges
//! are appended with a monotonic sequence index and never mutated,
//! deleted, or reordered. There is deliberately no API for any of
//! those.

use tracing::info;

use crate::assess::ConfidenceAssessment;
use crate::error::SessionError;

use super::types::{Exchange, Session, UserMessage};

impl Session {
    /// Append one exchange, assigning the next sequence index.
    ///
    /// Fails once the session has ended; an ended session stays
    /// readable and exportable but accepts no further exchanges.
    pub fn append(
        &mut self,
        user_message: UserMessage,
        ai_reply: String,
        assessment: ConfidenceAssessment,
        tips: Vec<String>,
        next_steps: Vec<String>,
    ) -> Result<&Exchange, SessionError> {
        if self.ended {
            return Err(SessionError::Ended(self.session_id.clone()));
        }

        let exchange = Exchange {
            sequence_index: self.exchanges.len() as u64,
            user_message,
            ai_reply,
            assessment,
            tips,
            next_steps,
        };
        self.exchanges.push(exchange);

        // push cannot leave the vec empty
        Ok(self.exchanges.last().unwrap())
    }

    /// Read-only view of the full exchange history, in append order
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Mark the session read-only for append
    pub fn end(&mut self) {
        if !self.ended {
            self.ended = true;
            info!(session_id = %self.session_id, "session ended");
        }
    }
}

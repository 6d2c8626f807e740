//! Session export
//!
//! Serializes a session into a portable snapshot: the full exchange
//! ledger, the analytics computed at export time, and the goal list.
//! The field names and nesting here are a wire contract; import
//! reverses the same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{AnalyticsAggregator, AnalyticsSnapshot};
use crate::config::CoachConfig;
use crate::goals::{Goal, GoalTracker};
use crate::session::{Exchange, Session};

/// Portable snapshot of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub exchanges: Vec<Exchange>,
    pub analytics: AnalyticsSnapshot,
    pub goals: Vec<Goal>,
}

impl SessionSnapshot {
    /// Reconstruct a live session from the snapshot.
    ///
    /// Exchanges and goals are audit history and are taken as-is;
    /// the embedded analytics are discarded and recomputed on demand.
    pub fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            created_at: self.created_at,
            exchanges: self.exchanges,
            goals: GoalTracker::from_goals(self.goals),
            ended: false,
        }
    }
}

/// Pure read that turns a session into a snapshot
#[derive(Debug, Clone)]
pub struct SessionExporter {
    aggregator: AnalyticsAggregator,
}

impl SessionExporter {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            aggregator: AnalyticsAggregator::new(config),
        }
    }

    /// Export the session; never mutates it, and identical session
    /// state yields byte-identical JSON.
    pub fn export(&self, session: &Session) -> SessionSnapshot {
        SessionSnapshot {
            session_id: session.session_id().to_string(),
            created_at: session.created_at(),
            exchanges: session.exchanges().to_vec(),
            analytics: self.aggregator.summarize(session),
            goals: session.goals().goals().to_vec(),
        }
    }
}

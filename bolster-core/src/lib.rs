//! bolster-core: Confidence assessment and session analytics engine
//!
//! This crate turns raw conversational text plus an externally
//! obtained model reply into structured, explainable records, and
//! aggregates them into session-level trends:
//!
//! - **Reconciliation** - [`Reconciler`] blends the local
//!   [`lexicon::KeywordLexicon`] signal with the model's score claim
//!   into one [`ConfidenceAssessment`] with recorded provenance
//! - **Tips** - [`TipExtractor`] pulls actionable segments out of the
//!   raw reply text
//! - **Ledger** - [`Session`] keeps an append-only, totally ordered
//!   [`Exchange`] history; [`SessionManager`] serializes access
//! - **Analytics** - [`AnalyticsAggregator`] recomputes trend
//!   statistics from the ledger on every read
//! - **Goals** - [`GoalTracker`] with audit-preserving flip toggles
//! - **Export** - [`SessionExporter`] produces a portable
//!   [`SessionSnapshot`]; [`store::JsonFileStore`] persists it
//!
//! The external model collaborator is represented only by its output:
//! an optional score claim, explanation, and reply text. Any of them
//! may be absent or malformed, which selects a fallback path rather
//! than an error.
//!
//! # Quick start
//!
//! ```
//! use bolster_core::{CoachConfig, Reconciler, Session, TipExtractor, UserMessage};
//!
//! fn example() -> Result<(), bolster_core::CoachError> {
//!     let config = CoachConfig::default();
//!     let mut session = Session::new();
//!
//!     let text = "I feel stuck on this presentation";
//!     let message = UserMessage::new(text, &config)?;
//!     let assessment = Reconciler::new(&config).reconcile(text, Some(6), Some("Some doubt."));
//!     let reply = "- Break it into three slides\n1. Practice the opener tonight";
//!     let (tips, next_steps) = TipExtractor::new(&config).extract(reply);
//!
//!     session.append(message, reply.to_string(), assessment, tips, next_steps)?;
//!     Ok(())
//! }
//! example().unwrap();
//! ```

pub mod analytics;
pub mod assess;
pub mod config;
pub mod error;
pub mod export;
pub mod goals;
pub mod lexicon;
pub mod session;
pub mod store;
pub mod tips;

// Re-export key types for convenience
pub use analytics::{AnalyticsAggregator, AnalyticsSnapshot, Trend};
pub use assess::{AssessmentSource, ConfidenceAssessment, Reconciler};
pub use config::CoachConfig;
pub use error::{CoachError, GoalError, SessionError, StoreError};
pub use export::{SessionExporter, SessionSnapshot};
pub use goals::{Goal, GoalTracker};
pub use session::{Exchange, Session, SessionManager, UserMessage};
pub use store::{JsonFileStore, SnapshotStore};
pub use tips::TipExtractor;

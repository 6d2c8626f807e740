//! Session identity, the append-only exchange ledger, and the
//! multi-session manager

mod ledger;
mod manager;
mod types;

pub use manager::SessionManager;
pub use types::{Exchange, Session, UserMessage};

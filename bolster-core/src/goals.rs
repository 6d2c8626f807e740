//! User-declared goal tracking
//!
//! Goals are independent of the exchange ledger but referenced by
//! exports. They are never deleted, only toggled between complete and
//! incomplete, so the audit history of what was committed to survives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::GoalError;

/// A user-declared goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Set when transitioning to completed, cleared on the way back
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insertion-ordered goal collection with flip-toggle semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTracker {
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a goal; empty descriptions are rejected
    pub fn add(&mut self, description: &str) -> Result<&Goal, GoalError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(GoalError::EmptyDescription);
        }

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            description: trimmed.to_string(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };
        debug!(goal_id = %goal.id, "goal added");
        self.goals.push(goal);

        // push cannot leave the vec empty
        Ok(self.goals.last().unwrap())
    }

    /// Flip a goal's completion state.
    ///
    /// A flip, not a set: completing stamps `completed_at`,
    /// un-completing clears it again.
    pub fn toggle(&mut self, goal_id: &str) -> Result<&Goal, GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        goal.completed = !goal.completed;
        goal.completed_at = if goal.completed { Some(Utc::now()) } else { None };
        Ok(goal)
    }

    /// Goals in creation order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Restore from an exported goal list (snapshot import)
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_empty_description() {
        let mut tracker = GoalTracker::new();
        assert!(matches!(tracker.add("   "), Err(GoalError::EmptyDescription)));
        assert!(tracker.goals().is_empty());
    }

    #[test]
    fn add_trims_description_and_assigns_id() {
        let mut tracker = GoalTracker::new();
        let goal = tracker.add("  speak up in standup  ").unwrap();
        assert_eq!(goal.description, "speak up in standup");
        assert!(!goal.id.is_empty());
        assert!(!goal.completed);
        assert!(goal.completed_at.is_none());
    }

    #[test]
    fn toggle_flips_and_stamps_completion() {
        let mut tracker = GoalTracker::new();
        let id = tracker.add("finish the draft").unwrap().id.clone();

        let goal = tracker.toggle(&id).unwrap();
        assert!(goal.completed);
        assert!(goal.completed_at.is_some());

        let goal = tracker.toggle(&id).unwrap();
        assert!(!goal.completed);
        assert!(goal.completed_at.is_none());
    }

    #[test]
    fn toggle_unknown_id_fails() {
        let mut tracker = GoalTracker::new();
        assert!(matches!(
            tracker.toggle("no-such-goal"),
            Err(GoalError::NotFound(_))
        ));
    }

    #[test]
    fn goals_keep_creation_order() {
        let mut tracker = GoalTracker::new();
        tracker.add("first").unwrap();
        tracker.add("second").unwrap();
        tracker.add("third").unwrap();

        let descriptions: Vec<&str> = tracker
            .goals()
            .iter()
            .map(|g| g.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }
}

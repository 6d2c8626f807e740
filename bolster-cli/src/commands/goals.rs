//! Goal management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::config::BolsterConfig;

use super::{load_session, open_store, save_session};

/// Goal management arguments
#[derive(Args, Debug)]
pub struct GoalsArgs {
    #[command(subcommand)]
    pub command: GoalsCommands,
}

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalsCommands {
    /// Add a goal to a session
    Add {
        /// Session ID the goal belongs to
        session_id: String,
        /// What to achieve
        description: String,
    },
    /// Flip a goal between complete and incomplete
    Toggle {
        /// Session ID the goal belongs to
        session_id: String,
        /// Goal ID to toggle
        goal_id: String,
    },
    /// List a session's goals in creation order
    List {
        /// Session ID to list goals for
        session_id: String,
    },
}

/// Run goals command
pub fn run(args: GoalsArgs, config: &BolsterConfig) -> Result<()> {
    match args.command {
        GoalsCommands::Add {
            session_id,
            description,
        } => add_goal(config, &session_id, &description),
        GoalsCommands::Toggle {
            session_id,
            goal_id,
        } => toggle_goal(config, &session_id, &goal_id),
        GoalsCommands::List { session_id } => list_goals(config, &session_id),
    }
}

fn add_goal(config: &BolsterConfig, session_id: &str, description: &str) -> Result<()> {
    let store = open_store(config)?;
    let mut session = load_session(&store, session_id)?;

    let goal_id = session.goals_mut().add(description)?.id.clone();
    save_session(&store, config, &session)?;
    println!("{goal_id}");
    Ok(())
}

fn toggle_goal(config: &BolsterConfig, session_id: &str, goal_id: &str) -> Result<()> {
    let store = open_store(config)?;
    let mut session = load_session(&store, session_id)?;

    let completed = session.goals_mut().toggle(goal_id)?.completed;
    save_session(&store, config, &session)?;
    println!(
        "{} is now {}",
        goal_id,
        if completed { "complete" } else { "incomplete" }
    );
    Ok(())
}

fn list_goals(config: &BolsterConfig, session_id: &str) -> Result<()> {
    let store = open_store(config)?;
    let session = load_session(&store, session_id)?;

    if session.goals().goals().is_empty() {
        println!("No goals for session {session_id}");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Goal", "Description", "Status"]);

    for goal in session.goals().goals() {
        table.add_row(vec![
            goal.id.clone(),
            goal.description.clone(),
            if goal.completed {
                "complete".to_string()
            } else {
                "open".to_string()
            },
        ]);
    }
    println!("{table}");
    Ok(())
}

//! Stored session management commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use tracing::info;

use bolster_core::{
    AnalyticsAggregator, Reconciler, Session, SessionExporter, SnapshotStore, TipExtractor,
    UserMessage,
};

use crate::config::BolsterConfig;

use super::{load_session, open_store, save_session};

/// Session management arguments
#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommands,
}

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Create a new stored session
    New,
    /// List stored sessions
    List,
    /// Append one exchange to a session
    Log {
        /// Session ID to append to
        session_id: String,
        /// The user message
        text: String,
        /// Score claimed by the external model, 1-10
        #[arg(long)]
        ai_score: Option<i64>,
        /// The model's justification for its score
        #[arg(long)]
        ai_explanation: Option<String>,
        /// Raw model reply, stored and mined for tips
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        reply: String,
    },
    /// Show session analytics
    Show {
        /// Session ID to summarize
        session_id: String,
    },
    /// Print or write the session snapshot as JSON
    Export {
        /// Session ID to export
        session_id: String,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Run session command
pub fn run(args: SessionArgs, config: &BolsterConfig) -> Result<()> {
    match args.command {
        SessionCommands::New => new_session(config),
        SessionCommands::List => list_sessions(config),
        SessionCommands::Log {
            session_id,
            text,
            ai_score,
            ai_explanation,
            reply,
        } => log_exchange(config, &session_id, &text, ai_score, ai_explanation.as_deref(), &reply),
        SessionCommands::Show { session_id } => show_session(config, &session_id),
        SessionCommands::Export { session_id, out } => export_session(config, &session_id, out),
    }
}

fn new_session(config: &BolsterConfig) -> Result<()> {
    let store = open_store(config)?;
    let session = Session::new();
    save_session(&store, config, &session)?;
    info!(session_id = %session.session_id(), "session created");
    println!("{}", session.session_id());
    Ok(())
}

fn list_sessions(config: &BolsterConfig) -> Result<()> {
    let store = open_store(config)?;
    let ids = store.list()?;
    if ids.is_empty() {
        println!("No stored sessions");
        return Ok(());
    }

    let aggregator = AnalyticsAggregator::new(&config.engine);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Session", "Messages", "Avg", "Trend"]);

    for id in ids {
        let session = load_session(&store, &id)?;
        let analytics = aggregator.summarize(&session);
        table.add_row(vec![
            id,
            analytics.message_count.to_string(),
            format_average(analytics.average_confidence),
            analytics.trend.as_str().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn log_exchange(
    config: &BolsterConfig,
    session_id: &str,
    text: &str,
    ai_score: Option<i64>,
    ai_explanation: Option<&str>,
    reply: &str,
) -> Result<()> {
    let store = open_store(config)?;
    let mut session = load_session(&store, session_id)?;

    let message = UserMessage::new(text, &config.engine)?;
    let assessment = Reconciler::new(&config.engine).reconcile(text, ai_score, ai_explanation);
    let (tips, next_steps) = TipExtractor::new(&config.engine).extract(reply);

    let exchange = session.append(message, reply.to_string(), assessment, tips, next_steps)?;
    println!(
        "#{} score {} ({})",
        exchange.sequence_index,
        exchange.assessment.score,
        exchange.assessment.source.as_str()
    );

    save_session(&store, config, &session)?;
    Ok(())
}

fn show_session(config: &BolsterConfig, session_id: &str) -> Result<()> {
    let store = open_store(config)?;
    let session = load_session(&store, session_id)?;
    let analytics = AnalyticsAggregator::new(&config.engine).summarize(&session);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Messages".to_string(), analytics.message_count.to_string()]);
    table.add_row(vec![
        "Avg confidence".to_string(),
        format_average(analytics.average_confidence),
    ]);
    table.add_row(vec!["Trend".to_string(), analytics.trend.as_str().to_string()]);
    table.add_row(vec![
        "Duration".to_string(),
        format!("{}s", analytics.duration_seconds),
    ]);
    table.add_row(vec![
        "Goals".to_string(),
        format!(
            "{}/{} complete",
            session.goals().goals().iter().filter(|g| g.completed).count(),
            session.goals().goals().len()
        ),
    ]);
    println!("{table}");
    Ok(())
}

fn export_session(config: &BolsterConfig, session_id: &str, out: Option<PathBuf>) -> Result<()> {
    let store = open_store(config)?;
    let session = load_session(&store, session_id)?;
    let snapshot = SessionExporter::new(&config.engine).export(&session);
    let json = serde_json::to_string_pretty(&snapshot)?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Exported {} to {}", session_id, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{avg:.1}/10"),
        None => "-".to_string(),
    }
}

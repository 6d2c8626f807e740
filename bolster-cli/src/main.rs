use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod paths;

#[derive(Parser)]
#[command(name = "bolster", about = "Confidence coaching session analytics")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one message without touching any session
    Analyze(commands::analyze::AnalyzeArgs),
    /// Manage goals on a stored session
    Goals(commands::goals::GoalsArgs),
    /// Manage stored coaching sessions
    Session(commands::session::SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::ConfigLoader::load()?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &config),
        Commands::Goals(args) => commands::goals::run(args, &config),
        Commands::Session(args) => commands::session::run(args, &config),
    }
}

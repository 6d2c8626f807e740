//! One-shot assessment without session state

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bolster_core::{ConfidenceAssessment, Reconciler, TipExtractor, UserMessage};

use crate::config::BolsterConfig;

/// Analyze arguments
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The user message to assess
    pub text: String,

    /// Score claimed by the external model, 1-10
    #[arg(long)]
    pub ai_score: Option<i64>,

    /// The model's justification for its score
    #[arg(long)]
    pub ai_explanation: Option<String>,

    /// Raw model reply to extract tips from
    #[arg(long)]
    pub reply: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    assessment: ConfidenceAssessment,
    tips: Vec<String>,
    next_steps: Vec<String>,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs, config: &BolsterConfig) -> Result<()> {
    // Validation only; analyze does not store the message anywhere
    UserMessage::new(&args.text, &config.engine)?;

    let assessment = Reconciler::new(&config.engine).reconcile(
        &args.text,
        args.ai_score,
        args.ai_explanation.as_deref(),
    );

    let (tips, next_steps) = match args.reply.as_deref() {
        Some(reply) => TipExtractor::new(&config.engine).extract(reply),
        None => (Vec::new(), Vec::new()),
    };

    let output = AnalyzeOutput {
        assessment,
        tips,
        next_steps,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

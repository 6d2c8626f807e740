//! Confidence assessment reconciliation
//!
//! Combines the local keyword signal with an externally supplied
//! AI-estimated score into one authoritative, explainable assessment.
//! The AI signal is treated as unreliable input: absent, malformed,
//! or out-of-range values select a fallback path instead of failing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CoachConfig;
use crate::lexicon::KeywordLexicon;

/// Provenance of a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentSource {
    /// Derived purely from the keyword lexicon
    KeywordOnly,
    /// Derived purely from the AI-estimated score
    AiOnly,
    /// Weighted blend of both signals
    Reconciled,
}

impl AssessmentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeywordOnly => "keyword-only",
            Self::AiOnly => "ai-only",
            Self::Reconciled => "reconciled",
        }
    }
}

/// An explainable confidence assessment for one exchange
///
/// Invariants: `score` is always in 1..=10 and `reasoning` is never
/// empty, on every path including fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    /// Confidence score, 1-10 inclusive
    pub score: u8,
    /// Human-readable justification for the score
    pub reasoning: String,
    /// Distinct lexicon keywords matched in the user's text
    pub matched_keywords: BTreeSet<String>,
    /// Where the score came from
    pub source: AssessmentSource,
}

/// Reconciles the keyword signal with the AI-estimated score
#[derive(Debug, Clone)]
pub struct Reconciler {
    lexicon: KeywordLexicon,
    ai_weight: f64,
    keyword_weight: f64,
}

impl Reconciler {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            lexicon: KeywordLexicon::new(),
            ai_weight: config.ai_weight,
            keyword_weight: config.keyword_weight,
        }
    }

    /// Produce an assessment for the user's text.
    ///
    /// `ai_score` and `ai_explanation` come from the external model
    /// collaborator and may each be absent or unusable. Deterministic
    /// for identical inputs.
    pub fn reconcile(
        &self,
        user_text: &str,
        ai_score: Option<i64>,
        ai_explanation: Option<&str>,
    ) -> ConfidenceAssessment {
        let (kw_score, matched) = self.lexicon.score_keywords(user_text);

        let ai_score = match ai_score {
            Some(s) if (1..=10).contains(&s) => Some(s as u8),
            Some(s) => {
                warn!(ai_score = s, "AI score out of range, falling back to keywords");
                None
            }
            None => None,
        };

        let assessment = match ai_score {
            Some(ai) if !matched.is_empty() => {
                let blended = self.ai_weight * f64::from(ai) + self.keyword_weight * kw_score;
                ConfidenceAssessment {
                    score: clamp_score(blended.round()),
                    reasoning: with_keyword_clause(ai_reasoning(ai, ai_explanation), &matched),
                    matched_keywords: matched,
                    source: AssessmentSource::Reconciled,
                }
            }
            // No keyword signal beyond the neutral midpoint, so the
            // assessment rests on the AI score alone.
            Some(ai) => ConfidenceAssessment {
                score: ai,
                reasoning: ai_reasoning(ai, ai_explanation),
                matched_keywords: matched,
                source: AssessmentSource::AiOnly,
            },
            None => ConfidenceAssessment {
                score: clamp_score(kw_score.round()),
                reasoning: keyword_reasoning(&matched, clamp_score(kw_score.round())),
                matched_keywords: matched,
                source: AssessmentSource::KeywordOnly,
            },
        };

        debug!(
            score = assessment.score,
            source = assessment.source.as_str(),
            keywords = assessment.matched_keywords.len(),
            "reconciled confidence assessment"
        );
        assessment
    }
}

fn clamp_score(value: f64) -> u8 {
    value.clamp(1.0, 10.0) as u8
}

fn ai_reasoning(ai: u8, explanation: Option<&str>) -> String {
    match explanation.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => format!("The model assessed confidence at {ai}/10 without further explanation."),
    }
}

fn with_keyword_clause(base: String, matched: &BTreeSet<String>) -> String {
    let keywords: Vec<&str> = matched.iter().map(String::as_str).collect();
    format!("{} Confidence keywords noticed: {}.", base, keywords.join(", "))
}

fn keyword_reasoning(matched: &BTreeSet<String>, score: u8) -> String {
    if matched.is_empty() {
        "No strong confidence signals in this message; holding a neutral read.".to_string()
    } else {
        let keywords: Vec<&str> = matched.iter().map(String::as_str).collect();
        format!(
            "Your words ({}) suggest confidence around {}/10.",
            keywords.join(", "),
            score
        )
    }
}

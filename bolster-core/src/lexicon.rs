//! Weighted keyword vocabulary for the local confidence signal
//!
//! This is the cheap, always-available half of reconciliation: a pure
//! scan of the user's text against a static vocabulary where each
//! keyword carries a polarity tier. It never fails and never depends
//! on anything external.

use std::collections::BTreeSet;

/// Polarity tier of a confidence keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    StrongNegative,
    MildNegative,
    Neutral,
    MildPositive,
    StrongPositive,
}

impl Polarity {
    /// Score anchor on the 1-10 confidence scale
    pub fn anchor(&self) -> f64 {
        match self {
            Self::StrongNegative => 2.0,
            Self::MildNegative => 4.0,
            Self::Neutral => 5.0,
            Self::MildPositive => 7.0,
            Self::StrongPositive => 9.0,
        }
    }
}

/// Neutral midpoint returned when nothing matches
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Static vocabulary: keyword, polarity tier
const VOCABULARY: &[(&str, Polarity)] = &[
    ("very low", Polarity::StrongNegative),
    ("terrible", Polarity::StrongNegative),
    ("awful", Polarity::StrongNegative),
    ("hopeless", Polarity::StrongNegative),
    ("depressed", Polarity::StrongNegative),
    ("useless", Polarity::StrongNegative),
    ("worthless", Polarity::StrongNegative),
    ("sad", Polarity::MildNegative),
    ("low", Polarity::MildNegative),
    ("down", Polarity::MildNegative),
    ("struggling", Polarity::MildNegative),
    ("difficult", Polarity::MildNegative),
    ("tired", Polarity::MildNegative),
    ("stuck", Polarity::MildNegative),
    ("nervous", Polarity::MildNegative),
    ("okay", Polarity::Neutral),
    ("fine", Polarity::Neutral),
    ("average", Polarity::Neutral),
    ("neutral", Polarity::Neutral),
    ("good", Polarity::MildPositive),
    ("positive", Polarity::MildPositive),
    ("better", Polarity::MildPositive),
    ("confident", Polarity::MildPositive),
    ("proud", Polarity::MildPositive),
    ("great", Polarity::StrongPositive),
    ("excellent", Polarity::StrongPositive),
    ("amazing", Polarity::StrongPositive),
    ("fantastic", Polarity::StrongPositive),
    ("unstoppable", Polarity::StrongPositive),
];

/// Static weighted vocabulary scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordLexicon;

impl KeywordLexicon {
    pub fn new() -> Self {
        Self
    }

    /// Score text against the vocabulary.
    ///
    /// Case-insensitive substring matching; each distinct keyword
    /// counts once regardless of repetition. Returns the mean of the
    /// matched polarity anchors, or the neutral midpoint and an empty
    /// set when nothing matches.
    pub fn score_keywords(&self, text: &str) -> (f64, BTreeSet<String>) {
        let lowered = text.to_lowercase();
        let mut matched = BTreeSet::new();
        let mut sum = 0.0;

        for (keyword, polarity) in VOCABULARY {
            if lowered.contains(keyword) && matched.insert((*keyword).to_string()) {
                sum += polarity.anchor();
            }
        }

        if matched.is_empty() {
            (NEUTRAL_SCORE, matched)
        } else {
            (sum / matched.len() as f64, matched)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_returns_neutral_midpoint() {
        let (score, matched) = KeywordLexicon::new().score_keywords("the weather report");
        assert_eq!(score, NEUTRAL_SCORE);
        assert!(matched.is_empty());
    }

    #[test]
    fn single_negative_keyword_scores_below_midpoint() {
        let (score, matched) = KeywordLexicon::new().score_keywords("I feel stuck");
        assert_eq!(score, 4.0);
        assert_eq!(matched.len(), 1);
        assert!(matched.contains("stuck"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (score, matched) = KeywordLexicon::new().score_keywords("Feeling GREAT today");
        assert_eq!(score, 9.0);
        assert!(matched.contains("great"));
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let (score, matched) = KeywordLexicon::new().score_keywords("tired, so tired, always tired");
        assert_eq!(score, 4.0);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn mixed_keywords_average_their_anchors() {
        // "hopeless" (2.0) + "confident" (7.0) -> 4.5
        let (score, matched) = KeywordLexicon::new()
            .score_keywords("I felt hopeless last week but more confident now");
        assert_eq!(score, 4.5);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn scoring_is_deterministic() {
        let lexicon = KeywordLexicon::new();
        let a = lexicon.score_keywords("struggling but hopeful, doing okay");
        let b = lexicon.score_keywords("struggling but hopeful, doing okay");
        assert_eq!(a, b);
    }

    #[test]
    fn score_stays_in_range() {
        let lexicon = KeywordLexicon::new();
        for text in ["terrible awful hopeless", "amazing fantastic great", ""] {
            let (score, _) = lexicon.score_keywords(text);
            assert!((0.0..=10.0).contains(&score), "score {score} out of range");
        }
    }
}

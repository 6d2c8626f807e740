//! Tip extraction from raw reply text
//!
//! Heuristic line segmentation: the external model's reply is plain
//! prose, and the actionable parts are usually bulleted, numbered, or
//! lead with an imperative verb. Segments carrying a time or action
//! marker are next steps, the rest are tips.

use crate::config::CoachConfig;

const BULLET_MARKERS: &[char] = &['-', '•', '→', '*'];

/// First-word verbs that mark an unbulleted line as actionable
const IMPERATIVE_VERBS: &[&str] = &[
    "try", "practice", "start", "take", "write", "remember", "focus", "celebrate",
];

/// Substrings that classify an actionable segment as a next step
const ACTION_MARKERS: &[&str] = &["today", "this week", "tonight", "try", "practice", "start"];

/// Extracts tips and next steps from unstructured reply text
#[derive(Debug, Clone, Copy)]
pub struct TipExtractor {
    max_tips: usize,
}

impl TipExtractor {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            max_tips: config.max_tips,
        }
    }

    /// Segment the raw reply into tips and next steps.
    ///
    /// Returns empty lists rather than failing when nothing is
    /// recognized. Deterministic for identical input.
    pub fn extract(&self, raw_reply: &str) -> (Vec<String>, Vec<String>) {
        let mut tips = Vec::new();
        let mut next_steps = Vec::new();

        for line in raw_reply.lines() {
            let line = line.trim();
            if line.is_empty() || !is_actionable(line) {
                continue;
            }

            let segment = strip_markers(line);
            if segment.is_empty() {
                continue;
            }

            let lowered = segment.to_lowercase();
            if ACTION_MARKERS.iter().any(|m| lowered.contains(m)) {
                if next_steps.len() < self.max_tips {
                    next_steps.push(segment);
                }
            } else if tips.len() < self.max_tips {
                tips.push(segment);
            }
        }

        (tips, next_steps)
    }
}

fn is_actionable(line: &str) -> bool {
    if line.starts_with(BULLET_MARKERS) {
        return true;
    }
    if starts_numbered(line) {
        return true;
    }
    let first_word = line
        .split_whitespace()
        .next()
        .map(|w| w.trim_end_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .unwrap_or_default();
    IMPERATIVE_VERBS.contains(&first_word.as_str())
}

fn starts_numbered(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(d), Some('.')) if d.is_ascii_digit()
    )
}

fn strip_markers(line: &str) -> String {
    line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c == '.' || c.is_whitespace() || BULLET_MARKERS.contains(&c)
    })
    .trim()
    .to_string()
}

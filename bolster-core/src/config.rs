//! Engine tunables
//!
//! The engine consumes these values but does not own where they come
//! from; the CLI merges them from a TOML file, other callers can build
//! them directly.

use serde::{Deserialize, Serialize};

/// Default maximum user message length in characters
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;

/// Default weight of the AI-estimated score in reconciliation
pub const DEFAULT_AI_WEIGHT: f64 = 0.7;

/// Default weight of the keyword score in reconciliation
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;

/// Default score difference required for a directional trend verdict
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.5;

/// Default minimum exchanges before a directional trend is reported
pub const DEFAULT_MIN_TREND_MESSAGES: usize = 3;

/// Default cap on extracted tips / next steps per exchange
pub const DEFAULT_MAX_TIPS: usize = 3;

/// Tunables consumed by the assessment and analytics engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Maximum user message length in characters
    pub max_message_length: usize,

    /// Weight of the AI-estimated score when reconciling
    pub ai_weight: f64,

    /// Weight of the keyword score when reconciling
    pub keyword_weight: f64,

    /// Mean score difference between session thirds for a directional verdict
    pub trend_threshold: f64,

    /// Minimum exchanges before the trend is directional
    pub min_trend_messages: usize,

    /// Cap on extracted tips and next steps per exchange
    pub max_tips: usize,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            ai_weight: DEFAULT_AI_WEIGHT,
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            trend_threshold: DEFAULT_TREND_THRESHOLD,
            min_trend_messages: DEFAULT_MIN_TREND_MESSAGES,
            max_tips: DEFAULT_MAX_TIPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CoachConfig::default();
        assert_eq!(config.max_message_length, 1000);
        assert_eq!(config.ai_weight, 0.7);
        assert_eq!(config.keyword_weight, 0.3);
        assert_eq!(config.trend_threshold, 0.5);
        assert_eq!(config.min_trend_messages, 3);
        assert_eq!(config.max_tips, 3);
    }
}

//! Session trend analytics
//!
//! A pure read over the exchange ledger: nothing is cached, every
//! call recomputes from the full history. Sessions are bounded by
//! human patience, so recomputation stays cheap and can never go
//! stale.

use serde::{Deserialize, Serialize};

use crate::config::CoachConfig;
use crate::session::{Exchange, Session};

/// Directional classification of confidence movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

/// Derived session statistics; never stored, recomputed per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub message_count: u64,
    /// Mean of all exchange scores; absent for an empty session
    pub average_confidence: Option<f64>,
    pub trend: Trend,
    /// Whole seconds between the first and last exchange
    #[serde(rename = "duration")]
    pub duration_seconds: i64,
}

/// Computes rolling statistics over a session's ledger
#[derive(Debug, Clone)]
pub struct AnalyticsAggregator {
    trend_threshold: f64,
    min_trend_messages: usize,
}

impl AnalyticsAggregator {
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            trend_threshold: config.trend_threshold,
            min_trend_messages: config.min_trend_messages,
        }
    }

    /// Summarize the session's full exchange history.
    ///
    /// Never fails: an empty session yields a zero-count snapshot
    /// with no average and an insufficient-data trend.
    pub fn summarize(&self, session: &Session) -> AnalyticsSnapshot {
        let exchanges = session.exchanges();
        let count = exchanges.len();

        let average_confidence = if count == 0 {
            None
        } else {
            let sum: u64 = exchanges.iter().map(|e| u64::from(e.assessment.score)).sum();
            Some(sum as f64 / count as f64)
        };

        let duration_seconds = match (exchanges.first(), exchanges.last()) {
            (Some(first), Some(last)) => (last.user_message.timestamp
                - first.user_message.timestamp)
                .num_seconds(),
            _ => 0,
        };

        AnalyticsSnapshot {
            message_count: count as u64,
            average_confidence,
            trend: self.trend(exchanges),
            duration_seconds,
        }
    }

    /// Compare the latest third of the session against the earliest.
    fn trend(&self, exchanges: &[Exchange]) -> Trend {
        let n = exchanges.len();
        if n < self.min_trend_messages {
            return Trend::InsufficientData;
        }

        let third = (n / 3).max(1);
        let early = mean_score(&exchanges[..third]);
        let late = mean_score(&exchanges[n - third..]);
        let delta = late - early;

        if delta > self.trend_threshold {
            Trend::Improving
        } else if delta < -self.trend_threshold {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}

fn mean_score(exchanges: &[Exchange]) -> f64 {
    let sum: u64 = exchanges.iter().map(|e| u64::from(e.assessment.score)).sum();
    sum as f64 / exchanges.len() as f64
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::assess::{AssessmentSource, ConfidenceAssessment};
    use crate::session::{Session, UserMessage};

    fn session_with_scores(scores: &[u8]) -> Session {
        let mut session = Session::new();
        let start = Utc::now();
        for (i, &score) in scores.iter().enumerate() {
            let msg = UserMessage {
                content: format!("message {i}"),
                timestamp: start + Duration::seconds(60 * i as i64),
            };
            let assessment = ConfidenceAssessment {
                score,
                reasoning: "test reasoning".into(),
                matched_keywords: Default::default(),
                source: AssessmentSource::KeywordOnly,
            };
            session
                .append(msg, "reply".into(), assessment, vec![], vec![])
                .unwrap();
        }
        session
    }

    fn aggregator() -> AnalyticsAggregator {
        AnalyticsAggregator::new(&CoachConfig::default())
    }

    #[test]
    fn empty_session_reports_insufficient_data() {
        let snapshot = aggregator().summarize(&Session::new());
        assert_eq!(snapshot.message_count, 0);
        assert_eq!(snapshot.average_confidence, None);
        assert_eq!(snapshot.trend, Trend::InsufficientData);
        assert_eq!(snapshot.duration_seconds, 0);
    }

    #[test]
    fn single_exchange_has_zero_duration() {
        let snapshot = aggregator().summarize(&session_with_scores(&[7]));
        assert_eq!(snapshot.message_count, 1);
        assert_eq!(snapshot.average_confidence, Some(7.0));
        assert_eq!(snapshot.trend, Trend::InsufficientData);
        assert_eq!(snapshot.duration_seconds, 0);
    }

    #[test]
    fn two_exchanges_still_insufficient_for_direction() {
        let snapshot = aggregator().summarize(&session_with_scores(&[3, 9]));
        assert_eq!(snapshot.trend, Trend::InsufficientData);
    }

    #[test]
    fn monotonic_improvement_is_detected() {
        let snapshot = aggregator().summarize(&session_with_scores(&[3, 3, 3, 8, 8, 8]));
        assert_eq!(snapshot.trend, Trend::Improving);
        assert_eq!(snapshot.average_confidence, Some(5.5));
    }

    #[test]
    fn decline_is_detected() {
        let snapshot = aggregator().summarize(&session_with_scores(&[9, 8, 8, 4, 3, 3]));
        assert_eq!(snapshot.trend, Trend::Declining);
    }

    #[test]
    fn flat_scores_are_stable() {
        let snapshot = aggregator().summarize(&session_with_scores(&[6, 6, 6, 6]));
        assert_eq!(snapshot.trend, Trend::Stable);
    }

    #[test]
    fn delta_at_threshold_is_stable() {
        // early third [5,5] mean 5.0, late third [5,6] mean 5.5; 0.5 is not > 0.5
        let snapshot = aggregator().summarize(&session_with_scores(&[5, 5, 5, 5, 5, 6]));
        assert_eq!(snapshot.trend, Trend::Stable);
    }

    #[test]
    fn duration_spans_first_to_last_exchange() {
        // 4 exchanges one minute apart
        let snapshot = aggregator().summarize(&session_with_scores(&[5, 5, 5, 5]));
        assert_eq!(snapshot.duration_seconds, 180);
    }

    #[test]
    fn trend_serializes_kebab_case() {
        let json = serde_json::to_string(&Trend::InsufficientData).unwrap();
        assert_eq!(json, "\"insufficient-data\"");
    }
}

use std::path::PathBuf;

use bolster_core::CoachConfig;
use serde::Deserialize;

/// Configuration as stored in the TOML file (optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBolsterConfig {
    #[serde(default)]
    pub engine: RawEngineConfig,

    #[serde(default)]
    pub storage: RawStorageConfig,
}

/// Engine tunables as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawEngineConfig {
    /// Maximum user message length in characters
    pub max_message_length: Option<usize>,

    /// Weight of the AI-estimated score when reconciling
    pub ai_weight: Option<f64>,

    /// Weight of the keyword score when reconciling
    pub keyword_weight: Option<f64>,

    /// Score difference required for a directional trend verdict
    pub trend_threshold: Option<f64>,

    /// Minimum exchanges before the trend is directional
    pub min_trend_messages: Option<usize>,

    /// Cap on extracted tips and next steps per exchange
    pub max_tips: Option<usize>,
}

/// Storage section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStorageConfig {
    /// Directory for stored session snapshots
    pub data_dir: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone)]
pub struct BolsterConfig {
    pub engine: CoachConfig,
    pub data_dir: PathBuf,
}

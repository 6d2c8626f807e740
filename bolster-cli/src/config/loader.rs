use anyhow::Result;
use bolster_core::CoachConfig;

use crate::paths;

use super::types::{BolsterConfig, RawBolsterConfig};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load user config with defaults applied for anything unset
    pub fn load() -> Result<BolsterConfig> {
        let mut raw = RawBolsterConfig::default();

        if let Some(path) = paths::config_path()
            && path.exists()
        {
            let contents = std::fs::read_to_string(&path)?;
            raw = toml::from_str(&contents)?;
        }

        Ok(Self::finalize(raw))
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawBolsterConfig) -> BolsterConfig {
        let defaults = CoachConfig::default();
        BolsterConfig {
            engine: CoachConfig {
                max_message_length: raw
                    .engine
                    .max_message_length
                    .unwrap_or(defaults.max_message_length),
                ai_weight: raw.engine.ai_weight.unwrap_or(defaults.ai_weight),
                keyword_weight: raw.engine.keyword_weight.unwrap_or(defaults.keyword_weight),
                trend_threshold: raw
                    .engine
                    .trend_threshold
                    .unwrap_or(defaults.trend_threshold),
                min_trend_messages: raw
                    .engine
                    .min_trend_messages
                    .unwrap_or(defaults.min_trend_messages),
                max_tips: raw.engine.max_tips.unwrap_or(defaults.max_tips),
            },
            data_dir: raw.storage.data_dir.unwrap_or_else(paths::default_data_dir),
        }
    }
}

//! Config and data directory resolution

use std::path::PathBuf;

/// User config file path (platform-specific).
///
/// `BOLSTER_CONFIG_DIR` overrides the base directory, which keeps
/// tests isolated from a real user config.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("BOLSTER_CONFIG_DIR") {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("bolster").join("config.toml"))
}

/// Default directory for stored session snapshots.
///
/// `BOLSTER_DATA_DIR` overrides; otherwise the platform data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOLSTER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("bolster").join("sessions"))
        .unwrap_or_else(|| PathBuf::from(".bolster/sessions"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_expected_file() {
        if let Some(path) = config_path() {
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }

    #[test]
    fn default_data_dir_is_not_empty() {
        assert!(!default_data_dir().as_os_str().is_empty());
    }
}

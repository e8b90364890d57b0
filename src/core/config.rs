//! Tracker configuration
//!
//! Settings for where static campaign data lives and where session
//! snapshots autosave. Loaded from a TOML file and passed explicitly into
//! whatever needs it; there is no process-wide config.

use crate::core::error::{MusterError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the tracker
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory holding campaign.json and per-army JSON exports
    pub data_dir: PathBuf,

    /// Where to write the session snapshot on save (optional)
    pub autosave: Option<PathBuf>,

    /// Army URL identifier to load on startup (optional)
    pub default_army: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            autosave: None,
            default_army: None,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TrackerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(MusterError::Config("data_dir must not be empty".into()));
        }
        if let Some(army) = &self.default_army {
            if army.is_empty() {
                return Err(MusterError::Config("default_army must not be empty".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
data_dir = "campaign_data"
autosave = "save/active_game.json"
default_army = "crimson-fists"
"#;
        let config: TrackerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("campaign_data"));
        assert_eq!(config.autosave, Some(PathBuf::from("save/active_game.json")));
        assert_eq!(config.default_army.as_deref(), Some("crimson-fists"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TrackerConfig = toml::from_str(r#"data_dir = "elsewhere""#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("elsewhere"));
        assert!(config.autosave.is_none());
        assert!(config.default_army.is_none());
    }

    #[test]
    fn test_empty_default_army_rejected() {
        let config: TrackerConfig = toml::from_str(r#"default_army = """#).unwrap();
        assert!(config.validate().is_err());
    }
}

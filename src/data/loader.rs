//! Load campaign and army data from JSON files on disk
//!
//! `DataStore` is the file-backed source the tracker reads from: one
//! `campaign.json` describing the campaign, plus one `<army-url>.json`
//! export per army. Missions and doctrines live in optional side files.

use crate::campaign::CampaignData;
use crate::core::config::TrackerConfig;
use crate::core::error::{MusterError, Result};
use crate::force::army::{Army, ComposeReport};
use crate::roster::raw::RawArmy;
use std::path::{Path, PathBuf};

/// File-backed source of campaign and army data
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load campaign.json plus the optional missions and doctrines files
    pub fn load_campaign(&self) -> Result<CampaignData> {
        let content = std::fs::read_to_string(self.data_dir.join("campaign.json"))?;
        let mut campaign: CampaignData = serde_json::from_str(&content)?;

        match std::fs::read_to_string(self.data_dir.join("missions.json")) {
            Ok(content) => {
                let side: CampaignData = serde_json::from_str(&content)?;
                campaign.missions = side.missions;
            }
            Err(error) => {
                tracing::warn!("no missions data found: {}", error);
            }
        }

        match std::fs::read_to_string(self.data_dir.join("doctrines.json")) {
            Ok(content) => {
                let side: CampaignData = serde_json::from_str(&content)?;
                campaign.doctrines = side.doctrines;
            }
            Err(error) => {
                tracing::warn!("no doctrines data found: {}", error);
            }
        }

        Ok(campaign)
    }

    /// Load one army's raw export by its campaign URL identifier
    ///
    /// The identifier must appear in the campaign data; the export itself
    /// is read from `<data_dir>/<url>.json`.
    pub fn load_army_raw(&self, url: &str) -> Result<RawArmy> {
        let campaign = self.load_campaign()?;
        if campaign.find_army(url).is_none() {
            return Err(MusterError::ArmyNotFound(url.to_string()));
        }
        let path = self.data_dir.join(format!("{}.json", url));
        Self::army_from_json(&std::fs::read_to_string(path)?)
    }

    /// Load and compose one army by its campaign URL identifier
    pub fn load_army(&self, url: &str) -> Result<ComposeReport> {
        Ok(Army::compose(&self.load_army_raw(url)?))
    }

    /// Parse a raw army export from a JSON string
    pub fn army_from_json(json: &str) -> Result<RawArmy> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_army_from_json() {
        let raw = DataStore::army_from_json(
            r#"{"id": "a1", "name": "Strike Force", "pointsLimit": 750, "units": []}"#,
        )
        .unwrap();
        assert_eq!(raw.name.as_deref(), Some("Strike Force"));
        assert_eq!(raw.points_limit, 750);
    }

    #[test]
    fn test_missing_campaign_file_is_io_error() {
        let store = DataStore::new("/nonexistent/muster-test");
        assert!(matches!(
            store.load_campaign(),
            Err(MusterError::IoError(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = std::env::temp_dir().join(format!("muster_store_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("campaign.json"),
            r#"{"armies": [{"armyName": "Iron Fists", "armyURL": "iron-fists", "player": "Sam"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("iron-fists.json"),
            r#"{"id": "a1", "name": "Iron Fists", "units": [
                {"id": "u1", "selectionId": "u1", "name": "Grunts", "size": 5, "cost": 100}
            ]}"#,
        )
        .unwrap();

        let store = DataStore::new(&dir);
        let campaign = store.load_campaign().unwrap();
        assert_eq!(campaign.armies.len(), 1);

        let report = store.load_army("iron-fists").unwrap();
        assert!(report.failures.is_empty());
        assert_eq!(report.army.units.len(), 1);

        assert!(matches!(
            store.load_army("nobody"),
            Err(MusterError::ArmyNotFound(_))
        ));

        std::fs::remove_dir_all(&dir).ok();
    }
}

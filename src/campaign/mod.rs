//! Campaign standings: participating armies, missions, doctrines
//!
//! Read-only campaign context around the per-game tracker: who is playing,
//! how the league table stands, and how far through the mission list the
//! campaign has progressed.

use serde::{Deserialize, Serialize};

/// One army's campaign entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignArmy {
    #[serde(default, rename = "armyForgeID")]
    pub army_forge_id: Option<String>,
    pub army_name: String,
    /// URL identifier; also the army's JSON file name in the data directory
    #[serde(rename = "armyURL")]
    pub army_url: String,
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub objectives: u32,
}

/// A campaign mission, in play order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

/// A selectable campaign doctrine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctrine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Entry for an army-selection menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmyOption {
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    pub player: String,
}

/// The whole campaign dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignData {
    #[serde(default)]
    pub armies: Vec<CampaignArmy>,
    #[serde(default)]
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub doctrines: Vec<Doctrine>,
}

impl CampaignData {
    /// Armies sorted by wins, then objectives, both descending
    pub fn leaderboard(&self) -> Vec<&CampaignArmy> {
        let mut standings: Vec<&CampaignArmy> = self.armies.iter().collect();
        standings.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| b.objectives.cmp(&a.objectives))
        });
        standings
    }

    /// First incomplete mission, or the final one once all are done
    pub fn current_mission(&self) -> Option<&Mission> {
        self.missions
            .iter()
            .find(|mission| !mission.completed)
            .or_else(|| self.missions.last())
    }

    /// Completed missions as a rounded percentage
    pub fn progress_percent(&self) -> u32 {
        if self.missions.is_empty() {
            return 0;
        }
        let completed = self.missions.iter().filter(|m| m.completed).count();
        ((completed as f64 / self.missions.len() as f64) * 100.0).round() as u32
    }

    /// Selector entries for every campaign army
    pub fn army_options(&self) -> Vec<ArmyOption> {
        self.armies
            .iter()
            .map(|army| ArmyOption {
                id: army.army_forge_id.clone(),
                name: army.army_name.clone(),
                url: army.army_url.clone(),
                player: army.player.clone(),
            })
            .collect()
    }

    /// Find an army's campaign entry by its URL identifier
    pub fn find_army(&self, url: &str) -> Option<&CampaignArmy> {
        self.armies.iter().find(|army| army.army_url == url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str, wins: u32, objectives: u32) -> CampaignArmy {
        CampaignArmy {
            army_forge_id: None,
            army_name: name.to_string(),
            army_url: url.to_string(),
            player: format!("{} player", name),
            wins,
            objectives,
        }
    }

    fn campaign() -> CampaignData {
        CampaignData {
            armies: vec![
                entry("Iron Fists", "iron-fists", 1, 3),
                entry("Void Reavers", "void-reavers", 2, 1),
                entry("Dust Walkers", "dust-walkers", 1, 5),
            ],
            missions: vec![
                Mission {
                    name: "Landfall".into(),
                    completed: true,
                },
                Mission {
                    name: "Breakout".into(),
                    completed: false,
                },
                Mission {
                    name: "Last Stand".into(),
                    completed: false,
                },
            ],
            doctrines: Vec::new(),
        }
    }

    #[test]
    fn test_leaderboard_wins_then_objectives() {
        let campaign = campaign();
        let names: Vec<&str> = campaign
            .leaderboard()
            .iter()
            .map(|a| a.army_name.as_str())
            .collect();
        assert_eq!(names, vec!["Void Reavers", "Dust Walkers", "Iron Fists"]);
    }

    #[test]
    fn test_current_mission_first_incomplete() {
        let campaign = campaign();
        assert_eq!(campaign.current_mission().unwrap().name, "Breakout");
    }

    #[test]
    fn test_current_mission_falls_back_to_last() {
        let mut campaign = campaign();
        for mission in &mut campaign.missions {
            mission.completed = true;
        }
        assert_eq!(campaign.current_mission().unwrap().name, "Last Stand");
    }

    #[test]
    fn test_progress_percent_rounds() {
        let campaign = campaign();
        assert_eq!(campaign.progress_percent(), 33);
        assert_eq!(CampaignData::default().progress_percent(), 0);
    }

    #[test]
    fn test_find_army_by_url() {
        let campaign = campaign();
        assert!(campaign.find_army("void-reavers").is_some());
        assert!(campaign.find_army("nobody").is_none());
    }

    #[test]
    fn test_campaign_json_field_names() {
        let json = r#"{
            "armies": [{
                "armyForgeID": "abc123",
                "armyName": "Iron Fists",
                "armyURL": "iron-fists",
                "player": "Sam",
                "wins": 2
            }]
        }"#;
        let campaign: CampaignData = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.armies[0].army_url, "iron-fists");
        assert_eq!(campaign.armies[0].wins, 2);
        assert_eq!(campaign.armies[0].objectives, 0);
    }
}

//! Resolved units: the playable entry in an army roster

use crate::core::types::{GroupId, Points};
use crate::force::model::Model;
use crate::force::weapon::Weapon;
use crate::rules::special::{find_rule, rule_value, SpecialRule, CASTER, HERO};
use serde::{Deserialize, Serialize};

/// Morale and suppression flags a unit can carry during a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatus {
    pub shaken: bool,
    pub stunned: bool,
    pub pinned: bool,
}

/// Which status flag a mutation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Shaken,
    Stunned,
    Pinned,
}

impl UnitStatus {
    pub fn set(&mut self, flag: StatusFlag, on: bool) {
        match flag {
            StatusFlag::Shaken => self.shaken = on,
            StatusFlag::Stunned => self.stunned = on,
            StatusFlag::Pinned => self.pinned = on,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A fully composed unit: base stats, post-upgrade loadout, and models
///
/// Structural data only. Mutable game state (wounds, activation, status)
/// lives in the owning army's wound-group record, reached through `group`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    /// Unique within an army; the key every lookup and mutator uses
    pub selection_id: String,
    pub name: String,
    pub custom_name: String,
    pub size: u32,
    pub quality: u32,
    pub defense: u32,
    pub cost: Points,
    pub xp: u32,
    pub notes: Option<String>,
    pub rules: Vec<SpecialRule>,
    /// Final weapon list after upgrades are applied
    pub loadout: Vec<Weapon>,
    pub models: Vec<Model>,
    /// Wound capacity from Tough, or unit size without it
    pub max_wounds: u32,

    /// Flagged as half of a combined unit in the export
    pub combined: bool,
    /// Outgoing join reference as exported (combined members point at
    /// their leader; heroes point at their host)
    pub join_to: Option<String>,
    /// Selection ids of combined partners, symmetric within the group
    pub combined_with: Vec<String>,
    /// Host this unit is joined to, when resolved
    pub joined_to: Option<String>,
    /// Heroes joined to this unit
    pub joined_units: Vec<String>,
    /// Wound group this unit reads its game state through
    pub group: GroupId,
}

impl Unit {
    /// Name shown on cards and rosters
    pub fn display_name(&self) -> &str {
        &self.custom_name
    }

    pub fn has_rule(&self, name: &str) -> bool {
        find_rule(&self.rules, name).is_some()
    }

    pub fn rule_value(&self, name: &str) -> Option<u32> {
        rule_value(&self.rules, name)
    }

    pub fn is_hero(&self) -> bool {
        self.has_rule(HERO)
    }

    pub fn is_caster(&self) -> bool {
        self.has_rule(CASTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flags() {
        let mut status = UnitStatus::default();
        status.set(StatusFlag::Shaken, true);
        status.set(StatusFlag::Pinned, true);
        assert!(status.shaken);
        assert!(!status.stunned);
        assert!(status.pinned);

        status.set(StatusFlag::Shaken, false);
        assert!(!status.shaken);

        status.clear();
        assert_eq!(status, UnitStatus::default());
    }
}

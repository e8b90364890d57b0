//! Army composition and in-game state
//!
//! An army owns its units plus one authoritative state record per wound
//! group. Combined units share a group; everything else gets a singleton
//! group. All wound/activation/status mutation goes through the group
//! record, so combined partners can never drift apart.

use crate::core::error::{MusterError, Result};
use crate::core::types::{fresh_id, GroupId, Points};
use crate::force::compose::compose_unit;
use crate::force::model::Model;
use crate::force::unit::{StatusFlag, Unit, UnitStatus};
use crate::roster::raw::{RawArmy, RawUnit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authoritative game state for one wound group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupState {
    pub wounds: u32,
    pub max_wounds: u32,
    pub destroyed: bool,
    pub activated: bool,
    pub status: UnitStatus,
}

impl GroupState {
    fn fresh(max_wounds: u32) -> Self {
        Self {
            wounds: 0,
            max_wounds,
            destroyed: false,
            activated: false,
            status: UnitStatus::default(),
        }
    }
}

/// A unit that failed composition, with the error that sank it
#[derive(Debug)]
pub struct UnitFailure {
    pub name: String,
    pub selection_id: Option<String>,
    pub error: MusterError,
}

/// Result of composing an army: the units that worked plus per-unit failures
///
/// One malformed unit never aborts the rest of the list.
#[derive(Debug)]
pub struct ComposeReport {
    pub army: Army,
    pub failures: Vec<UnitFailure>,
}

/// A composed army with per-session game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Army {
    pub id: String,
    pub name: String,
    pub points_limit: Points,
    pub points_used: Points,
    pub units: Vec<Unit>,
    /// Selection ids eligible for independent activation
    pub activation_roster: Vec<String>,
    index: HashMap<String, usize>,
    groups: HashMap<GroupId, GroupState>,
}

impl Army {
    /// Compose a raw army export into a playable army
    pub fn compose(raw: &RawArmy) -> ComposeReport {
        let mut army = Army {
            id: raw.id.clone().unwrap_or_else(|| fresh_id("army")),
            name: raw.name.clone().unwrap_or_else(|| "Unnamed Army".to_string()),
            points_limit: raw.points_limit,
            points_used: 0,
            units: Vec::new(),
            activation_roster: Vec::new(),
            index: HashMap::new(),
            groups: HashMap::new(),
        };

        let mut failures = Vec::new();
        for raw_unit in &raw.units {
            match compose_unit(raw_unit) {
                Ok(unit) => {
                    army.points_used += unit.cost;
                    army.units.push(unit);
                }
                Err(error) => {
                    let name = raw_unit.name.clone().unwrap_or_else(|| "Unknown Unit".to_string());
                    tracing::warn!("skipping unit '{}': {}", name, error);
                    failures.push(UnitFailure {
                        name,
                        selection_id: raw_unit.selection_id.clone(),
                        error,
                    });
                }
            }
        }

        army.rebuild_relationships();
        ComposeReport { army, failures }
    }

    /// Re-resolve combined groups, joined units, the activation roster, and
    /// wound groups from scratch
    ///
    /// Existing group state survives: each rebuilt group seeds from the
    /// prior state of its first member.
    pub fn rebuild_relationships(&mut self) {
        let prior: HashMap<String, GroupState> = self
            .units
            .iter()
            .filter_map(|unit| {
                self.groups
                    .get(&unit.group)
                    .map(|state| (unit.selection_id.clone(), state.clone()))
            })
            .collect();

        self.index = self
            .units
            .iter()
            .enumerate()
            .map(|(i, unit)| (unit.selection_id.clone(), i))
            .collect();

        // Combined groups: same display name, both flagged combined,
        // excluding self. Links are symmetric by construction.
        let combined_links: Vec<Vec<String>> = self
            .units
            .iter()
            .map(|unit| {
                if !unit.combined {
                    return Vec::new();
                }
                self.units
                    .iter()
                    .filter(|other| {
                        other.combined
                            && other.selection_id != unit.selection_id
                            && other.custom_name == unit.custom_name
                    })
                    .map(|other| other.selection_id.clone())
                    .collect()
            })
            .collect();

        // Joined units: an outgoing reference on a non-combined unit links
        // it to its host. Unknown references stay unresolved.
        let mut joined_to: Vec<Option<String>> = vec![None; self.units.len()];
        let mut joined_units: Vec<Vec<String>> = vec![Vec::new(); self.units.len()];
        for (i, unit) in self.units.iter().enumerate() {
            if unit.combined {
                continue;
            }
            if let Some(target) = &unit.join_to {
                if let Some(&host) = self.index.get(target) {
                    joined_to[i] = Some(target.clone());
                    joined_units[host].push(unit.selection_id.clone());
                }
            }
        }

        for (i, unit) in self.units.iter_mut().enumerate() {
            unit.combined_with = combined_links[i].clone();
            unit.joined_to = joined_to[i].take();
            unit.joined_units = std::mem::take(&mut joined_units[i]);
        }

        // Independent activations: never a joined unit; for combined groups
        // only the leader (the member with no outgoing join reference).
        self.activation_roster = self
            .units
            .iter()
            .filter(|unit| {
                unit.joined_to.is_none()
                    && (!unit.combined
                        || unit.combined_with.is_empty()
                        || unit.join_to.is_none())
            })
            .map(|unit| unit.selection_id.clone())
            .collect();

        // Wound groups: combined partners share one record. Seed from the
        // first member that had prior state, clamped to the new cap.
        self.groups.clear();
        let mut assigned: HashMap<String, GroupId> = HashMap::new();
        let mut new_group: Vec<(usize, GroupId)> = Vec::new();
        for (i, unit) in self.units.iter().enumerate() {
            if let Some(&gid) = assigned.get(&unit.selection_id) {
                new_group.push((i, gid));
                continue;
            }

            let gid = GroupId::new();
            let mut members = vec![unit.selection_id.clone()];
            if unit.combined {
                members.extend(unit.combined_with.iter().cloned());
            }

            let max_wounds = members
                .iter()
                .filter_map(|id| self.index.get(id).map(|&j| self.units[j].max_wounds))
                .min()
                .unwrap_or(unit.max_wounds);

            let mut state = members
                .iter()
                .find_map(|id| prior.get(id).cloned())
                .unwrap_or_else(|| GroupState::fresh(max_wounds));
            state.max_wounds = max_wounds;
            state.wounds = state.wounds.min(max_wounds);
            state.destroyed = state.wounds == state.max_wounds;

            self.groups.insert(gid, state);
            for member in members {
                assigned.insert(member, gid);
            }
            new_group.push((i, gid));
        }
        for (i, gid) in new_group {
            self.units[i].group = gid;
        }
    }

    /// Look up a unit by selection id
    pub fn unit(&self, selection_id: &str) -> Option<&Unit> {
        self.index.get(selection_id).map(|&i| &self.units[i])
    }

    pub fn unit_mut(&mut self, selection_id: &str) -> Option<&mut Unit> {
        let i = *self.index.get(selection_id)?;
        Some(&mut self.units[i])
    }

    /// Game state of a unit's wound group
    pub fn unit_state(&self, selection_id: &str) -> Option<&GroupState> {
        self.groups.get(&self.unit(selection_id)?.group)
    }

    /// Apply wounds through a unit's group, clamped at the cap; returns the
    /// amount applied, or None for an unknown id
    pub fn apply_wounds(&mut self, selection_id: &str, amount: u32) -> Option<u32> {
        let gid = self.unit(selection_id)?.group;
        let state = self.groups.get_mut(&gid)?;
        let before = state.wounds;
        state.wounds = state.wounds.saturating_add(amount).min(state.max_wounds);
        state.destroyed = state.wounds == state.max_wounds;
        Some(state.wounds - before)
    }

    /// Heal wounds through a unit's group, clamped at zero
    pub fn heal_wounds(&mut self, selection_id: &str, amount: u32) -> Option<u32> {
        let gid = self.unit(selection_id)?.group;
        let state = self.groups.get_mut(&gid)?;
        let before = state.wounds;
        state.wounds = state.wounds.saturating_sub(amount);
        state.destroyed = state.wounds == state.max_wounds;
        Some(before - state.wounds)
    }

    /// Add one wound; no-op at the cap or on an unknown id
    pub fn increment_wounds(&mut self, selection_id: &str) -> Option<&GroupState> {
        self.apply_wounds(selection_id, 1)?;
        self.unit_state(selection_id)
    }

    /// Remove one wound; no-op at zero or on an unknown id
    pub fn decrement_wounds(&mut self, selection_id: &str) -> Option<&GroupState> {
        self.heal_wounds(selection_id, 1)?;
        self.unit_state(selection_id)
    }

    /// Set a unit's activation flag (shared across its combined group)
    pub fn set_activation(&mut self, selection_id: &str, activated: bool) -> Option<&GroupState> {
        let gid = self.unit(selection_id)?.group;
        self.groups.get_mut(&gid)?.activated = activated;
        self.groups.get(&gid)
    }

    /// Set one status flag on a unit's group
    pub fn set_status(
        &mut self,
        selection_id: &str,
        flag: StatusFlag,
        on: bool,
    ) -> Option<&GroupState> {
        let gid = self.unit(selection_id)?.group;
        self.groups.get_mut(&gid)?.status.set(flag, on);
        self.groups.get(&gid)
    }

    /// Attach free-text notes to a unit
    pub fn set_notes(&mut self, selection_id: &str, notes: Option<String>) -> Option<&Unit> {
        let i = *self.index.get(selection_id)?;
        self.units[i].notes = notes;
        Some(&self.units[i])
    }

    /// Clear every activation flag for a new round
    pub fn reset_activations(&mut self) {
        for state in self.groups.values_mut() {
            state.activated = false;
        }
    }

    /// Clear all wounds and status flags, reviving every model
    pub fn reset_health(&mut self) {
        for state in self.groups.values_mut() {
            state.wounds = 0;
            state.destroyed = false;
            state.status.clear();
        }
        for unit in &mut self.units {
            for model in &mut unit.models {
                model.wounds = 0;
                model.destroyed = false;
            }
        }
    }

    /// Add a unit from its raw record and re-resolve relationships
    pub fn add_unit(&mut self, raw: &RawUnit) -> Result<&Unit> {
        let unit = compose_unit(raw)?;
        let selection_id = unit.selection_id.clone();
        self.points_used += unit.cost;
        self.units.push(unit);
        self.rebuild_relationships();
        self.unit(&selection_id)
            .ok_or(MusterError::UnitNotFound(selection_id))
    }

    /// Remove a unit by selection id; false when the id is unknown
    pub fn remove_unit(&mut self, selection_id: &str) -> bool {
        let Some(&i) = self.index.get(selection_id) else {
            return false;
        };
        let unit = self.units.remove(i);
        self.points_used -= unit.cost;
        self.rebuild_relationships();
        true
    }

    pub fn remaining_points(&self) -> Points {
        self.points_limit - self.points_used
    }

    /// Every model in the army, in unit order
    pub fn all_models(&self) -> impl Iterator<Item = &Model> {
        self.units.iter().flat_map(|unit| unit.models.iter())
    }

    /// Effective model count including combined partners and joined heroes
    pub fn total_size(&self, selection_id: &str) -> Option<u32> {
        let unit = self.unit(selection_id)?;
        let mut total = unit.size;
        if unit.combined {
            for other in &unit.combined_with {
                total += self.unit(other).map(|u| u.size).unwrap_or(0);
            }
        }
        for joined in &unit.joined_units {
            total += self.unit(joined).map(|u| u.size).unwrap_or(0);
        }
        Some(total)
    }
}

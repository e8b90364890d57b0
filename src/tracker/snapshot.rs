//! Session snapshots: save and restore per-unit mutable state
//!
//! A snapshot carries only what changes during play (wounds, activation,
//! status flags, notes, session counters). Structural data always rebuilds
//! from the source export, so restoring means recomposing the army first
//! and then applying the snapshot on top.

use crate::core::error::Result;
use crate::force::army::Army;
use crate::force::unit::{StatusFlag, UnitStatus};
use crate::tracker::session::{RandomEvent, Session};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Mutable state of one unit at capture time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub wounds: u32,
    pub activated: bool,
    pub status: UnitStatus,
    pub notes: Option<String>,
}

/// Everything needed to pick a game back up against a recomposed army
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub army_id: String,
    pub round: u32,
    pub command_points: u32,
    pub game_notes: String,
    pub active_event: Option<RandomEvent>,
    /// Keyed by unit selection id
    pub units: HashMap<String, UnitSnapshot>,
}

impl GameSnapshot {
    /// Capture the mutable state of an army and its session
    pub fn capture(army: &Army, session: &Session) -> Self {
        let units = army
            .units
            .iter()
            .filter_map(|unit| {
                army.unit_state(&unit.selection_id).map(|state| {
                    (
                        unit.selection_id.clone(),
                        UnitSnapshot {
                            wounds: state.wounds,
                            activated: state.activated,
                            status: state.status,
                            notes: unit.notes.clone(),
                        },
                    )
                })
            })
            .collect();

        Self {
            army_id: army.id.clone(),
            round: session.round,
            command_points: session.command_points,
            game_notes: session.notes.clone(),
            active_event: session.active_event.clone(),
            units,
        }
    }

    /// Apply the snapshot to a recomposed army and session
    ///
    /// Unknown unit ids are skipped; wounds clamp to the current cap.
    /// Returns how many units were restored.
    pub fn restore(&self, army: &mut Army, session: &mut Session) -> usize {
        session.round = self.round.max(1);
        session.command_points = self.command_points;
        session.notes = self.game_notes.clone();
        session.active_event = self.active_event.clone();

        let mut restored = 0;
        for (selection_id, saved) in &self.units {
            if army.unit(selection_id).is_none() {
                tracing::warn!("snapshot refers to unknown unit '{}'", selection_id);
                continue;
            }
            army.heal_wounds(selection_id, u32::MAX);
            army.apply_wounds(selection_id, saved.wounds);
            army.set_activation(selection_id, saved.activated);
            army.set_status(selection_id, StatusFlag::Shaken, saved.status.shaken);
            army.set_status(selection_id, StatusFlag::Stunned, saved.status.stunned);
            army.set_status(selection_id, StatusFlag::Pinned, saved.status.pinned);
            army.set_notes(selection_id, saved.notes.clone());
            restored += 1;
        }
        restored
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to disk as JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a snapshot back from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

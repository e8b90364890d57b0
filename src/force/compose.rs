//! Unit composition: raw selection records into resolved units
//!
//! One deterministic pass per unit: apply selected upgrades in order,
//! rebuild the weapon loadout, derive the wound pool, then instantiate
//! models and deal the loadout out across them.

use crate::core::error::{MusterError, Result};
use crate::core::types::{fresh_id, GroupId};
use crate::force::model::Model;
use crate::force::unit::Unit;
use crate::force::weapon::Weapon;
use crate::roster::raw::{RawUnit, UpgradeGain, UpgradeKind};
use crate::rules::special::{rule_value, SpecialRule, TOUGH};
use std::collections::HashSet;

/// Compose one raw unit-selection record into a resolved unit
///
/// Fails only when the record can support neither a Tough-derived wound
/// pool nor a size fallback; every other oddity degrades silently the way
/// the export format expects (unknown replace targets, missing cost
/// entries).
pub fn compose_unit(raw: &RawUnit) -> Result<Unit> {
    let id = raw.id.clone().unwrap_or_else(|| fresh_id("unit"));
    let selection_id = raw.selection_id.clone().unwrap_or_else(|| id.clone());
    let name = raw.name.clone().unwrap_or_else(|| "Unknown Unit".to_string());
    let custom_name = raw.custom_name.clone().unwrap_or_else(|| name.clone());

    let mut rules: Vec<SpecialRule> = raw
        .rules
        .iter()
        .map(|rule| SpecialRule::new(rule.name.clone(), rule.rating))
        .collect();

    let base_loadout: Vec<Weapon> = raw.weapons.iter().map(Weapon::from_raw).collect();

    // Upgrades, in array order. Removals collect by weapon name so a second
    // upgrade targeting the same name is a harmless no-op; additions keep
    // application order.
    let mut removed: HashSet<String> = HashSet::new();
    let mut additions: Vec<Weapon> = Vec::new();
    let mut cost = raw.cost;

    for selected in &raw.selected_upgrades {
        if selected.upgrade.kind == UpgradeKind::Replace {
            for target in &selected.upgrade.targets {
                removed.insert(target.clone());
            }
        }

        for gain in &selected.option.gains {
            match gain {
                UpgradeGain::Weapon(weapon) => additions.push(Weapon::from_raw(weapon)),
                UpgradeGain::Rule(rule) => {
                    rules.push(SpecialRule::new(rule.name.clone(), rule.rating))
                }
            }
        }

        if let Some(entry) = selected.option.costs.iter().find(|c| c.unit_id == id) {
            cost += entry.cost;
        }
    }

    let mut loadout: Vec<Weapon> = base_loadout
        .into_iter()
        .filter(|weapon| !removed.contains(&weapon.name))
        .collect();
    loadout.extend(additions);

    // Wound pool: Tough rating wins, unit size is the fallback. A record
    // with neither cannot be composed.
    let max_wounds = match rule_value(&rules, TOUGH) {
        Some(rating) => rating.max(1),
        None => raw.size.ok_or_else(|| MusterError::MalformedUnit {
            name: name.clone(),
            reason: "no Tough rating and no size".to_string(),
        })?,
    };
    if raw.size == Some(0) {
        return Err(MusterError::MalformedUnit {
            name,
            reason: "size must be at least 1".to_string(),
        });
    }

    let size = raw.size.unwrap_or(1);

    let mut unit = Unit {
        id,
        selection_id,
        name,
        custom_name,
        size,
        quality: raw.quality,
        defense: raw.defense,
        cost,
        xp: raw.xp,
        notes: raw.notes.clone(),
        rules,
        loadout,
        models: Vec::new(),
        max_wounds,
        combined: raw.combined,
        join_to: raw.join_to_unit.clone(),
        combined_with: Vec::new(),
        joined_to: None,
        joined_units: Vec::new(),
        group: GroupId::new(),
    };

    let models = instantiate_models(&unit);
    unit.models = models;
    Ok(unit)
}

/// Create the unit's models and deal the loadout across them
///
/// Every model carries the unit's full wound capacity; the loadout is
/// dealt round-robin by index, so a lone model receives everything.
fn instantiate_models(unit: &Unit) -> Vec<Model> {
    let is_hero = unit.is_hero();
    let is_caster = unit.is_caster();

    let mut models: Vec<Model> = (0..unit.size)
        .map(|index| {
            let mut model = Model::new(unit.selection_id.clone(), index, unit.custom_name.clone());
            model.quality = unit.quality;
            model.defense = unit.defense;
            model.max_wounds = unit.max_wounds;
            model.is_hero = is_hero;
            model.is_caster = is_caster;
            model
        })
        .collect();

    for (i, weapon) in unit.loadout.iter().enumerate() {
        let slot = i % models.len().max(1);
        models[slot].add_weapon(weapon.clone());
    }

    models
}

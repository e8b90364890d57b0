//! Raw army-list records as they arrive in JSON exports
//!
//! These structs mirror the export format field-for-field; `force::compose`
//! turns them into resolved units. Defaults match what the exports omit in
//! practice: quality and defense fall back to 4+, weapon attacks and count
//! to 1. Ratings arrive as numbers or numeric strings ("rating": "6" occurs
//! in real exports), so rating fields accept both.

use crate::core::types::Points;
use serde::{Deserialize, Deserializer};

/// A whole army export: header plus unit-selection records
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArmy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub points_limit: Points,
    #[serde(default)]
    pub units: Vec<RawUnit>,
}

/// One unit-selection record from an army export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub selection_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub cost: Points,
    #[serde(default = "default_stat")]
    pub quality: u32,
    #[serde(default = "default_stat")]
    pub defense: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub combined: bool,
    #[serde(default)]
    pub join_to_unit: Option<String>,
    #[serde(default)]
    pub rules: Vec<RawRule>,
    #[serde(default)]
    pub weapons: Vec<RawWeapon>,
    #[serde(default)]
    pub selected_upgrades: Vec<RawUpgradeInstance>,
}

/// A special rule as exported: name plus optional rating
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRule {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "rating_opt")]
    pub rating: Option<u32>,
}

/// A weapon entry: combat stats plus its own rule list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeapon {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub range: u32,
    #[serde(default = "default_one")]
    pub attacks: u32,
    #[serde(default = "default_one")]
    pub count: u32,
    #[serde(default)]
    pub special_rules: Vec<RawRule>,
}

impl Default for RawWeapon {
    fn default() -> Self {
        Self {
            name: String::new(),
            range: 0,
            attacks: 1,
            count: 1,
            special_rules: Vec::new(),
        }
    }
}

/// A selected upgrade: the upgrade definition plus the chosen option
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUpgradeInstance {
    pub upgrade: RawUpgrade,
    pub option: RawUpgradeOption,
}

/// Upgrade definition: what it does and, for replacements, what it removes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUpgrade {
    #[serde(rename = "variant")]
    pub kind: UpgradeKind,
    /// Weapon names removed by a replace upgrade
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Upgrade dispatch: plain additions vs replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    Upgrade,
    Replace,
}

/// The chosen option of an upgrade: gains plus per-unit cost deltas
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUpgradeOption {
    #[serde(default)]
    pub gains: Vec<UpgradeGain>,
    #[serde(default)]
    pub costs: Vec<UpgradeCost>,
}

/// Something an upgrade option grants, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UpgradeGain {
    Weapon(RawWeapon),
    Rule(RawRule),
}

/// Cost delta an option contributes to one specific unit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeCost {
    #[serde(default)]
    pub unit_id: String,
    #[serde(default)]
    pub cost: Points,
}

fn default_stat() -> u32 {
    4
}

fn default_one() -> u32 {
    1
}

/// Accept a rating as a number, a numeric string, or absent
fn rating_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(u32),
        Text(String),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Num(n)) => Some(n),
        Some(Repr::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_accepts_number_and_string() {
        let numeric: RawRule = serde_json::from_value(json!({"name": "Tough", "rating": 6})).unwrap();
        assert_eq!(numeric.rating, Some(6));

        let text: RawRule = serde_json::from_value(json!({"name": "Tough", "rating": "6"})).unwrap();
        assert_eq!(text.rating, Some(6));

        let absent: RawRule = serde_json::from_value(json!({"name": "Hero"})).unwrap();
        assert_eq!(absent.rating, None);
    }

    #[test]
    fn test_garbage_rating_becomes_none() {
        let rule: RawRule = serde_json::from_value(json!({"name": "Tough", "rating": "lots"})).unwrap();
        assert_eq!(rule.rating, None);
    }

    #[test]
    fn test_weapon_defaults() {
        let weapon: RawWeapon = serde_json::from_value(json!({"name": "CCW"})).unwrap();
        assert_eq!(weapon.range, 0);
        assert_eq!(weapon.attacks, 1);
        assert_eq!(weapon.count, 1);
        assert!(weapon.special_rules.is_empty());
    }

    #[test]
    fn test_upgrade_kind_from_variant_field() {
        let upgrade: RawUpgrade =
            serde_json::from_value(json!({"variant": "replace", "targets": ["CCW"]})).unwrap();
        assert_eq!(upgrade.kind, UpgradeKind::Replace);
        assert_eq!(upgrade.targets, vec!["CCW".to_string()]);

        let plain: RawUpgrade = serde_json::from_value(json!({"variant": "upgrade"})).unwrap();
        assert_eq!(plain.kind, UpgradeKind::Upgrade);
        assert!(plain.targets.is_empty());
    }

    #[test]
    fn test_gain_dispatch_on_type() {
        let weapon: UpgradeGain = serde_json::from_value(
            json!({"type": "weapon", "name": "Heavy Rifle", "range": 24, "attacks": 1}),
        )
        .unwrap();
        assert!(matches!(weapon, UpgradeGain::Weapon(ref w) if w.name == "Heavy Rifle"));

        let rule: UpgradeGain =
            serde_json::from_value(json!({"type": "rule", "name": "Fearless"})).unwrap();
        assert!(matches!(rule, UpgradeGain::Rule(ref r) if r.name == "Fearless"));
    }

    #[test]
    fn test_unit_defaults() {
        let unit: RawUnit = serde_json::from_value(json!({"name": "Grunts"})).unwrap();
        assert_eq!(unit.quality, 4);
        assert_eq!(unit.defense, 4);
        assert_eq!(unit.cost, 0);
        assert!(unit.size.is_none());
        assert!(!unit.combined);
        assert!(unit.join_to_unit.is_none());
    }
}

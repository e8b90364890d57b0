//! Weapon records with derived display labels
//!
//! A weapon is combat stats plus its own rule list. The label is always
//! derived from the stats, never stored.

use crate::roster::raw::RawWeapon;
use crate::rules::special::{find_rule, SpecialRule};
use serde::{Deserialize, Serialize};

/// A weapon carried by a unit's models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Range in inches; 0 means melee
    pub range: u32,
    pub attacks: u32,
    /// How many copies of this weapon the selection carries
    pub count: u32,
    pub special_rules: Vec<SpecialRule>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, range: u32, attacks: u32) -> Self {
        Self {
            name: name.into(),
            range,
            attacks,
            count: 1,
            special_rules: Vec::new(),
        }
    }

    /// Build a weapon from its raw export record
    pub fn from_raw(raw: &RawWeapon) -> Self {
        Self {
            name: raw.name.clone(),
            range: raw.range,
            attacks: raw.attacks,
            count: raw.count.max(1),
            special_rules: raw
                .special_rules
                .iter()
                .map(|rule| SpecialRule::new(rule.name.clone(), rule.rating))
                .collect(),
        }
    }

    /// Display label: `name (range", A{attacks}, rule labels...)`
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.range > 0 {
            parts.push(format!("{}\"", self.range));
        }
        parts.push(format!("A{}", self.attacks));
        for rule in &self.special_rules {
            parts.push(rule.label());
        }
        format!("{} ({})", self.name, parts.join(", "))
    }

    /// Does this weapon carry the named rule?
    pub fn has_rule(&self, name: &str) -> bool {
        find_rule(&self.special_rules, name).is_some()
    }

    /// Rating of the named rule, if present; first match wins
    pub fn rule_value(&self, name: &str) -> Option<u32> {
        find_rule(&self.special_rules, name).and_then(|rule| rule.rating)
    }
}

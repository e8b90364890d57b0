//! Named special rules with optional numeric ratings
//!
//! Rules like `Tough(6)` or `AP(1)` drive wound capacity, hero and caster
//! detection, and weapon labels.

use serde::{Deserialize, Serialize};

/// Rule granting a unit a wound pool instead of one wound per model
pub const TOUGH: &str = "Tough";

/// Rule marking a unit's models as heroes
pub const HERO: &str = "Hero";

/// Rule marking a unit's models as spellcasters
pub const CASTER: &str = "Caster";

/// A named special rule, optionally rated (e.g. `AP(1)`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialRule {
    pub name: String,
    pub rating: Option<u32>,
}

impl SpecialRule {
    pub fn new(name: impl Into<String>, rating: Option<u32>) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }

    /// Unrated rule (e.g. `Hero`)
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Rated rule (e.g. `Tough(6)`)
    pub fn rated(name: impl Into<String>, rating: u32) -> Self {
        Self::new(name, Some(rating))
    }

    /// Display label: `"Name(rating)"` when rated, else `"Name"`
    pub fn label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{}({})", self.name, rating),
            None => self.name.clone(),
        }
    }

    /// Two rules are equivalent iff name and rating both match
    pub fn is_equivalent_to(&self, other: &SpecialRule) -> bool {
        self.name == other.name && self.rating == other.rating
    }
}

/// Find a rule by name in a rule set; first match wins
pub fn find_rule<'a>(rules: &'a [SpecialRule], name: &str) -> Option<&'a SpecialRule> {
    rules.iter().find(|rule| rule.name == name)
}

/// Look up a rule's rating by name (e.g. `Tough` -> 6)
pub fn rule_value(rules: &[SpecialRule], name: &str) -> Option<u32> {
    find_rule(rules, name).and_then(|rule| rule.rating)
}

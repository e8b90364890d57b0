//! Individual models: the smallest damageable entity
//!
//! Wound and token mutation is clamped; all operations are total. Amounts
//! are unsigned, so healing always goes through `heal` rather than a
//! negative damage value.

use crate::force::weapon::Weapon;
use serde::{Deserialize, Serialize};

/// Upper bound on a caster's token pool
pub const MAX_CASTER_TOKENS: u32 = 6;

/// One miniature in a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Selection id of the owning unit
    pub unit_id: String,
    /// Position of this model within its unit
    pub index: u32,
    pub name: String,
    pub quality: u32,
    pub defense: u32,
    pub max_wounds: u32,
    pub wounds: u32,
    pub destroyed: bool,
    pub is_hero: bool,
    pub is_caster: bool,
    pub caster_tokens: u32,
    pub weapons: Vec<Weapon>,
}

impl Model {
    pub fn new(unit_id: impl Into<String>, index: u32, name: impl Into<String>) -> Self {
        Self {
            unit_id: unit_id.into(),
            index,
            name: name.into(),
            quality: 4,
            defense: 4,
            max_wounds: 1,
            wounds: 0,
            destroyed: false,
            is_hero: false,
            is_caster: false,
            caster_tokens: 0,
            weapons: Vec::new(),
        }
    }

    /// Apply damage, clamped at the wound cap; returns the amount applied
    ///
    /// Invariant after every call: `destroyed == (wounds == max_wounds)`.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let before = self.wounds;
        self.wounds = self.wounds.saturating_add(amount).min(self.max_wounds);
        self.destroyed = self.wounds == self.max_wounds;
        self.wounds - before
    }

    /// Heal wounds, clamped at zero; returns the amount healed
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.wounds;
        self.wounds = self.wounds.saturating_sub(amount);
        if self.wounds < self.max_wounds {
            self.destroyed = false;
        }
        before - self.wounds
    }

    /// Gain caster tokens, capped at the pool maximum
    pub fn add_caster_tokens(&mut self, amount: u32) -> u32 {
        let before = self.caster_tokens;
        self.caster_tokens = self.caster_tokens.saturating_add(amount).min(MAX_CASTER_TOKENS);
        self.caster_tokens - before
    }

    /// Spend caster tokens, clamped at zero
    pub fn spend_caster_tokens(&mut self, amount: u32) -> u32 {
        let before = self.caster_tokens;
        self.caster_tokens = self.caster_tokens.saturating_sub(amount);
        before - self.caster_tokens
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tough_model() -> Model {
        let mut model = Model::new("u1", 0, "Walker");
        model.max_wounds = 6;
        model
    }

    #[test]
    fn test_damage_clamps_and_destroys() {
        let mut model = tough_model();
        assert_eq!(model.apply_damage(4), 4);
        assert!(!model.destroyed);

        assert_eq!(model.apply_damage(10), 2);
        assert_eq!(model.wounds, 6);
        assert!(model.destroyed);
    }

    #[test]
    fn test_heal_clears_destroyed() {
        let mut model = tough_model();
        model.apply_damage(6);
        assert!(model.destroyed);

        assert_eq!(model.heal(2), 2);
        assert_eq!(model.wounds, 4);
        assert!(!model.destroyed);

        assert_eq!(model.heal(10), 4);
        assert_eq!(model.wounds, 0);
    }

    #[test]
    fn test_caster_token_pool_clamped() {
        let mut model = tough_model();
        model.is_caster = true;

        assert_eq!(model.add_caster_tokens(4), 4);
        assert_eq!(model.add_caster_tokens(4), 2);
        assert_eq!(model.caster_tokens, MAX_CASTER_TOKENS);

        assert_eq!(model.spend_caster_tokens(2), 2);
        assert_eq!(model.spend_caster_tokens(10), 4);
        assert_eq!(model.caster_tokens, 0);
    }

    proptest! {
        #[test]
        fn wound_invariant_holds_under_any_sequence(
            ops in prop::collection::vec((any::<bool>(), 0u32..12), 0..40)
        ) {
            let mut model = tough_model();
            for (is_damage, amount) in ops {
                if is_damage {
                    model.apply_damage(amount);
                } else {
                    model.heal(amount);
                }
                prop_assert!(model.wounds <= model.max_wounds);
                prop_assert_eq!(model.destroyed, model.wounds == model.max_wounds);
            }
        }
    }
}

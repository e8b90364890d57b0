//! Special rule definitions and lookups

pub mod special;

pub use special::{find_rule, rule_value, SpecialRule, CASTER, HERO, TOUGH};

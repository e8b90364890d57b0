//! Muster - campaign companion for tabletop wargames
//!
//! Loads army-list JSON exports, composes resolved unit rosters, and
//! tracks per-game state (wounds, activations, morale) for a play session.

pub mod campaign;
pub mod core;
pub mod data;
pub mod force;
pub mod roster;
pub mod rules;
pub mod tracker;

//! Force composition: weapons, models, units, armies
//!
//! Raw list exports come in through `roster::raw`; this module turns them
//! into resolved armies and owns their in-game state.

pub mod army;
pub mod compose;
pub mod model;
pub mod unit;
pub mod weapon;

pub use army::{Army, ComposeReport, GroupState, UnitFailure};
pub use compose::compose_unit;
pub use model::{Model, MAX_CASTER_TOKENS};
pub use unit::{StatusFlag, Unit, UnitStatus};
pub use weapon::Weapon;

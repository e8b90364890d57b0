//! Per-game session tracking: rounds, command points, snapshots

pub mod session;
pub mod snapshot;

pub use session::{RandomEvent, Session, STARTING_COMMAND_POINTS};
pub use snapshot::{GameSnapshot, UnitSnapshot};

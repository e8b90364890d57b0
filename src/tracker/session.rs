//! Per-game session state: rounds, command points, random events
//!
//! Tracks the table-side counters that sit next to the army during a game.
//! Command points start at 3 and grow by one each round.

use crate::force::army::Army;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Command points a session starts with
pub const STARTING_COMMAND_POINTS: u32 = 3;

/// An event rolled from the table below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub name: String,
    pub description: String,
}

const EVENT_TABLE: [(&str, &str); 6] = [
    (
        "Reinforcements",
        "Additional forces arrive on the battlefield.",
    ),
    (
        "Hostile Environment",
        "Weather conditions worsen, affecting visibility and movement.",
    ),
    ("Supply Drop", "Valuable supplies have been spotted nearby."),
    ("Ambush", "Enemy forces have been detected hiding nearby."),
    ("Civilian Presence", "Civilians are caught in the crossfire."),
    ("Terrain Collapse", "Part of the battlefield has become unstable."),
];

/// One game session's tracked state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub round: u32,
    pub command_points: u32,
    pub notes: String,
    pub active_event: Option<RandomEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            round: 1,
            command_points: STARTING_COMMAND_POINTS,
            notes: String::new(),
            active_event: None,
        }
    }

    /// Advance to the next round: +1 command point, all activations reset
    pub fn next_round(&mut self, army: &mut Army) {
        self.round += 1;
        self.command_points += 1;
        army.reset_activations();
    }

    /// Step the round counter back (never below round 1)
    pub fn previous_round(&mut self) {
        if self.round > 1 {
            self.round -= 1;
        }
    }

    pub fn add_command_points(&mut self, amount: u32) {
        self.command_points += amount;
    }

    /// Spend command points; returns false when the pool is short
    pub fn spend_command_points(&mut self, amount: u32) -> bool {
        if self.command_points < amount {
            return false;
        }
        self.command_points -= amount;
        true
    }

    /// Roll a random event and make it the active one
    pub fn roll_event<R: Rng>(&mut self, rng: &mut R) -> RandomEvent {
        let (name, description) = EVENT_TABLE[rng.gen_range(0..EVENT_TABLE.len())];
        let event = RandomEvent {
            name: name.to_string(),
            description: description.to_string(),
        };
        self.active_event = Some(event.clone());
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::raw::RawArmy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn small_army() -> Army {
        let raw: RawArmy = serde_json::from_value(json!({
            "units": [{"id": "u1", "selectionId": "u1", "name": "Grunts", "size": 5}]
        }))
        .unwrap();
        Army::compose(&raw).army
    }

    #[test]
    fn test_new_session_counters() {
        let session = Session::new();
        assert_eq!(session.round, 1);
        assert_eq!(session.command_points, STARTING_COMMAND_POINTS);
    }

    #[test]
    fn test_next_round_resets_activations() {
        let mut army = small_army();
        let mut session = Session::new();
        army.set_activation("u1", true);

        session.next_round(&mut army);

        assert_eq!(session.round, 2);
        assert_eq!(session.command_points, STARTING_COMMAND_POINTS + 1);
        assert!(!army.unit_state("u1").unwrap().activated);
    }

    #[test]
    fn test_previous_round_floor() {
        let mut session = Session::new();
        session.previous_round();
        assert_eq!(session.round, 1);

        session.round = 3;
        session.previous_round();
        assert_eq!(session.round, 2);
    }

    #[test]
    fn test_spend_command_points() {
        let mut session = Session::new();
        assert!(session.spend_command_points(2));
        assert_eq!(session.command_points, 1);
        assert!(!session.spend_command_points(2));
        assert_eq!(session.command_points, 1);
    }

    #[test]
    fn test_roll_event_comes_from_table() {
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(7);
        let event = session.roll_event(&mut rng);
        assert!(EVENT_TABLE.iter().any(|(name, _)| *name == event.name));
        assert_eq!(session.active_event, Some(event));
    }
}

//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for wound groups
///
/// Combined units share one group; every other unit owns a singleton group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

/// Points value for unit costs and army totals
pub type Points = i32;

/// Generate a fresh identifier for records that arrive without one
pub fn fresh_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_equality() {
        let a = GroupId::new();
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, GroupId::new());
    }

    #[test]
    fn test_group_id_hash() {
        use std::collections::HashMap;
        let id = GroupId::new();
        let mut map: HashMap<GroupId, &str> = HashMap::new();
        map.insert(id, "group");
        assert_eq!(map.get(&id), Some(&"group"));
    }

    #[test]
    fn test_fresh_id_prefix() {
        let id = fresh_id("unit");
        assert!(id.starts_with("unit_"));
        assert_ne!(fresh_id("unit"), fresh_id("unit"));
    }
}

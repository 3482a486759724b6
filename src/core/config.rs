//! Game configuration.
//!
//! The board geometry and player count are fixed by the rules; what varies
//! per session is the wall allotment and how much undo history to retain.

use serde::{Deserialize, Serialize};

/// Per-session game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Walls each player starts with.
    pub starting_walls: u8,

    /// Maximum undo snapshots retained; older entries are discarded.
    pub max_history: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_walls: 10,
            max_history: 200,
        }
    }
}

impl GameConfig {
    /// Config with a custom wall allotment.
    #[must_use]
    pub fn with_starting_walls(mut self, walls: u8) -> Self {
        self.starting_walls = walls;
        self
    }

    /// Config with a custom history bound.
    #[must_use]
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_walls, 10);
        assert_eq!(config.max_history, 200);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_starting_walls(5)
            .with_max_history(50);
        assert_eq!(config.starting_walls, 5);
        assert_eq!(config.max_history, 50);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

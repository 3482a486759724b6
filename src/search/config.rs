//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Computer opponent strength, mapped to a fixed search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Depth-1 search: picks the best immediate move.
    Easy,
    /// Depth-3 search.
    Hard,
}

impl Difficulty {
    /// The search depth this difficulty plays at.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Hard => 3,
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed search depth in plies.
    pub depth: u8,

    /// Chebyshev radius around the opponent's shortest path within which
    /// wall candidates are generated. Keeps the branching factor
    /// tractable: only walls that plausibly interfere are tried.
    pub wall_radius: i8,

    /// Maximum transposition-table entries before the table is cleared.
    pub table_capacity: usize,

    /// Seed for candidate shuffling. Same seed, same search.
    pub seed: u64,

    /// Skip candidate shuffling entirely, giving a fixed deterministic
    /// ordering. Intended for tests comparing search variants.
    pub deterministic_order: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::Hard.depth(),
            wall_radius: 1,
            table_capacity: 1 << 20,
            seed: 42,
            deterministic_order: false,
        }
    }
}

impl SearchConfig {
    /// Config playing at the given difficulty.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            ..Self::default()
        }
    }

    /// Config with a custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Config with a custom wall candidate radius.
    #[must_use]
    pub fn with_wall_radius(mut self, radius: i8) -> Self {
        self.wall_radius = radius;
        self
    }

    /// Config with a custom transposition-table capacity.
    #[must_use]
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }

    /// Config with deterministic candidate ordering.
    #[must_use]
    pub fn with_deterministic_order(mut self) -> Self {
        self.deterministic_order = true;
        self
    }
}

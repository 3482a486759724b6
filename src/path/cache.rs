//! Memoization for shortest-path queries.
//!
//! Results are keyed by `(start, goal_row, wall-set signature)`, so a hit
//! is only possible for the exact wall configuration it was computed
//! under. The owning `GameState` still calls [`PathCache::invalidate`]
//! from every mutator that changes walls or positions; within one
//! unchanged configuration, repeated legality and evaluation queries are
//! served from the cache.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use super::astar;
use crate::core::{Position, WallSet};

/// Order-independent signature of a wall configuration.
///
/// `WallSet` iterates in sorted order, so hashing the iteration sequence
/// is canonical over insertion order.
#[must_use]
pub fn wall_signature(walls: &WallSet) -> u64 {
    let mut hasher = FxHasher::default();
    walls.len().hash(&mut hasher);
    for wall in walls {
        wall.hash(&mut hasher);
    }
    hasher.finish()
}

/// Shortest-path memo owned by a `GameState`.
#[derive(Clone, Debug, Default)]
pub struct PathCache {
    map: FxHashMap<(Position, i8, u64), Vec<Position>>,
}

impl PathCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest path from `start` to `goal_row` under `walls`, memoized.
    pub fn shortest_path(
        &mut self,
        walls: &WallSet,
        start: Position,
        goal_row: i8,
    ) -> Vec<Position> {
        let key = (start, goal_row, wall_signature(walls));
        if let Some(path) = self.map.get(&key) {
            return path.clone();
        }

        let path = astar::shortest_path(walls, start, goal_row);
        self.map.insert(key, path.clone());
        path
    }

    /// Shortest path length, memoized; [`astar::UNREACHABLE`] if none.
    pub fn shortest_path_len(&mut self, walls: &WallSet, start: Position, goal_row: i8) -> u32 {
        let path = self.shortest_path(walls, start, goal_row);
        if path.is_empty() {
            astar::UNREACHABLE
        } else {
            (path.len() - 1) as u32
        }
    }

    /// Drop all memoized results.
    pub fn invalidate(&mut self) {
        self.map.clear();
    }

    /// Number of memoized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

//! A* shortest path to a goal row.
//!
//! The heuristic is the vertical distance to the goal row. A single move
//! changes the row by at most one, so the heuristic is admissible and
//! consistent and the first settled goal cell carries an optimal path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{board, Position, WallSet};

/// Sentinel distance for an unreachable goal row. Larger than any real
/// path on the board, so callers can compare distances without
/// special-casing infinity.
pub const UNREACHABLE: u32 = 999;

/// Shortest path from `start` to any cell in `goal_row`, walking only
/// edges not blocked by `walls`.
///
/// Returns the full path including both endpoints, or an empty vec if the
/// goal row is unreachable. Ties in `f = g + h` break by discovery order,
/// so the result is deterministic across runs.
#[must_use]
pub fn shortest_path(walls: &WallSet, start: Position, goal_row: i8) -> Vec<Position> {
    debug_assert!(start.in_bounds(), "start off board: {start}");

    // Heap entries are (f, discovery sequence, g, cell), min-ordered.
    let mut open: BinaryHeap<Reverse<(u32, u64, u32, Position)>> = BinaryHeap::new();
    let mut came_from: FxHashMap<Position, Option<Position>> = FxHashMap::default();
    let mut gscore: FxHashMap<Position, u32> = FxHashMap::default();
    let mut closed: FxHashSet<Position> = FxHashSet::default();
    let mut sequence: u64 = 0;

    let h = |pos: Position| (pos.y - goal_row).unsigned_abs() as u32;

    open.push(Reverse((h(start), sequence, 0, start)));
    came_from.insert(start, None);
    gscore.insert(start, 0);

    while let Some(Reverse((_, _, g, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }

        if current.y == goal_row {
            let mut path = Vec::new();
            let mut cursor = Some(current);
            while let Some(pos) = cursor {
                path.push(pos);
                cursor = came_from[&pos];
            }
            path.reverse();
            return path;
        }

        for next in board::neighbors(walls, current) {
            let tentative = g + 1;
            if gscore.get(&next).map_or(true, |&best| tentative < best) {
                gscore.insert(next, tentative);
                came_from.insert(next, Some(current));
                sequence += 1;
                open.push(Reverse((tentative + h(next), sequence, tentative, next)));
            }
        }
    }

    Vec::new()
}

/// Number of moves on the shortest path to `goal_row`, or [`UNREACHABLE`].
#[must_use]
pub fn shortest_path_len(walls: &WallSet, start: Position, goal_row: i8) -> u32 {
    let path = shortest_path(walls, start, goal_row);
    if path.is_empty() {
        UNREACHABLE
    } else {
        (path.len() - 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Wall};

    #[test]
    fn test_straight_line_on_open_board() {
        let walls = WallSet::new();
        let path = shortest_path(&walls, Position::new(4, 8), 0);

        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Position::new(4, 8));
        assert_eq!(path.last().unwrap().y, 0);
        assert_eq!(shortest_path_len(&walls, Position::new(4, 8), 0), 8);
    }

    #[test]
    fn test_already_on_goal_row() {
        let walls = WallSet::new();
        let path = shortest_path(&walls, Position::new(3, 0), 0);

        assert_eq!(path, vec![Position::new(3, 0)]);
        assert_eq!(shortest_path_len(&walls, Position::new(3, 0), 0), 0);
    }

    #[test]
    fn test_wall_forces_detour() {
        // A single horizontal wall directly above the pawn adds two moves.
        let walls = WallSet::unit(Wall::at(4, 3, Orientation::Horizontal));

        let open_len = shortest_path_len(&WallSet::new(), Position::new(4, 4), 0);
        let len = shortest_path_len(&walls, Position::new(4, 4), 0);

        assert_eq!(open_len, 4);
        assert_eq!(len, 6);
    }

    #[test]
    fn test_unreachable_returns_sentinel() {
        // Raw wall data sealing the gap between rows 4 and 5 across all
        // nine columns. Not legally placeable, but A* only reads geometry.
        let mut walls = WallSet::new();
        for x in [0, 2, 4, 6, 7] {
            walls.insert(Wall::at(x, 4, Orientation::Horizontal));
        }

        assert!(shortest_path(&walls, Position::new(4, 8), 0).is_empty());
        assert_eq!(shortest_path_len(&walls, Position::new(4, 8), 0), UNREACHABLE);
    }

    #[test]
    fn test_deterministic_tie_breaking() {
        let walls = WallSet::unit(Wall::at(3, 5, Orientation::Vertical));

        let a = shortest_path(&walls, Position::new(4, 8), 0);
        let b = shortest_path(&walls, Position::new(4, 8), 0);
        assert_eq!(a, b);
    }
}

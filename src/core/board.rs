//! Board geometry: cells, wall slots, and wall-aware adjacency.
//!
//! ## Coordinates
//!
//! The board is a fixed 9×9 grid of cells. `Position` coordinates are signed
//! so that off-board probe targets (a straight jump over a pawn on the edge
//! lands at row -1 or 9) are representable; committed pawn positions are
//! always in bounds.
//!
//! ## Walls
//!
//! Walls occupy the 8×8 grid of slots between cells. A wall is two cells
//! long: a horizontal wall at slot `(x, y)` blocks the vertical edges
//! `(x, y)–(x, y+1)` and `(x+1, y)–(x+1, y+1)`; a vertical wall at `(x, y)`
//! blocks the horizontal edges `(x, y)–(x+1, y)` and `(x, y+1)–(x+1, y+1)`.

use serde::{Deserialize, Serialize};

/// Cells per side of the board.
pub const BOARD_SIZE: i8 = 9;

/// Wall slots per side (one fewer than cells).
pub const WALL_GRID: i8 = 8;

/// The set of placed walls.
///
/// `im::OrdSet` gives O(log n) membership tests, cheap structurally-shared
/// clones for snapshots, and ordered iteration — so the set itself is its
/// own canonical signature.
pub type WallSet = im::OrdSet<Wall>;

/// A cell on the 9×9 grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// Create a position. No bounds check; use [`Position::in_bounds`].
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether this position lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.x && self.x < BOARD_SIZE && 0 <= self.y && self.y < BOARD_SIZE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Wall orientation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Orientation {
    /// Spans two cell-widths left-to-right, blocking vertical movement.
    Horizontal,
    /// Spans two cell-heights top-to-bottom, blocking horizontal movement.
    Vertical,
}

/// A slot in the 8×8 inter-cell grid where a wall may be placed.
///
/// Slot `(x, y)` names the crossing between cells `(x, y)`, `(x+1, y)`,
/// `(x, y+1)` and `(x+1, y+1)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WallSlot {
    pub x: i8,
    pub y: i8,
}

impl WallSlot {
    /// Create a slot. No bounds check; use [`WallSlot::in_bounds`].
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether this slot lies in the wall grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        0 <= self.x && self.x < WALL_GRID && 0 <= self.y && self.y < WALL_GRID
    }
}

/// A placed wall: slot plus orientation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Wall {
    pub slot: WallSlot,
    pub orientation: Orientation,
}

impl Wall {
    /// Create a wall at the given slot.
    #[must_use]
    pub const fn new(slot: WallSlot, orientation: Orientation) -> Self {
        Self { slot, orientation }
    }

    /// Shorthand used throughout the engine and tests.
    #[must_use]
    pub const fn at(x: i8, y: i8, orientation: Orientation) -> Self {
        Self::new(WallSlot::new(x, y), orientation)
    }
}

/// Whether a wall separates the adjacent cells `a` and `b`.
///
/// Because a wall is two cells long, the edge between `a` and `b` can be
/// blocked either by the wall whose slot matches the edge exactly or by the
/// adjacent slot offset by one along the wall's own axis. Out-of-range slot
/// lookups simply miss the set, so edge-of-board cases need no special
/// handling.
#[must_use]
pub fn blocks(walls: &WallSet, a: Position, b: Position) -> bool {
    use Orientation::{Horizontal, Vertical};

    if a.x == b.x {
        let gap = a.y.min(b.y);
        walls.contains(&Wall::at(a.x, gap, Horizontal))
            || walls.contains(&Wall::at(a.x - 1, gap, Horizontal))
    } else if a.y == b.y {
        let gap = a.x.min(b.x);
        walls.contains(&Wall::at(gap, a.y, Vertical))
            || walls.contains(&Wall::at(gap, a.y - 1, Vertical))
    } else {
        false
    }
}

/// The up-to-four grid-adjacent cells reachable from `pos` in one step:
/// in bounds and not separated from `pos` by a wall.
///
/// Order is fixed (up, down, left, right) so callers are deterministic.
#[must_use]
pub fn neighbors(walls: &WallSet, pos: Position) -> smallvec::SmallVec<[Position; 4]> {
    let candidates = [
        Position::new(pos.x, pos.y - 1),
        Position::new(pos.x, pos.y + 1),
        Position::new(pos.x - 1, pos.y),
        Position::new(pos.x + 1, pos.y),
    ];

    candidates
        .into_iter()
        .filter(|c| c.in_bounds() && !blocks(walls, pos, *c))
        .collect()
}

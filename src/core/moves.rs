//! Move representation at the engine boundary.
//!
//! A move is a tagged value: either step (or jump) the mover's pawn to a
//! destination cell, or place a wall in a slot. Hosts build these from
//! input, the search builds them from candidate generation, and both feed
//! them through the same mutation APIs.

use serde::{Deserialize, Serialize};

use super::board::{Orientation, Position, WallSlot};

/// A complete game move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the current player's pawn to `dest`.
    Pawn { dest: Position },
    /// Place a wall at `slot` with the given orientation.
    Wall {
        slot: WallSlot,
        orientation: Orientation,
    },
}

impl Move {
    /// A pawn move to the given destination.
    #[must_use]
    pub const fn pawn(dest: Position) -> Self {
        Move::Pawn { dest }
    }

    /// A wall placement.
    #[must_use]
    pub const fn wall(slot: WallSlot, orientation: Orientation) -> Self {
        Move::Wall { slot, orientation }
    }

    /// Whether this is a pawn move.
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Move::Pawn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let m = Move::pawn(Position::new(4, 7));
        assert!(m.is_pawn());

        let w = Move::wall(WallSlot::new(3, 3), Orientation::Horizontal);
        assert!(!w.is_pawn());
    }

    #[test]
    fn test_equality() {
        let a = Move::pawn(Position::new(1, 1));
        let b = Move::pawn(Position::new(1, 1));
        let c = Move::pawn(Position::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let h = Move::wall(WallSlot::new(2, 2), Orientation::Horizontal);
        let v = Move::wall(WallSlot::new(2, 2), Orientation::Vertical);
        assert_ne!(h, v);
    }

    #[test]
    fn test_serialization() {
        let m = Move::wall(WallSlot::new(5, 1), Orientation::Vertical);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}

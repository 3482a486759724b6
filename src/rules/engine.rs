//! Move legality and mutation.
//!
//! Legality queries never leave the state mutated — `is_valid_wall`
//! probes connectivity by inserting the wall, measuring both players'
//! paths, and removing it again before returning.
//!
//! Mutation comes in two flavors. `apply_move` is the durable path:
//! validated, recorded in history, used for moves a host actually
//! commits. `apply_move_fast`/`undo_move_fast` are the search's hot
//! path: unvalidated exact inverses that carry their reversal data in a
//! small copy token instead of a snapshot.

use smallvec::SmallVec;

use crate::core::{board, Move, Orientation, Player, Position, Wall, WallSlot};
use crate::path::{astar, UNREACHABLE};

use super::state::GameState;

/// Why a durable move was rejected. The state is untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a winner.
    GameOver,
    /// The destination is not among the mover's valid pawn moves.
    IllegalPawnMove,
    /// The wall placement failed a structural or connectivity check.
    IllegalWall,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "game is already decided"),
            MoveError::IllegalPawnMove => write!(f, "destination is not a legal pawn move"),
            MoveError::IllegalWall => write!(f, "wall placement is not legal"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Reversal data for one `apply_move_fast`. Opaque to callers; feed it
/// back to `undo_move_fast` exactly once, in LIFO order.
#[derive(Clone, Copy, Debug)]
pub struct UndoToken {
    turn: Player,
    winner: Option<Player>,
    kind: UndoKind,
}

#[derive(Clone, Copy, Debug)]
enum UndoKind {
    Pawn { prev: Position },
    Wall { wall: Wall },
}

impl GameState {
    // === Legality queries ===

    /// The up-to-four cells adjacent to `pos` and not walled off from it.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        board::neighbors(&self.walls, pos)
    }

    /// All cells `player`'s pawn may move to this turn.
    ///
    /// Ordinary steps to open neighbors; when the opponent stands
    /// adjacent, a straight jump over them, or — if the straight jump is
    /// wall-blocked or off-board — a side-step to any cell adjacent to
    /// the opponent other than the mover's own. Empty once the game is
    /// decided.
    #[must_use]
    pub fn get_valid_pawn_moves(&self, player: Player) -> SmallVec<[Position; 8]> {
        let mut moves = SmallVec::new();
        if self.winner.is_some() {
            return moves;
        }

        let current = self.pawns[player];
        let opponent = self.pawns[player.opponent()];

        for neighbor in board::neighbors(&self.walls, current) {
            if neighbor != opponent {
                moves.push(neighbor);
                continue;
            }

            // Straight jump lands two steps away in the same direction.
            let jump = Position::new(
                neighbor.x * 2 - current.x,
                neighbor.y * 2 - current.y,
            );
            if jump.in_bounds() && !board::blocks(&self.walls, neighbor, jump) {
                moves.push(jump);
            } else {
                for side in board::neighbors(&self.walls, opponent) {
                    if side != current {
                        moves.push(side);
                    }
                }
            }
        }

        moves
    }

    /// Whether the side to move may place a wall at `slot`.
    ///
    /// Structural checks first: the game is undecided, the mover has
    /// walls left, the slot is in range, no placed wall occupies the
    /// same slot, and no same-orientation wall sits within one slot
    /// along the wall's own axis (two-cell walls may not overlap). Then
    /// the connectivity probe: with the wall tentatively placed, both
    /// players must still reach their goal rows. The probe bypasses the
    /// path memo and restores the wall set before returning.
    #[must_use]
    pub fn is_valid_wall(&mut self, slot: WallSlot, orientation: Orientation) -> bool {
        if self.winner.is_some() || !slot.in_bounds() {
            return false;
        }
        if self.walls_remaining[self.turn] == 0 {
            return false;
        }

        let (along, across) = match orientation {
            Orientation::Horizontal => {
                (WallSlot::new(slot.x - 1, slot.y), WallSlot::new(slot.x + 1, slot.y))
            }
            Orientation::Vertical => {
                (WallSlot::new(slot.x, slot.y - 1), WallSlot::new(slot.x, slot.y + 1))
            }
        };
        let conflicts = self.walls.contains(&Wall::new(slot, Orientation::Horizontal))
            || self.walls.contains(&Wall::new(slot, Orientation::Vertical))
            || self.walls.contains(&Wall::new(along, orientation))
            || self.walls.contains(&Wall::new(across, orientation));
        if conflicts {
            return false;
        }

        let wall = Wall::new(slot, orientation);
        self.walls.insert(wall);
        let p1 = astar::shortest_path_len(&self.walls, self.pawns[Player::One], Player::One.goal_row());
        let p2 = astar::shortest_path_len(&self.walls, self.pawns[Player::Two], Player::Two.goal_row());
        self.walls.remove(&wall);

        p1 < UNREACHABLE && p2 < UNREACHABLE
    }

    // === Durable mutation ===

    /// Commit a move for the side to move.
    ///
    /// Validates first and rejects without touching state. On success:
    /// invalidates the path cache, records the pre-move snapshot (unless
    /// `record_history` is false — used when a search already explored
    /// the move and the host is only committing its choice), applies the
    /// move, checks the win condition, and flips the turn.
    pub fn apply_move(&mut self, mv: Move, record_history: bool) -> Result<(), MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        match mv {
            Move::Pawn { dest } => {
                if !self.get_valid_pawn_moves(self.turn).contains(&dest) {
                    return Err(MoveError::IllegalPawnMove);
                }
            }
            Move::Wall { slot, orientation } => {
                if !self.is_valid_wall(slot, orientation) {
                    return Err(MoveError::IllegalWall);
                }
            }
        }

        self.path_cache.invalidate();
        if record_history {
            let snapshot = self.snapshot();
            self.history.record(snapshot);
        }

        match mv {
            Move::Pawn { dest } => {
                self.pawns[self.turn] = dest;
            }
            Move::Wall { slot, orientation } => {
                self.walls.insert(Wall::new(slot, orientation));
                self.walls_remaining[self.turn] -= 1;
            }
        }

        self.check_win();
        self.turn = self.turn.opponent();
        Ok(())
    }

    // === Ephemeral mutation (search hot path) ===

    /// Apply a move without validation, history, or snapshots.
    ///
    /// The caller guarantees legality (the search only feeds moves from
    /// its own candidate generation). The returned token reverses the
    /// transition exactly: apply-then-undo restores a state equal in
    /// every field, turn and winner included.
    pub fn apply_move_fast(&mut self, mv: Move) -> UndoToken {
        self.path_cache.invalidate();

        let turn = self.turn;
        let winner = self.winner;

        let kind = match mv {
            Move::Pawn { dest } => {
                debug_assert!(dest.in_bounds(), "pawn destination off board: {dest}");
                let prev = self.pawns[self.turn];
                self.pawns[self.turn] = dest;
                UndoKind::Pawn { prev }
            }
            Move::Wall { slot, orientation } => {
                let wall = Wall::new(slot, orientation);
                debug_assert!(slot.in_bounds(), "wall slot out of range");
                debug_assert!(!self.walls.contains(&wall), "wall already placed");
                debug_assert!(self.walls_remaining[self.turn] > 0, "no walls remaining");
                self.walls.insert(wall);
                self.walls_remaining[self.turn] -= 1;
                UndoKind::Wall { wall }
            }
        };

        self.check_win();
        self.turn = self.turn.opponent();

        UndoToken { turn, winner, kind }
    }

    /// Reverse the transition recorded by `apply_move_fast`.
    pub fn undo_move_fast(&mut self, token: UndoToken) {
        self.path_cache.invalidate();

        self.turn = token.turn;
        self.winner = token.winner;

        match token.kind {
            UndoKind::Pawn { prev } => {
                self.pawns[self.turn] = prev;
            }
            UndoKind::Wall { wall } => {
                self.walls.remove(&wall);
                self.walls_remaining[self.turn] += 1;
            }
        }
    }

    /// Set the winner the instant a pawn stands on its goal row. Runs
    /// after every mutation, before the turn flips.
    pub(crate) fn check_win(&mut self) {
        if self.pawns[Player::One].y == Player::One.goal_row() {
            self.winner = Some(Player::One);
        } else if self.pawns[Player::Two].y == Player::Two.goal_row() {
            self.winner = Some(Player::Two);
        }
    }
}

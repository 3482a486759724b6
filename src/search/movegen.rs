//! Candidate generation for the adversarial search.
//!
//! Pawn moves are cheap and few; wall moves are the branching-factor
//! problem. Instead of trying all 128 slot/orientation combinations, the
//! generator walks the opponent's current shortest path and tests only
//! slots within a small radius of it — walls anywhere else cannot
//! meaningfully interfere with the opponent's progress.
//!
//! Pawn moves are ordered before wall moves (better alpha-beta pruning);
//! within each group the order is shuffled to avoid systematic bias,
//! unless the config asks for a deterministic ordering.

use rustc_hash::FxHashSet;

use crate::core::{GameRng, Move, Orientation, WallSlot};
use crate::rules::GameState;

/// All candidate moves for the side to move, pawn moves first.
#[must_use]
pub fn generate_candidates(
    game: &mut GameState,
    rng: &mut GameRng,
    wall_radius: i8,
    deterministic: bool,
) -> Vec<Move> {
    let mover = game.turn();

    let mut pawn_moves: Vec<Move> = game
        .get_valid_pawn_moves(mover)
        .into_iter()
        .map(Move::pawn)
        .collect();

    let mut wall_moves: Vec<Move> = Vec::new();
    if game.walls_remaining(mover) > 0 {
        let opponent = mover.opponent();
        let path = game.shortest_path(game.pawn(opponent), opponent.goal_row());

        let mut seen: FxHashSet<(WallSlot, Orientation)> = FxHashSet::default();
        for cell in &path {
            for dx in -wall_radius..=wall_radius {
                for dy in -wall_radius..=wall_radius {
                    let slot = WallSlot::new(cell.x + dx, cell.y + dy);
                    if !slot.in_bounds() {
                        continue;
                    }
                    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                        if seen.insert((slot, orientation))
                            && game.is_valid_wall(slot, orientation)
                        {
                            wall_moves.push(Move::wall(slot, orientation));
                        }
                    }
                }
            }
        }
    }

    if !deterministic {
        rng.shuffle(&mut pawn_moves);
        rng.shuffle(&mut wall_moves);
    }

    pawn_moves.extend(wall_moves);
    pawn_moves
}

//! Leaf evaluation.
//!
//! Scores are from Player 2's perspective (the maximizing side by
//! convention): positive favors Player 2. The heuristic rewards being
//! closer to the goal row than the opponent and holding more walls in
//! reserve.

use crate::core::Player;
use crate::rules::GameState;

/// Score for a decided game, signed by the winner.
pub const WIN_SCORE: i32 = 10_000;

/// Evaluate a position from Player 2's perspective.
///
/// Takes `&mut GameState` because distances go through the memoized
/// pathfinder; the board itself is not modified.
#[must_use]
pub fn evaluate(game: &mut GameState) -> i32 {
    match game.winner() {
        Some(Player::Two) => return WIN_SCORE,
        Some(Player::One) => return -WIN_SCORE,
        None => {}
    }

    let d2 = game.shortest_path_len(game.pawn(Player::Two), Player::Two.goal_row()) as i32;
    let d1 = game.shortest_path_len(game.pawn(Player::One), Player::One.goal_row()) as i32;

    let mut score = (20 - d2) * 10 - (20 - d1) * 10;
    score += (game.walls_remaining(Player::Two) as i32 - game.walls_remaining(Player::One) as i32) * 5;
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Position};

    #[test]
    fn test_start_position_is_balanced() {
        let mut game = GameState::new();
        assert_eq!(evaluate(&mut game), 0);
    }

    #[test]
    fn test_progress_raises_score_for_player_two() {
        let mut game = GameState::new();
        game.apply_move(Move::pawn(Position::new(4, 7)), true).unwrap();
        game.apply_move(Move::pawn(Position::new(4, 1)), true).unwrap();
        game.apply_move(Move::pawn(Position::new(4, 6)), true).unwrap();
        game.apply_move(Move::pawn(Position::new(4, 2)), true).unwrap();

        // Both advanced two rows; still balanced.
        assert_eq!(evaluate(&mut game), 0);

        game.apply_move(Move::pawn(Position::new(3, 6)), true).unwrap();
        game.apply_move(Move::pawn(Position::new(4, 3)), true).unwrap();

        // Player 2 is now a row ahead (and Player 1 wasted a tempo).
        assert!(evaluate(&mut game) > 0);
    }

    #[test]
    fn test_wall_reserve_counts() {
        let mut game = GameState::new();
        game.apply_move(
            Move::wall(crate::core::WallSlot::new(0, 4), crate::core::Orientation::Vertical),
            true,
        )
        .unwrap();

        // Player 1 spent a wall; the wall barely disturbs either path
        // but the reserve difference favors Player 2.
        assert!(evaluate(&mut game) >= 5);
    }

    #[test]
    fn test_win_scores_are_signed() {
        let mut game = GameState::new();
        game.pawns[crate::core::Player::One] = Position::new(4, 1);
        game.apply_move(Move::pawn(Position::new(4, 0)), true).unwrap();

        assert_eq!(evaluate(&mut game), -WIN_SCORE);
    }
}

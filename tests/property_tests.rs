//! Property tests for the engine's algebraic laws.
//!
//! Random legal play-outs are driven by an index sequence: at each step
//! the move is picked from the search's own candidate generator, which
//! only yields legal moves.

use proptest::prelude::*;

use quoridor_engine::core::{GameRng, Move, Player};
use quoridor_engine::rules::{GameState, Snapshot};
use quoridor_engine::search::generate_candidates;
use quoridor_engine::UNREACHABLE;

/// Play up to `picks.len()` random legal moves, durable, with history.
fn random_playout(picks: &[u16]) -> GameState {
    let mut game = GameState::new();
    let mut rng = GameRng::new(99);

    for &pick in picks {
        if game.winner().is_some() {
            break;
        }
        let candidates = generate_candidates(&mut game, &mut rng, 1, true);
        if candidates.is_empty() {
            break;
        }
        let mv = candidates[pick as usize % candidates.len()];
        game.apply_move(mv, true).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// No sequence of legal moves can strand either player.
    #[test]
    fn connectivity_invariant_holds(picks in proptest::collection::vec(any::<u16>(), 0..24)) {
        let mut game = random_playout(&picks);

        let p1 = game.pawn(Player::One);
        let p2 = game.pawn(Player::Two);
        prop_assert!(game.shortest_path_len(p1, Player::One.goal_row()) < UNREACHABLE);
        prop_assert!(game.shortest_path_len(p2, Player::Two.goal_row()) < UNREACHABLE);
    }

    /// Fast apply followed by fast undo restores every field.
    #[test]
    fn fast_mutation_inverse_law(
        picks in proptest::collection::vec(any::<u16>(), 1..16),
        probe in any::<u16>(),
    ) {
        let mut game = random_playout(&picks);
        if game.winner().is_some() {
            return Ok(());
        }

        let mut rng = GameRng::new(7);
        let candidates = generate_candidates(&mut game, &mut rng, 1, true);
        prop_assume!(!candidates.is_empty());
        let mv = candidates[probe as usize % candidates.len()];

        let before = game.snapshot();
        let token = game.apply_move_fast(mv);
        game.undo_move_fast(token);
        prop_assert_eq!(game.snapshot(), before);
    }

    /// N undos then N redos restore the final state, through arbitrary
    /// mixes of pawn and wall moves.
    #[test]
    fn history_round_trip(picks in proptest::collection::vec(any::<u16>(), 0..16)) {
        let mut game = random_playout(&picks);
        let final_state = game.snapshot();

        let mut undone = 0;
        while game.undo() {
            undone += 1;
        }

        for _ in 0..undone {
            prop_assert!(game.redo());
        }
        prop_assert_eq!(game.snapshot(), final_state);
    }

    /// Snapshots round-trip bit-for-bit through a binary encoding.
    #[test]
    fn snapshot_binary_round_trip(picks in proptest::collection::vec(any::<u16>(), 0..16)) {
        let game = random_playout(&picks);
        let snapshot = game.snapshot();

        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: Snapshot = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded, snapshot);
    }

    /// Signatures agree exactly when snapshots agree, across random
    /// play-out pairs.
    #[test]
    fn signature_tracks_state(
        a in proptest::collection::vec(any::<u16>(), 0..12),
        b in proptest::collection::vec(any::<u16>(), 0..12),
    ) {
        let ga = random_playout(&a);
        let gb = random_playout(&b);

        if ga.snapshot() == gb.snapshot() {
            prop_assert_eq!(ga.signature(), gb.signature());
        }
    }
}

/// Durable moves reject cleanly without mutating state.
#[test]
fn illegal_moves_never_mutate() {
    let mut game = GameState::new();
    let before = game.snapshot();

    // Off-path pawn destination and conflicting wall.
    assert!(game
        .apply_move(Move::pawn(quoridor_engine::Position::new(0, 0)), true)
        .is_err());
    assert_eq!(game.snapshot(), before);
}

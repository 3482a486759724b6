//! Adversarial search: the computer opponent.
//!
//! ## Overview
//!
//! Depth-bounded minimax with alpha-beta pruning over the rules engine's
//! fast reversible-mutation API. Key pieces:
//!
//! - **Evaluation**: pathfinder distances plus wall reserve, Player 2
//!   maximizing by convention
//! - **Candidate generation**: pawn moves first, then wall slots near
//!   the opponent's shortest path only
//! - **Transposition table**: bounded memo keyed by canonical state
//!   signature, remaining depth, and side
//! - **Cancellation**: a shared token checked between sibling moves
//!
//! ## Usage
//!
//! ```
//! use quoridor_engine::rules::GameState;
//! use quoridor_engine::search::{Difficulty, MinimaxSearch};
//!
//! let mut game = GameState::new();
//! let mut search = MinimaxSearch::new(Difficulty::Easy);
//!
//! // Player 1 (the human seat) steps forward, then the engine replies.
//! let step = game.get_valid_pawn_moves(game.turn())[0];
//! game.apply_move(quoridor_engine::core::Move::pawn(step), true).unwrap();
//!
//! if let Some(reply) = search.get_move(&mut game) {
//!     game.apply_move(reply, true).unwrap();
//! } else {
//!     // No legal move at all: the engine resigns.
//! }
//! ```

pub mod cancel;
pub mod config;
pub mod evaluate;
pub mod minimax;
pub mod movegen;
pub mod stats;
pub mod table;

pub use cancel::CancelToken;
pub use config::{Difficulty, SearchConfig};
pub use evaluate::{evaluate, WIN_SCORE};
pub use minimax::MinimaxSearch;
pub use movegen::generate_candidates;
pub use stats::SearchStats;
pub use table::{TableEntry, TableKey, TranspositionTable};

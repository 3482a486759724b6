//! The rules engine: game state, legality, mutation, win detection.
//!
//! ## Overview
//!
//! [`GameState`] owns the board and is mutated through two APIs:
//!
//! - **Durable** — [`GameState::apply_move`] validates, records history,
//!   and commits. Hosts use this for every real move.
//! - **Ephemeral** — [`GameState::apply_move_fast`] /
//!   [`GameState::undo_move_fast`] are unvalidated exact inverses for the
//!   search's apply–recurse–undo walk.
//!
//! Wall legality delegates to the pathfinder so that no committed wall
//! can ever strand a player from their goal row.

pub mod engine;
pub mod state;

pub use engine::{MoveError, UndoToken};
pub use state::{GameState, Snapshot};

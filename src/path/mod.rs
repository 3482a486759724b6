//! Graph search over the wall configuration.
//!
//! The pathfinder answers one question: how far is a pawn from its goal
//! row, and along which cells? The rules engine uses it to guarantee wall
//! placements never strand a player; the search uses it for evaluation
//! and for aiming wall candidates at the opponent's route.

pub mod astar;
pub mod cache;

pub use astar::{shortest_path, shortest_path_len, UNREACHABLE};
pub use cache::{wall_signature, PathCache};

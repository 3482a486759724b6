//! Core engine types: board geometry, players, moves, RNG, configuration.
//!
//! This module contains the fundamental value types shared by the rules
//! engine, the pathfinder, and the search. Nothing here mutates game state.

pub mod board;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::{
    blocks, neighbors, Orientation, Position, Wall, WallSet, WallSlot, BOARD_SIZE, WALL_GRID,
};
pub use config::GameConfig;
pub use moves::Move;
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};

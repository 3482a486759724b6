//! # quoridor-engine
//!
//! Rules and search engine for Quoridor: a 9×9 grid, two pawns racing to
//! opposite goal rows, and ten blocking walls each. This crate is the
//! game's core — hosts (UI, test harness) drive it and do their own
//! rendering, input, and persistence.
//!
//! ## Design Principles
//!
//! 1. **One source of truth**: `GameState` owns the board; every mutation
//!    goes through its two APIs (durable with history, or the search's
//!    reversible fast path).
//!
//! 2. **Connectivity is inviolable**: wall legality re-proves that both
//!    players can still reach their goal rows, so no committed state can
//!    ever strand a pawn.
//!
//! 3. **Explicit caches**: the shortest-path memo and the transposition
//!    table are owned objects with explicit invalidation, never globals.
//!
//! 4. **Reproducible search**: all randomness flows from a seedable RNG,
//!    so a search is replayable from its configuration.
//!
//! ## Modules
//!
//! - `core`: board geometry, players, moves, RNG, configuration
//! - `path`: A* shortest paths over the wall configuration, with memo
//! - `rules`: game state, legality, mutation, win detection
//! - `history`: bounded snapshot-based undo/redo
//! - `search`: alpha-beta minimax with transposition table

pub mod core;
pub mod history;
pub mod path;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, Move, Orientation, Player, PlayerPair, Position, Wall,
    WallSet, WallSlot, BOARD_SIZE, WALL_GRID,
};

pub use crate::path::{shortest_path, shortest_path_len, PathCache, UNREACHABLE};

pub use crate::rules::{GameState, MoveError, Snapshot, UndoToken};

pub use crate::history::HistoryManager;

pub use crate::search::{
    CancelToken, Difficulty, MinimaxSearch, SearchConfig, SearchStats, WIN_SCORE,
};

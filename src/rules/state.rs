//! Game state and snapshots.
//!
//! ## GameState
//!
//! The aggregate the whole engine revolves around: pawn positions, the
//! placed wall set, remaining wall counts, whose turn it is, and the
//! winner once decided. Mutation goes exclusively through the two APIs in
//! `rules::engine` — the durable `apply_move` and the ephemeral
//! `apply_move_fast`/`undo_move_fast` pair the search uses.
//!
//! ## Snapshot
//!
//! A value copy of exactly the invariant-bearing fields — never the path
//! cache or history. Snapshots back the undo/redo stacks and are the
//! persistence contract: a host serializes a `Snapshot` however it likes
//! and reconstructs an identical `GameState` from it.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Player, PlayerPair, Position, WallSet, BOARD_SIZE};
use crate::history::HistoryManager;
use crate::path::PathCache;

/// Complete state of one game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) pawns: PlayerPair<Position>,
    pub(crate) walls: WallSet,
    pub(crate) walls_remaining: PlayerPair<u8>,
    pub(crate) turn: Player,
    pub(crate) winner: Option<Player>,

    config: GameConfig,

    // Derived caches; excluded from snapshots and comparisons.
    pub(crate) path_cache: PathCache,
    pub(crate) history: HistoryManager,
}

impl GameState {
    /// A fresh game with the default configuration: pawns on the center
    /// columns of their back rows, ten walls each, Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A fresh game with a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let mid = BOARD_SIZE / 2;
        Self {
            pawns: PlayerPair::new(
                Position::new(mid, BOARD_SIZE - 1),
                Position::new(mid, 0),
            ),
            walls: WallSet::new(),
            walls_remaining: PlayerPair::with_value(config.starting_walls),
            turn: Player::One,
            winner: None,
            config,
            path_cache: PathCache::new(),
            history: HistoryManager::new(config.max_history),
        }
    }

    /// Reconstruct a game from a snapshot, with fresh caches and history.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, config: GameConfig) -> Self {
        let mut game = Self::with_config(config);
        game.restore(snapshot);
        game
    }

    // === Read accessors ===

    /// This player's pawn position.
    #[must_use]
    pub fn pawn(&self, player: Player) -> Position {
        self.pawns[player]
    }

    /// The placed walls.
    #[must_use]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Walls this player has left to place.
    #[must_use]
    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.walls_remaining[player]
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The winner, once a pawn has reached its goal row.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Pathfinding (memoized) ===

    /// Shortest path from `start` to `goal_row` under the current walls.
    /// Empty if unreachable; never empty for either pawn in a reachable
    /// game state.
    pub fn shortest_path(&mut self, start: Position, goal_row: i8) -> Vec<Position> {
        self.path_cache.shortest_path(&self.walls, start, goal_row)
    }

    /// Moves on the shortest path, or [`crate::path::UNREACHABLE`].
    pub fn shortest_path_len(&mut self, start: Position, goal_row: i8) -> u32 {
        self.path_cache
            .shortest_path_len(&self.walls, start, goal_row)
    }

    // === Snapshots ===

    /// Value copy of the board state, excluding caches and history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pawns: self.pawns,
            walls: self.walls.clone(),
            walls_remaining: self.walls_remaining,
            turn: self.turn,
            winner: self.winner,
        }
    }

    /// Replace the board state from a snapshot.
    ///
    /// Clears the path cache: the cached entries belong to wall
    /// configurations the incoming state may never have seen.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pawns = snapshot.pawns;
        self.walls = snapshot.walls;
        self.walls_remaining = snapshot.walls_remaining;
        self.turn = snapshot.turn;
        self.winner = snapshot.winner;
        self.path_cache.invalidate();
    }

    /// Canonical order-independent signature of the board state, for
    /// transposition keys. Two states with equal signatures are treated
    /// as interchangeable regardless of move order.
    #[must_use]
    pub fn signature(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.pawns.hash(&mut hasher);
        self.walls_remaining.hash(&mut hasher);
        self.turn.hash(&mut hasher);
        for wall in &self.walls {
            wall.hash(&mut hasher);
        }
        hasher.finish()
    }

    // === History ===

    /// Step back one committed move. Returns false if there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = self.snapshot();
        if let Some(previous) = self.history.undo(current) {
            self.restore(previous);
            true
        } else {
            false
        }
    }

    /// Step forward again after an undo. Returns false if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = self.snapshot();
        if let Some(next) = self.history.redo(current) {
            self.restore(next);
            true
        } else {
            false
        }
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable value copy of a game's board state.
///
/// Contains exactly the invariant-bearing fields of [`GameState`] — adding
/// a transient field to the state struct can never silently leak into
/// persisted history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pawns: PlayerPair<Position>,
    pub walls: WallSet,
    pub walls_remaining: PlayerPair<u8>,
    pub turn: Player,
    pub winner: Option<Player>,
}

//! Alpha-beta minimax driver.
//!
//! The search walks the game tree directly on one `GameState` through
//! the ephemeral mutation API: apply a candidate, recurse, undo, and
//! keep alpha/beta bounds to prune siblings that cannot change the
//! decision. Results are memoized in a bounded transposition table.
//!
//! Player 2 is the maximizing side by convention; `get_move` maximizes
//! when Player 2 is to move and minimizes otherwise, so the engine can
//! play either seat.

use std::time::Instant;

use crate::core::{GameRng, Move, Player};
use crate::rules::GameState;

use super::cancel::CancelToken;
use super::config::{Difficulty, SearchConfig};
use super::evaluate::evaluate;
use super::movegen::generate_candidates;
use super::stats::SearchStats;
use super::table::{TableEntry, TranspositionTable};

/// Adversarial search engine.
///
/// Owns its transposition table, RNG, and statistics. One instance per
/// game session; the table persists across `get_move` calls (entries are
/// keyed by full state signature, so reuse is sound) and is bounded.
pub struct MinimaxSearch {
    config: SearchConfig,
    table: TranspositionTable,
    rng: GameRng,
    stats: SearchStats,
    cancel: CancelToken,
}

impl MinimaxSearch {
    /// Create a search engine for the given difficulty.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(SearchConfig::for_difficulty(difficulty))
    }

    /// Create a search engine with explicit configuration.
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            table: TranspositionTable::new(config.table_capacity),
            rng: GameRng::new(config.seed),
            stats: SearchStats::default(),
            cancel: CancelToken::new(),
            config,
        }
    }

    /// Token a host can hand to another thread to abandon a running
    /// search. The flag is checked between sibling moves; once set, the
    /// search unwinds promptly and the token stays set until
    /// [`CancelToken::reset`].
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Pick the best move for the side to move, or `None` if no legal
    /// move exists (the engine resigns).
    ///
    /// Explores the tree through the fast mutation API and leaves `game`
    /// exactly as it was. The host commits the returned move itself via
    /// `apply_move` — typically with history recording enabled.
    pub fn get_move(&mut self, game: &mut GameState) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let maximizing = game.turn() == Player::Two;
        let (_, best) = self.minimax(game, self.config.depth, i32::MIN, i32::MAX, maximizing);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    fn minimax(
        &mut self,
        game: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        let key = (game.signature(), depth, maximizing);
        if let Some(entry) = self.table.get(&key) {
            self.stats.tt_hits += 1;
            return (entry.value, entry.best);
        }

        if depth == 0 || game.winner().is_some() {
            let value = evaluate(game);
            self.stats.evals += 1;
            self.table.insert(key, TableEntry { value, best: None });
            return (value, None);
        }

        let candidates = generate_candidates(
            game,
            &mut self.rng,
            self.config.wall_radius,
            self.config.deterministic_order,
        );
        if candidates.is_empty() {
            // Defensive: unreachable in standard play, but a position
            // with no candidates is simply evaluated as it stands.
            let value = evaluate(game);
            self.stats.evals += 1;
            self.table.insert(key, TableEntry { value, best: None });
            return (value, None);
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in candidates {
            if self.cancel.is_cancelled() {
                break;
            }

            let token = game.apply_move_fast(mv);
            let (value, _) = self.minimax(game, depth - 1, alpha, beta, !maximizing);
            game.undo_move_fast(token);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // A cancelled scan saw only some siblings; its value is not the
        // node's value and must not be memoized.
        if !self.cancel.is_cancelled() {
            self.table.insert(
                key,
                TableEntry {
                    value: best_value,
                    best: best_move,
                },
            );
        }

        (best_value, best_move)
    }

    /// Statistics from the most recent `get_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Entries currently held in the transposition table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Drop all memoized search results, e.g. after loading a saved
    /// game, so no entry can describe a state the table never saw
    /// being reached.
    pub fn clear_table(&mut self) {
        self.table.clear();
    }
}

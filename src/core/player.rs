//! Player identification and per-player data storage.
//!
//! The game is strictly two-player: `Player::One` races toward row 0,
//! `Player::Two` toward row 8. `PlayerPair` stores one value per player
//! with `Index`-based access, so per-player state never lives in loose
//! twin fields.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player is racing toward.
    #[must_use]
    pub const fn goal_row(self) -> i8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }

    /// 0-based index, for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both players, in seat order.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::One, Player::Two]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data with O(1) access by `Player`.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Player, PlayerPair};
///
/// let mut walls = PlayerPair::with_value(10u8);
/// walls[Player::One] -= 1;
/// assert_eq!(walls[Player::One], 9);
/// assert_eq!(walls[Player::Two], 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create with explicit values for each player.
    #[must_use]
    pub const fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create with the same value for both players.
    #[must_use]
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over `(Player, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

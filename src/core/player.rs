//! Player identification and per-player hand state.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are assigned in the order names were supplied
//! to the deal and never change for the lifetime of a game.
//!
//! ## Player
//!
//! A named seat holding exactly three cards, plus the transient hand-card
//! selection a UI may record before swapping.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::rules::scoring;

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 3;

/// A player's hand. Always exactly three cards.
pub type Hand = [Card; HAND_SIZE];

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one in a game of `player_count` players.
    ///
    /// ```
    /// use schwimmen::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,

    /// The three hand cards. Only swap actions change them.
    pub hand: Hand,

    /// Hand card chosen for a one-card swap. UI-local, `None` = nothing chosen.
    pub selected_hand_index: Option<usize>,

    /// Set once this player has knocked.
    pub has_knocked: bool,
}

impl Player {
    /// Create a player with the given name and hand.
    #[must_use]
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
            selected_hand_index: None,
            has_knocked: false,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current score of the hand, recomputed on every call.
    #[must_use]
    pub fn score(&self) -> f64 {
        scoring::hand_score(&self.hand)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = &self.hand;
        write!(f, "{}: [{}, {}, {}]", self.name, a, b, c)
    }
}

//! Game state aggregate.
//!
//! ## Game
//!
//! Everything one game of Schwimmen needs:
//! - Seated players and their hands
//! - The three shared middle cards
//! - The draw sequence the deal was taken from, and a cursor into it
//! - Turn pointer, pass streak, who knocked
//! - Action history
//!
//! The draw sequence and history use `im` persistent vectors so snapshots of
//! a game are cheap to clone.
//!
//! Rules live in [`crate::rules`]; this module only holds state and answers
//! questions about it.

use im::Vector;
use serde::Serialize;

use super::action::ActionRecord;
use super::card::Card;
use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::error::{GameError, Result};
use super::player::{Player, PlayerId, HAND_SIZE};
use crate::rules::scoring::{self, GameResult};

/// Number of shared middle cards.
pub const MIDDLE_SIZE: usize = 3;

/// The shared middle. Always exactly three cards.
pub type Middle = [Card; MIDDLE_SIZE];

/// Number of cards consumed by the initial deal.
#[must_use]
pub const fn cards_dealt(player_count: usize) -> usize {
    HAND_SIZE * player_count + MIDDLE_SIZE
}

/// One game of Schwimmen.
///
/// Serialize-only: a `Game` is built by [`crate::rules::lifecycle::deal`],
/// never read back, so its invariants hold for every instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) middle: Middle,
    pub(crate) draw_sequence: Vector<Card>,
    /// Index of the next undealt card. Only ever increases.
    pub(crate) draw_cursor: usize,
    /// Consecutive passes since the last reset. Never exceeds the seat count.
    pub(crate) pass_count: usize,
    pub(crate) knocked_player: Option<PlayerId>,
    pub(crate) current_player: PlayerId,
    /// Middle card chosen for a one-card swap. UI-local.
    pub(crate) selected_middle_index: Option<usize>,
    pub(crate) turn: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl Game {
    /// Create a game from already-dealt players and middle.
    ///
    /// `draw_sequence` is the full sequence the deal was taken from; the
    /// cursor starts right after the dealt cards. Callers must deal `players`
    /// and `middle` from the head of that sequence; `deal` does.
    ///
    /// ## Errors
    ///
    /// - `InvalidPlayerCount` unless 2..=4 players are given
    /// - `NotEnoughCards` if the sequence is shorter than the deal
    pub(crate) fn new(
        players: Vec<Player>,
        middle: Middle,
        draw_sequence: impl Into<Vector<Card>>,
    ) -> Result<Self> {
        let count = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let draw_sequence = draw_sequence.into();
        let needed = cards_dealt(count);
        if draw_sequence.len() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                available: draw_sequence.len(),
            });
        }

        Ok(Self {
            players,
            middle,
            draw_sequence,
            draw_cursor: needed,
            pass_count: 0,
            knocked_player: None,
            current_player: PlayerId::new(0),
            selected_middle_index: None,
            turn: 1,
            history: Vector::new(),
        })
    }

    // === Players ===

    /// Number of seated players. Fixed for the game's lifetime.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by seat.
    ///
    /// Returns `None` if the seat does not exist.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player.index()]
    }

    pub(crate) fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player.index()]
    }

    // === Middle and draw sequence ===

    /// The three shared middle cards.
    #[must_use]
    pub fn middle(&self) -> &Middle {
        &self.middle
    }

    /// The full sequence the game was dealt from.
    #[must_use]
    pub fn draw_sequence(&self) -> &Vector<Card> {
        &self.draw_sequence
    }

    /// Index of the next undealt card in the draw sequence.
    #[must_use]
    pub fn draw_cursor(&self) -> usize {
        self.draw_cursor
    }

    /// Cards left in the draw sequence.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.draw_sequence.len().saturating_sub(self.draw_cursor)
    }

    /// True once the draw sequence can no longer refill the whole middle.
    ///
    /// For a 32-card sequence this is `draw_cursor > 29`.
    #[must_use]
    pub fn is_draw_sequence_exhausted(&self) -> bool {
        self.remaining_cards() < MIDDLE_SIZE
    }

    // === Counters ===

    /// Consecutive passes since the last reset.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    /// The player who knocked, if anyone has.
    #[must_use]
    pub fn knocked_player(&self) -> Option<PlayerId> {
        self.knocked_player
    }

    /// Turn number, starting at 1 and increasing on every turn advance.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every action applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Selection (UI-local) ===

    /// Middle card currently chosen for a one-card swap.
    #[must_use]
    pub fn selected_middle_index(&self) -> Option<usize> {
        self.selected_middle_index
    }

    /// Record the current player's chosen hand card.
    pub fn select_hand_card(&mut self, index: usize) -> Result<()> {
        if index >= HAND_SIZE {
            return Err(GameError::InvalidSelection {
                hand: Some(index),
                middle: self.selected_middle_index,
            });
        }
        self.current_player_mut().selected_hand_index = Some(index);
        Ok(())
    }

    /// Record the chosen middle card.
    pub fn select_middle_card(&mut self, index: usize) -> Result<()> {
        if index >= MIDDLE_SIZE {
            return Err(GameError::InvalidSelection {
                hand: self.current_player().selected_hand_index,
                middle: Some(index),
            });
        }
        self.selected_middle_index = Some(index);
        Ok(())
    }

    /// Forget both the middle selection and the current player's hand selection.
    pub fn clear_selection(&mut self) {
        self.selected_middle_index = None;
        self.current_player_mut().selected_hand_index = None;
    }

    // === End of game ===

    /// Whether the game is over.
    ///
    /// The game ends when the draw sequence is exhausted, or when play has
    /// come back round to the player who knocked. Assumes strict round-robin
    /// turn order with a fixed seat count.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.is_draw_sequence_exhausted() || self.knocked_player == Some(self.current_player)
    }

    /// Every player's score in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.players.iter().map(Player::score).collect()
    }

    /// Final scores and winner, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.is_ended() {
            Some(scoring::rank(self.scores()))
        } else {
            None
        }
    }
}

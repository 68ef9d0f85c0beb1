//! Game event types.
//!
//! Events are published after the engine changes state so an attached view
//! can redraw. Player payloads are seats; look the player up on the `Game`
//! handed to the observer alongside the event.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something that happened in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    GameStarted,
    /// The game is over: play returned to the knocker, or the draw sequence ran dry.
    GameEnded,
    /// The turn passed to the next seat.
    TurnAdvanced,
    /// The given player knocked.
    PlayerKnocked(PlayerId),
    /// Hand or middle cards changed during the given player's turn.
    CardsSwapped(PlayerId),
}

impl GameEvent {
    /// Payload-free discriminant, handy for counting events by kind.
    #[must_use]
    pub const fn kind(self) -> EventKind {
        match self {
            GameEvent::GameStarted => EventKind::GameStarted,
            GameEvent::GameEnded => EventKind::GameEnded,
            GameEvent::TurnAdvanced => EventKind::TurnAdvanced,
            GameEvent::PlayerKnocked(_) => EventKind::PlayerKnocked,
            GameEvent::CardsSwapped(_) => EventKind::CardsSwapped,
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerKnocked(p) | GameEvent::CardsSwapped(p) => Some(p),
            _ => None,
        }
    }
}

/// Event discriminant without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted,
    GameEnded,
    TurnAdvanced,
    PlayerKnocked,
    CardsSwapped,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted => f.write_str("game started"),
            GameEvent::GameEnded => f.write_str("game ended"),
            GameEvent::TurnAdvanced => f.write_str("turn advanced"),
            GameEvent::PlayerKnocked(p) => write!(f, "{p} knocked"),
            GameEvent::CardsSwapped(p) => write!(f, "cards swapped ({p})"),
        }
    }
}

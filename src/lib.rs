//! # schwimmen
//!
//! Rule engine for Schwimmen ("31"), a card game for 2-4 players.
//!
//! ## Rules in brief
//!
//! Each player holds three cards and three more lie face up in the middle.
//! On their turn a player either swaps one card with the middle, swaps their
//! whole hand, passes, or knocks. When every player passes in a row the middle
//! is replaced from the draw sequence. After a knock everyone else gets one
//! final turn. A hand scores the best single-suit total; three of a kind
//! scores 30.5.
//!
//! ## Design
//!
//! - **Single writer**: one [`Session`] owns at most one [`Game`] and mutates
//!   it synchronously. No locking, no background work.
//! - **Fail fast**: every precondition is checked before the first mutation,
//!   so an `Err` always means nothing changed.
//! - **Observers**: views attach to the [`NotificationHub`] and are called in
//!   registration order as events happen.
//!
//! ## Modules
//!
//! - `core`: cards, players, configuration, actions, game state, errors
//! - `events`: game events and the notification hub
//! - `rules`: scoring, lifecycle, turn actions
//! - `session`: the table that owns the current game

pub mod core;
pub mod events;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, Game, GameError, GameRng, Player, PlayerId, Rank, RulesConfig, Suit,
};

pub use crate::events::{EventKind, EventLog, GameEvent, GameObserver, NotificationHub, ObserverId};

pub use crate::rules::{calculate_score, GameResult};

pub use crate::session::Session;

//! Core game types: cards, players, configuration, actions, state, errors.
//!
//! This module holds data and the questions you can ask of it. The rules that
//! move a game forward live in [`crate::rules`].

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use card::{standard_deck, Card, Rank, Suit, DECK_SIZE};
pub use player::{Hand, Player, PlayerId, HAND_SIZE};
pub use rng::GameRng;
pub use config::{RulesConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord};
pub use state::{cards_dealt, Game, Middle, MIDDLE_SIZE};
pub use error::{GameError, Result};

//! The rules of Schwimmen.
//!
//! - `scoring`: hand values and the final ranking
//! - `lifecycle`: dealing, middle refills, turn order, end detection
//! - `actions`: the four turn actions
//!
//! Functions here operate on a [`Game`](crate::core::Game) and publish
//! through a [`NotificationHub`](crate::events::NotificationHub). Most callers
//! go through [`Session`](crate::session::Session) instead.

pub mod scoring;
pub mod lifecycle;
pub mod actions;

pub use scoring::{calculate_score, hand_score, GameResult, THREE_OF_A_KIND_SCORE};

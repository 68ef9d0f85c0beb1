//! Event notification.
//!
//! The engine tells attached views that something changed by publishing
//! [`GameEvent`]s through a [`NotificationHub`]. Views implement
//! [`GameObserver`], or are plain closures.

pub mod event;
pub mod hub;

pub use event::{EventKind, GameEvent};
pub use hub::{EventLog, GameObserver, NotificationHub, ObserverId};

//! Notification hub.
//!
//! A registry of observers invoked synchronously, in registration order, for
//! every published event. No filtering, no priorities, no queuing: when
//! `publish` returns every observer has seen the event.
//!
//! ## Example
//!
//! ```
//! use schwimmen::events::{EventLog, NotificationHub};
//!
//! let mut hub = NotificationHub::new();
//! let log = EventLog::new();
//! let id = hub.subscribe(log.clone());
//! assert_eq!(hub.len(), 1);
//! assert!(hub.unsubscribe(id));
//! assert!(hub.is_empty());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::event::{EventKind, GameEvent};
use crate::core::Game;

/// Receives game events.
///
/// The game is passed in the state it has at the moment of publication.
pub trait GameObserver {
    /// Called once per published event.
    fn on_event(&mut self, event: &GameEvent, game: &Game);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &Game),
{
    fn on_event(&mut self, event: &GameEvent, game: &Game) {
        self(event, game)
    }
}

/// Handle returned by [`NotificationHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Fan-out of game events to registered observers.
#[derive(Default)]
pub struct NotificationHub {
    /// SmallVec: a table rarely has more than a couple of views attached.
    observers: SmallVec<[(ObserverId, Box<dyn GameObserver>); 4]>,
    next_id: u32,
}

impl NotificationHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It will be called after all earlier observers.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer.
    ///
    /// Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver an event to every observer in registration order.
    pub fn publish(&mut self, event: GameEvent, game: &Game) {
        trace!(%event, observers = self.observers.len(), "publishing event");
        for (_, observer) in &mut self.observers {
            observer.on_event(&event, game);
        }
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("observers", &self.observers.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .finish()
    }
}

/// Observer that records every event it sees.
///
/// Clones share the same log, so keep one clone and subscribe another.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// How many events of the given kind were recorded.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    /// Whether any event of the given kind was recorded.
    #[must_use]
    pub fn saw(&self, kind: EventKind) -> bool {
        self.count(kind) > 0
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent, _game: &Game) {
        self.events.borrow_mut().push(*event);
    }
}

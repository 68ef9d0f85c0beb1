//! The owning context for a table.
//!
//! A `Session` holds at most one game at a time, the observers attached to
//! the table, the shuffle RNG and the rules configuration. Starting a new game
//! replaces the old one wholesale. Every game operation fails with
//! `NoActiveGame` until a game has been dealt.
//!
//! ## Example
//!
//! ```
//! use schwimmen::core::RulesConfig;
//! use schwimmen::events::{EventKind, EventLog};
//! use schwimmen::session::Session;
//!
//! let mut session = Session::with_config(RulesConfig::default().with_seed(42)).unwrap();
//! let log = EventLog::new();
//! session.subscribe(log.clone());
//!
//! session.start_new_game(&["Ada", "Ben"], None).unwrap();
//! session.pass().unwrap();
//! session.swap_all_cards().unwrap();
//!
//! assert!(log.saw(EventKind::GameStarted));
//! assert_eq!(session.calculate_all_scores().unwrap().len(), 2);
//! ```

use tracing::info;

use crate::core::{Action, Card, Game, GameError, GameRng, Result, RulesConfig};
use crate::events::{GameEvent, GameObserver, NotificationHub, ObserverId};
use crate::rules::{actions, lifecycle, GameResult};

/// A table: the current game (if any) plus its observers.
#[derive(Debug)]
pub struct Session {
    config: RulesConfig,
    rng: GameRng,
    game: Option<Game>,
    hub: NotificationHub,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with default rules and an OS-seeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RulesConfig::default(),
            rng: GameRng::from_entropy(),
            game: None,
            hub: NotificationHub::new(),
        }
    }

    /// Create a session with the given rules.
    ///
    /// ## Errors
    ///
    /// `InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: RulesConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            game: None,
            hub: NotificationHub::new(),
        })
    }

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    // === Observers ===

    /// Attach an observer to every future event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        self.hub.subscribe(observer)
    }

    /// Detach an observer. Returns true if it was attached.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.hub.unsubscribe(id)
    }

    // === Game slot ===

    /// The current game, if one has been dealt.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    fn active(&self) -> Result<&Game> {
        self.game.as_ref().ok_or(GameError::NoActiveGame)
    }

    /// Split borrow of the current game and the hub.
    fn active_mut(&mut self) -> Result<(&mut Game, &mut NotificationHub)> {
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        Ok((game, &mut self.hub))
    }

    // === Lifecycle ===

    /// Deal a new game, discarding any current one.
    ///
    /// Without `cards` a freshly shuffled 32-card deck is used. On error the
    /// previous game (or the empty slot) is left as it was, and so is the RNG:
    /// names are checked before the deck is shuffled.
    pub fn start_new_game<S: AsRef<str>>(
        &mut self,
        names: &[S],
        cards: Option<Vec<Card>>,
    ) -> Result<()> {
        lifecycle::validate_names(names, &self.config)?;
        let cards = match cards {
            Some(cards) => cards,
            None => self.rng.shuffled_deck(),
        };

        let game = lifecycle::deal(names, cards, &self.config)?;
        info!(
            players = game.player_count(),
            names = ?game.players().iter().map(|p| p.name()).collect::<Vec<_>>(),
            "new game dealt"
        );

        let game = self.game.insert(game);
        self.hub.publish(GameEvent::GameStarted, game);
        Ok(())
    }

    /// Refill the middle if every seat has passed. See [`lifecycle::refill_middle`].
    pub fn refill_middle(&mut self) -> Result<()> {
        let (game, hub) = self.active_mut()?;
        lifecycle::refill_middle(game, hub);
        Ok(())
    }

    /// Move the turn to the next seat.
    pub fn advance_turn(&mut self) -> Result<()> {
        let (game, hub) = self.active_mut()?;
        lifecycle::advance_turn(game, hub);
        Ok(())
    }

    /// Whether the current game is over.
    pub fn is_game_ended(&self) -> Result<bool> {
        Ok(lifecycle::is_game_ended(self.active()?))
    }

    /// Scores of every player in seat order.
    pub fn calculate_all_scores(&self) -> Result<Vec<f64>> {
        Ok(lifecycle::calculate_all_scores(self.active()?))
    }

    /// Final scores and winner, or `None` while the game is still running.
    pub fn result(&self) -> Result<Option<GameResult>> {
        Ok(self.active()?.result())
    }

    // === Selection (UI-local) ===

    /// Record the current player's chosen hand card.
    pub fn select_hand_card(&mut self, index: usize) -> Result<()> {
        self.active_mut()?.0.select_hand_card(index)
    }

    /// Record the chosen middle card.
    pub fn select_middle_card(&mut self, index: usize) -> Result<()> {
        self.active_mut()?.0.select_middle_card(index)
    }

    // === Actions ===

    /// Apply any action for the current player.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let (game, hub) = self.active_mut()?;
        actions::apply_action(game, hub, action)
    }

    /// Current player knocks.
    pub fn knock(&mut self) -> Result<()> {
        self.apply(Action::Knock)
    }

    /// Current player passes.
    pub fn pass(&mut self) -> Result<()> {
        self.apply(Action::Pass)
    }

    /// Current player swaps hand card `hand` with middle card `middle`.
    pub fn swap_one_card(&mut self, hand: usize, middle: usize) -> Result<()> {
        self.apply(Action::SwapOne { hand, middle })
    }

    /// Current player swaps the previously selected hand and middle cards.
    pub fn swap_selected_cards(&mut self) -> Result<()> {
        let (game, hub) = self.active_mut()?;
        actions::swap_selected_cards(game, hub)
    }

    /// Current player swaps their whole hand with the middle.
    pub fn swap_all_cards(&mut self) -> Result<()> {
        self.apply(Action::SwapAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::standard_deck;
    use crate::events::{EventKind, EventLog};

    fn seeded() -> Session {
        Session::with_config(RulesConfig::default().with_seed(1)).unwrap()
    }

    #[test]
    fn test_operations_need_a_game() {
        let mut session = seeded();

        assert_eq!(session.knock(), Err(GameError::NoActiveGame));
        assert_eq!(session.pass(), Err(GameError::NoActiveGame));
        assert_eq!(session.swap_one_card(0, 0), Err(GameError::NoActiveGame));
        assert_eq!(session.swap_all_cards(), Err(GameError::NoActiveGame));
        assert_eq!(session.swap_selected_cards(), Err(GameError::NoActiveGame));
        assert_eq!(session.refill_middle(), Err(GameError::NoActiveGame));
        assert_eq!(session.advance_turn(), Err(GameError::NoActiveGame));
        assert_eq!(session.is_game_ended(), Err(GameError::NoActiveGame));
        assert_eq!(session.calculate_all_scores(), Err(GameError::NoActiveGame));
        assert_eq!(session.select_hand_card(0), Err(GameError::NoActiveGame));
        assert!(session.result().is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RulesConfig::default().with_player_range(1, 4);
        assert!(matches!(Session::with_config(config), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_failed_start_keeps_previous_game() {
        let mut session = seeded();
        let log = EventLog::new();
        session.subscribe(log.clone());

        session.start_new_game(&["A", "B"], Some(standard_deck())).unwrap();
        session.pass().unwrap();
        let before = session.game().cloned();
        log.clear();

        assert!(session.start_new_game(&["A"], None).is_err());
        assert!(session.start_new_game(&["A", ""], None).is_err());

        assert_eq!(session.game().cloned(), before);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_new_game_replaces_old() {
        let mut session = seeded();
        session.start_new_game(&["A", "B"], None).unwrap();
        session.knock().unwrap();

        session.start_new_game(&["X", "Y", "Z"], None).unwrap();
        let game = session.game().unwrap();
        assert_eq!(game.player_count(), 3);
        assert_eq!(game.knocked_player(), None);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_seeded_sessions_deal_identically() {
        let mut a = seeded();
        let mut b = seeded();
        a.start_new_game(&["A", "B"], None).unwrap();
        b.start_new_game(&["A", "B"], None).unwrap();
        assert_eq!(a.game().unwrap().draw_sequence(), b.game().unwrap().draw_sequence());
    }

    #[test]
    fn test_rejected_names_leave_rng_untouched() {
        let mut a = seeded();
        let mut b = seeded();

        assert!(matches!(
            a.start_new_game(&["A", " "], None),
            Err(GameError::EmptyPlayerName { index: 1 })
        ));
        assert!(a.game().is_none());

        a.start_new_game(&["A", "B"], None).unwrap();
        b.start_new_game(&["A", "B"], None).unwrap();
        assert_eq!(a.game().unwrap().draw_sequence(), b.game().unwrap().draw_sequence());
    }

    #[test]
    fn test_selection_through_session() {
        let mut session = seeded();
        session.start_new_game(&["A", "B"], Some(standard_deck())).unwrap();

        session.select_hand_card(1).unwrap();
        session.select_middle_card(2).unwrap();
        session.swap_selected_cards().unwrap();

        let deck = standard_deck();
        let game = session.game().unwrap();
        assert_eq!(game.players()[0].hand, [deck[0], deck[8], deck[2]]);
        assert_eq!(game.middle(), &[deck[6], deck[7], deck[1]]);
    }

    #[test]
    fn test_unsubscribed_observer_is_silent() {
        let mut session = seeded();
        let log = EventLog::new();
        let id = session.subscribe(log.clone());
        assert!(session.unsubscribe(id));

        session.start_new_game(&["A", "B"], None).unwrap();
        assert!(!log.saw(EventKind::GameStarted));
    }
}

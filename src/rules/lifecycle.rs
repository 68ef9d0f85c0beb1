//! Game lifecycle: dealing, refilling the middle, turn order, end detection.
//!
//! These functions take the game and the hub separately so the owning
//! [`Session`](crate::session::Session) can lend out disjoint borrows of its
//! fields. Every event is published as soon as the state it describes exists.

use tracing::{debug, info, trace};

use crate::core::{
    cards_dealt, Card, Game, GameError, Player, Result, RulesConfig, HAND_SIZE, MIDDLE_SIZE,
};
use crate::events::{GameEvent, NotificationHub};

/// Check the seat list of a new game.
///
/// ## Errors
///
/// - `InvalidPlayerCount` if `names` is outside the configured seat range
/// - `EmptyPlayerName` for the first blank name
pub fn validate_names<S: AsRef<str>>(names: &[S], config: &RulesConfig) -> Result<()> {
    config.check_player_count(names.len())?;

    if let Some(index) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
        return Err(GameError::EmptyPlayerName { index });
    }
    Ok(())
}

/// Deal a new game from `cards`.
///
/// Players receive three consecutive cards each in seat order, then the next
/// three cards form the middle. The draw cursor starts right after them.
///
/// ## Errors
///
/// Checked before anything is built, in this order:
/// - `InvalidPlayerCount` if `names` is outside the configured seat range
/// - `EmptyPlayerName` for a blank name
/// - `NotEnoughCards` if `cards` cannot cover the deal
pub fn deal<S: AsRef<str>>(names: &[S], cards: Vec<Card>, config: &RulesConfig) -> Result<Game> {
    validate_names(names, config)?;

    let needed = cards_dealt(names.len());
    if cards.len() < needed {
        return Err(GameError::NotEnoughCards {
            needed,
            available: cards.len(),
        });
    }

    let players = names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let first = seat * HAND_SIZE;
            Player::new(name.as_ref(), [cards[first], cards[first + 1], cards[first + 2]])
        })
        .collect();

    let m = names.len() * HAND_SIZE;
    let middle = [cards[m], cards[m + 1], cards[m + 2]];

    Game::new(players, middle, cards)
}

/// Refill the middle after a full round of passes.
///
/// - Draw sequence exhausted: publishes `GameEnded` instead of refilling.
/// - Every seat passed and the game is still running: resets the pass
///   streak and overwrites the middle with the next three cards.
/// - Otherwise does nothing, so it is safe to call speculatively.
pub fn refill_middle(game: &mut Game, hub: &mut NotificationHub) {
    if game.is_draw_sequence_exhausted() {
        info!(draw_cursor = game.draw_cursor, "draw sequence exhausted");
        hub.publish(GameEvent::GameEnded, game);
        return;
    }

    if game.pass_count == game.player_count() && !game.is_ended() {
        game.pass_count = 0;
        for slot in 0..MIDDLE_SIZE {
            game.middle[slot] = game.draw_sequence[game.draw_cursor];
            game.draw_cursor += 1;
        }
        debug!(
            draw_cursor = game.draw_cursor,
            remaining = game.remaining_cards(),
            "middle refilled"
        );
    }
}

/// Pass the turn to the next seat and publish `TurnAdvanced`.
pub fn advance_turn(game: &mut Game, hub: &mut NotificationHub) {
    game.current_player = game.current_player.next(game.player_count());
    game.turn += 1;
    debug!(player = %game.current_player, turn = game.turn, "turn advanced");
    hub.publish(GameEvent::TurnAdvanced, game);
}

/// Whether the game is over. See [`Game::is_ended`].
#[must_use]
pub fn is_game_ended(game: &Game) -> bool {
    game.is_ended()
}

/// Publish `GameEnded` if the game is over.
pub fn finish_if_ended(game: &Game, hub: &mut NotificationHub) {
    if game.is_ended() {
        info!(
            turn = game.turn,
            knocked = ?game.knocked_player.map(|p| p.index()),
            draw_cursor = game.draw_cursor,
            "game ended"
        );
        hub.publish(GameEvent::GameEnded, game);
    }
}

/// Every player's score in seat order.
#[must_use]
pub fn calculate_all_scores(game: &Game) -> Vec<f64> {
    let scores = game.scores();
    trace!(?scores, "scores calculated");
    scores
}

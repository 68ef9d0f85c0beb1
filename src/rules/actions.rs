//! Turn actions: knock, pass, swap one card, swap all cards.
//!
//! Every action applies to the current player, records itself in the game
//! history, advances the turn, and then publishes `GameEnded` if that brought
//! the game to an end. Preconditions are checked before anything changes.

use tracing::debug;

use super::lifecycle;
use crate::core::{Action, ActionRecord, Game, GameError, Result, HAND_SIZE, MIDDLE_SIZE};
use crate::events::{GameEvent, NotificationHub};

/// Apply any action to the current player.
pub fn apply_action(game: &mut Game, hub: &mut NotificationHub, action: Action) -> Result<()> {
    match action {
        Action::Knock => knock(game, hub),
        Action::Pass => pass(game, hub),
        Action::SwapOne { hand, middle } => swap_one_card(game, hub, hand, middle)?,
        Action::SwapAll => swap_all_cards(game, hub),
    }
    Ok(())
}

/// Knock: everyone else gets exactly one more turn.
pub fn knock(game: &mut Game, hub: &mut NotificationHub) {
    let player = game.current_player;
    record(game, Action::Knock);

    game.knocked_player = Some(player);
    game.pass_count = 0;
    game.clear_selection();
    game.current_player_mut().has_knocked = true;
    debug!(%player, name = game.current_player().name(), "knocked");

    hub.publish(GameEvent::PlayerKnocked(player), game);
    end_turn(game, hub);
}

/// Pass. When every seat has passed in a row the middle is refilled.
pub fn pass(game: &mut Game, hub: &mut NotificationHub) {
    let player = game.current_player;
    record(game, Action::Pass);

    game.pass_count += 1;
    game.clear_selection();
    debug!(%player, pass_count = game.pass_count, "passed");

    if game.pass_count == game.player_count() {
        lifecycle::refill_middle(game, hub);
        // The streak is spent even if the middle could not be refilled.
        game.pass_count = 0;
        hub.publish(GameEvent::CardsSwapped(player), game);
    }

    end_turn(game, hub);
}

/// Exchange hand card `hand` with middle card `middle`.
///
/// ## Errors
///
/// `InvalidSelection` if either index is not 0, 1 or 2. The game is untouched.
pub fn swap_one_card(
    game: &mut Game,
    hub: &mut NotificationHub,
    hand: usize,
    middle: usize,
) -> Result<()> {
    if hand >= HAND_SIZE || middle >= MIDDLE_SIZE {
        return Err(GameError::InvalidSelection {
            hand: Some(hand),
            middle: Some(middle),
        });
    }

    let player = game.current_player;
    record(game, Action::SwapOne { hand, middle });

    let from_middle = game.middle[middle];
    let from_hand = std::mem::replace(&mut game.current_player_mut().hand[hand], from_middle);
    game.middle[middle] = from_hand;
    game.pass_count = 0;
    debug!(%player, %from_hand, %from_middle, "swapped one card");

    hub.publish(GameEvent::CardsSwapped(player), game);
    end_turn(game, hub);
    Ok(())
}

/// Swap using the selection stored on the game and the current player.
///
/// ## Errors
///
/// `InvalidSelection` if either selection is unset.
pub fn swap_selected_cards(game: &mut Game, hub: &mut NotificationHub) -> Result<()> {
    let hand = game.current_player().selected_hand_index;
    let middle = game.selected_middle_index;
    match (hand, middle) {
        (Some(h), Some(m)) => swap_one_card(game, hub, h, m),
        _ => Err(GameError::InvalidSelection { hand, middle }),
    }
}

/// Exchange the whole hand with the middle, position for position.
pub fn swap_all_cards(game: &mut Game, hub: &mut NotificationHub) {
    let player = game.current_player;
    record(game, Action::SwapAll);

    std::mem::swap(&mut game.players[player.index()].hand, &mut game.middle);
    game.pass_count = 0;
    game.clear_selection();
    debug!(%player, "swapped all cards");

    hub.publish(GameEvent::CardsSwapped(player), game);
    end_turn(game, hub);
}

fn record(game: &mut Game, action: Action) {
    let entry = ActionRecord::new(game.current_player, action, game.turn);
    game.history.push_back(entry);
}

fn end_turn(game: &mut Game, hub: &mut NotificationHub) {
    lifecycle::advance_turn(game, hub);
    lifecycle::finish_if_ended(game, hub);
}

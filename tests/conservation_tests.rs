//! Property tests for card conservation and counter invariants.
//!
//! Random deals and random action sequences must never duplicate or lose a
//! card, and the turn counters must stay within their bounds.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use schwimmen::core::{cards_dealt, Card, GameRng, MIDDLE_SIZE};
use schwimmen::{Action, Game, RulesConfig, Session};

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Knock),
        Just(Action::Pass),
        Just(Action::Pass),
        (0usize..3, 0usize..3).prop_map(|(hand, middle)| Action::SwapOne { hand, middle }),
        Just(Action::SwapAll),
    ]
}

fn cards_in_play(game: &Game) -> Vec<Card> {
    let mut cards: Vec<Card> = game.players().iter().flat_map(|p| p.hand).collect();
    cards.extend(game.middle().iter().copied());
    cards
}

proptest! {
    /// Hands then middle are exactly the head of the draw sequence, in order.
    #[test]
    fn deal_consumes_sequence_head(seed in any::<u64>(), players in 2usize..=4) {
        let mut session = Session::with_config(RulesConfig::default().with_seed(seed)).unwrap();
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        session.start_new_game(&names, None).unwrap();

        let game = session.game().unwrap();
        let dealt = cards_dealt(players);
        prop_assert_eq!(game.draw_cursor(), dealt);

        let head: Vec<Card> = game.draw_sequence().iter().take(dealt).copied().collect();
        prop_assert_eq!(cards_in_play(game), head);
    }

    /// No card is ever duplicated, and every card in play was drawn.
    #[test]
    fn actions_conserve_cards(
        seed in any::<u64>(),
        players in 2usize..=4,
        actions in prop::collection::vec(action_strategy(), 0..80),
    ) {
        let mut session = Session::with_config(RulesConfig::default().with_seed(seed)).unwrap();
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        session.start_new_game(&names, None).unwrap();

        let mut last_cursor = session.game().unwrap().draw_cursor();
        for action in actions {
            session.apply(action).unwrap();
            let game = session.game().unwrap();

            let in_play = cards_in_play(game);
            let unique: FxHashSet<Card> = in_play.iter().copied().collect();
            prop_assert_eq!(unique.len(), in_play.len());

            let drawn: FxHashSet<Card> =
                game.draw_sequence().iter().take(game.draw_cursor()).copied().collect();
            prop_assert!(in_play.iter().all(|card| drawn.contains(card)));

            prop_assert!(game.draw_cursor() >= last_cursor);
            prop_assert!(game.draw_cursor() <= game.draw_sequence().len());
            prop_assert!(game.pass_count() < game.player_count());
            last_cursor = game.draw_cursor();
        }
    }

    /// Swaps alone never change which cards are in play.
    #[test]
    fn swaps_are_exchanges(
        seed in any::<u64>(),
        swaps in prop::collection::vec((0usize..3, 0usize..3, any::<bool>()), 1..30),
    ) {
        let mut session = Session::with_config(RulesConfig::default().with_seed(seed)).unwrap();
        session.start_new_game(&["A", "B", "C"], None).unwrap();

        let sorted = |mut cards: Vec<Card>| {
            cards.sort_by_key(|c| (c.suit, c.rank));
            cards
        };
        let before = sorted(cards_in_play(session.game().unwrap()));

        for (hand, middle, all) in swaps {
            if all {
                session.swap_all_cards().unwrap();
            } else {
                session.swap_one_card(hand, middle).unwrap();
            }
            prop_assert_eq!(session.game().unwrap().pass_count(), 0);
        }

        prop_assert_eq!(sorted(cards_in_play(session.game().unwrap())), before);
    }

    /// The game ends exactly when the sequence cannot refill the middle, or
    /// play is back with the knocker.
    #[test]
    fn ended_matches_definition(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let mut rng = GameRng::new(seed);
        let mut session = Session::new();
        session.start_new_game(&["A", "B", "C", "D"], Some(rng.shuffled_deck())).unwrap();

        for action in actions {
            session.apply(action).unwrap();
            let game = session.game().unwrap();
            let expected = game.draw_cursor() + MIDDLE_SIZE > game.draw_sequence().len()
                || game.knocked_player() == Some(game.current_player_id());
            prop_assert_eq!(session.is_game_ended().unwrap(), expected);
            prop_assert_eq!(game.draw_cursor() > 29, game.is_draw_sequence_exhausted());
        }
    }
}

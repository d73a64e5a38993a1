//! Property tests over random games and random choice sequences.

use std::collections::HashMap;

use memorize::{Card, CardId, GameConfig, MemoryGame};
use proptest::prelude::*;

/// Game whose pair contents are drawn from a small alphabet, so some
/// pairs may share content with other pairs.
fn game(pair_count: usize, seed: u64, alphabet: u8) -> MemoryGame<u8> {
    MemoryGame::with_config(GameConfig::new(pair_count).with_seed(seed), move |pair| {
        pair as u8 % alphabet
    })
}

fn tuples(game: &MemoryGame<u8>) -> Vec<(CardId, u8, bool, bool)> {
    let mut all: Vec<_> = game
        .cards()
        .iter()
        .map(|c| (c.id(), *c.content(), c.is_face_up(), c.is_matched()))
        .collect();
    all.sort();
    all
}

proptest! {
    #[test]
    fn deck_has_two_cards_per_pair(pair_count in 0usize..40) {
        let game = MemoryGame::new(pair_count, |pair| pair);

        prop_assert_eq!(game.len(), 2 * pair_count.max(2));

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for card in game.cards() {
            *counts.entry(*card.content()).or_default() += 1;
        }
        prop_assert!(counts.values().all(|&n| n == 2));

        let mut ids: Vec<_> = game.cards().iter().map(Card::id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), game.len());
    }

    #[test]
    fn choose_keeps_invariants(
        pair_count in 2usize..10,
        seed in any::<u64>(),
        alphabet in 1u8..6,
        picks in prop::collection::vec(0u64..24, 0..80),
    ) {
        let mut game = game(pair_count, seed, alphabet);
        let mut matched_before: Vec<CardId> = Vec::new();

        for (step, raw) in picks.into_iter().enumerate() {
            if step % 7 == 6 {
                game.shuffle();
            }
            game.choose(CardId(raw));

            prop_assert!(game.selection().len() <= 1);
            for card in game.cards() {
                prop_assert!(!card.is_matched() || card.is_face_up());
            }
            for id in &matched_before {
                prop_assert!(game.card(*id).unwrap().is_matched());
            }
            matched_before = game
                .cards()
                .iter()
                .filter(|c| c.is_matched())
                .map(Card::id)
                .collect();
        }
    }

    #[test]
    fn shuffle_preserves_cards(
        pair_count in 2usize..16,
        seed in any::<u64>(),
        picks in prop::collection::vec(0u64..32, 0..20),
    ) {
        let mut game = game(pair_count, seed, 4);
        for raw in picks {
            game.choose(CardId(raw));
        }
        let before = tuples(&game);
        let selection = game.selection();
        let score = game.score();

        game.shuffle();

        prop_assert_eq!(tuples(&game), before);
        prop_assert_eq!(game.selection().len(), selection.len());
        prop_assert_eq!(game.score(), score);
    }

    #[test]
    fn ignored_choices_change_nothing(
        pair_count in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(0u64..16, 0..40),
    ) {
        let mut game = game(pair_count, seed, 3);
        for raw in picks {
            let before = tuples(&game);
            let score = game.score();
            if !game.choose(CardId(raw)).changed_state() {
                prop_assert_eq!(tuples(&game), before);
                prop_assert_eq!(game.score(), score);
            }
        }
    }
}

//! The memory game model.
//!
//! `MemoryGame<T>` owns the dealt cards and implements the two player
//! intents:
//!
//! - `choose`: reveal a card, and if another card is pending, either
//!   match the pair or hide the pending card
//! - `shuffle`: reorder the cards without touching their state
//!
//! ## Choose Rules
//!
//! | Target | Other face-up unmatched | Effect |
//! |---|---|---|
//! | unknown id | - | ignored |
//! | matched | - | ignored |
//! | face-up | none | ignored (re-tap) |
//! | face-down | none | revealed |
//! | any unmatched | one, same content | both matched |
//! | any unmatched | one, different content | other hidden, target revealed |
//!
//! Under these rules at most one unmatched card is face-up whenever
//! `choose` returns.
//!
//! ```
//! use memorize::{CardId, ChooseOutcome, MemoryGame};
//!
//! let mut game = MemoryGame::new(2, |pair| ["A", "B"][pair]);
//! let a0 = CardId::new(0, 0);
//! let a1 = CardId::new(0, 1);
//!
//! assert_eq!(game.choose(a0), ChooseOutcome::Revealed(a0));
//! assert!(game.choose(a1).is_match());
//! assert_eq!(game.matched_pairs(), 1);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::outcome::ChooseOutcome;
use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardId};
use crate::core::{ChooseError, GameConfig, GameRng, GameRngState, MIN_PAIR_COUNT};

/// A card-matching game over content of type `T`.
///
/// Cards live in a persistent `im::Vector`, so `snapshot()` and `clone()`
/// are O(1). An id-to-position index gives O(1) lookup and is rebuilt
/// whenever the order changes.
#[derive(Clone, Debug)]
pub struct MemoryGame<T: Clone> {
    cards: Vector<Card<T>>,
    positions: FxHashMap<CardId, usize>,
    pair_count: usize,
    score: i64,
    config: GameConfig,
    rng: GameRng,
}

impl<T: Clone + PartialEq> MemoryGame<T> {
    /// Deal `pair_count` pairs (at least `MIN_PAIR_COUNT`) using default
    /// settings.
    ///
    /// `content_factory` is called once per pair index, in order.
    pub fn new(pair_count: usize, content_factory: impl FnMut(usize) -> T) -> Self {
        Self::with_config(GameConfig::new(pair_count), content_factory)
    }

    /// Deal a game from an explicit configuration.
    #[instrument(skip(content_factory), fields(requested = config.pair_count))]
    pub fn with_config(config: GameConfig, mut content_factory: impl FnMut(usize) -> T) -> Self {
        let pair_count = config.effective_pair_count();
        if pair_count != config.pair_count {
            debug!(
                requested = config.pair_count,
                minimum = MIN_PAIR_COUNT,
                "pair count raised to minimum"
            );
        }

        let mut cards = Vector::new();
        for pair_index in 0..pair_count {
            let content = content_factory(pair_index);
            cards.push_back(Card::new(CardId::new(pair_index, 0), content.clone()));
            cards.push_back(Card::new(CardId::new(pair_index, 1), content));
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut game = Self {
            cards,
            positions: FxHashMap::default(),
            pair_count,
            score: 0,
            config,
            rng,
        };
        game.reindex();

        if game.config.shuffle_on_start {
            game.shuffle();
        }

        debug!(cards = game.cards.len(), seed = game.rng.seed(), "game dealt");
        game
    }

    /// Choose a card.
    ///
    /// Never fails: unknown, matched, or already-selected cards leave the
    /// game untouched and produce `ChooseOutcome::Ignored`.
    pub fn choose(&mut self, card: impl Into<CardId>) -> ChooseOutcome {
        let id = card.into();
        match self.apply_choice(id) {
            Ok(outcome) => outcome,
            Err(reason) => {
                debug!(card = %id, %reason, "choose ignored");
                ChooseOutcome::Ignored(reason)
            }
        }
    }

    /// Choose a card, reporting no-op conditions as errors.
    ///
    /// # Errors
    ///
    /// Returns a `ChooseError` when the card is unknown, already matched,
    /// or is the only face-up card. The game is unchanged in that case.
    pub fn try_choose(&mut self, card: impl Into<CardId>) -> Result<ChooseOutcome, ChooseError> {
        self.apply_choice(card.into())
    }

    #[instrument(level = "trace", skip(self), fields(card = %id, score = self.score))]
    fn apply_choice(&mut self, id: CardId) -> Result<ChooseOutcome, ChooseError> {
        let target = *self.positions.get(&id).ok_or(ChooseError::UnknownCard(id))?;

        if self.cards[target].is_matched() {
            return Err(ChooseError::AlreadyMatched(id));
        }

        let pending: SmallVec<[usize; 2]> = self
            .selected_positions()
            .filter(|&index| index != target)
            .collect();

        let outcome = match pending.as_slice() {
            [] if self.cards[target].is_face_up() => {
                return Err(ChooseError::AlreadyFaceUp(id));
            }
            [] => ChooseOutcome::Revealed(id),
            [other] => {
                let other = *other;
                let other_id = self.cards[other].id();
                if self.cards[other].content() == self.cards[target].content() {
                    self.cards[other].mark_matched();
                    self.cards[target].mark_matched();
                    self.score += self.config.scoring.match_bonus;
                    ChooseOutcome::Matched {
                        first: other_id,
                        second: id,
                    }
                } else {
                    self.cards[other].turn_face_down();
                    self.score -= self.config.scoring.mismatch_penalty;
                    ChooseOutcome::Mismatched {
                        hidden: other_id,
                        revealed: id,
                    }
                }
            }
            stale => {
                // More than one pending card: start a fresh selection.
                for &index in stale {
                    self.cards[index].turn_face_down();
                }
                ChooseOutcome::Revealed(id)
            }
        };

        self.cards[target].turn_face_up();
        trace!(?outcome, score = self.score, "choose applied");
        Ok(outcome)
    }

    /// Randomly reorder the cards.
    ///
    /// Ids, contents, and face/match state are preserved. With a fixed
    /// `GameConfig::seed` the sequence of orders is reproducible.
    #[instrument(skip(self), fields(cards = self.cards.len()))]
    pub fn shuffle(&mut self) {
        let mut order: Vec<Card<T>> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut order);
        self.cards = order.into_iter().collect();
        self.reindex();
    }
}

impl<T: Clone> MemoryGame<T> {
    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<T>> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<T>> {
        self.positions.get(&id).and_then(|&index| self.cards.get(index))
    }

    /// Number of cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: every game deals at least `MIN_PAIR_COUNT` pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt, after clamping.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Ids of the face-up, unmatched cards.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardId; 2]> {
        self.selected_positions()
            .map(|index| self.cards[index].id())
            .collect()
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shuffle RNG state, for replaying a game's shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// O(1) immutable copy of the cards and score.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<T> {
        GameSnapshot {
            cards: self.cards.clone(),
            score: self.score,
            complete: self.is_complete(),
        }
    }

    fn selected_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_selected())
            .map(|(index, _)| index)
    }

    fn reindex(&mut self) {
        self.positions.clear();
        for (index, card) in self.cards.iter().enumerate() {
            self.positions.insert(card.id(), index);
        }
    }
}

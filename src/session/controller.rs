//! Game session controller.
//!
//! `GameSession` sits between a presentation layer and `MemoryGame`:
//! - Forwards the player's intents (`choose`, `shuffle`, `new_game`)
//! - Hands out immutable snapshots for rendering
//! - Notifies subscribers with a fresh snapshot after every intent that
//!   changed the game
//!
//! A new game discards the current model and deals a fresh one from the
//! same configuration and content factory.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::cards::{themes, Card, CardId};
use crate::core::{GameConfig, GameRng};
use crate::game::{ChooseOutcome, GameSnapshot, MemoryGame};

type ContentFactory<T> = Box<dyn Fn(usize) -> T>;
type Subscriber<T> = Box<dyn FnMut(&GameSnapshot<T>)>;

/// Handle returned by `GameSession::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the current game for one player and broadcasts its changes.
pub struct GameSession<T: Clone> {
    game: MemoryGame<T>,
    config: GameConfig,
    factory: ContentFactory<T>,
    /// Source of per-game seeds when the config fixes one.
    dealer: Option<GameRng>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
    games_started: u32,
}

impl GameSession<&'static str> {
    /// The stock emoji game: Halloween theme, `themes::DEFAULT_PAIR_COUNT`
    /// pairs, shuffle-free deal.
    #[must_use]
    pub fn emoji() -> Self {
        Self::new(
            GameConfig::new(themes::DEFAULT_PAIR_COUNT),
            themes::halloween().into_factory(),
        )
    }
}

impl<T: Clone + PartialEq> GameSession<T> {
    /// Start a session and deal its first game.
    ///
    /// With a fixed `config.seed`, every game in the session gets its own
    /// seed forked from it, so replaying the session reproduces each deal.
    pub fn new(config: GameConfig, factory: impl Fn(usize) -> T + 'static) -> Self {
        let mut dealer = config.seed.map(GameRng::new);
        let factory: ContentFactory<T> = Box::new(factory);
        let game = Self::deal(&config, dealer.as_mut(), &factory);

        Self {
            game,
            config,
            factory,
            dealer,
            subscribers: Vec::new(),
            next_subscription: 0,
            games_started: 1,
        }
    }

    fn deal(config: &GameConfig, dealer: Option<&mut GameRng>, factory: &ContentFactory<T>) -> MemoryGame<T> {
        let mut game_config = config.clone();
        game_config.seed = dealer.map(|rng| rng.fork().seed());
        MemoryGame::with_config(game_config, |pair| factory(pair))
    }

    /// Intent: choose a card.
    #[instrument(skip(self, card), fields(game = self.games_started))]
    pub fn choose(&mut self, card: impl Into<CardId>) -> ChooseOutcome {
        let outcome = self.game.choose(card);
        if outcome.changed_state() {
            self.notify();
        }
        if outcome.is_match() && self.game.is_complete() {
            info!(score = self.game.score(), "all pairs found");
        }
        outcome
    }

    /// Intent: shuffle the cards.
    #[instrument(skip(self), fields(game = self.games_started))]
    pub fn shuffle(&mut self) {
        self.game.shuffle();
        self.notify();
    }

    /// Intent: abandon the current game and deal a new one.
    #[instrument(skip(self), fields(game = self.games_started))]
    pub fn new_game(&mut self) {
        self.game = Self::deal(&self.config, self.dealer.as_mut(), &self.factory);
        self.games_started += 1;
        debug!(games_started = self.games_started, "new game dealt");
        self.notify();
    }
}

impl<T: Clone> GameSession<T> {
    /// The current game.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<T> {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card<T>> {
        self.game.cards()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    /// Number of games dealt in this session, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<T> {
        self.game.snapshot()
    }

    /// Register a callback run with a new snapshot after each change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameSnapshot<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.game.snapshot();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for GameSession<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .field("games_started", &self.games_started)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> GameSession<u8> {
        GameSession::new(GameConfig::new(3).with_seed(11), |pair| pair as u8)
    }

    #[test]
    fn test_emoji_session() {
        let session = GameSession::emoji();

        assert_eq!(session.cards().len(), 2 * themes::DEFAULT_PAIR_COUNT);
        assert_eq!(*session.cards()[0].content(), "💀");
        assert_eq!(session.score(), 0);
        assert_eq!(session.games_started(), 1);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let mut session = session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        session.choose(CardId::new(0, 0));
        session.choose(CardId::new(0, 0)); // re-tap is ignored
        session.choose(CardId::new(0, 1));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].card(CardId::new(0, 0)).unwrap().is_face_up());
        assert!(seen[1].card(CardId::new(0, 1)).unwrap().is_matched());
        assert_eq!(seen[1].score, 2);
    }

    #[test]
    fn test_unsubscribe() {
        let mut session = session();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = session.subscribe(move |_| *sink.borrow_mut() += 1);

        session.shuffle();
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.shuffle();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let config = GameConfig::new(8).with_seed(5).shuffled();
        let mut a = GameSession::new(config.clone(), |pair| pair);
        let mut b = GameSession::new(config, |pair| pair);

        assert_eq!(a.cards(), b.cards());
        a.new_game();
        b.new_game();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_new_game_changes_seed() {
        let mut session = GameSession::new(GameConfig::new(4).with_seed(5), |pair| pair);
        let first = session.game().rng_state().seed;

        session.new_game();

        assert_ne!(session.game().rng_state().seed, first);
        assert_eq!(session.games_started(), 2);
    }
}

//! Immutable views of a game for renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// A point-in-time copy of a game's cards and score.
///
/// Backed by `im::Vector`, so taking a snapshot is O(1) and later
/// mutations of the game never show through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<T: Clone> {
    /// Cards in display order.
    pub cards: Vector<Card<T>>,
    /// Current score.
    pub score: i64,
    /// Every card is matched.
    pub complete: bool,
}

impl<T: Clone> GameSnapshot<T> {
    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<T>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Cards the renderer should show face-up.
    pub fn face_up(&self) -> impl Iterator<Item = &Card<T>> {
        self.cards.iter().filter(|card| card.is_face_up())
    }
}

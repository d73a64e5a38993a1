//! Cards and their identifiers.
//!
//! ## ID Layout
//!
//! Every pair index deals two cards. Their raw ids are allocated as:
//! - `2 * pair_index`: the first copy, displayed `"{pair_index}a"`
//! - `2 * pair_index + 1`: the second copy, displayed `"{pair_index}b"`
//!
//! Ids never change after dealing, so they stay valid across shuffles
//! and snapshots.
//!
//! ```
//! use memorize::cards::CardId;
//!
//! let first = CardId::new(4, 0);
//! let second = CardId::new(4, 1);
//!
//! assert_eq!(first.pair_index(), 4);
//! assert_eq!(second.pair_index(), 4);
//! assert_ne!(first, second);
//! assert_eq!(second.to_string(), "4b");
//! ```

use serde::{Deserialize, Serialize};

/// Stable unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create the id of copy `copy` (0 or 1) of pair `pair_index`.
    ///
    /// Pair indices too large to encode saturate to `u64::MAX`, an id no
    /// game can deal.
    #[must_use]
    pub const fn new(pair_index: usize, copy: u8) -> Self {
        Self((pair_index as u64).saturating_mul(2).saturating_add((copy & 1) as u64))
    }

    /// Index of the pair this card belongs to.
    #[must_use]
    pub const fn pair_index(self) -> usize {
        (self.0 / 2) as usize
    }

    /// Id of the other card in the same pair.
    #[must_use]
    pub const fn twin(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let copy = if self.0 & 1 == 0 { 'a' } else { 'b' };
        write!(f, "{}{}", self.pair_index(), copy)
    }
}

/// A single card in a memory game.
///
/// `content` is fixed at creation. Face and match flags are changed only
/// by `MemoryGame`; callers see cards through shared references or
/// snapshots. Once matched, a card stays matched and face-up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<T> {
    id: CardId,
    content: T,
    is_face_up: bool,
    is_matched: bool,
}

impl<T> Card<T> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: T) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Is the content visible to the player?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// Has this card been paired with its twin?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Face-up but not yet matched: part of the current selection.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    pub(crate) fn turn_face_up(&mut self) {
        self.is_face_up = true;
    }

    pub(crate) fn turn_face_down(&mut self) {
        debug_assert!(!self.is_matched, "matched cards stay face-up");
        self.is_face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.is_face_up = true;
        self.is_matched = true;
    }
}

impl<T> From<&Card<T>> for CardId {
    fn from(card: &Card<T>) -> Self {
        card.id
    }
}

//! Reasons a `choose` call leaves the game untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// Why a chosen card could not be acted on.
///
/// None of these are fatal. `MemoryGame::choose` folds them into
/// `ChooseOutcome::Ignored`; `MemoryGame::try_choose` surfaces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ChooseError {
    #[error("card {0} is not part of this game")]
    UnknownCard(CardId),
    #[error("card {0} is already matched")]
    AlreadyMatched(CardId),
    #[error("card {0} is already the face-up selection")]
    AlreadyFaceUp(CardId),
}

impl ChooseError {
    /// The card the rejected call referred to.
    #[must_use]
    pub const fn card(self) -> CardId {
        match self {
            Self::UnknownCard(id) | Self::AlreadyMatched(id) | Self::AlreadyFaceUp(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = CardId::new(3, 1);
        assert_eq!(ChooseError::UnknownCard(id).to_string(), "card 3b is not part of this game");
        assert_eq!(ChooseError::AlreadyMatched(id).to_string(), "card 3b is already matched");
    }

    #[test]
    fn test_card_accessor() {
        let id = CardId::new(0, 0);
        assert_eq!(ChooseError::AlreadyFaceUp(id).card(), id);
    }
}

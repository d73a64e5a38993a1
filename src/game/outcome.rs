//! Results of the `choose` transition.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::ChooseError;

/// What a `choose` call did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// No selection was pending; the card was turned face-up.
    Revealed(CardId),
    /// The card matched the pending selection. Both are now matched.
    Matched {
        /// The card that was already face-up.
        first: CardId,
        /// The card just chosen.
        second: CardId,
    },
    /// The card did not match. The pending card was hidden and the
    /// chosen card revealed in its place.
    Mismatched {
        hidden: CardId,
        revealed: CardId,
    },
    /// Nothing changed.
    Ignored(ChooseError),
}

impl ChooseOutcome {
    /// Did this call change any card?
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }

    /// Did this call complete a pair?
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

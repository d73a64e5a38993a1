//! # memorize
//!
//! A card-matching memory game model, generic over card content.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: Cards carry any `T: Clone + PartialEq`.
//!    Two cards match iff their contents compare equal.
//!
//! 2. **Identity by Id**: Every card gets a stable `CardId` when dealt.
//!    Lookup never depends on position, so shuffles and snapshots are safe.
//!
//! 3. **No Failure Paths**: Invalid choices are ignored, small pair counts
//!    are clamped, and missing content falls back to a default.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cards live in an `im::Vector`, so
//!   snapshots for renderers are O(1) copy-on-write values.
//!
//! - **Deterministic Shuffles**: A seeded ChaCha8 RNG makes games
//!   reproducible when a seed is configured.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card ids, cards, content sources, themes
//! - `game`: The `MemoryGame` model, outcomes, snapshots
//! - `session`: Intent forwarding and change notification

pub mod core;
pub mod cards;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ChooseError, GameConfig, GameRng, GameRngState, ScoringPolicy, MIN_PAIR_COUNT};

pub use crate::cards::{themes, Card, CardId, ContentSource};

pub use crate::game::{ChooseOutcome, GameSnapshot, MemoryGame};

pub use crate::session::{GameSession, SubscriptionId};

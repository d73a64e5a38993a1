//! Core types: RNG, configuration, errors.
//!
//! These are content-agnostic building blocks shared by the game model
//! and the session controller.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, ScoringPolicy, MIN_PAIR_COUNT};
pub use error::ChooseError;
pub use rng::{GameRng, GameRngState};

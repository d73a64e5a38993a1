//! The memory game model and the values it hands out.
//!
//! - `MemoryGame<T>`: Deals pairs and applies `choose`/`shuffle`
//! - `ChooseOutcome`: What a `choose` call did
//! - `GameSnapshot<T>`: Immutable view for renderers

pub mod memory;
pub mod outcome;
pub mod snapshot;

pub use memory::MemoryGame;
pub use outcome::ChooseOutcome;
pub use snapshot::GameSnapshot;

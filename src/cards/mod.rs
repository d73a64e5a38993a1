//! Card system: identifiers, cards, and content sources.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier assigned at dealing
//! - `Card<T>`: Content plus face-up/matched flags
//! - `ContentSource<T>`: Finite list of faces with a fallback
//!
//! Themes in `themes` provide ready-made content sources.

pub mod card;
pub mod content;
pub mod themes;

pub use card::{Card, CardId};
pub use content::ContentSource;

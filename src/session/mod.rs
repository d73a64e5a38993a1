//! Session layer: the bridge between a presentation layer and the model.
//!
//! The presentation layer owns one `GameSession`, forwards the player's
//! intents to it, and renders the snapshots it publishes.

pub mod controller;

pub use controller::{GameSession, SubscriptionId};

//! Built-in card themes.

use super::content::ContentSource;

/// Pair count of the stock emoji game.
pub const DEFAULT_PAIR_COUNT: usize = 11;

/// Shown on cards whose pair index runs past a theme's emoji list.
pub const FALLBACK_EMOJI: &str = "⁉️";

const HALLOWEEN: [&str; 19] = [
    "💀", "👻", "🎃", "🕷", "😈", "☠️", "🧙‍♀️", "🕸", "🐈‍⬛", "🧛‍♂️", "🦇",
    "🎭", "🧟‍♀️", "🕯", "😱", "🧹", "🦉", "🧛‍♀️", "🍬",
];

/// The Halloween emoji theme.
#[must_use]
pub fn halloween() -> ContentSource<&'static str> {
    ContentSource::new(HALLOWEEN, FALLBACK_EMOJI)
}

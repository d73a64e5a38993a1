//! Game configuration types.
//!
//! A game is configured at construction time by providing:
//! - `pair_count`: How many pairs to deal (clamped to `MIN_PAIR_COUNT`)
//! - `seed`: Optional fixed seed for reproducible shuffles
//! - `ScoringPolicy`: Points awarded for matches and lost on mismatches
//!
//! The model never reads configuration from files or the environment -
//! the owning collaborator builds a `GameConfig` and passes it in.

use serde::{Deserialize, Serialize};

/// Smallest number of pairs a game will deal.
pub const MIN_PAIR_COUNT: usize = 2;

/// Points applied to the score by `choose` outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Added to the score when two cards match.
    pub match_bonus: i64,

    /// Subtracted from the score when two cards fail to match.
    /// Zero means mismatches are free.
    pub mismatch_penalty: i64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_bonus: 2,
            mismatch_penalty: 0,
        }
    }
}

impl ScoringPolicy {
    /// A policy that never changes the score.
    #[must_use]
    pub const fn unscored() -> Self {
        Self {
            match_bonus: 0,
            mismatch_penalty: 0,
        }
    }
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Requested number of pairs. Values below `MIN_PAIR_COUNT` are clamped.
    pub pair_count: usize,

    /// Seed for the shuffle RNG. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Scoring rules.
    #[serde(default)]
    pub scoring: ScoringPolicy,

    /// Shuffle once right after dealing.
    #[serde(default)]
    pub shuffle_on_start: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: MIN_PAIR_COUNT,
            seed: None,
            scoring: ScoringPolicy::default(),
            shuffle_on_start: false,
        }
    }
}

impl GameConfig {
    /// Create a config dealing `pair_count` pairs with default settings.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Pair count after clamping to `MIN_PAIR_COUNT`.
    #[must_use]
    pub fn effective_pair_count(&self) -> usize {
        self.pair_count.max(MIN_PAIR_COUNT)
    }

    /// Use a fixed seed for reproducible shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom scoring policy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Shuffle the deck once after dealing.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_on_start = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count, MIN_PAIR_COUNT);
        assert_eq!(config.seed, None);
        assert_eq!(config.scoring, ScoringPolicy::default());
        assert!(!config.shuffle_on_start);
    }

    #[test]
    fn test_effective_pair_count_clamps() {
        assert_eq!(GameConfig::new(0).effective_pair_count(), 2);
        assert_eq!(GameConfig::new(1).effective_pair_count(), 2);
        assert_eq!(GameConfig::new(2).effective_pair_count(), 2);
        assert_eq!(GameConfig::new(11).effective_pair_count(), 11);
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new(6)
            .with_seed(7)
            .with_scoring(ScoringPolicy {
                match_bonus: 5,
                mismatch_penalty: 1,
            })
            .shuffled();

        assert_eq!(config.pair_count, 6);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.scoring.match_bonus, 5);
        assert_eq!(config.scoring.mismatch_penalty, 1);
        assert!(config.shuffle_on_start);
    }

    #[test]
    fn test_unscored_policy() {
        let policy = ScoringPolicy::unscored();
        assert_eq!(policy.match_bonus, 0);
        assert_eq!(policy.mismatch_penalty, 0);
    }

    #[test]
    fn test_config_serde_defaults() {
        // Scoring and shuffle flag may be omitted
        let json = r#"{"pair_count": 4, "seed": 9}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, GameConfig::new(4).with_seed(9));
    }
}

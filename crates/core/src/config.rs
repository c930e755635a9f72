//! Game configuration.
//!
//! Rule parameters live here so that tests can shrink a game down to a couple
//! of items while the binary plays the full ten rounds.

use std::env;

use tui_sort_types::{Layout, DEFAULT_ITEMS_PER_ROUND, DEFAULT_TOTAL_ROUNDS};

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Items handed out at the start of every round.
    pub items_per_round: usize,
    /// Rounds to play before the summary screen.
    pub total_rounds: u32,
    /// Seed for the one-time shuffle of the item registry.
    pub seed: u32,
    pub layout: Layout,
}

impl GameConfig {
    pub const DEFAULT_SEED: u32 = 1;

    pub fn new() -> Self {
        Self {
            items_per_round: DEFAULT_ITEMS_PER_ROUND,
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            seed: Self::DEFAULT_SEED,
            layout: Layout::default(),
        }
    }

    pub fn with_items_per_round(mut self, items_per_round: usize) -> Self {
        self.items_per_round = items_per_round;
        self
    }

    pub fn with_total_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Items the registry must hold for every round to get a full slice.
    pub fn required_items(&self) -> usize {
        self.items_per_round.saturating_mul(self.total_rounds as usize)
    }

    /// Override defaults from the environment.
    ///
    /// Environment variables:
    /// - `TUI_SORT_ITEMS_PER_ROUND` - items per round (default: 5)
    /// - `TUI_SORT_ROUNDS` - total rounds (default: 10)
    /// - `TUI_SORT_SEED` - shuffle seed (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Some(n) = read_env::<usize>("TUI_SORT_ITEMS_PER_ROUND") {
            config.items_per_round = n;
        }
        if let Some(n) = read_env::<u32>("TUI_SORT_ROUNDS") {
            config.total_rounds = n;
        }
        if let Some(seed) = read_env::<u32>("TUI_SORT_SEED") {
            config.seed = seed;
        }

        config
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rule_constants() {
        let config = GameConfig::default();
        assert_eq!(config.items_per_round, 5);
        assert_eq!(config.total_rounds, 10);
        assert_eq!(config.required_items(), 50);
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::new()
            .with_items_per_round(2)
            .with_total_rounds(3)
            .with_seed(99);
        assert_eq!(config.items_per_round, 2);
        assert_eq!(config.total_rounds, 3);
        assert_eq!(config.seed, 99);
        assert_eq!(config.required_items(), 6);
    }
}

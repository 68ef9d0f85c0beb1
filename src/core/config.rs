//! Rules configuration.
//!
//! A `RulesConfig` is supplied once when a [`Session`](crate::session::Session)
//! is created. It narrows the accepted seat count and optionally pins the
//! shuffle seed so random deals are reproducible.
//!
//! ```
//! use schwimmen::core::RulesConfig;
//!
//! let config = RulesConfig::default().with_seed(42);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.seed, Some(42));
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Fewest seats a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can have.
pub const MAX_PLAYERS: usize = 4;

/// Session-wide rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum number of players accepted by a new deal.
    pub min_players: usize,

    /// Maximum number of players accepted by a new deal.
    pub max_players: usize,

    /// Shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            seed: None,
        }
    }
}

impl RulesConfig {
    /// Set a fixed shuffle seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the accepted seat range (builder pattern).
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Check the configuration against the game's fixed limits.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < MIN_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "min_players must be at least {MIN_PLAYERS} (got {})",
                self.min_players
            )));
        }
        if self.max_players > MAX_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "max_players must be at most {MAX_PLAYERS} (got {})",
                self.max_players
            )));
        }
        if self.max_players < self.min_players {
            return Err(GameError::InvalidConfig(format!(
                "max_players ({}) is below min_players ({})",
                self.max_players, self.min_players
            )));
        }
        Ok(())
    }

    /// Check that `count` seats are allowed by this configuration.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }
}

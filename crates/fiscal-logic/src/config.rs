//! Session configuration

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::random::SeededRng;

/// Rounds shown in the "recent moves" view
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// Configuration for one game session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed seed for a reproducible session; `None` seeds from the OS
    pub seed: Option<[u8; 32]>,
    /// Mixed into the seed so sessions sharing a seed still diverge
    pub session_index: u32,
    /// Trailing rounds returned by `GameState::recent_rounds`
    pub recent_window: usize,
}

impl SessionConfig {
    /// Reproducible session from a fixed seed
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))
    }

    pub(crate) fn rng(&self) -> Result<SeededRng, GameError> {
        match &self.seed {
            Some(seed) => Ok(SeededRng::new(seed, self.session_index)),
            None => SeededRng::from_entropy(self.session_index),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            session_index: 0,
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

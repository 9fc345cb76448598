//! Fiscal policy stances

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::GameError;

/// A fiscal policy stance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    /// Cut spending, raise taxes.
    Austerity,
    /// Raise spending, cut taxes.
    Stimulus,
}

impl Stance {
    /// Both stances, in table order
    pub const ALL: [Stance; 2] = [Stance::Austerity, Stance::Stimulus];

    /// The stance a player would switch to
    pub fn other(self) -> Self {
        match self {
            Stance::Austerity => Stance::Stimulus,
            Stance::Stimulus => Stance::Austerity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stance::Austerity => "Austerity",
            Stance::Stimulus => "Stimulus",
        }
    }

    /// Row/column position in a payoff table
    pub(crate) fn index(self) -> usize {
        match self {
            Stance::Austerity => 0,
            Stance::Stimulus => 1,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stance {
    type Err = GameError;

    /// Parses user input; anything but the two stance names is rejected
    /// before it can reach a payoff lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("austerity") {
            Ok(Stance::Austerity)
        } else if trimmed.eq_ignore_ascii_case("stimulus") {
            Ok(Stance::Stimulus)
        } else {
            Err(GameError::InvalidStance(s.to_string()))
        }
    }
}

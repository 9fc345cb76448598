//! Error types for the game core

use crate::scenario::ScenarioId;

/// Errors surfaced by the game core.
///
/// All of these are precondition failures; nothing here is retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A stance label other than Austerity or Stimulus.
    InvalidStance(String),
    /// A catalog was built with no scenarios to draw from.
    EmptyCatalog,
    /// Two catalog entries share one scenario id (and so one name).
    DuplicateScenario(ScenarioId),
    /// A scenario whose name does not match its id.
    MislabeledScenario { id: ScenarioId, name: String },
    /// Session configuration could not be parsed.
    Config(String),
    /// The OS entropy source failed while seeding a session.
    Entropy(String),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidStance(input) => {
                write!(f, "invalid stance {:?}: expected Austerity or Stimulus", input)
            }
            GameError::EmptyCatalog => write!(f, "scenario catalog is empty"),
            GameError::DuplicateScenario(id) => {
                write!(f, "scenario {:?} appears more than once in the catalog", id.name())
            }
            GameError::MislabeledScenario { id, name } => {
                write!(f, "scenario {:?} is labelled {:?}", id.name(), name)
            }
            GameError::Config(reason) => write!(f, "invalid session config: {}", reason),
            GameError::Entropy(reason) => {
                write!(f, "failed to seed session from OS entropy: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

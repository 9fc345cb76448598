//! Fiscal Logic for the Nash Equilibrium policy game
//!
//! A player and a scripted opponent each pick Austerity or Stimulus under
//! a randomly drawn economic scenario. This crate holds the scenario
//! catalog, the equilibrium check, the opponent policy and session
//! statistics. It is compiled to:
//! - Native (for tests and host shells)
//! - WASM (for the browser front end)

mod config;
mod error;
mod game;
mod opponent;
mod random;
mod scenario;
mod stance;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{SessionConfig, DEFAULT_RECENT_WINDOW};
pub use error::GameError;
pub use game::{GameState, Round, Statistics};
pub use opponent::{bias_for, choose_stance, describe_bias, StanceBias};
pub use random::SeededRng;
pub use scenario::{Catalog, Payoff, PayoffTable, Scenario, ScenarioId};
pub use stance::Stance;

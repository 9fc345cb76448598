//! WASM bindings for the browser front end
//!
//! The page renders scenario text and the payoff heatmap, collects the
//! player's stance and calls back into a `GameSession`.

#![cfg(feature = "wasm")]

use std::sync::Arc;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::opponent::describe_bias;
use crate::{Catalog, GameState, ScenarioId, SessionConfig, Stance};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(Serialize)]
struct ScenarioView<'a> {
    id: ScenarioId,
    name: &'a str,
    description: &'a str,
    context: &'a str,
    historical_example: &'a str,
    opponent: String,
}

/// Cells for the payoff heatmap: rows are the player's stance,
/// columns the opponent's.
#[derive(Serialize)]
struct HeatmapView {
    labels: [&'static str; 2],
    player: [[i32; 2]; 2],
    opponent: [[i32; 2]; 2],
    equilibria: Vec<(Stance, Stance)>,
}

/// One player's session
#[wasm_bindgen]
pub struct GameSession {
    state: GameState,
}

#[wasm_bindgen]
impl GameSession {
    /// Start a session. `config_json` is an optional `SessionConfig`;
    /// without a seed the session draws from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameSession, JsError> {
        let config = match config_json {
            Some(json) => SessionConfig::from_json(&json)
                .map_err(|e| JsError::new(&e.to_string()))?,
            None => SessionConfig::default(),
        };
        let state = GameState::new(Arc::new(Catalog::standard()), &config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(GameSession { state })
    }

    /// Current scenario text plus a note on how the opponent plays it
    pub fn scenario(&self) -> Result<JsValue, JsError> {
        let scenario = self.state.current_scenario();
        to_js(&ScenarioView {
            id: scenario.id,
            name: &scenario.name,
            description: &scenario.description,
            context: &scenario.context,
            historical_example: &scenario.historical_example,
            opponent: describe_bias(scenario.id),
        })
    }

    pub fn heatmap(&self) -> Result<JsValue, JsError> {
        let payoffs = &self.state.current_scenario().payoffs;
        to_js(&HeatmapView {
            labels: Stance::ALL.map(Stance::as_str),
            player: payoffs.player_grid(),
            opponent: payoffs.opponent_grid(),
            equilibria: payoffs.equilibria(),
        })
    }

    /// Play the player's stance against the scripted opponent.
    /// Returns the recorded round.
    pub fn play(&mut self, stance: &str) -> Result<JsValue, JsError> {
        let stance: Stance = stance.parse().map_err(|e: crate::GameError| JsError::new(&e.to_string()))?;
        let round = self.state.play(stance);
        to_js(&round)
    }

    pub fn next_scenario(&mut self) {
        self.state.advance_scenario();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn statistics(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.statistics())
    }

    pub fn recent_rounds(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.recent_rounds())
    }

    pub fn history(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.history())
    }
}

/// All built-in scenarios with their payoff tables
#[wasm_bindgen]
pub fn get_scenarios() -> Result<JsValue, JsError> {
    to_js(&Catalog::standard().scenarios())
}

/// Stance labels accepted by `GameSession::play`
#[wasm_bindgen]
pub fn get_stances() -> Result<JsValue, JsError> {
    to_js(&Stance::ALL.map(Stance::as_str))
}

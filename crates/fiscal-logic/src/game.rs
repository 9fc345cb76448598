//! Session state: current scenario, round history and statistics

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::config::{SessionConfig, DEFAULT_RECENT_WINDOW};
use crate::error::GameError;
use crate::opponent::choose_stance;
use crate::random::SeededRng;
use crate::scenario::{Catalog, Payoff, Scenario, ScenarioId};
use crate::stance::Stance;

/// One completed play
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub scenario: ScenarioId,
    pub scenario_name: String,
    pub player_choice: Stance,
    pub opponent_choice: Stance,
    pub player_payoff: i32,
    pub opponent_payoff: i32,
    pub is_nash_equilibrium: bool,
}

/// Summary over a session's history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: usize,
    pub nash_equilibria: usize,
    /// 0.0 when nothing has been played
    pub average_player_payoff: f64,
}

/// State for one interactive session.
///
/// Owns its RNG and history; the catalog is shared read-only. Separate
/// sessions must each hold their own `GameState`.
#[derive(Clone, Debug)]
pub struct GameState {
    catalog: Arc<Catalog>,
    current: usize,
    history: Vec<Round>,
    rng: SeededRng,
    recent_window: usize,
}

impl GameState {
    /// Start a session, seeding from the config or OS entropy
    pub fn new(catalog: Arc<Catalog>, config: &SessionConfig) -> Result<Self, GameError> {
        let mut state = Self::with_rng(catalog, config.rng()?);
        state.recent_window = config.recent_window;
        Ok(state)
    }

    /// Start a session from an existing RNG
    pub fn with_rng(catalog: Arc<Catalog>, mut rng: SeededRng) -> Self {
        let current = catalog.pick_index(&mut rng);
        log::info!("session starts in {}", catalog.scenarios()[current].name);
        Self {
            catalog,
            current,
            history: Vec::new(),
            rng,
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_scenario(&self) -> &Scenario {
        &self.catalog.scenarios()[self.current]
    }

    /// All rounds, oldest first
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// The last `recent_window` rounds, oldest first
    pub fn recent_rounds(&self) -> &[Round] {
        let start = self.history.len().saturating_sub(self.recent_window);
        &self.history[start..]
    }

    pub fn payoffs(&self, player: Stance, opponent: Stance) -> Payoff {
        self.current_scenario().payoffs.get(player, opponent)
    }

    pub fn is_nash_equilibrium(&self, player: Stance, opponent: Stance) -> bool {
        self.current_scenario().payoffs.is_nash_equilibrium(player, opponent)
    }

    /// Draw the scripted opponent's stance for the current scenario
    pub fn opponent_stance(&mut self) -> Stance {
        choose_stance(&self.catalog.scenarios()[self.current], &mut self.rng)
    }

    /// Append a round for the current scenario; the equilibrium flag is
    /// computed here.
    pub fn record_round(
        &mut self,
        player_choice: Stance,
        opponent_choice: Stance,
        player_payoff: i32,
        opponent_payoff: i32,
    ) -> &Round {
        let scenario = self.current_scenario();
        let round = Round {
            scenario: scenario.id,
            scenario_name: scenario.name.clone(),
            player_choice,
            opponent_choice,
            player_payoff,
            opponent_payoff,
            is_nash_equilibrium: self.is_nash_equilibrium(player_choice, opponent_choice),
        };
        log::debug!(
            "round {}: {} vs {} -> ({}, {}) nash={}",
            self.history.len(),
            round.player_choice,
            round.opponent_choice,
            round.player_payoff,
            round.opponent_payoff,
            round.is_nash_equilibrium,
        );
        self.history.push(round);
        &self.history[self.history.len() - 1]
    }

    /// One full decision: opponent draws, payoffs are looked up, the
    /// round is recorded.
    pub fn play(&mut self, player_choice: Stance) -> Round {
        let opponent_choice = self.opponent_stance();
        let (player_payoff, opponent_payoff) = self.payoffs(player_choice, opponent_choice);
        self.record_round(player_choice, opponent_choice, player_payoff, opponent_payoff)
            .clone()
    }

    /// Move to a uniformly drawn scenario. May draw the current one again.
    pub fn advance_scenario(&mut self) {
        self.current = self.catalog.pick_index(&mut self.rng);
        log::info!("scenario is now {}", self.current_scenario().name);
    }

    /// Draw a fresh scenario and clear history
    pub fn reset(&mut self) {
        log::info!("resetting session after {} rounds", self.history.len());
        self.history.clear();
        self.advance_scenario();
    }

    pub fn statistics(&self) -> Statistics {
        let games_played = self.history.len();
        if games_played == 0 {
            return Statistics {
                games_played: 0,
                nash_equilibria: 0,
                average_player_payoff: 0.0,
            };
        }

        let nash_equilibria = self.history.iter().filter(|r| r.is_nash_equilibrium).count();
        let total: i64 = self.history.iter().map(|r| r.player_payoff as i64).sum();

        Statistics {
            games_played,
            nash_equilibria,
            average_player_payoff: total as f64 / games_played as f64,
        }
    }
}

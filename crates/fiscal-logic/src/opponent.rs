//! Scripted opponent policy
//!
//! The opponent is a fixed Bernoulli draw per scenario: it leans toward
//! stimulus in a crisis, toward austerity under inflation, and flips a
//! fair coin otherwise. Draws are independent and ignore history.

use serde::{Deserialize, Serialize};
use crate::random::SeededRng;
use crate::scenario::{Scenario, ScenarioId};
use crate::stance::Stance;

/// Chance, in percent, that the opponent picks Austerity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceBias {
    pub austerity: u8,
}

impl StanceBias {
    /// Fair coin
    pub const EVEN: StanceBias = StanceBias { austerity: 50 };

    pub const fn favor_austerity(percent: u8) -> Self {
        Self { austerity: percent }
    }

    pub const fn favor_stimulus(percent: u8) -> Self {
        Self { austerity: 100u8.saturating_sub(percent) }
    }

    pub fn stimulus(&self) -> u8 {
        100u8.saturating_sub(self.austerity)
    }

    pub fn draw(&self, rng: &mut SeededRng) -> Stance {
        if rng.chance(self.austerity) {
            Stance::Austerity
        } else {
            Stance::Stimulus
        }
    }
}

/// The opponent's bias in each scenario
pub fn bias_for(id: ScenarioId) -> StanceBias {
    match id {
        ScenarioId::GlobalFinancialCrisis => StanceBias::favor_stimulus(70),
        ScenarioId::InflationaryPressure => StanceBias::favor_austerity(70),
        ScenarioId::PostWarRecovery => StanceBias::EVEN,
    }
}

/// Draw the opponent's stance for a scenario
pub fn choose_stance(scenario: &Scenario, rng: &mut SeededRng) -> Stance {
    let stance = bias_for(scenario.id).draw(rng);
    log::debug!("opponent chose {} in {}", stance, scenario.name);
    stance
}

/// Human-readable summary of how the opponent plays a scenario
pub fn describe_bias(id: ScenarioId) -> String {
    let bias = bias_for(id);
    match bias.austerity.cmp(&50) {
        core::cmp::Ordering::Greater => {
            format!("Leans toward Austerity ({}% of the time).", bias.austerity)
        }
        core::cmp::Ordering::Less => {
            format!("Leans toward Stimulus ({}% of the time).", bias.stimulus())
        }
        core::cmp::Ordering::Equal => "Picks either stance with equal odds.".to_string(),
    }
}

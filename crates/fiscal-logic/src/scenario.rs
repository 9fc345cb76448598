//! Economic scenarios and their payoff tables

use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::random::SeededRng;
use crate::stance::Stance;

/// Payoff pair: (player, opponent)
pub type Payoff = (i32, i32);

/// Identity of a scenario. One id per catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    GlobalFinancialCrisis,
    PostWarRecovery,
    InflationaryPressure,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] = [
        ScenarioId::GlobalFinancialCrisis,
        ScenarioId::PostWarRecovery,
        ScenarioId::InflationaryPressure,
    ];

    /// Display name, unique per id
    pub fn name(self) -> &'static str {
        match self {
            ScenarioId::GlobalFinancialCrisis => "Global Financial Crisis",
            ScenarioId::PostWarRecovery => "Post-War Recovery",
            ScenarioId::InflationaryPressure => "Inflationary Pressure",
        }
    }
}

/// 2x2 payoff table, rows indexed by the player's stance and
/// columns by the opponent's. Total by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffTable {
    cells: [[Payoff; 2]; 2],
}

impl PayoffTable {
    /// Build from the four cells, named (player, opponent)
    pub const fn new(
        austerity_austerity: Payoff,
        austerity_stimulus: Payoff,
        stimulus_austerity: Payoff,
        stimulus_stimulus: Payoff,
    ) -> Self {
        Self {
            cells: [
                [austerity_austerity, austerity_stimulus],
                [stimulus_austerity, stimulus_stimulus],
            ],
        }
    }

    pub fn get(&self, player: Stance, opponent: Stance) -> Payoff {
        self.cells[player.index()][opponent.index()]
    }

    /// True iff neither side strictly gains by switching alone.
    /// Ties do not break an equilibrium.
    pub fn is_nash_equilibrium(&self, player: Stance, opponent: Stance) -> bool {
        let (player_payoff, opponent_payoff) = self.get(player, opponent);

        if self.get(player.other(), opponent).0 > player_payoff {
            return false;
        }
        if self.get(player, opponent.other()).1 > opponent_payoff {
            return false;
        }
        true
    }

    /// All pure-strategy equilibria, row-major
    pub fn equilibria(&self) -> Vec<(Stance, Stance)> {
        self.entries()
            .map(|(cell, _)| cell)
            .filter(|(player, opponent)| self.is_nash_equilibrium(*player, *opponent))
            .collect()
    }

    /// The four cells as ((player, opponent), payoff), row-major
    pub fn entries(&self) -> impl Iterator<Item = ((Stance, Stance), Payoff)> + '_ {
        Stance::ALL.into_iter().flat_map(move |player| {
            Stance::ALL
                .into_iter()
                .map(move |opponent| ((player, opponent), self.get(player, opponent)))
        })
    }

    /// Same game seen from the opponent's seat
    pub fn transposed(&self) -> Self {
        let mut cells = [[(0, 0); 2]; 2];
        for ((player, opponent), (p, o)) in self.entries() {
            cells[opponent.index()][player.index()] = (o, p);
        }
        Self { cells }
    }

    /// Player payoffs as a grid for heatmaps (rows = player stance)
    pub fn player_grid(&self) -> [[i32; 2]; 2] {
        self.cells.map(|row| row.map(|(p, _)| p))
    }

    /// Opponent payoffs on the same grid layout
    pub fn opponent_grid(&self) -> [[i32; 2]; 2] {
        self.cells.map(|row| row.map(|(_, o)| o))
    }
}

/// A named economic context with a fixed payoff table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub context: String,
    pub historical_example: String,
    pub payoffs: PayoffTable,
}

impl Scenario {
    pub fn new(
        id: ScenarioId,
        description: &str,
        context: &str,
        historical_example: &str,
        payoffs: PayoffTable,
    ) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: description.to_string(),
            context: context.to_string(),
            historical_example: historical_example.to_string(),
            payoffs,
        }
    }

    /// The built-in scenario for an id
    pub fn builtin(id: ScenarioId) -> Self {
        match id {
            ScenarioId::GlobalFinancialCrisis => Self::new(
                id,
                "A severe economic downturn has caused widespread unemployment and market instability.",
                "Banks are failing and credit markets are frozen. Quick action is needed.",
                "Similar to the 2008 Financial Crisis where many countries had to decide between austerity and stimulus packages.",
                // Mutual austerity deepens the crisis; coordinated stimulus pays
                PayoffTable::new((2, 2), (3, 5), (5, 3), (4, 4)),
            ),
            ScenarioId::PostWarRecovery => Self::new(
                id,
                "The economy is rebuilding after a major conflict, with high government debt but growth opportunities.",
                "Infrastructure needs rebuilding, but government coffers are strained.",
                "Similar to the Marshall Plan after World War II, where countries had to balance recovery spending with fiscal restraint.",
                PayoffTable::new((3, 3), (2, 4), (4, 2), (5, 5)),
            ),
            ScenarioId::InflationaryPressure => Self::new(
                id,
                "Rapidly rising prices are eroding purchasing power and economic stability.",
                "Central banks are raising interest rates, and government spending is under scrutiny.",
                "Similar to the 1970s stagflation period, where governments had to balance growth with inflation control.",
                // Double stimulus feeds inflation
                PayoffTable::new((4, 4), (3, 2), (2, 3), (1, 1)),
            ),
        }
    }
}

/// Fixed, non-empty, ordered set of scenarios with unique ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, GameError> {
        if scenarios.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for (i, scenario) in scenarios.iter().enumerate() {
            // Names follow ids, so unique ids also mean unique names
            if scenario.name != scenario.id.name() {
                return Err(GameError::MislabeledScenario {
                    id: scenario.id,
                    name: scenario.name.clone(),
                });
            }
            if scenarios[..i].iter().any(|s| s.id == scenario.id || s.name == scenario.name) {
                return Err(GameError::DuplicateScenario(scenario.id));
            }
        }
        Ok(Self { scenarios })
    }

    /// The three built-in scenarios
    pub fn standard() -> Self {
        Self {
            scenarios: ScenarioId::ALL.into_iter().map(Scenario::builtin).collect(),
        }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog has no scenarios
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ScenarioId) -> bool {
        self.get(id).is_some()
    }

    /// Uniform random index into the catalog
    pub(crate) fn pick_index(&self, rng: &mut SeededRng) -> usize {
        rng.next_range(self.scenarios.len() as u32) as usize
    }

    /// Uniform random scenario; repeats allowed
    pub fn pick(&self, rng: &mut SeededRng) -> &Scenario {
        &self.scenarios[self.pick_index(rng)]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::stance::Stance::{Austerity as A, Stimulus as S};

    fn crisis() -> PayoffTable {
        Scenario::builtin(ScenarioId::GlobalFinancialCrisis).payoffs
    }

    fn stance() -> impl Strategy<Value = Stance> {
        prop_oneof![Just(A), Just(S)]
    }

    fn table() -> impl Strategy<Value = PayoffTable> {
        let payoff = (1i32..=5, 1i32..=5);
        (payoff.clone(), payoff.clone(), payoff.clone(), payoff)
            .prop_map(|(aa, as_, sa, ss)| PayoffTable::new(aa, as_, sa, ss))
    }

    #[test]
    fn test_crisis_table_lookup() {
        let t = crisis();
        assert_eq!(t.get(A, A), (2, 2));
        assert_eq!(t.get(A, S), (3, 5));
        assert_eq!(t.get(S, A), (5, 3));
        assert_eq!(t.get(S, S), (4, 4));
    }

    #[test]
    fn test_crisis_equilibria() {
        let t = crisis();
        // Either side switching off stimulus drops 4 -> 3
        assert!(t.is_nash_equilibrium(S, S));
        // Player switching to stimulus raises 2 -> 5
        assert!(!t.is_nash_equilibrium(A, A));
        assert!(!t.is_nash_equilibrium(A, S));
        assert!(!t.is_nash_equilibrium(S, A));
        assert_eq!(t.equilibria(), vec![(S, S)]);
    }

    #[test]
    fn test_builtin_equilibria() {
        let recovery = Scenario::builtin(ScenarioId::PostWarRecovery).payoffs;
        assert_eq!(recovery.equilibria(), vec![(S, S)]);

        let inflation = Scenario::builtin(ScenarioId::InflationaryPressure).payoffs;
        assert_eq!(inflation.equilibria(), vec![(A, A)]);
    }

    #[test]
    fn test_ties_do_not_break_equilibrium() {
        let t = PayoffTable::new((3, 3), (3, 3), (3, 3), (3, 3));
        assert_eq!(t.equilibria().len(), 4);
    }

    #[test]
    fn test_every_table_has_four_cells() {
        for scenario in Catalog::standard().scenarios() {
            let cells: Vec<_> = scenario.payoffs.entries().map(|(cell, _)| cell).collect();
            assert_eq!(cells, vec![(A, A), (A, S), (S, A), (S, S)]);
            for (_, (p, o)) in scenario.payoffs.entries() {
                assert!((1..=5).contains(&p) && (1..=5).contains(&o));
            }
        }
    }

    #[test]
    fn test_builtin_tables_are_distinct() {
        let catalog = Catalog::standard();
        let tables: Vec<_> = catalog.scenarios().iter().map(|s| s.payoffs).collect();
        assert_ne!(tables[0], tables[1]);
        assert_ne!(tables[0], tables[2]);
        assert_ne!(tables[1], tables[2]);
    }

    #[test]
    fn test_grids() {
        let t = crisis();
        assert_eq!(t.player_grid(), [[2, 3], [5, 4]]);
        assert_eq!(t.opponent_grid(), [[2, 5], [3, 4]]);
    }

    #[test]
    fn test_standard_catalog_names() {
        let catalog = Catalog::standard();
        let names: Vec<_> = catalog.scenarios().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Global Financial Crisis", "Post-War Recovery", "Inflationary Pressure"]
        );
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_scenario_rejected() {
        let scenarios = vec![
            Scenario::builtin(ScenarioId::PostWarRecovery),
            Scenario::builtin(ScenarioId::InflationaryPressure),
            Scenario::builtin(ScenarioId::PostWarRecovery),
        ];
        assert_eq!(
            Catalog::new(scenarios),
            Err(GameError::DuplicateScenario(ScenarioId::PostWarRecovery))
        );
    }

    #[test]
    fn test_renamed_scenario_rejected() {
        let mut renamed = Scenario::builtin(ScenarioId::PostWarRecovery);
        renamed.name = ScenarioId::GlobalFinancialCrisis.name().to_string();
        let scenarios = vec![renamed, Scenario::builtin(ScenarioId::GlobalFinancialCrisis)];
        assert_eq!(
            Catalog::new(scenarios),
            Err(GameError::MislabeledScenario {
                id: ScenarioId::PostWarRecovery,
                name: "Global Financial Crisis".to_string(),
            })
        );
    }

    #[test]
    fn test_custom_catalog_keeps_order() {
        let scenarios = vec![
            Scenario::builtin(ScenarioId::InflationaryPressure),
            Scenario::builtin(ScenarioId::GlobalFinancialCrisis),
        ];
        let catalog = Catalog::new(scenarios.clone()).unwrap();
        assert_eq!(catalog.scenarios(), &scenarios[..]);
        assert!(!catalog.contains(ScenarioId::PostWarRecovery));
    }

    #[test]
    fn test_single_scenario_catalog_always_picks_it() {
        let catalog = Catalog::new(vec![Scenario::builtin(ScenarioId::InflationaryPressure)]).unwrap();
        let mut rng = SeededRng::new(&[3u8; 32], 0);
        for _ in 0..50 {
            assert_eq!(catalog.pick(&mut rng).id, ScenarioId::InflationaryPressure);
        }
    }

    #[test]
    fn test_pick_reaches_every_scenario() {
        let catalog = Catalog::standard();
        let mut rng = SeededRng::new(&[9u8; 32], 0);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            counts[catalog.pick_index(&mut rng)] += 1;
        }
        for count in counts {
            assert!(count > 800 && count < 1200, "uneven pick counts {:?}", counts);
        }
    }

    proptest! {
        #[test]
        fn prop_equilibrium_symmetric_under_role_swap(t in table(), a in stance(), b in stance()) {
            prop_assert_eq!(t.is_nash_equilibrium(a, b), t.transposed().is_nash_equilibrium(b, a));
        }

        #[test]
        fn prop_transpose_is_involution(t in table()) {
            prop_assert_eq!(t.transposed().transposed(), t);
        }
    }
}

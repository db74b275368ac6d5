pub mod macros;

use cellgate_core::config::AppConfig;
use cellgate_core::connectivity::analyze_connectivity;
use cellgate_core::pipeline::{analyze, CircuitAnalysis};
use cellgate_core::simplify::simplify;
use cellgate_data::{CellMatrix, GateCode, Grid, InputTap, InputTaps, OutputTaps, RuleTable};

/// Builds a circuit from rules and config tweaks, then runs the full pipeline.
#[allow(dead_code)]
pub struct CircuitBuilder {
    config: AppConfig,
    rules: RuleTable,
}

#[allow(dead_code)]
impl CircuitBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            config: AppConfig::with_size(size),
            rules: RuleTable::uniform(GateCode::Void),
        }
    }

    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_uniform_rules(self, gate: GateCode) -> Self {
        self.with_rules(RuleTable::uniform(gate))
    }

    pub fn with_outputs(mut self, columns: &[usize]) -> Self {
        self.config.taps.output_columns = columns.to_vec();
        self
    }

    pub fn with_input_pattern(mut self, pattern: &str) -> Self {
        self.config.taps.input_pattern = pattern.to_string();
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.config.budget.connectivity = budget;
        self.config.budget.resolution = budget;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> CircuitAnalysis {
        self.config.validate().expect("builder produced an invalid config");
        analyze(&self.rules, &self.config).expect("analysis failed")
    }
}

/// Grid from glyph rows: `0` void, `|` pass left, `\` pass right, `3` NAND.
#[allow(dead_code)]
pub fn hand_grid(rows: &[&str]) -> Grid {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '0' => GateCode::Void,
                    '|' => GateCode::PassLeft,
                    '\\' => GateCode::PassRight,
                    '3' => GateCode::Nand,
                    other => panic!("unknown gate glyph {other:?}"),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("hand grid must be square")
}

/// Connectivity plus simplification on a hand-built grid with `ABAB...` inputs.
#[allow(dead_code)]
pub fn resolve_grid(grid: &Grid, outputs: &[usize], budget: u32) -> CellMatrix {
    let size = grid.size();
    let inputs = InputTaps::repeating(size, &[InputTap::A, InputTap::B]);
    let map = analyze_connectivity(grid, &OutputTaps::columns(size, outputs), budget);
    simplify(grid, &map, &inputs, budget).expect("taps span the grid")
}

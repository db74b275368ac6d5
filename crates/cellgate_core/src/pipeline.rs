//! End-to-end analysis: grow the grid, find connected cells, resolve them.

use crate::automaton::{continue_grid_counted, generate_grid_counted};
use crate::config::AppConfig;
use crate::connectivity::{analyze_connectivity, ConnectivityMap};
use crate::evaluate::sample_function;
use crate::simplify::{simplify_with_stats, SimplifyStats};
use crate::usage::RuleUsage;
use cellgate_data::{BoolFn, CellMatrix, CircuitError, Grid, RuleTable, TapAssignment};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything produced for one rule table.
#[derive(Debug, Clone)]
pub struct CircuitAnalysis {
    pub rules: RuleTable,
    pub grid: Grid,
    pub taps: TapAssignment,
    pub connectivity: ConnectivityMap,
    pub cells: CellMatrix,
    pub stats: SimplifyStats,
    pub usage: RuleUsage,
}

/// What one output tap computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFunction {
    pub column: usize,
    /// Symbolic result, `None` if the cell stayed unresolved.
    pub symbolic: Option<BoolFn>,
    /// Result of concrete evaluation over all four input combinations.
    pub sampled: Option<BoolFn>,
}

/// Serializable digest of a [`CircuitAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub dna: String,
    pub config_fingerprint: String,
    pub size: usize,
    pub connected: usize,
    pub simplified: usize,
    pub irreducible: usize,
    pub connectivity_passes: u32,
    pub stats: SimplifyStats,
    pub outputs: Vec<OutputFunction>,
}

impl CircuitAnalysis {
    /// Symbolic and sampled function at every output tap, by column.
    #[must_use]
    pub fn output_functions(&self, resolution_budget: u32) -> Vec<OutputFunction> {
        self.taps
            .outputs
            .tapped()
            .map(|column| OutputFunction {
                column,
                symbolic: self.cells.get(column, 0).value,
                // Taps were built for this grid in `analyze`.
                sampled: sample_function(
                    &self.grid,
                    &self.taps.inputs,
                    column,
                    0,
                    resolution_budget,
                )
                .ok()
                .flatten(),
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self, config: &AppConfig) -> AnalysisSummary {
        AnalysisSummary {
            dna: self
                .rules
                .symbols()
                .iter()
                .map(|s| char::from(b'0' + s))
                .collect(),
            config_fingerprint: config.fingerprint(),
            size: self.grid.size(),
            connected: self.cells.connected_count(),
            simplified: self.cells.simplified_count(),
            irreducible: self.cells.irreducible_count(),
            connectivity_passes: self.connectivity.passes(),
            stats: self.stats,
            outputs: self.output_functions(config.budget.resolution),
        }
    }
}

/// Runs generation, connectivity and simplification for one rule table.
///
/// The grid is grown from the seed row and then regrown once from its own
/// last row; the second growth is the circuit that gets analyzed.
pub fn analyze(rules: &RuleTable, config: &AppConfig) -> Result<CircuitAnalysis, CircuitError> {
    let size = config.grid.size;
    let taps = config.tap_assignment();

    let mut usage = RuleUsage::new();
    let first = generate_grid_counted(rules, &config.seed_row()?, size, &mut usage)?;
    let grid = continue_grid_counted(&first, rules, &mut usage);
    let connectivity = analyze_connectivity(&grid, &taps.outputs, config.budget.connectivity);
    let (cells, stats) =
        simplify_with_stats(&grid, &connectivity, &taps.inputs, config.budget.resolution)?;

    tracing::info!(
        size = size,
        connected = cells.connected_count(),
        simplified = cells.simplified_count(),
        irreducible = cells.irreducible_count(),
        settled = stats.settled,
        "Circuit analyzed"
    );

    Ok(CircuitAnalysis {
        rules: rules.clone(),
        grid,
        taps,
        connectivity,
        cells,
        stats,
        usage,
    })
}

/// Analyses of many rule tables plus their combined rule usage.
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    pub analyses: Vec<CircuitAnalysis>,
    pub usage: RuleUsage,
}

/// Analyzes every table in parallel. Results keep the input order.
pub fn analyze_batch(
    tables: &[RuleTable],
    config: &AppConfig,
) -> Result<BatchAnalysis, CircuitError> {
    let analyses = tables
        .par_iter()
        .map(|rules| analyze(rules, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut usage = RuleUsage::new();
    for analysis in &analyses {
        usage.merge(&analysis.usage);
    }
    tracing::info!(count = analyses.len(), lookups = usage.total(), "Batch analyzed");
    Ok(BatchAnalysis { analyses, usage })
}

/// Rule usage across `tables`, each grown from the seed and then once more
/// from its own last row.
pub fn count_rule_usage(
    tables: &[RuleTable],
    config: &AppConfig,
) -> Result<RuleUsage, CircuitError> {
    let seed = config.seed_row()?;
    let size = config.grid.size;
    let usage = tables
        .par_iter()
        .map(|rules| {
            let mut usage = RuleUsage::new();
            let grid = generate_grid_counted(rules, &seed, size, &mut usage)?;
            continue_grid_counted(&grid, rules, &mut usage);
            Ok(usage)
        })
        .try_reduce(RuleUsage::new, |mut acc, usage| {
            acc.merge(&usage);
            Ok(acc)
        })?;
    tracing::info!(tables = tables.len(), lookups = usage.total(), "Rule usage counted");
    Ok(usage)
}

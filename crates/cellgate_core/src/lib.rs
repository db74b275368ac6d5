//! # Cellgate Core
//!
//! The analysis engine for cellgate: logic circuits grown by a cellular
//! automaton and reduced to boolean functions of two inputs.
//!
//! This crate contains:
//! - The 4-colour, radius-1 toroidal automaton that grows a gate grid
//! - The 16×16 NAND composition table over two-input boolean functions
//! - Connectivity tracing from the output taps
//! - Symbolic simplification and concrete evaluation of each cell
//! - Configuration, random rule tables and structured logging
//!
//! ## Example
//!
//! ```
//! use cellgate_core::config::AppConfig;
//! use cellgate_core::pipeline::analyze;
//! use cellgate_data::{BoolFn, GateCode, RuleTable};
//!
//! let config = AppConfig::with_size(4);
//! let analysis = analyze(&RuleTable::uniform(GateCode::PassLeft), &config).unwrap();
//! assert_eq!(analysis.cells.get(0, 0).value, Some(BoolFn::A));
//! ```

/// NAND composition over two-input boolean functions
pub mod algebra;
/// Cellular automaton that grows the gate grid from a seed row
pub mod automaton;
/// Configuration management for grid, taps and pass budgets
pub mod config;
/// Backward connectivity tracing from the output taps
pub mod connectivity;
/// Concrete signal propagation for fixed input values
pub mod evaluate;
/// Random rule table generation
pub mod genome;
/// Structured logging setup
pub mod metrics;
/// Generation, connectivity and simplification in one call
pub mod pipeline;
/// Symbolic resolution of cell functions
pub mod simplify;
/// Rule usage counters
pub mod usage;

pub use automaton::{
    continue_grid, continue_grid_counted, generate_grid, generate_grid_counted, CaEngine,
};
pub use config::AppConfig;
pub use connectivity::{analyze_connectivity, ConnectivityMap};
pub use pipeline::{
    analyze, analyze_batch, count_rule_usage, AnalysisSummary, BatchAnalysis, CircuitAnalysis,
};
pub use simplify::{simplify, simplify_with_stats, SimplifyStats};
pub use usage::RuleUsage;

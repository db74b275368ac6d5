//! Core data structures for the cellgate circuit engine.
//!
//! Everything in this crate is plain data: the rule table ("DNA") that drives
//! the cellular automaton, the grid of gate codes it grows, the tap
//! assignments at the grid edges, and the per-cell simulation state produced
//! by the analyzers in `cellgate_core`.

pub mod data;
pub mod error;

pub use data::cell::{Cell, CellMatrix, CellState};
pub use data::gate::{GateCode, COLOR, NEIGHBORHOOD_SIZE, RULE_TABLE_LENGTH};
pub use data::genome::{Row, RuleTable};
pub use data::grid::{Grid, DEFAULT_GRID_SIZE};
pub use data::logic::{BoolFn, InputTap};
pub use data::taps::{InputTaps, OutputTaps, TapAssignment};
pub use error::{CircuitError, Result};

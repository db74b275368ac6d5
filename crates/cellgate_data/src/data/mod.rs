//! Data model for grids, rule tables and cell state.

pub mod cell;
pub mod gate;
pub mod genome;
pub mod grid;
pub mod logic;
pub mod taps;

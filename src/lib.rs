//! # Cellgate
//!
//! Command-line front end for the cellgate engine: rendering of grids and
//! cell maps, and the bodies of the `cellgate` subcommands.

/// Subcommand implementations
pub mod commands;
/// Terminal rendering of grids, cell maps and legends
pub mod render;

pub use cellgate_core as core;
pub use cellgate_data as data;
pub use cellgate_io as io;

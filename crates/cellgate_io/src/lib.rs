//! # Cellgate IO
//!
//! File formats around the cellgate engine.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - DNA text parsing and formatting
//! - Solution extraction from evolution run reports
//! - NetPBM connection masks and rule usage tables
//! - JSON serialization of analysis summaries

/// DNA and row text formats
pub mod dna;
/// Error types and result aliases for I/O operations
pub mod error;
/// NetPBM connection masks
pub mod mask;
/// Solution extraction from `.rpt` files
pub mod report;
/// Validated JSON helpers
pub mod serialization;
/// Rule usage CSV and tables
pub mod usage;

pub use dna::{format_cell_array, format_dna, format_row, parse_dna, parse_row};
pub use error::{IoError, Result};
pub use report::{extract_solutions, read_report, read_report_dir};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};

//! Solution extraction from evolution run reports (`.rpt`).
//!
//! A report ends with a population dump. The dump starts after a header
//! line ending in `DNA`; each following line is one individual, flagged as
//! a solution by a standalone `1` column, with its DNA after the last `|`.

use crate::dna::parse_dna;
use crate::error::{IoError, Result};
use cellgate_data::RuleTable;
use std::path::{Path, PathBuf};

const REPORT_EXTENSION: &str = "rpt";

/// Solution DNA strings found in one report, in file order.
#[must_use]
pub fn extract_solutions(report: &str) -> Vec<String> {
    solution_lines(report).map(|(_, dna)| dna.to_string()).collect()
}

/// `(line number, dna)` for each solution line, line numbers 1-based.
fn solution_lines(report: &str) -> impl Iterator<Item = (usize, &str)> {
    report
        .lines()
        .enumerate()
        .skip_while(|(_, line)| !is_dump_header(line))
        .skip(1)
        .filter(|(_, line)| is_solution(line))
        .map(|(idx, line)| (idx + 1, dna_field(line)))
}

fn is_dump_header(line: &str) -> bool {
    let line = line.trim_end();
    line.len() > "DNA".len() && line.ends_with("DNA")
}

fn is_solution(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() > 2 && tokens[1..tokens.len() - 1].contains(&"1")
}

fn dna_field(line: &str) -> &str {
    line.rsplit('|').next().unwrap_or(line).trim()
}

/// Parses every solution in every `.rpt` file directly inside `dir`.
///
/// Files are visited in name order. Other files are skipped with a warning.
pub fn read_report_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<RuleTable>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(IoError::not_found(dir.display().to_string()));
    }

    let mut paths = std::fs::read_dir(dir)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("listing {}", dir.display())))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?;
    paths.sort();

    let mut tables = Vec::new();
    for path in paths {
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(REPORT_EXTENSION) {
            tracing::warn!(path = %path.display(), "Skipping non-report file");
            continue;
        }
        let found = read_report(&path)?;
        tracing::debug!(path = %path.display(), solutions = found.len(), "Report parsed");
        tables.extend(found);
    }

    tracing::info!(dir = %dir.display(), solutions = tables.len(), "Reports scanned");
    Ok(tables)
}

/// Parses the solutions of a single report file.
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<RuleTable>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("reading {}", path.display())))?;
    solution_lines(&text)
        .map(|(line, dna)| {
            parse_dna(dna).map_err(|e| {
                IoError::parse(line, e.to_string()).with_context(path.display().to_string())
            })
        })
        .collect()
}

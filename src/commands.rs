//! Subcommand bodies, written against any `Write` sink.

use crate::render::Renderer;
use anyhow::{Context, Result};
use cellgate_core::config::AppConfig;
use cellgate_core::genome::random_rule_tables;
use cellgate_core::pipeline::{analyze, count_rule_usage};
use cellgate_io::{dna, mask, report, serialization, usage};
use std::io::Write;
use std::path::Path;

/// Loads and validates `path`, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let config = AppConfig::load(path)?;
    config.validate()?;
    tracing::debug!(fingerprint = %config.fingerprint(), "Config loaded");
    Ok(config)
}

/// Prints the grid, cell map and output functions for one DNA string.
pub fn run_analyze<W: Write>(
    out: &mut W,
    dna_text: &str,
    config: &AppConfig,
    colored: bool,
    json: Option<&Path>,
) -> Result<()> {
    let rules = dna::parse_dna(dna_text).context("invalid DNA")?;
    let analysis = analyze(&rules, config)?;
    write!(
        out,
        "{}",
        Renderer::new(colored).analysis(&analysis, config.budget.resolution)
    )?;

    if let Some(path) = json {
        serialization::write_json_file(&analysis.summary(config), path)?;
        writeln!(out, "Summary saved to {}", path.display())?;
    }
    Ok(())
}

/// Writes the connection mask for one DNA string as a P1 bitmap.
pub fn run_mask<W: Write>(
    out: &mut W,
    dna_text: &str,
    config: &AppConfig,
    output: &Path,
) -> Result<()> {
    let rules = dna::parse_dna(dna_text).context("invalid DNA")?;
    let analysis = analyze(&rules, config)?;
    mask::write_mask(&analysis.connectivity, output)?;
    writeln!(
        out,
        "Saved {} connected cells to {}",
        analysis.connectivity.count(),
        output.display()
    )?;
    Ok(())
}

pub fn run_random<W: Write>(out: &mut W, count: usize, seed: Option<u64>) -> Result<()> {
    let tables = random_rule_tables(count, seed);
    write!(out, "{}", dna::format_cell_array(&tables))?;
    Ok(())
}

/// Lists every solution DNA found in the reports under `dir`.
pub fn run_extract<W: Write>(out: &mut W, dir: &Path) -> Result<()> {
    let tables = report::read_report_dir(dir)?;
    for rules in &tables {
        writeln!(out, "{}", dna::format_dna(rules))?;
    }
    writeln!(out, "Found {} solutions", tables.len())?;
    Ok(())
}

/// Counts rule usage over all solutions under `dir`.
pub fn run_usage<W: Write>(
    out: &mut W,
    dir: &Path,
    config: &AppConfig,
    csv: Option<&Path>,
) -> Result<()> {
    let tables = report::read_report_dir(dir)?;
    writeln!(out, "Checking {} DNA entries", tables.len())?;
    let counts = count_rule_usage(&tables, config)?;
    write!(out, "{}", usage::format_table(&counts))?;
    if let Some(path) = csv {
        usage::write_csv(tables.len(), &counts, path)?;
        writeln!(out, "Saved usage to {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASS_LEFT: &str = "1111111111111111111111111111111111111111111111111111111111111111";

    #[test]
    fn test_analyze_prints_output_function() {
        let mut out = Vec::new();
        run_analyze(&mut out, PASS_LEFT, &AppConfig::with_size(8), false, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("column   0 : A (evaluated: A)"));
        assert!(text.contains(" : OUTPUT"));
    }

    #[test]
    fn test_analyze_rejects_bad_dna() {
        let mut out = Vec::new();
        let err = run_analyze(&mut out, "0123", &AppConfig::default(), false, None).unwrap_err();
        assert!(err.to_string().contains("invalid DNA"));
    }

    #[test]
    fn test_random_is_reproducible() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run_random(&mut first, 3, Some(9)).unwrap();
        run_random(&mut second, 3, Some(9)).unwrap();
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_config(Path::new("no/such/cellgate.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}

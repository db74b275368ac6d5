//! Rule usage output: a one-line CSV record and a printable table.

use crate::error::{IoError, Result};
use cellgate_core::usage::RuleUsage;
use std::fmt::Write as _;
use std::path::Path;

/// `<dna_count>,<u0>,...,<u63>,` with a trailing comma after every field.
#[must_use]
pub fn to_csv(dna_count: usize, usage: &RuleUsage) -> String {
    let mut out = format!("{dna_count},");
    for count in usage.counts() {
        let _ = write!(out, "{count},");
    }
    out
}

pub fn write_csv<P: AsRef<Path>>(dna_count: usize, usage: &RuleUsage, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_csv(dna_count, usage)).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing usage to {}", path.display()))
    })?;
    tracing::info!(path = %path.display(), dna_count, "Rule usage saved");
    Ok(())
}

/// One `INDEX | USAGE | PERCENT` line per rule, then a `TOTAL` line.
#[must_use]
pub fn format_table(usage: &RuleUsage) -> String {
    let percentages = usage.percentages();
    let mut out = String::from("INDEX | USAGE | PERCENT\n");
    for (idx, (count, pct)) in usage.counts().iter().zip(&percentages).enumerate() {
        let _ = writeln!(out, "{idx:5} |{count:7}| {pct:5.2}%");
    }
    let _ = writeln!(
        out,
        "TOTAL |{:7}| {:6.2}%",
        usage.total(),
        percentages.iter().sum::<f64>()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_data::RULE_TABLE_LENGTH;

    fn sample() -> RuleUsage {
        let mut usage = RuleUsage::new();
        usage.record(0);
        usage.record(0);
        usage.record(0);
        usage.record(63);
        usage
    }

    #[test]
    fn test_csv_fields() {
        let csv = to_csv(2, &sample());
        assert!(csv.starts_with("2,3,0,"));
        assert!(csv.ends_with(",1,"));
        assert_eq!(csv.matches(',').count(), RULE_TABLE_LENGTH + 1);
    }

    #[test]
    fn test_table_rows() {
        let table = format_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), RULE_TABLE_LENGTH + 2);
        assert_eq!(lines[1], "    0 |      3| 75.00%");
        assert_eq!(lines[64], "   63 |      1| 25.00%");
        assert_eq!(lines[65], "TOTAL |      4| 100.00%");
    }

    #[test]
    fn test_empty_usage_table() {
        let table = format_table(&RuleUsage::new());
        assert!(table.ends_with("TOTAL |      0|   0.00%\n"));
    }
}

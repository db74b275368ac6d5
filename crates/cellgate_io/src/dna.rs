//! Text form of rule tables and rows: one decimal digit per gate code.

use crate::error::{IoError, Result};
use cellgate_data::{Row, RuleTable};

/// Parses a 64-digit DNA string such as `"0123..."`.
///
/// Surrounding whitespace and quotes are ignored, so strings pasted from
/// a MATLAB cell array or a CSV field parse as-is.
pub fn parse_dna(text: &str) -> Result<RuleTable> {
    let symbols = digits(text)?;
    Ok(RuleTable::from_symbols(&symbols)?)
}

#[must_use]
pub fn format_dna(rules: &RuleTable) -> String {
    format_symbols(&rules.symbols())
}

/// Parses a row of gate digits of any length.
pub fn parse_row(text: &str) -> Result<Row> {
    let symbols = digits(text)?;
    Ok(Row::from_symbols(&symbols)?)
}

#[must_use]
pub fn format_row(row: &Row) -> String {
    format_symbols(&row.gates().iter().map(|g| g.symbol()).collect::<Vec<_>>())
}

/// Formats tables as a MATLAB cell array of strings, one DNA per line.
#[must_use]
pub fn format_cell_array(tables: &[RuleTable]) -> String {
    let mut out = String::from("List = { ...\n");
    for rules in tables {
        out.push('\'');
        out.push_str(&format_dna(rules));
        out.push_str("', ...\n");
    }
    out.push_str("};\n");
    out
}

fn digits(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim().trim_matches(|c| c == '\'' || c == '"').trim();
    trimmed
        .chars()
        .enumerate()
        .map(|(idx, c)| {
            c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                IoError::validation(format!("character {c:?} at position {idx} is not a digit"))
            })
        })
        .collect()
}

fn format_symbols(symbols: &[u8]) -> String {
    symbols.iter().map(|s| char::from(b'0' + s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_data::GateCode;

    const SAMPLE: &str = "0123012301230123012301230123012301230123012301230123012301230123";

    #[test]
    fn test_parse_dna_accepts_quoted_input() {
        let rules = parse_dna(&format!("  '{SAMPLE}'\n")).unwrap();
        assert_eq!(rules.lookup(1), GateCode::PassLeft);
        assert_eq!(rules.lookup(63), GateCode::Nand);
        assert_eq!(format_dna(&rules), SAMPLE);
    }

    #[test]
    fn test_parse_dna_rejects_short_input() {
        let err = parse_dna("0123").unwrap_err();
        assert!(matches!(err, IoError::Circuit(_)));
    }

    #[test]
    fn test_parse_dna_rejects_bad_digits() {
        let mut text = SAMPLE.to_string();
        text.replace_range(10..11, "7");
        assert!(matches!(parse_dna(&text), Err(IoError::Circuit(_))));

        text.replace_range(10..11, "x");
        assert!(matches!(parse_dna(&text), Err(IoError::Validation(_))));
    }

    #[test]
    fn test_parse_row() {
        let row = parse_row("\"0310\"").unwrap();
        assert_eq!(
            row.gates(),
            &[GateCode::Void, GateCode::Nand, GateCode::PassLeft, GateCode::Void]
        );
        assert_eq!(format_row(&row), "0310");
    }

    #[test]
    fn test_cell_array_lines_parse_back() {
        let tables = vec![parse_dna(SAMPLE).unwrap(), RuleTable::uniform(GateCode::Void)];
        let text = format_cell_array(&tables);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"List = { ..."));
        assert_eq!(lines.last(), Some(&"};"));
        assert_eq!(lines.len(), 4);
        let parsed = parse_dna(lines[1].trim_end_matches(", ...")).unwrap();
        assert_eq!(parsed, tables[0]);
    }
}

use super::gate::{GateCode, COLOR, RULE_TABLE_LENGTH};
use crate::error::{CircuitError, Result};
use serde::{Deserialize, Serialize};

/// CA rule lookup table ("DNA").
///
/// Always exactly [`RULE_TABLE_LENGTH`] entries. Construction validates the
/// raw symbols so the generation engine never sees a malformed table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct RuleTable {
    rules: Vec<GateCode>,
}

impl RuleTable {
    /// Builds a table from raw symbols, rejecting wrong lengths and symbols `>= COLOR`.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        if symbols.len() != RULE_TABLE_LENGTH {
            return Err(CircuitError::rule_table(format!(
                "length {}, expected {}",
                symbols.len(),
                RULE_TABLE_LENGTH
            )));
        }
        let rules = symbols
            .iter()
            .enumerate()
            .map(|(idx, &s)| {
                GateCode::from_symbol(s).ok_or_else(|| {
                    CircuitError::rule_table(format!(
                        "symbol {s} at index {idx} is outside [0, {COLOR})"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// A table mapping every neighborhood to the same gate.
    #[must_use]
    pub fn uniform(gate: GateCode) -> Self {
        Self {
            rules: vec![gate; RULE_TABLE_LENGTH],
        }
    }

    /// Builds a table by computing the gate for each neighborhood index.
    pub fn from_fn<F: FnMut(usize) -> GateCode>(f: F) -> Self {
        Self {
            rules: (0..RULE_TABLE_LENGTH).map(f).collect(),
        }
    }

    /// Gate produced for the given neighborhood index.
    #[inline]
    #[must_use]
    pub fn lookup(&self, index: usize) -> GateCode {
        self.rules[index]
    }

    #[must_use]
    pub fn rules(&self) -> &[GateCode] {
        &self.rules
    }

    #[must_use]
    pub fn symbols(&self) -> Vec<u8> {
        self.rules.iter().map(|g| g.symbol()).collect()
    }
}

impl TryFrom<Vec<u8>> for RuleTable {
    type Error = CircuitError;

    fn try_from(symbols: Vec<u8>) -> Result<Self> {
        Self::from_symbols(&symbols)
    }
}

impl From<RuleTable> for Vec<u8> {
    fn from(table: RuleTable) -> Self {
        table.symbols()
    }
}

/// One row of CA state, toroidal in X.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<GateCode>,
}

impl Row {
    /// Builds a row from raw symbols.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        let cells = symbols
            .iter()
            .map(|&s| GateCode::from_symbol(s))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                CircuitError::row(symbols.len(), format!("symbol outside [0, {COLOR})"))
            })?;
        Ok(Self { cells })
    }

    /// All-VOID row with a single `gate` at `column`.
    ///
    /// The evolved circuits were grown from a lone PASS_LEFT at `size / 2`.
    #[must_use]
    pub fn seed(size: usize, column: usize, gate: GateCode) -> Self {
        let mut cells = vec![GateCode::Void; size];
        if let Some(cell) = cells.get_mut(column) {
            *cell = gate;
        }
        Self { cells }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn gates(&self) -> &[GateCode] {
        &self.cells
    }

    /// Fails unless the row spans exactly `size` columns.
    pub fn expect_len(&self, size: usize) -> Result<()> {
        if self.cells.len() == size {
            Ok(())
        } else {
            Err(CircuitError::row(size, format!("length {}", self.cells.len())))
        }
    }
}

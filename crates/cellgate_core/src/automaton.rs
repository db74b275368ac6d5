//! One-dimensional cellular automaton that grows circuit grids.
//!
//! Each row is produced from the previous one by a radius-1 toroidal
//! neighborhood lookup into the rule table. Row 0 is grown from the seed,
//! every later row from the row above it.

use crate::usage::RuleUsage;
use cellgate_data::{CircuitError, GateCode, Grid, Row, RuleTable, COLOR, NEIGHBORHOOD_SIZE};

/// Column indices `{x-1, x, x+1}` wrapped into `[0, size)`.
#[inline]
#[must_use]
pub fn neighborhood_index(x: usize, size: usize) -> [usize; NEIGHBORHOOD_SIZE] {
    [(x + size - 1) % size, x % size, (x + 1) % size]
}

/// Rule-table index of a neighborhood, left neighbor as the least significant digit.
#[inline]
#[must_use]
pub fn rule_lookup_index(values: [GateCode; NEIGHBORHOOD_SIZE]) -> usize {
    values
        .iter()
        .rev()
        .fold(0, |idx, v| idx * COLOR + v.symbol() as usize)
}

/// Applies one rule table row by row.
pub struct CaEngine<'a> {
    rules: &'a RuleTable,
    usage: Option<&'a mut RuleUsage>,
}

impl<'a> CaEngine<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules, usage: None }
    }

    /// Engine that records every rule lookup into `usage`.
    #[must_use]
    pub fn with_usage(rules: &'a RuleTable, usage: &'a mut RuleUsage) -> Self {
        Self {
            rules,
            usage: Some(usage),
        }
    }

    /// Computes `output` from `input`. Both slices must have the same length.
    pub fn apply_row(&mut self, input: &[GateCode], output: &mut [GateCode]) {
        debug_assert_eq!(input.len(), output.len());
        let size = input.len();
        for (x, out) in output.iter_mut().enumerate() {
            let [l, c, r] = neighborhood_index(x, size);
            let idx = rule_lookup_index([input[l], input[c], input[r]]);
            if let Some(usage) = self.usage.as_deref_mut() {
                usage.record(idx);
            }
            *out = self.rules.lookup(idx);
        }
    }

    /// Fills `grid` starting from `seed`: row 0 from the seed, row `y + 1` from row `y`.
    fn fill(&mut self, seed: &[GateCode], grid: &mut Grid) {
        let size = grid.size();
        self.apply_row(seed, grid.row_mut(0));
        let mut previous = grid.row(0).to_vec();
        for y in 1..size {
            self.apply_row(&previous, grid.row_mut(y));
            previous.copy_from_slice(grid.row(y));
        }
    }
}

/// Grows a `size`×`size` grid from `seed`.
///
/// Fails if the seed does not span exactly `size` columns or `size` is zero.
pub fn generate_grid(rules: &RuleTable, seed: &Row, size: usize) -> Result<Grid, CircuitError> {
    check_size(size)?;
    seed.expect_len(size)?;
    let mut grid = Grid::new(size);
    CaEngine::new(rules).fill(seed.gates(), &mut grid);
    Ok(grid)
}

/// Like [`generate_grid`], recording rule usage into `usage`.
pub fn generate_grid_counted(
    rules: &RuleTable,
    seed: &Row,
    size: usize,
    usage: &mut RuleUsage,
) -> Result<Grid, CircuitError> {
    check_size(size)?;
    seed.expect_len(size)?;
    let mut grid = Grid::new(size);
    CaEngine::with_usage(rules, usage).fill(seed.gates(), &mut grid);
    Ok(grid)
}

/// Regrows a grid using the last row of `previous` as the seed.
#[must_use]
pub fn continue_grid(previous: &Grid, rules: &RuleTable) -> Grid {
    regrow(previous, CaEngine::new(rules))
}

/// Like [`continue_grid`], recording rule usage into `usage`.
pub fn continue_grid_counted(previous: &Grid, rules: &RuleTable, usage: &mut RuleUsage) -> Grid {
    regrow(previous, CaEngine::with_usage(rules, usage))
}

fn regrow(previous: &Grid, mut engine: CaEngine<'_>) -> Grid {
    let mut grid = Grid::new(previous.size());
    if previous.size() > 0 {
        let seed = previous.row(previous.input_row()).to_vec();
        engine.fill(&seed, &mut grid);
    }
    grid
}

fn check_size(size: usize) -> Result<(), CircuitError> {
    if size == 0 {
        Err(CircuitError::InvalidGridSize(size))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_data::RULE_TABLE_LENGTH;

    fn identity_rules() -> RuleTable {
        // Each neighborhood maps to its center cell.
        let symbols: Vec<u8> = (0..RULE_TABLE_LENGTH)
            .map(|idx| ((idx / COLOR) % COLOR) as u8)
            .collect();
        RuleTable::from_symbols(&symbols).unwrap()
    }

    #[test]
    fn test_neighborhood_wraps() {
        assert_eq!(neighborhood_index(0, 64), [63, 0, 1]);
        assert_eq!(neighborhood_index(63, 64), [62, 63, 0]);
        assert_eq!(neighborhood_index(10, 64), [9, 10, 11]);
    }

    #[test]
    fn test_rule_lookup_digit_order() {
        use GateCode::*;
        assert_eq!(rule_lookup_index([Void, Void, Void]), 0);
        assert_eq!(rule_lookup_index([PassLeft, Void, Void]), 1);
        assert_eq!(rule_lookup_index([Void, PassLeft, Void]), 4);
        assert_eq!(rule_lookup_index([Void, Void, PassLeft]), 16);
        assert_eq!(rule_lookup_index([Nand, Nand, Nand]), 63);
        assert_eq!(rule_lookup_index([PassRight, PassLeft, Nand]), 2 + 4 + 48);
    }

    #[test]
    fn test_identity_rules_copy_seed() {
        let seed = Row::seed(8, 3, GateCode::Nand);
        let grid = generate_grid(&identity_rules(), &seed, 8).unwrap();
        for row in grid.rows() {
            assert_eq!(row, seed.gates());
        }
    }

    #[test]
    fn test_zero_rules_give_void_grid() {
        let seed = Row::seed(16, 8, GateCode::PassLeft);
        let grid = generate_grid(&RuleTable::uniform(GateCode::Void), &seed, 16).unwrap();
        assert_eq!(grid.count(GateCode::Void), 256);
    }

    #[test]
    fn test_rows_chain_from_seed() {
        // Shift left: each cell copies its right neighbor.
        let symbols: Vec<u8> = (0..RULE_TABLE_LENGTH)
            .map(|idx| (idx / (COLOR * COLOR)) as u8)
            .collect();
        let rules = RuleTable::from_symbols(&symbols).unwrap();
        let seed = Row::seed(4, 0, GateCode::PassLeft);
        let grid = generate_grid(&rules, &seed, 4).unwrap();
        assert_eq!(grid.gate(3, 0), GateCode::PassLeft);
        assert_eq!(grid.gate(2, 1), GateCode::PassLeft);
        assert_eq!(grid.gate(1, 2), GateCode::PassLeft);
        assert_eq!(grid.gate(0, 3), GateCode::PassLeft);
    }

    #[test]
    fn test_seed_length_rejected() {
        let seed = Row::seed(10, 0, GateCode::PassLeft);
        let err = generate_grid(&identity_rules(), &seed, 8).unwrap_err();
        assert!(matches!(err, CircuitError::InvalidRow { expected: 8, .. }));
        assert!(matches!(
            generate_grid(&identity_rules(), &Row::seed(0, 0, GateCode::Void), 0),
            Err(CircuitError::InvalidGridSize(0))
        ));
    }

    #[test]
    fn test_usage_counts_every_lookup() {
        let mut usage = RuleUsage::new();
        let seed = Row::seed(8, 4, GateCode::PassLeft);
        generate_grid_counted(&identity_rules(), &seed, 8, &mut usage).unwrap();
        assert_eq!(usage.total(), 64);
        // Neighborhood (VOID, PASS_LEFT, VOID) is index 4 and occurs once per row.
        assert_eq!(usage.count(4), 8);
    }

    #[test]
    fn test_continue_grid_uses_last_row() {
        let rules = identity_rules();
        let seed = Row::seed(6, 2, GateCode::PassRight);
        let first = generate_grid(&rules, &seed, 6).unwrap();
        let second = continue_grid(&first, &rules);
        assert_eq!(second, first);
    }

    #[test]
    fn test_continue_grid_counted_adds_a_full_grid() {
        let rules = identity_rules();
        let mut usage = RuleUsage::new();
        let first = generate_grid_counted(&rules, &Row::seed(5, 0, GateCode::Nand), 5, &mut usage)
            .unwrap();
        let second = continue_grid_counted(&first, &rules, &mut usage);
        assert_eq!(second.size(), 5);
        assert_eq!(usage.total(), 50);
    }
}

//! Backward resolution of each cell's symbolic function.
//!
//! Values flow up from the input row: VOID cells are FALSE, PASS cells copy
//! their operand, NAND cells compose theirs through [`crate::algebra`]. Rows
//! are swept bottom-up and left-to-right, updating in place, for at most
//! `budget` passes. Cells on cycles through the wrapped input row can stay
//! unresolved; that is a normal outcome, not an error.

use crate::algebra;
use crate::connectivity::ConnectivityMap;
use cellgate_data::{BoolFn, Cell, CellMatrix, CircuitError, GateCode, Grid, InputTaps};
use serde::{Deserialize, Serialize};

/// Bookkeeping for one simplification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimplifyStats {
    /// Passes actually run.
    pub passes: u32,
    /// A full pass changed nothing, so more budget would not help.
    pub settled: bool,
    /// Cells resolved, connected or not.
    pub resolved: usize,
}

/// Resolves every cell of `grid` and annotates it with `connectivity`.
///
/// Fails with [`CircuitError::InvalidTaps`] when `inputs` or `connectivity`
/// do not span `grid.size()` columns. Unresolved cells are not an error.
pub fn simplify(
    grid: &Grid,
    connectivity: &ConnectivityMap,
    inputs: &InputTaps,
    budget: u32,
) -> Result<CellMatrix, CircuitError> {
    Ok(simplify_with_stats(grid, connectivity, inputs, budget)?.0)
}

/// [`simplify`], also returning pass statistics.
pub fn simplify_with_stats(
    grid: &Grid,
    connectivity: &ConnectivityMap,
    inputs: &InputTaps,
    budget: u32,
) -> Result<(CellMatrix, SimplifyStats), CircuitError> {
    check_extent(grid.size(), inputs.len())?;
    check_extent(grid.size(), connectivity.size())?;
    let (values, stats) = resolve(grid, inputs, budget);
    let size = grid.size();
    let cells = (0..size * size)
        .map(|idx| {
            let (x, y) = (idx % size, idx / size);
            Cell {
                connected: connectivity.is_connected(x, y),
                value: values[idx],
                ..Cell::new(x, y, grid.gate(x, y))
            }
        })
        .collect();
    Ok((CellMatrix::from_cells(size, cells), stats))
}

/// Fails unless a per-column array of `actual` entries fits a `size` grid.
pub(crate) fn check_extent(size: usize, actual: usize) -> Result<(), CircuitError> {
    if actual == size {
        Ok(())
    } else {
        Err(CircuitError::InvalidTaps {
            expected: size,
            actual,
        })
    }
}

/// Bounded fixed-point iteration over the cell values, row-major storage.
fn resolve(grid: &Grid, inputs: &InputTaps, budget: u32) -> (Vec<Option<BoolFn>>, SimplifyStats) {
    let size = grid.size();
    let input_row = grid.input_row();
    let mut values: Vec<Option<BoolFn>> = vec![None; size * size];
    let mut stats = SimplifyStats::default();

    for x in 0..size {
        values[input_row * size + x] = match grid.gate(x, input_row) {
            GateCode::Void => Some(BoolFn::False),
            GateCode::PassLeft => Some(inputs.tap(x).function()),
            GateCode::PassRight | GateCode::Nand => None,
        };
    }

    for _ in 0..budget {
        stats.passes += 1;
        let mut changed = false;
        for y in (0..size).rev() {
            let below = grid.below(y);
            for x in 0..size {
                let idx = y * size + x;
                if values[idx].is_some() {
                    continue;
                }
                let right = values[below * size + grid.right(x)];
                let left = if y == input_row {
                    Some(inputs.tap(x).function())
                } else {
                    values[below * size + x]
                };
                let next = match grid.gate(x, y) {
                    GateCode::Void => Some(BoolFn::False),
                    GateCode::PassLeft => left,
                    GateCode::PassRight => right,
                    GateCode::Nand => algebra::compose(left, right),
                };
                if next.is_some() {
                    values[idx] = next;
                    changed = true;
                }
            }
        }
        if !changed {
            stats.settled = true;
            break;
        }
    }

    stats.resolved = values.iter().filter(|v| v.is_some()).count();
    tracing::debug!(
        passes = stats.passes,
        budget = budget,
        settled = stats.settled,
        resolved = stats.resolved,
        "Cell resolution finished"
    );
    (values, stats)
}

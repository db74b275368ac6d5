//! Concrete evaluation of a grid for fixed input values.
//!
//! Mirrors [`crate::simplify`] with booleans in place of symbolic functions.
//! A NAND with a low operand settles high even when its other operand is
//! unknown, so concrete runs can settle cells that stay symbolic-unresolved.

use crate::simplify::check_extent;
use cellgate_data::{BoolFn, CircuitError, GateCode, Grid, InputTaps};

/// Settled signal of every cell for one input combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    size: usize,
    values: Vec<Option<bool>>,
}

impl Signals {
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.values[y * self.size + x]
    }

    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

fn nand(left: Option<bool>, right: Option<bool>) -> Option<bool> {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Some(true),
        (Some(l), Some(r)) => Some(!(l && r)),
        _ => None,
    }
}

/// Propagates inputs `a` and `b` through `grid` for at most `budget` passes.
pub fn evaluate(
    grid: &Grid,
    inputs: &InputTaps,
    a: bool,
    b: bool,
    budget: u32,
) -> Result<Signals, CircuitError> {
    let size = grid.size();
    check_extent(size, inputs.len())?;
    let input_row = grid.input_row();
    let mut values = vec![None; size * size];

    for x in 0..size {
        values[input_row * size + x] = match grid.gate(x, input_row) {
            GateCode::Void => Some(false),
            GateCode::PassLeft => Some(inputs.tap(x).signal(a, b)),
            GateCode::PassRight | GateCode::Nand => None,
        };
    }

    for _ in 0..budget {
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
                    Some(inputs.tap(x).signal(a, b))
                } else {
                    values[below * size + x]
                };
                let next = match grid.gate(x, y) {
                    GateCode::Void => Some(false),
                    GateCode::PassLeft => left,
                    GateCode::PassRight => right,
                    GateCode::Nand => nand(left, right),
                };
                if next.is_some() {
                    values[idx] = next;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    Ok(Signals { size, values })
}

/// Function computed at `(x, y)`, sampled over all four input combinations.
///
/// `Ok(None)` when the cell fails to settle for any combination.
pub fn sample_function(
    grid: &Grid,
    inputs: &InputTaps,
    x: usize,
    y: usize,
    budget: u32,
) -> Result<Option<BoolFn>, CircuitError> {
    let mut bits = 0u8;
    for (bit, (a, b)) in [(false, false), (true, false), (false, true), (true, true)]
        .into_iter()
        .enumerate()
    {
        match evaluate(grid, inputs, a, b, budget)?.get(x, y) {
            Some(true) => bits |= 1 << bit,
            Some(false) => {}
            None => return Ok(None),
        }
    }
    Ok(Some(BoolFn::from_truth_table(bits)))
}

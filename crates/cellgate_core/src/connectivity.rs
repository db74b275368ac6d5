//! Forward reachability from the output taps.
//!
//! A cell is connected when its output feeds, through some chain of gates,
//! a tapped column of row 0. Marks are propagated from each connected cell
//! to the cells it reads, row-major, for at most `budget` passes. The graph
//! may contain cycles through the wrapped input row, so the budget is the
//! only termination guarantee and cells beyond that horizon stay unmarked.

use cellgate_data::{GateCode, Grid, OutputTaps};
use serde::{Deserialize, Serialize};

/// Connected flags for every cell of one grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityMap {
    size: usize,
    connected: Vec<bool>,
    passes: u32,
}

impl ConnectivityMap {
    #[inline]
    #[must_use]
    pub fn is_connected(&self, x: usize, y: usize) -> bool {
        self.connected[y * self.size + x]
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Relaxation passes that were actually run.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.connected.iter().filter(|c| **c).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.connected.chunks(self.size.max(1))
    }

    fn mark(&mut self, x: usize, y: usize) -> bool {
        let idx = y * self.size + x;
        let newly = !self.connected[idx];
        self.connected[idx] = true;
        newly
    }
}

/// Cells whose output `gate` at `(x, y)` reads from.
///
/// On the input row the left pin is the physical input, so only the
/// right-hand operand wraps to row 0.
#[must_use]
pub fn fan_in(grid: &Grid, x: usize, y: usize) -> [Option<(usize, usize)>; 2] {
    let below = grid.below(y);
    let right = grid.right(x);
    let gate = grid.gate(x, y);
    let left_src = (gate.reads_left() && y != grid.input_row()).then_some((x, below));
    let right_src = gate.reads_right().then_some((right, below));
    [left_src, right_src]
}

/// Marks every cell within `budget` propagation passes of an output tap.
#[must_use]
pub fn analyze_connectivity(grid: &Grid, outputs: &OutputTaps, budget: u32) -> ConnectivityMap {
    let size = grid.size();
    let mut map = ConnectivityMap {
        size,
        connected: vec![false; size * size],
        passes: 0,
    };
    for x in outputs.tapped().filter(|x| *x < size) {
        map.mark(x, 0);
    }

    for _ in 0..budget {
        map.passes += 1;
        let mut changed = false;
        for y in 0..size {
            for x in 0..size {
                if !map.is_connected(x, y) || grid.gate(x, y) == GateCode::Void {
                    continue;
                }
                for (sx, sy) in fan_in(grid, x, y).into_iter().flatten() {
                    changed |= map.mark(sx, sy);
                }
            }
        }
        if !changed {
            break;
        }
    }

    tracing::debug!(
        passes = map.passes,
        budget = budget,
        connected = map.count(),
        "Connectivity analysis finished"
    );
    map
}

use super::gate::GateCode;
use serde::{Deserialize, Serialize};

/// Grid side length used by the evolved circuits.
pub const DEFAULT_GRID_SIZE: usize = 64;

/// Square matrix of gate codes grown by the cellular automaton.
///
/// Row 0 sits next to the output taps, row `size - 1` next to the input
/// taps. Both axes wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    gates: Vec<GateCode>,
}

impl Grid {
    /// Grid filled with VOID cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            gates: vec![GateCode::Void; size * size],
        }
    }

    /// Builds a grid from rows. Returns `None` unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<GateCode>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            gates: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gate at column `x`, row `y`.
    #[inline]
    #[must_use]
    pub fn gate(&self, x: usize, y: usize) -> GateCode {
        self.gates[self.index(x, y)]
    }

    #[must_use]
    pub fn row(&self, y: usize) -> &[GateCode] {
        let start = self.index(0, y);
        &self.gates[start..start + self.size]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [GateCode] {
        let start = self.index(0, y);
        let size = self.size;
        &mut self.gates[start..start + size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GateCode]> {
        self.gates.chunks(self.size.max(1))
    }

    /// Index of the row below `y`, wrapping from the input row to row 0.
    #[inline]
    #[must_use]
    pub fn below(&self, y: usize) -> usize {
        (y + 1) % self.size
    }

    /// Index of the column right of `x`, wrapping.
    #[inline]
    #[must_use]
    pub fn right(&self, x: usize) -> usize {
        (x + 1) % self.size
    }

    /// Row nearest the input taps.
    #[must_use]
    pub fn input_row(&self) -> usize {
        self.size.saturating_sub(1)
    }

    pub fn count(&self, gate: GateCode) -> usize {
        self.gates.iter().filter(|g| **g == gate).count()
    }
}

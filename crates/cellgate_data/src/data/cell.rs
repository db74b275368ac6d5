use super::gate::GateCode;
use super::logic::BoolFn;
use serde::{Deserialize, Serialize};

/// Simulation state layered over one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    /// Gate copied from the grid.
    pub gate: GateCode,
    /// Whether the cell's output reaches an output tap.
    pub connected: bool,
    /// Resolved symbolic function, `None` while undetermined.
    pub value: Option<BoolFn>,
}

/// How a cell reads out after simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Output never reaches a tap.
    Disconnected,
    /// Observable and reduced to a function of A and B.
    Simplified(BoolFn),
    /// Observable but left as its raw gate.
    Irreducible(GateCode),
}

impl Cell {
    #[must_use]
    pub fn new(x: usize, y: usize, gate: GateCode) -> Self {
        Self {
            x,
            y,
            gate,
            connected: false,
            value: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> CellState {
        match (self.connected, self.value) {
            (false, _) => CellState::Disconnected,
            (true, Some(f)) => CellState::Simplified(f),
            (true, None) => CellState::Irreducible(self.gate),
        }
    }
}

/// Annotated cells of one simplification run, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMatrix {
    size: usize,
    cells: Vec<Cell>,
}

impl CellMatrix {
    /// Wraps row-major cells. `cells.len()` must be `size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.size + x]
    }

    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn connected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.connected).count()
    }

    /// Number of cells whose read-out state satisfies `pred`.
    pub fn count<F: Fn(CellState) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c.state())).count()
    }

    /// Cells that are both connected and resolved.
    pub fn simplified_count(&self) -> usize {
        self.count(|s| matches!(s, CellState::Simplified(_)))
    }

    pub fn irreducible_count(&self) -> usize {
        self.count(|s| matches!(s, CellState::Irreducible(_)))
    }
}

use serde::{Deserialize, Serialize};

/// Number of distinct CA symbols.
pub const COLOR: usize = 4;
/// Cells in a radius-1 neighborhood.
pub const NEIGHBORHOOD_SIZE: usize = 3;
/// `COLOR ^ NEIGHBORHOOD_SIZE`.
pub const RULE_TABLE_LENGTH: usize = COLOR * COLOR * COLOR;

/// Structural meaning of one grid cell.
///
/// The CA alphabet and the gate alphabet coincide, so rule tables, seed rows
/// and grid rows all store `GateCode` values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum GateCode {
    /// No fan-in, always outputs FALSE.
    #[default]
    Void = 0,
    /// Routes the cell directly below.
    PassLeft = 1,
    /// Routes the cell below and one column right.
    PassRight = 2,
    /// NAND of the two cells below.
    Nand = 3,
}

impl GateCode {
    pub const ALL: [GateCode; COLOR] = [
        GateCode::Void,
        GateCode::PassLeft,
        GateCode::PassRight,
        GateCode::Nand,
    ];

    /// Maps a raw symbol in `[0, COLOR)` to its gate.
    #[must_use]
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        Self::ALL.get(symbol as usize).copied()
    }

    #[inline]
    #[must_use]
    pub fn symbol(self) -> u8 {
        self as u8
    }

    /// Whether the gate reads the cell directly below.
    #[must_use]
    pub fn reads_left(self) -> bool {
        matches!(self, GateCode::PassLeft | GateCode::Nand)
    }

    /// Whether the gate reads the cell below and to the right.
    #[must_use]
    pub fn reads_right(self) -> bool {
        matches!(self, GateCode::PassRight | GateCode::Nand)
    }
}

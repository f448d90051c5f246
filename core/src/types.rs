use core::fmt;
use serde::{Deserialize, Serialize};

/// Position of a cell on the board, `0..BOARD_CELLS` in row-major order.
pub type CellIndex = u8;

/// Number of cells along one side of the board.
pub const BOARD_SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Row and column `(row, col)` of a cell.
pub type RowCol = (CellIndex, CellIndex);

pub const fn from_row_col((row, col): RowCol) -> CellIndex {
    row * BOARD_SIDE + col
}

/// Returns `index` when it addresses a cell on the board.
pub const fn checked_index(index: usize) -> Option<CellIndex> {
    if index < BOARD_CELLS {
        Some(index as CellIndex)
    } else {
        None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

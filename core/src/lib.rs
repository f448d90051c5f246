#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use evaluate::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod evaluate;
mod types;

/// The nine cells of a game, indexed in row-major order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Builds a board from an arbitrary snapshot, legal or not.
    pub const fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub const fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..).zip(self.cells.iter().copied())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index as usize]
    }
}

impl IndexMut<CellIndex> for Board {
    fn index_mut(&mut self, index: CellIndex) -> &mut Self::Output {
        &mut self.cells[index as usize]
    }
}

/// Result of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Placed,
    Won(Mark),
    Drawn,
}

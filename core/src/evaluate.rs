use serde::{Deserialize, Serialize};

use crate::*;

/// Three cell indices that win the game when they hold the same mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [CellIndex; 3]);

impl Line {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }

    /// The mark held by all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let mark = board[a].mark()?;
        (board[b] == Cell::Marked(mark) && board[c] == Cell::Marked(mark)).then_some(mark)
    }
}

/// Every winning line, in the order they are checked: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub winner: Option<Mark>,
    pub line: Option<Line>,
}

/// Finds the first completed line on `board`.
///
/// Works on any snapshot, including ones no legal game can reach. Whether a
/// full board without a winner is a draw is left to [`Outcome::of`].
pub fn evaluate(board: &Board) -> Evaluation {
    LINES
        .iter()
        .find_map(|line| {
            line.owner(board).map(|mark| Evaluation {
                winner: Some(mark),
                line: Some(*line),
            })
        })
        .unwrap_or_default()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Drawn,
}

impl Outcome {
    pub fn of(board: &Board) -> Self {
        match evaluate(board).winner {
            Some(mark) => Self::Won(mark),
            None if board.is_full() => Self::Drawn,
            None => Self::InProgress,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

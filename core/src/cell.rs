use crate::Mark;
use serde::{Deserialize, Serialize};

/// Content of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked(Mark),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) => Some(mark),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Self::Marked(mark)
    }
}

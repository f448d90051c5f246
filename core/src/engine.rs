use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Human readable summary of where the game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NextTurn(Mark),
    Winner(Mark),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NextTurn(mark) => write!(f, "Next turn: {mark}"),
            Self::Winner(mark) => write!(f, "Winner: {mark}"),
            Self::Draw => f.write_str("Draw! Cat's game."),
        }
    }
}

/// Board plus whose turn it is. Outcome is always derived from the board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    to_move: Mark,
}

impl PlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.board.cell_at(index)
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.board)
    }

    pub fn winning_line(&self) -> Option<Line> {
        evaluate(&self.board).line
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    pub fn moves_played(&self) -> usize {
        self.board.filled_count()
    }

    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::InProgress => Status::NextTurn(self.to_move),
            Outcome::Won(mark) => Status::Winner(mark),
            Outcome::Drawn => Status::Draw,
        }
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        self.board.cell_at(index).is_some_and(Cell::is_empty) && !self.is_finished()
    }

    /// Places the current mark at `index` and passes the turn.
    ///
    /// A rejected move leaves the engine untouched.
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome> {
        let index = checked_index(index).ok_or(GameError::InvalidIndex)?;
        self.check_not_finished()?;

        if !self.board[index].is_empty() {
            return Err(GameError::CellOccupied);
        }

        let mark = self.to_move;
        self.board[index] = Cell::Marked(mark);
        self.to_move = mark.other();
        log::trace!("{mark} placed at {index}");

        Ok(match self.outcome() {
            Outcome::InProgress => MoveOutcome::Placed,
            Outcome::Won(winner) => {
                log::debug!("{winner} wins with {:?}", self.winning_line());
                MoveOutcome::Won(winner)
            }
            Outcome::Drawn => {
                log::debug!("board full, game drawn");
                MoveOutcome::Drawn
            }
        })
    }

    pub fn reset(&mut self) {
        log::debug!("reset after {} moves", self.moves_played());
        *self = Self::new();
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn play_all(engine: &mut PlayEngine, moves: &[usize]) -> MoveOutcome {
        let mut last = MoveOutcome::Placed;
        for &index in moves {
            last = engine.play(index).unwrap();
        }
        last
    }

    fn assert_mark_balance(engine: &PlayEngine) {
        let xs = engine.board().count(Mark::X);
        let os = engine.board().count(Mark::O);
        assert!(xs == os || xs == os + 1, "x={xs} o={os}");
        assert_eq!(xs == os + 1, engine.to_move() == Mark::O);
    }

    #[test]
    fn new_engine_is_empty_with_x_to_move() {
        let engine = PlayEngine::new();

        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.to_move(), Mark::X);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.status().to_string(), "Next turn: X");
        assert_eq!(engine.moves_played(), 0);
    }

    #[test]
    fn top_row_wins_for_x() {
        let mut engine = PlayEngine::new();

        let outcome = play_all(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(outcome, MoveOutcome::Won(Mark::X));
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
        assert_eq!(engine.winning_line(), Some(Line([0, 1, 2])));
        assert_eq!(engine.status().to_string(), "Winner: X");
    }

    #[test]
    fn anti_diagonal_wins_for_o() {
        let mut engine = PlayEngine::new();

        let outcome = play_all(&mut engine, &[0, 2, 1, 4, 8, 6]);

        assert_eq!(outcome, MoveOutcome::Won(Mark::O));
        assert_eq!(engine.winning_line(), Some(Line([2, 4, 6])));
        assert_eq!(engine.status().to_string(), "Winner: O");
        assert_eq!(engine.to_move(), Mark::X);
    }

    #[test]
    fn filling_board_without_line_is_a_draw() {
        let mut engine = PlayEngine::new();

        let outcome = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(outcome, MoveOutcome::Drawn);
        assert_eq!(engine.outcome(), Outcome::Drawn);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.status().to_string(), "Draw! Cat's game.");

        use Cell::Marked;
        use Mark::*;
        assert_eq!(
            engine.board().cells(),
            &[
                Marked(X),
                Marked(O),
                Marked(X),
                Marked(X),
                Marked(O),
                Marked(O),
                Marked(O),
                Marked(X),
                Marked(X),
            ]
        );
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut engine = PlayEngine::new();

        assert_eq!(engine.play(0), Ok(MoveOutcome::Placed));
        assert_eq!(engine.play(0), Err(GameError::CellOccupied));

        assert_eq!(engine.cell_at(0), Some(Cell::Marked(Mark::X)));
        assert_eq!(engine.to_move(), Mark::O);
        assert_eq!(engine.moves_played(), 1);
        assert_eq!(engine.status().to_string(), "Next turn: O");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut engine = PlayEngine::new();

        assert_eq!(engine.play(9), Err(GameError::InvalidIndex));
        assert_eq!(engine.play(usize::MAX), Err(GameError::InvalidIndex));
        assert_eq!(engine, PlayEngine::new());
    }

    #[test]
    fn moves_after_win_are_rejected_until_reset() {
        let mut engine = PlayEngine::new();
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        let finished = engine.clone();

        for index in [5, 6, 7, 8] {
            assert!(!engine.can_play_at(index as CellIndex));
            assert_eq!(engine.play(index), Err(GameError::AlreadyEnded));
        }
        assert_eq!(engine, finished);

        engine.reset();

        assert_eq!(engine, PlayEngine::new());
        assert_eq!(engine.to_move(), Mark::X);
        assert!(engine.board().iter().all(|(_, cell)| cell.is_empty()));
        assert_eq!(engine.status().to_string(), "Next turn: X");
    }

    #[test]
    fn moves_after_draw_are_rejected() {
        let mut engine = PlayEngine::new();
        play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(engine.play(0), Err(GameError::AlreadyEnded));
        assert_eq!(engine.play(42), Err(GameError::InvalidIndex));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut engine = PlayEngine::new();
        play_all(&mut engine, &[4, 0, 8]);

        engine.reset();
        let once = engine.clone();
        engine.reset();

        assert_eq!(engine, once);
    }

    #[test]
    fn marks_stay_balanced_with_turn() {
        let mut engine = PlayEngine::new();
        assert_mark_balance(&engine);

        // Mix of accepted and rejected moves.
        for index in [4, 4, 0, 12, 8, 0, 2, 6, 1, 3, 5, 7] {
            let _ = engine.play(index);
            assert_mark_balance(&engine);
        }
    }

    #[test]
    fn can_play_at_tracks_empty_cells() {
        let mut engine = PlayEngine::new();
        engine.play(4).unwrap();

        assert!(!engine.can_play_at(4));
        assert!(engine.can_play_at(0));
        assert!(!engine.can_play_at(9));
    }

    #[test]
    fn cell_at_off_the_board_is_none() {
        let engine = PlayEngine::new();

        assert_eq!(engine.cell_at(9), None);
        assert_eq!(engine.cell_at(CellIndex::MAX), None);
        assert!(!engine.can_play_at(CellIndex::MAX));
    }

    #[test]
    fn snapshot_serializes_board_and_turn() {
        let mut engine = PlayEngine::new();
        engine.play(0).unwrap();

        let json = serde_json::to_value(&engine).unwrap();

        assert_eq!(json["to_move"], "O");
        assert_eq!(json["board"]["cells"][0], serde_json::json!({ "Marked": "X" }));
        assert_eq!(json["board"]["cells"][1], "Empty");
    }
}

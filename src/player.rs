//! The two kinds of participant: a human at the console and the search agent.
//!
//! Both place exactly one mark per call to `perform_move` and report where.

use std::io::{BufRead, Write};

use crate::board::{Board, Mark, Pos};
use crate::console::Console;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;

/// Human player answering column and row questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanInput {
    mark: Mark,
}

impl HumanInput {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Ask for a move until a legal one is entered.
    ///
    /// Column is asked before row. Illegal coordinates count against the
    /// console's retry budget, and the board is shown again before each
    /// retry.
    pub fn perform_move<R: BufRead, W: Write>(
        &self,
        board: &mut Board,
        console: &mut Console<R, W>,
    ) -> Result<Pos, GameError> {
        let col_text = format!(
            "\nIt's the turn of Player {}.\nPlease enter the column of your next move.",
            self.mark
        );
        let mut failures = 0;

        loop {
            let col = console.dialogue(&col_text, "Column: ", None)?;
            let row = console.dialogue("Please enter the row of your next move.", "Row: ", None)?;

            if let Some(pos) = to_pos(row, col).filter(|&pos| board.is_legal(pos)) {
                board.try_apply(pos, self.mark)?;
                return Ok(pos);
            }

            failures += 1;
            console.fail(failures, "invalid move")?;
            console.message(&format!(
                "\nINVALID MOVE, please try again. The cell is already occupied or outside of the board. [{failures}/{}]",
                console.retries()
            ))?;
            console.show_board(board)?;
        }
    }
}

fn to_pos(row: i64, col: i64) -> Option<Pos> {
    Some(Pos::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?))
}

/// Automated player driven by alpha-beta search.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    mark: Mark,
    engine: AIEngine,
}

impl SearchAgent {
    pub fn new(mark: Mark, engine: AIEngine) -> Self {
        Self { mark, engine }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Search, announce and play the best move.
    pub fn perform_move<R: BufRead, W: Write>(
        &mut self,
        board: &mut Board,
        console: &mut Console<R, W>,
    ) -> Result<Pos, GameError> {
        let MoveResult {
            best_move,
            score,
            time_ms,
            nodes,
            ..
        } = self.engine.get_move_with_stats(board, self.mark);
        let pos = best_move.ok_or(GameError::NoMove(self.mark))?;

        log::debug!(
            "agent {} plays {:?} (score {score}, {nodes} nodes, {time_ms}ms)",
            self.mark,
            pos
        );
        console.message(&format!(
            "\nIt's the turn of Player {}.\nMoving to [column|row]: [{}|{}]",
            self.mark, pos.col, pos.row
        ))?;

        board.try_apply(pos, self.mark)?;
        Ok(pos)
    }
}

/// A seat at the table.
#[derive(Debug, Clone)]
pub enum Player {
    Human(HumanInput),
    Agent(SearchAgent),
}

impl Player {
    pub fn human(mark: Mark) -> Self {
        Player::Human(HumanInput::new(mark))
    }

    pub fn agent(mark: Mark, engine: AIEngine) -> Self {
        Player::Agent(SearchAgent::new(mark, engine))
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human(human) => human.mark(),
            Player::Agent(agent) => agent.mark(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::Human(_) => "Human",
            Player::Agent(_) => "Computer",
        }
    }

    pub fn perform_move<R: BufRead, W: Write>(
        &mut self,
        board: &mut Board,
        console: &mut Console<R, W>,
    ) -> Result<Pos, GameError> {
        match self {
            Player::Human(human) => human.perform_move(board, console),
            Player::Agent(agent) => agent.perform_move(board, console),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(script: &str) -> TestConsole {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), 3)
    }

    fn printed(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_human_enters_column_then_row() {
        let mut board = Board::new(3, 4, 3).unwrap();
        let mut console = console("4\n2\n");
        let pos = HumanInput::new(Mark::O).perform_move(&mut board, &mut console).unwrap();
        assert_eq!(pos, Pos::new(2, 4));
        assert_eq!(board.cell(Pos::new(2, 4)), Some(Mark::O));

        let out = printed(console);
        let col = out.find("Column: ").unwrap();
        let row = out.find("Row: ").unwrap();
        assert!(col < row);
        assert!(out.contains("Player O"));
    }

    #[test]
    fn test_human_retries_illegal_move() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 1), Mark::X);
        // occupied, off the board, negative, then legal
        let mut console = console("1\n1\n4\n1\n-1\n2\n3\n3\n");
        let pos = HumanInput::new(Mark::O).perform_move(&mut board, &mut console).unwrap();
        assert_eq!(pos, Pos::new(3, 3));

        let out = printed(console);
        assert!(out.contains("INVALID MOVE, please try again. The cell is already occupied or outside of the board. [1/3]"));
        assert!(out.contains("[3/3]"));
        // board reprinted after each failure
        assert_eq!(out.matches("  1 | X |").count(), 3);
    }

    #[test]
    fn test_human_gives_up_after_retries() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(2, 2), Mark::X);
        let mut console = console(&"2\n2\n".repeat(4));
        let err = HumanInput::new(Mark::O).perform_move(&mut board, &mut console).unwrap_err();
        assert!(matches!(
            err,
            GameError::Input(InputError::RetriesExhausted { attempts: 4, reason: "invalid move" })
        ));
        assert_eq!(board.empty_count(), 8);
    }

    #[test]
    fn test_agent_announces_move() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 1), Mark::X);
        board.apply(Pos::new(1, 2), Mark::X);
        board.apply(Pos::new(2, 1), Mark::O);

        let mut console = console("");
        let mut player = Player::agent(Mark::X, AIEngine::new());
        assert_eq!(player.name(), "Computer");
        let pos = player.perform_move(&mut board, &mut console).unwrap();
        assert_eq!(pos, Pos::new(1, 3));
        assert_eq!(board.cell(pos), Some(Mark::X));
        assert!(printed(console).contains("Moving to [column|row]: [3|1]"));
    }

    #[test]
    fn test_agent_on_finished_board() {
        let mut board = Board::new(3, 3, 3).unwrap();
        for c in 1..=3 {
            board.apply(Pos::new(1, c), Mark::O);
        }
        let mut console = console("");
        let err = Player::agent(Mark::X, AIEngine::new())
            .perform_move(&mut board, &mut console)
            .unwrap_err();
        assert!(matches!(err, GameError::NoMove(Mark::X)));
    }
}

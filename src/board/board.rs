//! Board structure with incremental empty-cell tracking

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{BoardStatus, Mark, Pos};
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::rules::win;

/// Rectangular game board with a fixed win-length.
///
/// Mutation goes through [`Board::apply`] / [`Board::undo`] only, which keep
/// the empty-cell counter in step with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    win_length: u8,
    /// Row-major cells
    cells: Vec<Mark>,
    /// Number of `Mark::Empty` cells
    empty: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`BoardError::InvalidConfiguration`] if a dimension or the
    /// win-length is zero, or the win-length exceeds the smaller dimension.
    pub fn new(rows: u8, cols: u8, win_length: u8) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidConfiguration(format!(
                "board dimensions must be positive, got {rows}x{cols}"
            )));
        }
        if win_length == 0 {
            return Err(BoardError::InvalidConfiguration(
                "win length must be positive".to_string(),
            ));
        }
        if win_length > rows.min(cols) {
            return Err(BoardError::InvalidConfiguration(format!(
                "win length {win_length} exceeds the smaller board dimension {}",
                rows.min(cols)
            )));
        }

        let total = usize::from(rows) * usize::from(cols);
        Ok(Self {
            rows,
            cols,
            win_length,
            cells: vec![Mark::Empty; total],
            empty: total,
        })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        Self::new(config.rows, config.cols, config.win_length)
    }

    /// Clear every cell and restore the empty-cell counter
    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
        self.empty = self.cells.len();
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    #[inline]
    pub fn win_length(&self) -> u8 {
        self.win_length
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row == 0 || pos.col == 0 || pos.row > self.rows || pos.col > self.cols {
            return None;
        }
        Some(usize::from(pos.row - 1) * usize::from(self.cols) + usize::from(pos.col - 1))
    }

    /// Cell contents, `None` outside the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Mark> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// True iff `pos` is on the board and empty
    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.cell(pos) == Some(Mark::Empty)
    }

    /// Write `mark` into an empty cell.
    ///
    /// Hot-path primitive: the caller must have checked [`Board::is_legal`].
    /// Use [`Board::try_apply`] for unchecked input.
    #[inline]
    pub fn apply(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.is_legal(pos), "apply on illegal cell {pos:?}");
        debug_assert!(mark != Mark::Empty);
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = mark;
            self.empty -= 1;
        }
    }

    /// Checked variant of [`Board::apply`]
    pub fn try_apply(&mut self, pos: Pos, mark: Mark) -> Result<(), BoardError> {
        if mark == Mark::Empty || !self.is_legal(pos) {
            return Err(BoardError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.apply(pos, mark);
        Ok(())
    }

    /// Clear a cell previously filled by [`Board::apply`]
    #[inline]
    pub fn undo(&mut self, pos: Pos) {
        debug_assert!(
            matches!(self.cell(pos), Some(m) if m != Mark::Empty),
            "undo on empty cell {pos:?}"
        );
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = Mark::Empty;
            self.empty += 1;
        }
    }

    /// Apply a move that is undone when the returned guard drops.
    ///
    /// Same contract as [`Board::apply`]. Holding the guard borrows the board
    /// exclusively, so every exit path of the simulating code restores it.
    #[inline]
    pub fn simulate(&mut self, pos: Pos, mark: Mark) -> Simulated<'_> {
        self.apply(pos, mark);
        Simulated { board: self, pos }
    }

    /// Mark owning a run of `win_length` identical marks, or `Mark::Empty`
    pub fn winner(&self, win_length: u8) -> Mark {
        win::find_run(self, win_length).map_or(Mark::Empty, |run| run.mark)
    }

    /// Positions of the first winning run in scan order
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        win::find_run(self, self.win_length).map(|run| run.positions(self.win_length).collect())
    }

    pub fn status(&self) -> BoardStatus {
        match self.winner(self.win_length) {
            Mark::Empty if self.empty == 0 => BoardStatus::Draw,
            Mark::Empty => BoardStatus::InProgress,
            mark => BoardStatus::Win(mark),
        }
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |r| (1..=cols).map(move |c| Pos::new(r, c)))
    }
}

/// A simulated move, see [`Board::simulate`]
pub struct Simulated<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Deref for Simulated<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Simulated<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Simulated<'_> {
    fn drop(&mut self) {
        self.board.undo(self.pos);
    }
}

/// Textual dump: a header of column numbers, then one line per row
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for c in 1..=self.cols {
            write!(f, "|{c:^3}")?;
        }
        writeln!(f)?;

        let separator = "-".repeat(4 + 4 * usize::from(self.cols));
        for r in 1..=self.rows {
            writeln!(f, "{separator}")?;
            write!(f, "{r:>3} ")?;
            for c in 1..=self.cols {
                let mark = self.cell(Pos::new(r, c)).unwrap_or_default();
                write!(f, "| {mark} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Line detection for N-in-a-row
//!
//! A window of `len` cells slides along four direction vectors from every
//! starting cell. A window whose cells all hold the same non-empty mark is a
//! winning run. Directions are scanned in [`DIRECTIONS`] order and, within a
//! direction, starting cells in row-major order, so the first run found is
//! deterministic.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Rightward
    (1, 0),  // Downward
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// A run of identical marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub mark: Mark,
    pub start: Pos,
    pub direction: (i32, i32),
}

impl Run {
    /// Cells covered by the run
    pub fn positions(self, len: u8) -> impl Iterator<Item = Pos> {
        let (dr, dc) = self.direction;
        (0..i32::from(len)).filter_map(move |k| self.start.offset(dr, dc, k))
    }
}

/// Mark of the window starting at `start`, if every cell holds it
#[inline]
fn window_mark(board: &Board, start: Pos, (dr, dc): (i32, i32), len: u8) -> Option<Mark> {
    let mark = board.cell(start)?;
    if mark == Mark::Empty {
        return None;
    }
    for k in 1..i32::from(len) {
        let next = start.offset(dr, dc, k)?;
        if board.cell(next)? != mark {
            return None;
        }
    }
    Some(mark)
}

/// Find the first run of exactly `len` aligned identical marks
pub fn find_run(board: &Board, len: u8) -> Option<Run> {
    if len == 0 {
        return None;
    }
    for direction in DIRECTIONS {
        for start in board.positions() {
            if let Some(mark) = window_mark(board, start, direction, len) {
                return Some(Run {
                    mark,
                    start,
                    direction,
                });
            }
        }
    }
    None
}

/// Check if `mark` owns a run of `len`
pub fn has_run(board: &Board, mark: Mark, len: u8) -> bool {
    if len == 0 || mark == Mark::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&direction| {
        board
            .positions()
            .any(|start| window_mark(board, start, direction, len) == Some(mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: u8, cols: u8, len: u8, marks: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::new(rows, cols, len).unwrap();
        for &(r, c, m) in marks {
            board.apply(Pos::new(r, c), m);
        }
        board
    }

    #[test]
    fn test_row_run() {
        let board = board_with(3, 3, 3, &[(2, 1, Mark::X), (2, 2, Mark::X), (2, 3, Mark::X)]);
        let run = find_run(&board, 3).unwrap();
        assert_eq!(run.mark, Mark::X);
        assert_eq!(run.start, Pos::new(2, 1));
        assert_eq!(run.direction, (0, 1));
    }

    #[test]
    fn test_column_run() {
        let board = board_with(4, 4, 3, &[(2, 4, Mark::O), (3, 4, Mark::O), (4, 4, Mark::O)]);
        assert_eq!(find_run(&board, 3).map(|r| r.mark), Some(Mark::O));
        assert!(has_run(&board, Mark::O, 3));
        assert!(!has_run(&board, Mark::X, 3));
    }

    #[test]
    fn test_down_right_diagonal() {
        let board = board_with(5, 5, 4, &[
            (2, 2, Mark::X),
            (3, 3, Mark::X),
            (4, 4, Mark::X),
            (5, 5, Mark::X),
        ]);
        let run = find_run(&board, 4).unwrap();
        assert_eq!(run.direction, (1, 1));
        let cells: Vec<_> = run.positions(4).collect();
        assert_eq!(cells, vec![Pos::new(2, 2), Pos::new(3, 3), Pos::new(4, 4), Pos::new(5, 5)]);
    }

    #[test]
    fn test_down_left_diagonal() {
        let board = board_with(3, 3, 3, &[(1, 3, Mark::O), (2, 2, Mark::O), (3, 1, Mark::O)]);
        let run = find_run(&board, 3).unwrap();
        assert_eq!(run.mark, Mark::O);
        assert_eq!(run.start, Pos::new(1, 3));
        assert_eq!(run.direction, (1, -1));
    }

    #[test]
    fn test_shorter_run_is_not_a_win() {
        let board = board_with(5, 5, 4, &[(1, 1, Mark::X), (1, 2, Mark::X), (1, 3, Mark::X)]);
        assert!(find_run(&board, 4).is_none());
        assert!(find_run(&board, 3).is_some());
    }

    #[test]
    fn test_broken_run() {
        let board = board_with(3, 4, 3, &[(1, 1, Mark::X), (1, 2, Mark::X), (1, 3, Mark::O), (1, 4, Mark::X)]);
        assert!(find_run(&board, 3).is_none());
    }

    #[test]
    fn test_run_longer_than_board() {
        let board = board_with(3, 3, 3, &[(1, 1, Mark::X), (1, 2, Mark::X), (1, 3, Mark::X)]);
        assert!(find_run(&board, 4).is_none());
        assert!(find_run(&board, 0).is_none());
    }

    #[test]
    fn test_empty_board_has_no_run() {
        let board = Board::new(3, 3, 3).unwrap();
        assert!(find_run(&board, 3).is_none());
        assert!(!has_run(&board, Mark::Empty, 3));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // X completes a row and O a column; rows come first in scan order
        let board = board_with(3, 4, 3, &[
            (3, 1, Mark::X),
            (3, 2, Mark::X),
            (3, 3, Mark::X),
            (1, 4, Mark::O),
            (2, 4, Mark::O),
            (3, 4, Mark::O),
        ]);
        assert_eq!(find_run(&board, 3).map(|r| r.mark), Some(Mark::X));
    }
}

//! Exhaustive minimax without pruning.
//!
//! Slow, but trivially correct: used as the reference that the alpha-beta
//! searcher is checked against, and by the benchmarks as a baseline.

use crate::board::{Board, BoardStatus, Mark};
use crate::eval::{score, Heuristic};

use super::moves::generate_moves;

/// Minimax value of `board` for `ai`, with `moving` to play.
///
/// Uses the same leaf rules as [`super::Searcher`]: terminal boards are
/// scored by ply count, boards at the depth limit by `heuristic`.
pub fn minimax<H: Heuristic + ?Sized>(
    board: &mut Board,
    turn: u32,
    look_ahead: u32,
    moving: Mark,
    ai: Mark,
    heuristic: &H,
) -> i32 {
    match board.status() {
        BoardStatus::InProgress if look_ahead == 0 => return heuristic.evaluate(board, ai),
        BoardStatus::InProgress => {}
        BoardStatus::Draw | BoardStatus::Win(_) => return score(board, turn, ai),
    }

    let values = generate_moves(board).into_iter().map(|mov| {
        let mut sim = board.simulate(mov, moving);
        minimax(&mut sim, turn + 1, look_ahead - 1, moving.opponent(), ai, heuristic)
    });

    let best = if moving == ai { values.max() } else { values.min() };
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::Neutral;

    #[test]
    fn test_minimax_immediate_win() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 1), Mark::X);
        board.apply(Pos::new(1, 2), Mark::X);
        board.apply(Pos::new(2, 1), Mark::O);
        assert_eq!(minimax(&mut board, 0, 9, Mark::X, Mark::X, &Neutral), 99);
    }

    #[test]
    fn test_minimax_opponent_to_move() {
        // O completes the top row next ply
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 1), Mark::O);
        board.apply(Pos::new(1, 2), Mark::O);
        board.apply(Pos::new(2, 1), Mark::X);
        board.apply(Pos::new(3, 3), Mark::X);
        assert_eq!(minimax(&mut board, 0, 9, Mark::O, Mark::X, &Neutral), -99);
    }

    #[test]
    fn test_minimax_depth_zero_uses_heuristic() {
        let mut board = Board::new(3, 3, 3).unwrap();
        assert_eq!(minimax(&mut board, 0, 0, Mark::X, Mark::X, &Neutral), 0);
    }
}

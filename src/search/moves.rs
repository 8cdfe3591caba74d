//! Candidate move generation

use crate::board::{Board, Pos};

/// Every legal position, in row-major scan order.
///
/// The order is the search's tie-break order: among equally scored moves the
/// one generated first wins.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(board.empty_count());
    moves.extend(board.positions().filter(|&pos| board.is_legal(pos)));
    moves
}

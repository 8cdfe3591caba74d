//! Terminal scoring

use crate::board::{Board, Mark};

/// Score of an immediate win, reduced by one per ply taken to reach it
pub const WIN_SCORE: i32 = 100;

/// Score a board from `perspective`'s point of view.
///
/// - no winner: `0`
/// - `perspective` won: `WIN_SCORE - turns_elapsed`
/// - opponent won: `-WIN_SCORE + turns_elapsed`
///
/// `turns_elapsed` counts plies since the search root, so scores only
/// compare outcomes within a single search.
#[must_use]
pub fn score(board: &Board, turns_elapsed: u32, perspective: Mark) -> i32 {
    let turns = i32::try_from(turns_elapsed).unwrap_or(WIN_SCORE).min(WIN_SCORE);
    match board.winner(board.win_length()) {
        Mark::Empty => 0,
        winner if winner == perspective => WIN_SCORE - turns,
        _ => -WIN_SCORE + turns,
    }
}

//! Cutoff evaluation for boards still in progress

use crate::board::{Board, Mark};

/// Evaluates a non-terminal board when the search runs out of depth.
///
/// Scores must stay strictly inside `(-WIN_SCORE + look_ahead,
/// WIN_SCORE - look_ahead)` so a proven win or loss always outranks them.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, perspective: Mark) -> i32;
}

/// Treats every unfinished board as even.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neutral;

impl Heuristic for Neutral {
    #[inline]
    fn evaluate(&self, _board: &Board, _perspective: Mark) -> i32 {
        0
    }
}

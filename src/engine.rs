//! Agent-facing engine
//!
//! Wraps the alpha-beta [`Searcher`] for callers that hold a shared board
//! (the GUI worker thread, the console agent) and want timing alongside the
//! move.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::with_look_ahead(4);
//! let mut board = Board::new(3, 3, 3).unwrap();
//! board.apply(Pos::new(2, 2), Mark::X);
//!
//! let result = engine.get_move_with_stats(&board, Mark::O);
//! println!("Best move: {:?} in {}ms", result.best_move, result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Mark, Pos};
use crate::config::AgentConfig;
use crate::search::{SearchResult, Searcher, DEFAULT_LOOK_AHEAD};

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` if the game was already over
    pub best_move: Option<Pos>,
    /// Minimax score from the mover's perspective
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of pruned nodes
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Search agent with a fixed look-ahead.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with the default look-ahead of 9 plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_look_ahead(DEFAULT_LOOK_AHEAD)
    }

    #[must_use]
    pub fn with_look_ahead(look_ahead: u32) -> Self {
        Self {
            searcher: Searcher::new(look_ahead),
        }
    }

    #[must_use]
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::with_look_ahead(config.look_ahead)
    }

    /// Best move for `mark`, or `None` if the board is finished.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Search a private copy of `board` for `mark` and time it.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();
        let mut scratch = board.clone();
        let result = self.searcher.search(&mut scratch, mark);
        let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        MoveResult::from_search(result, time_ms)
    }

    pub fn set_look_ahead(&mut self, look_ahead: u32) {
        self.searcher.set_look_ahead(look_ahead);
    }

    #[must_use]
    pub fn look_ahead(&self) -> u32 {
        self.searcher.look_ahead()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.look_ahead(), 9);
        assert_eq!(AIEngine::with_look_ahead(0).look_ahead(), 1);
    }

    #[test]
    fn test_engine_from_config() {
        let engine = AIEngine::from_config(&AgentConfig { look_ahead: 4 });
        assert_eq!(engine.look_ahead(), 4);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 1), Mark::X);
        board.apply(Pos::new(1, 2), Mark::X);
        board.apply(Pos::new(2, 1), Mark::O);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Mark::X);
        assert_eq!(result.best_move, Some(Pos::new(1, 3)));
        assert_eq!(result.score, 99);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(3, 3, 3).unwrap();
        board.apply(Pos::new(1, 2), Mark::O);
        board.apply(Pos::new(2, 2), Mark::O);
        board.apply(Pos::new(1, 1), Mark::X);

        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Mark::X), Some(Pos::new(3, 2)));
    }

    #[test]
    fn test_engine_leaves_board_untouched() {
        let mut board = Board::new(4, 4, 3).unwrap();
        board.apply(Pos::new(2, 2), Mark::X);
        let before = board.clone();

        let mut engine = AIEngine::with_look_ahead(3);
        let _ = engine.get_move(&board, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_finished_game() {
        let mut board = Board::new(3, 3, 3).unwrap();
        for c in 1..=3 {
            board.apply(Pos::new(2, c), Mark::O);
        }
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Mark::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }
}

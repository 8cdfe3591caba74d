//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the move selection for the automated player.
//! It explores the game tree depth-first, simulating each candidate on the
//! caller's board and undoing it before the next one.
//!
//! # Scoring
//!
//! - Finished boards are scored by [`crate::eval::score`] from the agent's
//!   point of view, so a win in fewer plies beats a slower one and a loss in
//!   more plies beats a faster one.
//! - Boards still in progress at the depth limit go through the searcher's
//!   [`Heuristic`] (0 for the default [`Neutral`]).
//!
//! # Tie-break
//!
//! A candidate replaces the current best only on a strictly better score, so
//! among equal scores the first move in row-major scan order is kept.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! board.apply(Pos::new(1, 1), Mark::X);
//! board.apply(Pos::new(1, 2), Mark::X);
//! board.apply(Pos::new(2, 1), Mark::O);
//!
//! let mut searcher = Searcher::new(9);
//! let result = searcher.search(&mut board, Mark::X);
//! assert_eq!(result.best_move, Some(Pos::new(1, 3)));
//! assert_eq!(result.score, 99);
//! ```

use crate::board::{Board, BoardStatus, Mark, Pos};
use crate::eval::{score, Heuristic, Neutral};

use super::moves::generate_moves;

/// Default search depth: enough to see a 3x3 game to its end
pub const DEFAULT_LOOK_AHEAD: u32 = 9;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// A score, with the move that achieves it.
///
/// Leaf results carry no position; they are only read for their score by the
/// node one level up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Option<Pos>,
    pub score: i32,
}

impl ScoredMove {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self { pos: None, score }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes where the remaining siblings were pruned
    pub cutoffs: u64,
    /// Nodes scored without expansion (terminal or depth limit)
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` if the board was already finished
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching side's perspective
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher with a fixed look-ahead.
#[derive(Debug, Clone)]
pub struct Searcher<H = Neutral> {
    look_ahead: u32,
    heuristic: H,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher<Neutral> {
    /// Create a searcher with the neutral cutoff heuristic.
    ///
    /// A look-ahead of 0 is raised to 1 so the root always expands.
    #[must_use]
    pub fn new(look_ahead: u32) -> Self {
        Self::with_heuristic(look_ahead, Neutral)
    }
}

impl Default for Searcher<Neutral> {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD)
    }
}

impl<H: Heuristic> Searcher<H> {
    #[must_use]
    pub fn with_heuristic(look_ahead: u32, heuristic: H) -> Self {
        Self {
            look_ahead: look_ahead.max(1),
            heuristic,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn look_ahead(&self) -> u32 {
        self.look_ahead
    }

    pub fn set_look_ahead(&mut self, look_ahead: u32) {
        self.look_ahead = look_ahead.max(1);
    }

    /// Find the best move for `ai_mark`, which is the side to move.
    ///
    /// The board is borrowed exclusively for the duration of the search and
    /// is identical to its input state on return.
    pub fn search(&mut self, board: &mut Board, ai_mark: Mark) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let best = self.alpha_beta(board, 0, self.look_ahead, -INF, INF, ai_mark, ai_mark);

        log::debug!(
            "search {}: move {:?} score {} nodes {} cutoffs {}",
            ai_mark,
            best.pos,
            best.score,
            self.nodes,
            self.stats.cutoffs
        );

        SearchResult {
            best_move: best.pos,
            score: best.score,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// One node of the minimax recursion.
    ///
    /// `turn` counts plies since the root, `look_ahead` is the remaining
    /// depth, `moving` is the side to move here and `ai` the side whose
    /// score is maximised. Nodes where `moving == ai` raise `alpha`, the
    /// others lower `beta`; the node returns the bound it moved.
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        turn: u32,
        look_ahead: u32,
        mut alpha: i32,
        mut beta: i32,
        moving: Mark,
        ai: Mark,
    ) -> ScoredMove {
        self.nodes += 1;

        let status = board.status();
        if status != BoardStatus::InProgress || look_ahead == 0 {
            self.stats.leaves += 1;
            return ScoredMove::leaf(self.leaf_score(board, status, turn, ai));
        }

        let maximizing = moving == ai;
        let moves = generate_moves(board);
        let mut best = 0;

        for (i, &mov) in moves.iter().enumerate() {
            let child = {
                let mut sim = board.simulate(mov, moving);
                self.alpha_beta(&mut sim, turn + 1, look_ahead - 1, alpha, beta, moving.opponent(), ai)
            };

            if maximizing {
                if child.score > alpha {
                    alpha = child.score;
                    best = i;
                }
            } else if child.score < beta {
                beta = child.score;
                best = i;
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        ScoredMove {
            pos: moves.get(best).copied(),
            score: if maximizing { alpha } else { beta },
        }
    }

    #[inline]
    fn leaf_score(&self, board: &Board, status: BoardStatus, turn: u32, ai: Mark) -> i32 {
        match status {
            BoardStatus::InProgress => self.heuristic.evaluate(board, ai),
            BoardStatus::Draw | BoardStatus::Win(_) => score(board, turn, ai),
        }
    }
}

//! Search module
//!
//! Contains:
//! - Row-major move enumeration
//! - Alpha-beta minimax with a fixed look-ahead
//! - Exhaustive minimax, the unpruned reference

pub mod alphabeta;
pub mod minimax;
pub mod moves;

pub use alphabeta::{ScoredMove, SearchResult, SearchStats, Searcher, DEFAULT_LOOK_AHEAD};
pub use minimax::minimax;
pub use moves::generate_moves;

//! Evaluation module for N-in-a-row positions
//!
//! Finished boards are scored by [`terminal::score`], which ranks faster
//! wins and slower losses ahead of their alternatives. Boards still in
//! progress when the search runs out of depth go through a [`Heuristic`];
//! the default [`Neutral`] heuristic scores them 0.

pub mod heuristic;
pub mod terminal;

pub use heuristic::{Heuristic, Neutral};
pub use terminal::{score, WIN_SCORE};

//! N-in-a-row game engine
//!
//! Tic-tac-toe on a configurable rectangular board: two players alternately
//! place X and O, and the first to complete an unbroken run of the
//! configured length along a row, column or diagonal wins. A full board
//! without such a run is a draw.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with apply/undo and status
//! - [`rules`]: Winning-run detection
//! - [`eval`]: Terminal scoring and the depth-cutoff heuristic
//! - [`search`]: Move enumeration and alpha-beta minimax
//! - [`engine`]: Timed search facade used by the front ends
//! - [`console`], [`player`], [`game`]: Text front end and turn loop
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! let mut engine = AIEngine::new();
//!
//! board.apply(Pos::new(2, 2), Mark::X);
//!
//! if let Some(pos) = engine.get_move(&board, Mark::O) {
//!     board.apply(pos, Mark::O);
//!     println!("Agent plays column {}, row {}", pos.col, pos.row);
//! }
//! ```
//!
//! # Scoring
//!
//! The search scores finished positions from the agent's side: a win
//! reached after `t` plies is worth `100 - t`, a loss `-100 + t`, a draw 0.
//! Unfinished positions at the depth limit are neutral by default.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardStatus, Mark, Pos};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, GameError, InputError};
pub use game::{Game, GameMode, GameOutcome};
pub use search::{SearchResult, Searcher};

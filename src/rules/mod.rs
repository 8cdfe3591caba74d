//! Game rules for N-in-a-row
//!
//! The only rule with content is the win condition: an unbroken run of
//! win-length identical marks along a row, a column, or either diagonal.

pub mod win;

// Re-exports for convenient access
pub use win::{find_run, has_run, Run, DIRECTIONS};

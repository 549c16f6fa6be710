//! Game rules for Red-Blue Nim
//!
//! This module implements the rule set:
//! - Move generation and validation (take 1 or 2 from one pile)
//! - Terminal detection (both piles empty)
//! - Win conditions (standard and misère)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_terminal, legal_moves, validate_move, MoveList};
pub use win::{winner, WinMode};

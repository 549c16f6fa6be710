//! Evaluation module for Nim positions
//!
//! This module provides the score type and the scoring policy used by the
//! search:
//! - Terminal positions score as a win or loss depending on the win mode
//! - Positions at the depth cutoff score by remaining material

pub mod heuristic;
pub mod score;

pub use heuristic::{evaluate, material, BLUE_VALUE, RED_VALUE};
pub use score::Score;

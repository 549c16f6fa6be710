//! Main AI engine wrapping the search
//!
//! The engine owns the search configuration (depth and win mode), checks it
//! once at construction and times each decision.
//!
//! # Example
//!
//! ```
//! use nim::{AIEngine, GameState, WinMode};
//!
//! let mut engine = AIEngine::with_config(6, WinMode::Standard).unwrap();
//! let result = engine.get_move_with_stats(&GameState::new(3, 2));
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{GameState, Move};
use crate::error::{Error, Result};
use crate::eval::Score;
use crate::rules::WinMode;
use crate::search::{SearchResult, Searcher};

/// Look-ahead used by [`AIEngine::new`]
pub const DEFAULT_DEPTH: u8 = 5;
/// Deepest search the engine accepts
pub const MAX_DEPTH: u8 = 64;

/// Result of a move search with timing.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score of the position after the move
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Red-Blue Nim.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine with default settings (depth 5, standard rules).
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(WinMode::Standard),
            max_depth: DEFAULT_DEPTH,
        }
    }

    /// Create an engine with custom configuration.
    ///
    /// `depth` must lie in `1..=MAX_DEPTH`; anything else is an
    /// [`Error::InvalidArgument`].
    ///
    /// # Example
    ///
    /// ```
    /// use nim::{AIEngine, WinMode};
    ///
    /// assert!(AIEngine::with_config(8, WinMode::Misere).is_ok());
    /// assert!(AIEngine::with_config(-1, WinMode::Misere).is_err());
    /// ```
    pub fn with_config(depth: i32, mode: WinMode) -> Result<Self> {
        Ok(Self {
            searcher: Searcher::new(mode),
            max_depth: validate_depth(depth)?,
        })
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.max_depth
    }

    #[inline]
    pub fn mode(&self) -> WinMode {
        self.searcher.mode()
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` only if the game is already over.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState) -> Option<Move> {
        self.get_move_with_stats(state).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(state, self.max_depth);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a configured search depth.
pub fn validate_depth(depth: i32) -> Result<u8> {
    match u8::try_from(depth) {
        Ok(d) if (1..=MAX_DEPTH).contains(&d) => Ok(d),
        _ => Err(Error::invalid_argument(format!(
            "search depth must be between 1 and {MAX_DEPTH}, got {depth}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pile;

    #[test]
    fn test_engine_defaults() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
        assert_eq!(engine.mode(), WinMode::Standard);
    }

    #[test]
    fn test_invalid_depth_rejected() {
        assert!(matches!(
            AIEngine::with_config(-3, WinMode::Standard),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(AIEngine::with_config(0, WinMode::Standard).is_err());
        assert!(AIEngine::with_config(MAX_DEPTH as i32 + 1, WinMode::Standard).is_err());
        assert!(AIEngine::with_config(MAX_DEPTH as i32, WinMode::Standard).is_ok());
    }

    #[test]
    fn test_engine_uses_mode() {
        let state = GameState::new(2, 0);

        let mut standard = AIEngine::with_config(3, WinMode::Standard).unwrap();
        assert_eq!(standard.get_move(&state), Some(Move::new(Pile::Red, 2)));

        let mut misere = AIEngine::with_config(3, WinMode::Misere).unwrap();
        assert_eq!(misere.get_move(&state), Some(Move::new(Pile::Red, 1)));
    }

    #[test]
    fn test_move_result_stats() {
        let mut engine = AIEngine::with_config(4, WinMode::Standard).unwrap();
        let result = engine.get_move_with_stats(&GameState::new(3, 3));
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(result.depth, 4);
    }

    #[test]
    fn test_no_move_when_over() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&GameState::new(0, 0));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }
}

//! Red-Blue Nim with a minimax opponent
//!
//! Two piles of marbles, red and blue. Players alternate taking one or two
//! marbles from a single pile until both are empty:
//! - Standard rules: whoever takes the last marble wins
//! - Misère rules: whoever takes the last marble loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Piles, moves and players
//! - [`rules`]: Move generation, validation and win conditions
//! - [`eval`]: Score type and the terminal/material scoring policy
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: Configured AI engine with timing
//! - [`config`], [`cli`]: Match settings and command-line parsing
//! - [`console`], [`ui`]: Terminal and egui front-ends
//!
//! # Quick Start
//!
//! ```
//! use nim::{AIEngine, GameState, Move, Pile, WinMode};
//!
//! let mut state = GameState::new(3, 2);
//! let mut engine = AIEngine::with_config(6, WinMode::Standard).unwrap();
//!
//! // Human takes two blue marbles
//! state = state.apply(Move::new(Pile::Blue, 2)).unwrap();
//!
//! // AI responds
//! if let Some(mv) = engine.get_move(&state) {
//!     state = state.apply(mv).unwrap();
//!     println!("AI takes {} from {}", mv.count, mv.pile);
//! }
//! assert!(state.total() < 3);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{GameState, Move, Pile, Player};
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use eval::Score;
pub use rules::{is_terminal, legal_moves, WinMode};
pub use search::{best_move, minimax, SearchResult};

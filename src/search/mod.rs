//! Search module for the Nim AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - Root move selection with canonical tie-breaking
//! - An unpruned reference search

pub mod alphabeta;
pub mod plain;

pub use alphabeta::{best_move, minimax, SearchResult, SearchStats, Searcher};

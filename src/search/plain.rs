//! Unpruned minimax
//!
//! Visits every node to the given depth. Slower than [`super::alphabeta`]
//! but trivially correct, which makes it the reference the pruned search is
//! checked against.

use crate::board::GameState;
use crate::eval::{evaluate, Score};
use crate::rules::{legal_moves, WinMode};

use super::{SearchResult, SearchStats};

/// Minimax value of `state` without pruning.
#[must_use]
pub fn minimax(state: &GameState, depth: u8, maximizing: bool, mode: WinMode) -> Score {
    let mut nodes = 0;
    value(state, depth, maximizing, mode, &mut nodes)
}

/// Root move selection without pruning, same tie-breaking as the
/// alpha-beta searcher. Only `nodes` is filled in the statistics.
#[must_use]
pub fn best_move(state: &GameState, depth: u8, mode: WinMode) -> SearchResult {
    let mut nodes = 0;
    let mut best = None;
    let child_depth = depth.saturating_sub(1);

    for mv in legal_moves(state) {
        let child = state.apply_unchecked(mv);
        let score = value(&child, child_depth, false, mode, &mut nodes);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    let (best_move, score) = match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, evaluate(state, mode, true)),
    };

    SearchResult {
        best_move,
        score,
        depth,
        nodes,
        stats: SearchStats::default(),
    }
}

fn value(state: &GameState, depth: u8, maximizing: bool, mode: WinMode, nodes: &mut u64) -> Score {
    *nodes += 1;

    if state.is_terminal() || depth == 0 {
        return evaluate(state, mode, maximizing);
    }

    let children = legal_moves(state)
        .into_iter()
        .map(|mv| value(&state.apply_unchecked(mv), depth - 1, !maximizing, mode, nodes));

    let extremum = if maximizing { children.max() } else { children.min() };
    // Non-terminal states always have a move
    extremum.unwrap_or_else(|| evaluate(state, mode, maximizing))
}

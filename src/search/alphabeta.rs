//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Nim AI.
//! The root is always the automated player's turn (maximizing); the
//! opponent's replies minimize.
//!
//! # Features
//!
//! - Alpha-beta bounds passed by value, never shared between siblings
//! - Material heuristic at the depth cutoff
//! - Deterministic tie-breaking by canonical move order
//! - Node and cutoff counters for diagnostics
//!
//! # Example
//!
//! ```
//! use nim::search::Searcher;
//! use nim::{GameState, Move, Pile, WinMode};
//!
//! let mut searcher = Searcher::new(WinMode::Standard);
//! let result = searcher.search(&GameState::new(2, 0), 3);
//! assert_eq!(result.best_move, Some(Move::new(Pile::Red, 2)));
//! ```

use crate::board::{GameState, Move};
use crate::eval::{evaluate, Score};
use crate::rules::{legal_moves, WinMode};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sibling loops abandoned because `beta <= alpha`
    pub cutoffs: u64,
    /// Leaves scored as a win or loss
    pub terminal_leaves: u64,
    /// Leaves scored by material at the depth cutoff
    pub heuristic_leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the root has no legal moves
    pub best_move: Option<Move>,
    /// Score of the best move from the automated player's side
    pub score: Score,
    /// Depth the search was run to
    pub depth: u8,
    /// Total nodes visited below the root
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one win mode.
///
/// Holds only counters; every `search` starts them from zero, so results
/// never depend on earlier calls.
#[derive(Debug, Clone)]
pub struct Searcher {
    mode: WinMode,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(mode: WinMode) -> Self {
        Self {
            mode,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn mode(&self) -> WinMode {
        self.mode
    }

    /// Pick the move with the highest guaranteed score within `depth` plies.
    ///
    /// Moves are tried in canonical order and a later move replaces the
    /// incumbent only with a strictly greater score, so ties go to the
    /// earliest move. A terminal root returns no move and the score of the
    /// state itself.
    #[must_use]
    pub fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut moves = legal_moves(state).into_iter();
        let Some(first) = moves.next() else {
            return self.result(None, evaluate(state, self.mode, true), depth);
        };

        let child_depth = depth.saturating_sub(1);
        let mut best_move = first;
        let mut best_score = self.score_root_move(state, first, child_depth);

        for mv in moves {
            let score = self.score_root_move(state, mv, child_depth);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        self.result(Some(best_move), best_score, depth)
    }

    /// Full-window search of one root move; the opponent is to move next.
    fn score_root_move(&mut self, state: &GameState, mv: Move, depth: u8) -> Score {
        let child = state.apply_unchecked(mv);
        self.minimax(&child, depth, Score::NEG_INFINITY, Score::INFINITY, false)
    }

    /// Recursive alpha-beta evaluation of `state`.
    ///
    /// Returns the running extremum over the children searched before a
    /// cutoff; with a full window at the root this equals the unpruned
    /// minimax value.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        if state.is_terminal() || depth == 0 {
            if state.is_terminal() {
                self.stats.terminal_leaves += 1;
            } else {
                self.stats.heuristic_leaves += 1;
            }
            return evaluate(state, self.mode, maximizing);
        }

        if maximizing {
            let mut max_eval = Score::NEG_INFINITY;
            for mv in legal_moves(state) {
                let child = state.apply_unchecked(mv);
                let eval = self.minimax(&child, depth - 1, alpha, beta, false);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = Score::INFINITY;
            for mv in legal_moves(state) {
                let child = state.apply_unchecked(mv);
                let eval = self.minimax(&child, depth - 1, alpha, beta, true);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_eval
        }
    }

    /// Nodes visited since the last `search`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn result(&self, best_move: Option<Move>, score: Score, depth: u8) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats,
        }
    }
}

/// Best move for the side to move in `state`.
///
/// # Example
///
/// ```
/// use nim::{best_move, GameState, Move, Pile, WinMode};
///
/// // Misère: leave the opponent the last marble
/// let result = best_move(&GameState::new(2, 0), 4, WinMode::Misere);
/// assert_eq!(result.best_move, Some(Move::new(Pile::Red, 1)));
/// ```
#[must_use]
pub fn best_move(state: &GameState, depth: u8, mode: WinMode) -> SearchResult {
    Searcher::new(mode).search(state, depth)
}

/// Alpha-beta value of `state` with the given window and side to move.
#[must_use]
pub fn minimax(
    state: &GameState,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    mode: WinMode,
) -> Score {
    Searcher::new(mode).minimax(state, depth, alpha, beta, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pile;
    use crate::search::plain;

    const RED_1: Move = Move::new(Pile::Red, 1);
    const RED_2: Move = Move::new(Pile::Red, 2);
    const BLUE_1: Move = Move::new(Pile::Blue, 1);

    #[test]
    fn test_last_marble_standard_wins() {
        for depth in 1..=5 {
            let result = best_move(&GameState::new(1, 0), depth, WinMode::Standard);
            assert_eq!(result.best_move, Some(RED_1));
            assert_eq!(result.score, Score::Win);
        }
    }

    #[test]
    fn test_last_marble_misere_loses() {
        for depth in 1..=5 {
            let result = best_move(&GameState::new(1, 0), depth, WinMode::Misere);
            assert_eq!(result.best_move, Some(RED_1));
            assert_eq!(result.score, Score::Loss);
        }
    }

    #[test]
    fn test_mode_changes_choice() {
        let state = GameState::new(2, 0);

        let standard = best_move(&state, 2, WinMode::Standard);
        assert_eq!(standard.best_move, Some(RED_2));
        assert_eq!(standard.score, Score::Win);

        let misere = best_move(&state, 2, WinMode::Misere);
        assert_eq!(misere.best_move, Some(RED_1));
        assert_eq!(misere.score, Score::Win);
    }

    #[test]
    fn test_depth_zero_is_material() {
        let state = GameState::new(3, 4);
        for mode in [WinMode::Standard, WinMode::Misere] {
            for maximizing in [true, false] {
                let score = minimax(
                    &state,
                    0,
                    Score::NEG_INFINITY,
                    Score::INFINITY,
                    maximizing,
                    mode,
                );
                assert_eq!(score, Score::Finite(18));
            }
        }
    }

    #[test]
    fn test_tie_goes_to_first_canonical_move() {
        // Both replies lose in standard and both win in misère
        let state = GameState::new(1, 1);

        let standard = best_move(&state, 4, WinMode::Standard);
        assert_eq!(standard.best_move, Some(RED_1));
        assert_eq!(standard.score, Score::Loss);

        let misere = best_move(&state, 4, WinMode::Misere);
        assert_eq!(misere.best_move, Some(RED_1));
        assert_eq!(misere.score, Score::Win);
    }

    #[test]
    fn test_all_losing_still_returns_move() {
        // {0,3}: every line hands the opponent the last marble
        let result = best_move(&GameState::new(0, 3), 6, WinMode::Standard);
        assert_eq!(result.score, Score::Loss);
        assert_eq!(result.best_move, Some(BLUE_1));
    }

    #[test]
    fn test_heuristic_root_depth_one() {
        // Children scored by material: Red-1 -> 8, Blue-1 -> 7, Red-2 -> 6, Blue-2 -> 4
        let result = best_move(&GameState::new(2, 2), 1, WinMode::Standard);
        assert_eq!(result.best_move, Some(RED_1));
        assert_eq!(result.score, Score::Finite(8));
        assert_eq!(result.stats.heuristic_leaves, 4);
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let empty = GameState::new(0, 0);

        let standard = best_move(&empty, 3, WinMode::Standard);
        assert_eq!(standard.best_move, None);
        assert_eq!(standard.score, Score::Loss);
        assert_eq!(standard.nodes, 0);

        let misere = best_move(&empty, 3, WinMode::Misere);
        assert_eq!(misere.best_move, None);
        assert_eq!(misere.score, Score::Win);
    }

    #[test]
    fn test_search_is_deterministic() {
        let state = GameState::new(6, 5);
        let mut searcher = Searcher::new(WinMode::Misere);
        let first = searcher.search(&state, 6);
        let second = searcher.search(&state, 6);
        assert_eq!(first, second);
        assert_eq!(first, best_move(&state, 6, WinMode::Misere));
    }

    #[test]
    fn test_pruning_saves_nodes() {
        let state = GameState::new(5, 5);
        let pruned = best_move(&state, 6, WinMode::Standard);
        let full = plain::best_move(&state, 6, WinMode::Standard);

        assert_eq!(pruned.score, full.score);
        assert_eq!(pruned.best_move, full.best_move);
        assert!(pruned.stats.cutoffs > 0);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn test_forced_win_found_deep() {
        // Standard: leaving a multiple of three in one pile wins
        let result = best_move(&GameState::new(4, 0), 8, WinMode::Standard);
        assert_eq!(result.best_move, Some(RED_1));
        assert_eq!(result.score, Score::Win);
    }

    #[test]
    fn test_searcher_counters_reset() {
        let mut searcher = Searcher::new(WinMode::Standard);
        let big = searcher.search(&GameState::new(6, 6), 5);
        let small = searcher.search(&GameState::new(1, 0), 5);
        assert!(big.nodes > small.nodes);
        assert_eq!(small.nodes, 1);
        assert_eq!(searcher.nodes(), 1);
        assert_eq!(searcher.stats().terminal_leaves, 1);
    }
}

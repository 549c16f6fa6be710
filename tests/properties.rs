//! Property tests for the state model and the alpha-beta search

use nim::search::{plain, Searcher};
use nim::{best_move, is_terminal, legal_moves, minimax, GameState, Move, Pile, Score, WinMode};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = WinMode> {
    prop_oneof![Just(WinMode::Standard), Just(WinMode::Misere)]
}

fn small_state() -> impl Strategy<Value = GameState> {
    (0u32..7, 0u32..7).prop_map(|(red, blue)| GameState::new(red, blue))
}

fn canonical_rank(mv: &Move) -> (u32, u8) {
    let pile = match mv.pile {
        Pile::Red => 0,
        Pile::Blue => 1,
    };
    (mv.count, pile)
}

proptest! {
    #[test]
    fn terminal_iff_both_piles_empty(red in 0u32..1000, blue in 0u32..1000) {
        let state = GameState::new(red, blue);
        prop_assert_eq!(is_terminal(&state), red == 0 && blue == 0);
        prop_assert_eq!(legal_moves(&state).is_empty(), is_terminal(&state));
    }

    #[test]
    fn legal_moves_are_legal_and_ordered(red in 0u32..1000, blue in 0u32..1000) {
        let state = GameState::new(red, blue);
        let moves = legal_moves(&state);

        if !state.is_terminal() {
            prop_assert!((1..=4).contains(&moves.len()));
        }
        for pair in moves.windows(2) {
            prop_assert!(canonical_rank(&pair[0]) < canonical_rank(&pair[1]));
        }
        for mv in &moves {
            let next = state.apply(*mv).unwrap();
            prop_assert_eq!(next.total() + u64::from(mv.count), state.total());
        }
    }

    #[test]
    fn illegal_moves_rejected(red in 0u32..4, blue in 0u32..4, count in 0u32..5, blue_pile in any::<bool>()) {
        let state = GameState::new(red, blue);
        let pile = if blue_pile { Pile::Blue } else { Pile::Red };
        let mv = Move::new(pile, count);

        let legal = legal_moves(&state).contains(&mv);
        prop_assert_eq!(state.apply(mv).is_ok(), legal);
    }

    #[test]
    fn pruning_preserves_root_result(state in small_state(), depth in 0u8..8, mode in any_mode()) {
        let pruned = best_move(&state, depth, mode);
        let full = plain::best_move(&state, depth, mode);

        prop_assert_eq!(pruned.score, full.score);
        prop_assert_eq!(pruned.best_move, full.best_move);
        prop_assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn full_window_minimax_matches_plain(
        state in small_state(),
        depth in 0u8..8,
        maximizing in any::<bool>(),
        mode in any_mode(),
    ) {
        let pruned = minimax(&state, depth, Score::NEG_INFINITY, Score::INFINITY, maximizing, mode);
        prop_assert_eq!(pruned, plain::minimax(&state, depth, maximizing, mode));
    }

    #[test]
    fn search_is_deterministic(state in small_state(), depth in 1u8..7, mode in any_mode()) {
        let mut searcher = Searcher::new(mode);
        let first = searcher.search(&state, depth);
        let second = searcher.search(&state, depth);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn depth_zero_is_material(red in 0u32..1000, blue in 0u32..1000, maximizing in any::<bool>(), mode in any_mode()) {
        prop_assume!(red > 0 || blue > 0);
        let state = GameState::new(red, blue);
        let score = minimax(&state, 0, Score::NEG_INFINITY, Score::INFINITY, maximizing, mode);
        prop_assert_eq!(score, Score::Finite(i64::from(red) * 2 + i64::from(blue) * 3));
    }

    #[test]
    fn chosen_move_is_legal(state in small_state(), depth in 1u8..7, mode in any_mode()) {
        let result = best_move(&state, depth, mode);
        match result.best_move {
            Some(mv) => {
                prop_assert!(legal_moves(&state).contains(&mv));
            }
            None => {
                prop_assert!(state.is_terminal());
            }
        }
    }
}

/// Single-pile standard Nim with takes of 1-2 is lost for the mover exactly
/// on multiples of three; a deep enough search must agree.
#[test]
fn single_pile_standard_theory() {
    for red in 1u32..=9 {
        let result = best_move(&GameState::new(red, 0), 12, WinMode::Standard);
        let expected = if red % 3 == 0 { Score::Loss } else { Score::Win };
        assert_eq!(result.score, expected, "red = {red}");
    }
}

/// In misère play the mover loses exactly when the pile is 1 mod 3.
#[test]
fn single_pile_misere_theory() {
    for red in 1u32..=9 {
        let result = best_move(&GameState::new(red, 0), 12, WinMode::Misere);
        let expected = if red % 3 == 1 { Score::Loss } else { Score::Win };
        assert_eq!(result.score, expected, "red = {red}");
    }
}

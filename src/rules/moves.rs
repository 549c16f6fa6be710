//! Legal move generation and validation

use smallvec::SmallVec;

use crate::board::{GameState, Move, Pile, MAX_TAKE};
use crate::error::{Error, Result};

/// Move list; a position never has more than four legal moves
pub type MoveList = SmallVec<[Move; 4]>;

/// Generation order. Search ties are broken by this order, so it is fixed.
const CANONICAL_ORDER: [Move; 4] = [
    Move::new(Pile::Red, 1),
    Move::new(Pile::Blue, 1),
    Move::new(Pile::Red, 2),
    Move::new(Pile::Blue, 2),
];

/// Check if the game is over (both piles empty)
#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

/// Generate all legal moves in canonical order: Red-1, Blue-1, Red-2, Blue-2.
///
/// Returns an empty list iff the state is terminal.
///
/// # Example
///
/// ```
/// use nim::{legal_moves, GameState, Move, Pile};
///
/// let moves = legal_moves(&GameState::new(2, 1));
/// assert_eq!(
///     moves.as_slice(),
///     &[Move::new(Pile::Red, 1), Move::new(Pile::Blue, 1), Move::new(Pile::Red, 2)]
/// );
/// ```
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    CANONICAL_ORDER
        .iter()
        .copied()
        .filter(|mv| mv.count <= state.count(mv.pile))
        .collect()
}

/// Check that `mv` can be played from `state`
pub fn validate_move(state: &GameState, mv: Move) -> Result<()> {
    let available = state.count(mv.pile);
    if mv.count == 0 || mv.count > MAX_TAKE || mv.count > available {
        return Err(Error::InvalidMove {
            pile: mv.pile,
            count: mv.count,
            available,
        });
    }
    Ok(())
}

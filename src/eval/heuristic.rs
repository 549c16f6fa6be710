//! Scoring policy for Nim positions
//!
//! Terminal positions are judged by who moved last; anything else reached
//! at the depth cutoff is scored by the material left on the table.

use crate::board::GameState;
use crate::rules::WinMode;

use super::Score;

/// Points per red marble
pub const RED_VALUE: i64 = 2;
/// Points per blue marble
pub const BLUE_VALUE: i64 = 3;

/// Material left on the table: `red * 2 + blue * 3`.
#[inline]
#[must_use]
pub fn material(state: &GameState) -> i64 {
    i64::from(state.red) * RED_VALUE + i64::from(state.blue) * BLUE_VALUE
}

/// Score `state` from the maximizing player's point of view.
///
/// `maximizing` is true when the maximizer is the side to move. At a
/// terminal state the side to move did not make the emptying move, so:
/// - Standard: the previous mover won, `Loss` if the maximizer is to move
/// - Misère: the previous mover lost, `Win` if the maximizer is to move
///
/// Non-terminal states get [`material`] regardless of mode or side.
///
/// # Example
///
/// ```
/// use nim::eval::{evaluate, Score};
/// use nim::{GameState, WinMode};
///
/// let empty = GameState::new(0, 0);
/// assert_eq!(evaluate(&empty, WinMode::Standard, false), Score::Win);
/// assert_eq!(evaluate(&empty, WinMode::Misere, false), Score::Loss);
/// assert_eq!(evaluate(&GameState::new(1, 2), WinMode::Misere, true), Score::Finite(8));
/// ```
#[must_use]
pub fn evaluate(state: &GameState, mode: WinMode, maximizing: bool) -> Score {
    if !state.is_terminal() {
        return Score::Finite(material(state));
    }

    let maximizer_moved_last = !maximizing;
    let maximizer_wins = match mode {
        WinMode::Standard => maximizer_moved_last,
        WinMode::Misere => !maximizer_moved_last,
    };

    if maximizer_wins {
        Score::Win
    } else {
        Score::Loss
    }
}

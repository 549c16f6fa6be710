//! Pile counts and move application

use std::fmt;

use super::{Move, Pile};
use crate::error::{Error, Result};

/// Immutable game position: the marbles left in each pile.
///
/// Every transition returns a new value, so search branches never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    pub red: u32,
    pub blue: u32,
}

impl GameState {
    #[inline]
    pub const fn new(red: u32, blue: u32) -> Self {
        Self { red, blue }
    }

    /// Build a state from signed counts, rejecting negatives.
    pub fn from_counts(red: i64, blue: i64) -> Result<Self> {
        let convert = |pile: Pile, count: i64| {
            u32::try_from(count).map_err(|_| {
                Error::invalid_argument(format!(
                    "{pile} pile count must be between 0 and {}, got {count}",
                    u32::MAX
                ))
            })
        };
        Ok(Self::new(convert(Pile::Red, red)?, convert(Pile::Blue, blue)?))
    }

    /// Marbles left in `pile`
    #[inline]
    pub fn count(&self, pile: Pile) -> u32 {
        match pile {
            Pile::Red => self.red,
            Pile::Blue => self.blue,
        }
    }

    /// Both piles empty
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.red == 0 && self.blue == 0
    }

    /// Total marbles on the table
    #[inline]
    pub fn total(&self) -> u64 {
        u64::from(self.red) + u64::from(self.blue)
    }

    /// Apply a move, returning the successor state.
    ///
    /// Fails with [`Error::InvalidMove`] when the move is not legal here;
    /// the count is never clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use nim::{GameState, Move, Pile};
    ///
    /// let state = GameState::new(3, 1);
    /// let next = state.apply(Move::new(Pile::Red, 2)).unwrap();
    /// assert_eq!(next, GameState::new(1, 1));
    /// assert!(state.apply(Move::new(Pile::Blue, 2)).is_err());
    /// ```
    pub fn apply(&self, mv: Move) -> Result<GameState> {
        crate::rules::validate_move(self, mv)?;
        Ok(self.apply_unchecked(mv))
    }

    /// Apply a move already known to be legal (e.g. from `legal_moves`)
    #[inline]
    pub(crate) fn apply_unchecked(&self, mv: Move) -> GameState {
        debug_assert!(mv.count >= 1 && mv.count <= self.count(mv.pile));
        match mv.pile {
            Pile::Red => Self::new(self.red - mv.count, self.blue),
            Pile::Blue => Self::new(self.red, self.blue - mv.count),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "red: {}, blue: {}", self.red, self.blue)
    }
}

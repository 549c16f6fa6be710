//! Match configuration shared by the GUI and console front-ends

use crate::board::{GameState, Player};
use crate::engine::{validate_depth, DEFAULT_DEPTH};
use crate::error::{Error, Result};
use crate::rules::WinMode;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Piles at the start of the game
    pub initial: GameState,
    pub mode: WinMode,
    /// Who makes the first move
    pub first_player: Player,
    /// Computer look-ahead in plies
    pub depth: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial: GameState::new(10, 10),
            mode: WinMode::Standard,
            first_player: Player::Computer,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl MatchConfig {
    /// Build a configuration from unchecked user values.
    ///
    /// Negative pile counts, two empty piles and depths outside the
    /// engine's range are rejected with [`crate::Error::InvalidArgument`].
    pub fn new(red: i64, blue: i64, mode: WinMode, first_player: Player, depth: i32) -> Result<Self> {
        let initial = GameState::from_counts(red, blue)?;
        if initial.is_terminal() {
            return Err(Error::invalid_argument("the game needs at least one marble"));
        }

        Ok(Self {
            initial,
            mode,
            first_player,
            depth: validate_depth(depth)?,
        })
    }
}

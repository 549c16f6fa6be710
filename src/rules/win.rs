//! Win conditions

use std::fmt;

use crate::board::Player;

/// Which side the emptying move favours. Fixed for a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WinMode {
    /// Whoever takes the last marble wins
    #[default]
    Standard,
    /// Whoever takes the last marble loses
    Misere,
}

impl fmt::Display for WinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinMode::Standard => f.write_str("standard"),
            WinMode::Misere => f.write_str("misère"),
        }
    }
}

/// Winner of a finished game, given who made the emptying move.
#[inline]
pub fn winner(last_mover: Player, mode: WinMode) -> Player {
    match mode {
        WinMode::Standard => last_mover,
        WinMode::Misere => last_mover.opponent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_last_mover_wins() {
        assert_eq!(winner(Player::Human, WinMode::Standard), Player::Human);
        assert_eq!(winner(Player::Computer, WinMode::Standard), Player::Computer);
    }

    #[test]
    fn test_misere_last_mover_loses() {
        assert_eq!(winner(Player::Human, WinMode::Misere), Player::Computer);
        assert_eq!(winner(Player::Computer, WinMode::Misere), Player::Human);
    }
}

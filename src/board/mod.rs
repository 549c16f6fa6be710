//! Board representation for Red-Blue Nim

pub mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use state::GameState;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Largest number of marbles a single move may take
pub const MAX_TAKE: u32 = 2;

/// Marble piles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    Red,
    Blue,
}

impl Pile {
    pub const ALL: [Pile; 2] = [Pile::Red, Pile::Blue];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Pile::Red => "red",
            Pile::Blue => "blue",
        }
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Pile::Red),
            "blue" | "b" => Ok(Pile::Blue),
            _ => Err(Error::ParseMove {
                input: s.to_string(),
                reason: "expected 'red' or 'blue'".to_string(),
            }),
        }
    }
}

/// A move: take `count` marbles from `pile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pile: Pile,
    pub count: u32,
}

impl Move {
    #[inline]
    pub const fn new(pile: Pile, count: u32) -> Self {
        Self { pile, count }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pile, self.count)
    }
}

/// Parses `"<pile> <count>"`, e.g. `"red 2"` or `"b 1"`.
impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(pile), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::ParseMove {
                input: s.to_string(),
                reason: "expected '<pile> <count>'".to_string(),
            });
        };

        let pile = pile.parse::<Pile>()?;
        let count = count.parse::<u32>().map_err(|_| Error::ParseMove {
            input: s.to_string(),
            reason: format!("'{count}' is not a marble count"),
        })?;

        Ok(Move::new(pile, count))
    }
}

/// Participants in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => f.write_str("human"),
            Player::Computer => f.write_str("computer"),
        }
    }
}

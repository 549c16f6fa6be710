//! Search score with exact win/loss sentinels

use std::fmt;

/// Search score.
///
/// Totally ordered as `Loss < Finite(_) < Win` (the derived order follows
/// variant declaration), so the sentinels compare correctly against any
/// heuristic value without floating-point infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// The maximizing side has lost
    Loss,
    /// Heuristic value at the depth cutoff
    Finite(i64),
    /// The maximizing side has won
    Win,
}

impl Score {
    /// Initial alpha bound
    pub const NEG_INFINITY: Score = Score::Loss;
    /// Initial beta bound
    pub const INFINITY: Score = Score::Win;

    #[inline]
    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Finite(_))
    }

    /// Real-valued view, with the sentinels mapped to infinities
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Score::Loss => f64::NEG_INFINITY,
            Score::Finite(v) => v as f64,
            Score::Win => f64::INFINITY,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => f.write_str("-inf"),
            Score::Finite(v) => write!(f, "{v}"),
            Score::Win => f.write_str("+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_ordering() {
        assert!(Score::Loss < Score::Finite(i64::MIN));
        assert!(Score::Finite(i64::MAX) < Score::Win);
        assert!(Score::Finite(-5) < Score::Finite(3));
        assert_eq!(Score::NEG_INFINITY, Score::Loss);
        assert_eq!(Score::INFINITY, Score::Win);
    }

    #[test]
    fn test_max_min() {
        assert_eq!(Score::Loss.max(Score::Finite(0)), Score::Finite(0));
        assert_eq!(Score::Win.min(Score::Finite(7)), Score::Finite(7));
    }

    #[test]
    fn test_to_f64_and_display() {
        assert_eq!(Score::Loss.to_f64(), f64::NEG_INFINITY);
        assert_eq!(Score::Win.to_f64(), f64::INFINITY);
        assert_eq!(Score::Finite(12).to_f64(), 12.0);
        assert_eq!(Score::Loss.to_string(), "-inf");
        assert_eq!(Score::Finite(-4).to_string(), "-4");
        assert_eq!(Score::Win.to_string(), "+inf");
        assert!(Score::Win.is_decisive());
        assert!(!Score::Finite(0).is_decisive());
    }
}

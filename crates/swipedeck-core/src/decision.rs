//! Decision values produced when a card gesture ends.

use std::fmt;

/// Outcome of a completed card gesture.
///
/// Produced exactly once per gesture, by the release (or cancel) path.
/// `None` means the gesture ended below the commit threshold and the card
/// returns to rest; every other value consumes the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    /// Rightward commit.
    Like,
    /// Leftward commit.
    Pass,
    /// Upward commit, only when the vertical policy is enabled.
    SuperLike,
    /// Sub-threshold release; the card stays.
    None,
}

impl SwipeDecision {
    /// Whether this decision consumes the card.
    pub fn is_commit(&self) -> bool {
        !matches!(self, SwipeDecision::None)
    }
}

impl fmt::Display for SwipeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDecision::Like => write!(f, "like"),
            SwipeDecision::Pass => write!(f, "pass"),
            SwipeDecision::SuperLike => write!(f, "super-like"),
            SwipeDecision::None => write!(f, "none"),
        }
    }
}

//! Sequencing errors for the swipe state machine.
//!
//! The controller has no I/O; the only way it can fail is a caller
//! delivering gesture events out of order. Those are programming errors
//! and are surfaced as values rather than swallowed, so a card can never
//! silently stick in a half-dragged state.

use crate::SwipeDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// `gesture_update` was called with no active drag.
    UpdateWithoutStart,
    /// `gesture_end` was called with no active drag.
    EndWithoutStart,
    /// `gesture_cancel` was called with no active drag.
    CancelWithoutStart,
    /// A new gesture or programmatic commit arrived while a drag was
    /// still active.
    GestureInProgress,
    /// The card was already consumed by a committed decision and must be
    /// replaced (via `reset`) before it can be interacted with again.
    CardConsumed(SwipeDecision),
}

impl std::fmt::Display for GestureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureError::UpdateWithoutStart => {
                write!(f, "gesture update without an active drag")
            }
            GestureError::EndWithoutStart => write!(f, "gesture end without an active drag"),
            GestureError::CancelWithoutStart => {
                write!(f, "gesture cancel without an active drag")
            }
            GestureError::GestureInProgress => write!(f, "a gesture is already in progress"),
            GestureError::CardConsumed(decision) => {
                write!(f, "card already consumed by {decision}; reset it first")
            }
        }
    }
}

impl std::error::Error for GestureError {}

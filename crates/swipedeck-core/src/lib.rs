//! Gesture core for Swipedeck
//!
//! This crate owns the swipe-card interaction state machine: per-card
//! configuration, the drag-to-decision controller, and the velocity
//! tracking used to derive release velocities from raw pointer samples.
//! It performs no rendering and no I/O; a UI layer feeds it pointer
//! events and animates the poses and motion targets it returns.

mod config;
mod controller;
mod decision;
mod error;
mod geometry;
mod gesture_constants;
mod velocity_tracker;

pub use config::{SuperLikePolicy, SwipeConfig};
pub use controller::{CardPose, MotionKind, MotionTarget, SwipeController, SwipeRelease};
pub use decision::SwipeDecision;
pub use error::GestureError;
pub use geometry::{Point, Size};
pub use gesture_constants::{
    DEFAULT_COMMIT_THRESHOLD_RATIO, DEFAULT_MAX_ROTATION_DEGREES, MAX_FLING_VELOCITY,
    OFF_SCREEN_RATIO,
};
pub use velocity_tracker::VelocityTracker1D;

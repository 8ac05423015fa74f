//! Testing utilities and harness for Swipedeck
//!
//! Robot-style drivers that replay scripted gestures against a
//! [`SwipeController`](swipedeck_core::SwipeController) or a full
//! [`DiscoverSession`](swipedeck_profiles::DiscoverSession), with
//! deterministic synthetic timestamps. Tests and the demo app use these
//! instead of hand-rolling event loops.

mod robot;

pub use robot::{plan_for, settle_plan, DeckRobot, GestureRobot, FRAME_MS};

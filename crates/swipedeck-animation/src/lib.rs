//! Animation system for Swipedeck
//!
//! Spring physics for the two terminal card motions: the spring-back that
//! recovers an uncommitted card, and the fly-off that carries a committed
//! card past the screen edge. Everything here is a pure stepper; there is
//! no frame clock. The hosting render loop advances a [`MotionPlan`] with
//! its own elapsed time and draws the poses it returns.

mod motion;
mod spec;
mod spring;

pub use motion::{CardAnimationConfig, MotionPlan};
pub use spec::SpringSpec;
pub use spring::SpringSimulation;

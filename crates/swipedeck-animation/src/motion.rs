//! Terminal card motions: spring-back and fly-off.

use swipedeck_core::{CardPose, MotionKind, SwipeRelease};

use crate::{SpringSimulation, SpringSpec};

/// Spring selection for the two terminal animations, supplied by the host
/// alongside the gesture config and immutable for the card's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardAnimationConfig {
    /// Spring for the sub-threshold recovery to rest.
    pub settle_spring: SpringSpec,
    /// Spring for the committed exit past the screen edge.
    pub fly_off_spring: SpringSpec,
}

impl Default for CardAnimationConfig {
    fn default() -> Self {
        Self {
            settle_spring: SpringSpec::bouncy(),
            fly_off_spring: SpringSpec::stiff(),
        }
    }
}

/// Drives a released card from its lift-off pose to the target pose.
///
/// One plan is built per [`SwipeRelease`] and advanced by the render loop:
///
/// ```
/// use swipedeck_animation::{CardAnimationConfig, MotionPlan};
/// use swipedeck_core::{SwipeConfig, SwipeController};
///
/// let mut controller = SwipeController::new(SwipeConfig::new(400.0));
/// controller.gesture_start().unwrap();
/// let release = controller.gesture_end(200.0, 0.0, 2_000.0).unwrap();
///
/// let mut plan = MotionPlan::for_release(&release, &CardAnimationConfig::default());
/// while !plan.is_settled() {
///     let pose = plan.advance(1.0 / 60.0);
///     // hand `pose` to the renderer
///     let _ = pose;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MotionPlan {
    kind: MotionKind,
    x: SpringSimulation,
    y: SpringSimulation,
    rotation: SpringSimulation,
}

impl MotionPlan {
    /// Builds the motion a release asked for. The release velocity seeds
    /// the horizontal axis; the other axes start from rest.
    pub fn for_release(release: &SwipeRelease, config: &CardAnimationConfig) -> Self {
        let spec = match release.target.kind {
            MotionKind::SpringBack => config.settle_spring,
            MotionKind::FlyOff => config.fly_off_spring,
        };
        let from = release.from;
        let to = release.target.pose;

        log::debug!(
            "motion plan: {:?} ({:.1}, {:.1}, {:.1}) -> ({:.1}, {:.1}, {:.1})",
            release.target.kind,
            from.x,
            from.y,
            from.rotation_degrees,
            to.x,
            to.y,
            to.rotation_degrees
        );

        Self {
            kind: release.target.kind,
            x: SpringSimulation::new(spec, from.x, to.x)
                .with_initial_velocity(release.target.initial_velocity_x),
            y: SpringSimulation::new(spec, from.y, to.y),
            rotation: SpringSimulation::new(spec, from.rotation_degrees, to.rotation_degrees),
        }
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    /// Advances all three axes by `dt_secs` and returns the pose to render.
    pub fn advance(&mut self, dt_secs: f32) -> CardPose {
        CardPose {
            x: self.x.advance(dt_secs),
            y: self.y.advance(dt_secs),
            rotation_degrees: self.rotation.advance(dt_secs),
        }
    }

    /// Current pose without advancing time.
    pub fn pose(&self) -> CardPose {
        CardPose {
            x: self.x.value(),
            y: self.y.value(),
            rotation_degrees: self.rotation.value(),
        }
    }

    /// Whether every axis has reached its target.
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.rotation.is_settled()
    }
}

#[cfg(test)]
#[path = "tests/motion_tests.rs"]
mod tests;

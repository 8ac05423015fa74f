//! Swipe-card gesture state machine.
//!
//! One controller owns one card. It converts a continuous pointer drag
//! into real-time pose feedback (translation plus a derived lean), and at
//! release converts the final displacement into a one-shot
//! [`SwipeDecision`] together with the motion the card should perform
//! next: a spring back to rest, or a fly-off past the screen edge.
//!
//! The controller is synchronous and single-threaded. Events for one card
//! must arrive in strict start -> update* -> end/cancel order; anything
//! else is a sequencing violation and comes back as a [`GestureError`].

use crate::geometry::Point;
use crate::gesture_constants::OFF_SCREEN_RATIO;
use crate::{GestureError, SuperLikePolicy, SwipeConfig, SwipeDecision};

/// Visual pose of the card: translation in logical pixels plus the
/// cosmetic lean in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardPose {
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
}

impl CardPose {
    pub const fn new(x: f32, y: f32, rotation_degrees: f32) -> Self {
        Self {
            x,
            y,
            rotation_degrees,
        }
    }
}

/// Which terminal animation a release asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKind {
    /// Sub-threshold release: return to rest.
    SpringBack,
    /// Committed release: leave the screen in the direction of travel.
    FlyOff,
}

/// Where the card should animate once the pointer lifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTarget {
    pub kind: MotionKind,
    /// End pose of the animation.
    pub pose: CardPose,
    /// Horizontal release velocity seeding the animation, px/sec.
    /// Already capped to the configured fling maximum.
    pub initial_velocity_x: f32,
}

/// Everything a gesture end produces, exactly once per gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeRelease {
    pub decision: SwipeDecision,
    /// Card pose at the moment the pointer lifted.
    pub from: CardPose,
    pub target: MotionTarget,
}

/// Ephemeral drag bookkeeping, created at gesture start and consumed
/// exactly once at gesture end. Rotation is never stored here: it is
/// always recomputed from the current horizontal translation, so rapid
/// reversals are reflected immediately with no lag or hysteresis.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragState {
    origin: Point,
    translation: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// At rest; a new gesture may begin.
    Idle,
    /// Pointer down, tracking cumulative offsets.
    Dragging(DragState),
    /// A committed decision's fly-off is in flight; the card must be
    /// replaced (reset) before any further interaction.
    Consumed(SwipeDecision),
}

/// Gesture-to-decision controller for a single card.
pub struct SwipeController {
    config: SwipeConfig,
    phase: Phase,
}

impl SwipeController {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Whether a committed decision has consumed the card.
    pub fn is_consumed(&self) -> bool {
        matches!(self.phase, Phase::Consumed(_))
    }

    /// Begins a gesture, capturing the card's rest position as the drag
    /// origin.
    pub fn gesture_start(&mut self) -> Result<(), GestureError> {
        match self.phase {
            Phase::Dragging(_) => Err(GestureError::GestureInProgress),
            Phase::Consumed(decision) => Err(GestureError::CardConsumed(decision)),
            Phase::Idle => {
                self.phase = Phase::Dragging(DragState {
                    origin: Point::ZERO,
                    translation: Point::ZERO,
                });
                log::trace!("gesture start");
                Ok(())
            }
        }
    }

    /// Applies a move event and returns the pose to render.
    ///
    /// `delta_x`/`delta_y` are cumulative offsets from gesture start, not
    /// deltas since the last call.
    pub fn gesture_update(&mut self, delta_x: f32, delta_y: f32) -> Result<CardPose, GestureError> {
        let config = self.config;
        let drag = match &mut self.phase {
            Phase::Dragging(drag) => drag,
            _ => return Err(GestureError::UpdateWithoutStart),
        };

        drag.translation = drag.origin.offset(delta_x, delta_y);
        let pose = CardPose {
            x: drag.translation.x,
            y: drag.translation.y,
            rotation_degrees: rotation_for(&config, drag.translation.x),
        };
        log::trace!(
            "gesture update: x={:.1} y={:.1} rot={:.1}",
            pose.x,
            pose.y,
            pose.rotation_degrees
        );
        Ok(pose)
    }

    /// Ends the gesture and produces the decision plus motion target.
    ///
    /// The commit test looks at the final horizontal displacement only;
    /// the continuous rotation feedback is purely cosmetic and never
    /// decides the outcome, so jittery updates cannot trigger a spurious
    /// early commit.
    pub fn gesture_end(
        &mut self,
        final_delta_x: f32,
        final_delta_y: f32,
        velocity_x: f32,
    ) -> Result<SwipeRelease, GestureError> {
        let drag = match self.phase {
            Phase::Dragging(drag) => drag,
            _ => return Err(GestureError::EndWithoutStart),
        };

        let translation = drag.origin.offset(final_delta_x, final_delta_y);
        let from = CardPose {
            x: translation.x,
            y: translation.y,
            rotation_degrees: rotation_for(&self.config, translation.x),
        };

        let decision = self.decide(final_delta_x, final_delta_y);
        let velocity = cap_velocity(&self.config, velocity_x);
        let target = self.target_for(decision, &from, final_delta_x, velocity, drag.origin);

        self.phase = if decision.is_commit() {
            Phase::Consumed(decision)
        } else {
            Phase::Idle
        };
        log::debug!("gesture end: decision={decision} from=({:.1}, {:.1})", from.x, from.y);

        Ok(SwipeRelease {
            decision,
            from,
            target,
        })
    }

    /// Cancels the gesture (e.g. a system interruption took over the
    /// pointer). Equivalent to a sub-threshold end: decision `None`, card
    /// springs back to rest.
    pub fn gesture_cancel(&mut self) -> Result<SwipeRelease, GestureError> {
        let drag = match self.phase {
            Phase::Dragging(drag) => drag,
            _ => return Err(GestureError::CancelWithoutStart),
        };

        let from = CardPose {
            x: drag.translation.x,
            y: drag.translation.y,
            rotation_degrees: rotation_for(&self.config, drag.translation.x),
        };
        self.phase = Phase::Idle;
        log::debug!("gesture cancelled at ({:.1}, {:.1})", from.x, from.y);

        Ok(SwipeRelease {
            decision: SwipeDecision::None,
            from,
            target: spring_back_target(drag.origin),
        })
    }

    /// Commits a decision without a gesture, for the action-button row.
    ///
    /// Produces the same release shape as a swipe, flying off from rest
    /// with a synthetic velocity. A `None` decision yields a harmless
    /// spring-back release and leaves the card live.
    pub fn commit(&mut self, decision: SwipeDecision) -> Result<SwipeRelease, GestureError> {
        match self.phase {
            Phase::Dragging(_) => return Err(GestureError::GestureInProgress),
            Phase::Consumed(prior) => return Err(GestureError::CardConsumed(prior)),
            Phase::Idle => {}
        }

        let from = CardPose::default();
        let direction = match decision {
            SwipeDecision::Like => 1.0,
            SwipeDecision::Pass => -1.0,
            SwipeDecision::SuperLike | SwipeDecision::None => 0.0,
        };
        let velocity = cap_velocity(&self.config, direction * self.config.max_fling_velocity * 0.5);
        let target = self.target_for(decision, &from, direction, velocity, Point::ZERO);

        if decision.is_commit() {
            self.phase = Phase::Consumed(decision);
        }
        log::debug!("programmatic commit: {decision}");

        Ok(SwipeRelease {
            decision,
            from,
            target,
        })
    }

    /// Clears any residual drag state and the consumed flag.
    ///
    /// Idempotent; safe to call before reusing the controller for the
    /// next card.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn decide(&self, final_delta_x: f32, final_delta_y: f32) -> SwipeDecision {
        let threshold = self.config.commit_threshold();

        if let SuperLikePolicy::VerticalSwipe {
            threshold_ratio,
            max_horizontal_ratio,
        } = self.config.super_like
        {
            let vertical_threshold = self.config.screen_width * threshold_ratio;
            if -final_delta_y > vertical_threshold
                && final_delta_x.abs() < threshold * max_horizontal_ratio
            {
                return SwipeDecision::SuperLike;
            }
        }

        if final_delta_x.abs() > threshold {
            if final_delta_x > 0.0 {
                SwipeDecision::Like
            } else {
                SwipeDecision::Pass
            }
        } else {
            SwipeDecision::None
        }
    }

    fn target_for(
        &self,
        decision: SwipeDecision,
        from: &CardPose,
        final_delta_x: f32,
        velocity: f32,
        origin: Point,
    ) -> MotionTarget {
        let off_screen = self.config.screen_width * OFF_SCREEN_RATIO;
        match decision {
            SwipeDecision::Like | SwipeDecision::Pass => {
                // Continue in the direction of travel, preserving the
                // current vertical offset and letting the lean run to its
                // clamp.
                let x = final_delta_x.signum() * off_screen;
                MotionTarget {
                    kind: MotionKind::FlyOff,
                    pose: CardPose {
                        x,
                        y: from.y,
                        rotation_degrees: rotation_for(&self.config, x),
                    },
                    initial_velocity_x: velocity,
                }
            }
            SwipeDecision::SuperLike => MotionTarget {
                kind: MotionKind::FlyOff,
                pose: CardPose {
                    x: from.x,
                    y: -off_screen,
                    rotation_degrees: from.rotation_degrees,
                },
                initial_velocity_x: velocity,
            },
            SwipeDecision::None => spring_back_target(origin),
        }
    }
}

fn spring_back_target(origin: Point) -> MotionTarget {
    MotionTarget {
        kind: MotionKind::SpringBack,
        pose: CardPose {
            x: origin.x,
            y: origin.y,
            rotation_degrees: 0.0,
        },
        initial_velocity_x: 0.0,
    }
}

/// Lean derived from horizontal translation, clamped to the configured
/// bound. Never feeds into the commit decision.
fn rotation_for(config: &SwipeConfig, translation_x: f32) -> f32 {
    (translation_x / config.screen_width * config.max_rotation_degrees)
        .clamp(-config.max_rotation_degrees, config.max_rotation_degrees)
}

fn cap_velocity(config: &SwipeConfig, velocity_x: f32) -> f32 {
    let max = config.max_fling_velocity;
    if !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    if velocity_x.abs() > max {
        log::warn!("release velocity {velocity_x:.0} capped to {max:.0}");
    }
    velocity_x.clamp(-max, max)
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

//! Scripted gesture drivers.

use swipedeck_animation::{CardAnimationConfig, MotionPlan};
use swipedeck_core::{
    CardPose, GestureError, SwipeConfig, SwipeController, SwipeRelease, VelocityTracker1D,
};
use swipedeck_profiles::{DeckError, DiscoverSession, Profile};

/// Synthetic frame duration used by the drivers, milliseconds.
pub const FRAME_MS: i64 = 16;

/// Replays pointer sequences against a single controller.
///
/// Moves are interpolated into per-frame update events on a synthetic
/// clock; the release velocity is derived from those samples with the
/// same velocity tracker a real host would use, so a fast scripted drag
/// releases fast and a slow one releases slow.
pub struct GestureRobot {
    controller: SwipeController,
    tracker: VelocityTracker1D,
    clock_ms: i64,
    delta_x: f32,
    delta_y: f32,
}

impl GestureRobot {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            controller: SwipeController::new(config),
            tracker: VelocityTracker1D::new(),
            clock_ms: 0,
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController {
        &mut self.controller
    }

    /// Puts the pointer down at the card's rest position.
    pub fn press(&mut self) -> Result<(), GestureError> {
        self.controller.gesture_start()?;
        self.tracker.reset();
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        self.tracker.push(self.clock_ms, 0.0);
        Ok(())
    }

    /// Drags to the cumulative offset `(delta_x, delta_y)` over
    /// `duration_ms`, one update per synthetic frame. Returns the final
    /// pose fed back by the controller.
    pub fn drag_to(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        duration_ms: i64,
    ) -> Result<CardPose, GestureError> {
        let steps = (duration_ms / FRAME_MS).max(1);
        let start_x = self.delta_x;
        let start_y = self.delta_y;

        let mut pose = CardPose::default();
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let x = start_x + (delta_x - start_x) * fraction;
            let y = start_y + (delta_y - start_y) * fraction;
            self.clock_ms += FRAME_MS;
            self.tracker.push(self.clock_ms, x);
            pose = self.controller.gesture_update(x, y)?;
        }

        self.delta_x = delta_x;
        self.delta_y = delta_y;
        Ok(pose)
    }

    /// Lifts the pointer, deriving the release velocity from the tracked
    /// samples.
    pub fn release(&mut self) -> Result<SwipeRelease, GestureError> {
        let velocity = self
            .tracker
            .capped_velocity(self.controller.config().max_fling_velocity);
        self.controller
            .gesture_end(self.delta_x, self.delta_y, velocity)
    }

    /// Cancels the gesture, as a system interruption would.
    pub fn cancel(&mut self) -> Result<SwipeRelease, GestureError> {
        self.controller.gesture_cancel()
    }

    /// Press, drag, release in one call.
    pub fn swipe(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        duration_ms: i64,
    ) -> Result<SwipeRelease, GestureError> {
        self.press()?;
        self.drag_to(delta_x, delta_y, duration_ms)?;
        self.release()
    }
}

/// Drives full swipe-and-advance flows on a [`DiscoverSession`].
pub struct DeckRobot {
    session: DiscoverSession,
    tracker: VelocityTracker1D,
    clock_ms: i64,
    max_fling_velocity: f32,
}

impl DeckRobot {
    pub fn new(config: SwipeConfig, profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            session: DiscoverSession::new(config, profiles),
            tracker: VelocityTracker1D::new(),
            clock_ms: 0,
            max_fling_velocity: config.max_fling_velocity,
        }
    }

    pub fn session(&self) -> &DiscoverSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DiscoverSession {
        &mut self.session
    }

    /// Swipes the top card to `(delta_x, delta_y)` over `duration_ms` and
    /// returns the release the session produced.
    pub fn swipe(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        duration_ms: i64,
    ) -> Result<SwipeRelease, DeckError> {
        self.session.gesture_start()?;
        self.tracker.reset();
        self.tracker.push(self.clock_ms, 0.0);

        let steps = (duration_ms / FRAME_MS).max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let x = delta_x * fraction;
            let y = delta_y * fraction;
            self.clock_ms += FRAME_MS;
            self.tracker.push(self.clock_ms, x);
            self.session.gesture_update(x, y)?;
        }

        let velocity = self.tracker.capped_velocity(self.max_fling_velocity);
        self.session.gesture_end(delta_x, delta_y, velocity)
    }
}

/// Advances a motion plan in synthetic frames until it settles, returning
/// the final pose. Panics if the plan does not settle within `max_frames`.
pub fn settle_plan(plan: &mut MotionPlan, max_frames: usize) -> CardPose {
    let mut frames = 0;
    while !plan.is_settled() {
        plan.advance(FRAME_MS as f32 / 1000.0);
        frames += 1;
        assert!(
            frames <= max_frames,
            "motion plan failed to settle within {max_frames} frames"
        );
    }
    plan.pose()
}

/// Builds the default motion plan for a release; shorthand for tests.
pub fn plan_for(release: &SwipeRelease) -> MotionPlan {
    MotionPlan::for_release(release, &CardAnimationConfig::default())
}

//! Per-card gesture configuration.

use crate::geometry::Size;
use crate::gesture_constants::{
    DEFAULT_COMMIT_THRESHOLD_RATIO, DEFAULT_MAX_ROTATION_DEGREES, MAX_FLING_VELOCITY,
};

/// Policy for mapping large vertical releases to a super-like.
///
/// The original card interaction only wires horizontal swipe-to-dismiss;
/// the star action is a plain tap. Hosts that want a three-way gesture
/// opt in with [`SuperLikePolicy::VerticalSwipe`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SuperLikePolicy {
    /// Vertical motion never commits; only horizontal releases decide.
    Disabled,
    /// An upward release commits `SuperLike` when the vertical travel
    /// exceeds `threshold_ratio * screen_width` and the horizontal travel
    /// stays below `max_horizontal_ratio` of the horizontal commit
    /// threshold.
    VerticalSwipe {
        threshold_ratio: f32,
        max_horizontal_ratio: f32,
    },
}

impl SuperLikePolicy {
    /// Vertical swipe policy with the same sensitivity as the horizontal
    /// commit threshold.
    pub fn vertical() -> Self {
        SuperLikePolicy::VerticalSwipe {
            threshold_ratio: DEFAULT_COMMIT_THRESHOLD_RATIO,
            max_horizontal_ratio: 0.5,
        }
    }
}

impl Default for SuperLikePolicy {
    fn default() -> Self {
        SuperLikePolicy::Disabled
    }
}

/// Read-only configuration supplied once per card.
///
/// Threshold and rotation bounds are injected rather than hardcoded so the
/// same controller logic can back cards of different sizes or differing
/// swipe sensitivities (e.g. accessibility modes with a lower commit
/// threshold).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Width of the hosting screen in logical pixels.
    pub screen_width: f32,
    /// Fraction of `screen_width` a release must travel to commit.
    pub commit_threshold_ratio: f32,
    /// Clamp bound for the cosmetic drag rotation, in degrees.
    pub max_rotation_degrees: f32,
    /// Cap applied to release velocities, px/sec.
    pub max_fling_velocity: f32,
    /// Whether vertical releases can commit a super-like.
    pub super_like: SuperLikePolicy,
}

impl SwipeConfig {
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            commit_threshold_ratio: DEFAULT_COMMIT_THRESHOLD_RATIO,
            max_rotation_degrees: DEFAULT_MAX_ROTATION_DEGREES,
            max_fling_velocity: MAX_FLING_VELOCITY,
            super_like: SuperLikePolicy::Disabled,
        }
    }

    /// Configuration for a card hosted in the given viewport.
    pub fn for_viewport(viewport: Size) -> Self {
        Self::new(viewport.width)
    }

    pub fn with_commit_threshold_ratio(mut self, ratio: f32) -> Self {
        self.commit_threshold_ratio = ratio;
        self
    }

    pub fn with_max_rotation_degrees(mut self, degrees: f32) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    pub fn with_max_fling_velocity(mut self, velocity: f32) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    pub fn with_super_like(mut self, policy: SuperLikePolicy) -> Self {
        self.super_like = policy;
        self
    }

    /// Horizontal displacement beyond which a release commits, in pixels.
    pub fn commit_threshold(&self) -> f32 {
        self.screen_width * self.commit_threshold_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_threshold_scales_with_screen_width() {
        let config = SwipeConfig::new(400.0);
        assert_eq!(config.commit_threshold(), 120.0);

        let wide = SwipeConfig::new(800.0);
        assert_eq!(wide.commit_threshold(), 240.0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = SwipeConfig::for_viewport(Size::new(400.0, 800.0))
            .with_commit_threshold_ratio(0.2)
            .with_max_rotation_degrees(30.0)
            .with_super_like(SuperLikePolicy::vertical());

        assert_eq!(config.commit_threshold(), 80.0);
        assert_eq!(config.max_rotation_degrees, 30.0);
        assert_ne!(config.super_like, SuperLikePolicy::Disabled);
    }
}

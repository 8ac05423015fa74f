//! Shared gesture constants for consistent swipe handling.
//!
//! These values are in logical pixels (or fractions of the screen width)
//! and match the tuning of the original card interaction. Per-card
//! overrides go through [`SwipeConfig`](crate::SwipeConfig); the constants
//! here are only the defaults.

/// Fraction of the screen width a release must travel horizontally for the
/// card to commit a decision instead of springing back.
///
/// 0.3 means a card on a 400 px wide screen commits once the pointer has
/// moved more than 120 px from where the drag began.
pub const DEFAULT_COMMIT_THRESHOLD_RATIO: f32 = 0.3;

/// Clamp bound for the cosmetic rotation applied while dragging, in degrees.
///
/// Rotation is derived from horizontal translation as
/// `x / screen_width * DEFAULT_MAX_ROTATION_DEGREES` and clamped to this
/// bound, so a card dragged a full screen width leans at exactly this angle.
pub const DEFAULT_MAX_ROTATION_DEGREES: f32 = 60.0;

/// How far off-screen a committed card flies, as a multiple of the screen
/// width. 1.5 puts the card comfortably past either edge regardless of the
/// card's own width.
pub const OFF_SCREEN_RATIO: f32 = 1.5;

/// Maximum release velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on
/// a baseline density. Release velocities beyond this are capped before
/// they seed the fly-off animation.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

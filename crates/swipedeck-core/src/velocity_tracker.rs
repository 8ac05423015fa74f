//! Release-velocity tracking for swipe gestures.
//!
//! Hosts receive raw pointer positions, not velocities, so the velocity
//! passed to `gesture_end` has to be derived from the recent move samples.
//! This tracker uses the impulse strategy: velocity is recovered from the
//! kinetic energy the pointer imparted over the last few samples, which is
//! far more robust against jittery input than a two-point difference.

/// Ring buffer size for velocity samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped moving.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1-D impulse-strategy velocity tracker.
///
/// Feed it absolute positions along one axis as move events arrive, then
/// query the velocity at release:
///
/// ```
/// use swipedeck_core::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.push(0, 0.0);
/// tracker.push(16, 40.0);
/// tracker.push(32, 80.0);
/// assert!(tracker.velocity() > 0.0);
/// ```
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a position sample at the given timestamp (milliseconds).
    ///
    /// Timestamps are expected to be monotonically non-decreasing for one
    /// gesture; the horizon check discards anything stale.
    pub fn push(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second over the recent samples.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// rested in place longer than [`ASSUME_STOPPED_MS`] before release.
    pub fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[current] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (previous.time_ms - sample.time_ms) as f32;
            previous = sample;

            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            times[count] = -age;

            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };

            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, count) * 1000.0
    }

    /// Velocity capped to `max_velocity` in either direction.
    ///
    /// This is the query the release path uses; the cap comes from
    /// [`SwipeConfig::max_fling_velocity`](crate::SwipeConfig).
    pub fn capped_velocity(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Discards all samples, ready for the next gesture.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity estimate over samples ordered newest-first in
/// time offsets (`times[i] <= 0`, milliseconds before the newest sample).
fn impulse_velocity(positions: &[f32; HISTORY_SIZE], times: &[f32; HISTORY_SIZE], count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = count - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with unit mass, inverted.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 64.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_rightward_drag() {
        let mut tracker = VelocityTracker1D::new();
        // 40 px per 16 ms frame = 2500 px/s.
        for frame in 0..6 {
            tracker.push(frame * 16, frame as f32 * 40.0);
        }

        let velocity = tracker.velocity();
        assert!(
            (velocity - 2500.0).abs() < 250.0,
            "expected ~2500, got {velocity}"
        );
    }

    #[test]
    fn leftward_drag_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 300.0);
        tracker.push(16, 200.0);
        tracker.push(32, 100.0);

        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn pause_before_release_reports_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 0.0);
        tracker.push(ASSUME_STOPPED_MS + 1, 100.0);

        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn stale_samples_beyond_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 0.0);
        tracker.push(150, 100.0);
        tracker.push(160, 200.0);
        tracker.push(170, 300.0);

        assert!(tracker.velocity() > 0.0);
    }

    #[test]
    fn capped_velocity_clamps_both_directions() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 0.0);
        tracker.push(1, 10_000.0);
        assert_eq!(tracker.capped_velocity(8_000.0), 8_000.0);

        tracker.reset();
        tracker.push(0, 10_000.0);
        tracker.push(1, 0.0);
        assert_eq!(tracker.capped_velocity(8_000.0), -8_000.0);
    }

    #[test]
    fn reset_discards_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.push(0, 0.0);
        tracker.push(10, 100.0);

        tracker.reset();

        assert_eq!(tracker.velocity(), 0.0);
    }
}

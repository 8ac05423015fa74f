//! Damped harmonic oscillator stepper.

use crate::SpringSpec;

/// Internal integration substep, seconds. Larger `advance` calls are split
/// into substeps of at most this size; 4 ms keeps the integration stable
/// for the stiffest spring in use (damping * dt stays well under 1).
const SUBSTEP: f32 = 0.004;

/// A single spring-driven value.
///
/// Simulated with semi-implicit Euler over the actual value space, so a
/// spring whose start equals its target still reacts to an initial
/// velocity by overshooting and returning. Settlement requires both the
/// velocity and the distance to target to drop under the spec thresholds,
/// at which point the value snaps exactly to the target.
#[derive(Debug, Clone, Copy)]
pub struct SpringSimulation {
    spec: SpringSpec,
    target: f32,
    value: f32,
    velocity: f32,
    settled: bool,
}

impl SpringSimulation {
    pub fn new(spec: SpringSpec, start: f32, target: f32) -> Self {
        let mut sim = Self {
            spec,
            target,
            value: start,
            velocity: 0.0,
            settled: false,
        };
        sim.settled = sim.at_rest();
        sim
    }

    /// Seeds the spring with a release velocity, units/sec.
    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = self.at_rest();
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the simulation by `dt_secs` and returns the new value.
    pub fn advance(&mut self, dt_secs: f32) -> f32 {
        if self.settled || !(dt_secs > 0.0) {
            return self.value;
        }

        let stiffness = self.spec.stiffness;
        let damping = 2.0 * self.spec.damping_ratio * stiffness.sqrt();

        let mut remaining = dt_secs;
        while remaining > 0.0 {
            let step = remaining.min(SUBSTEP);

            let displacement = self.value - self.target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;

            remaining -= step;

            if self.at_rest() {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                break;
            }
        }

        self.value
    }

    fn at_rest(&self) -> bool {
        self.velocity.abs() < self.spec.velocity_threshold
            && (self.value - self.target).abs() < self.spec.position_threshold
    }
}

//! Per-axis inertial fling decay.
//!
//! An [`AxisFling`] simulates one axis of a released drag: the value coasts
//! along its starting velocity while an exponential friction bleeds the
//! speed off, until the axis settles at a clamp boundary or the speed drops
//! under the stop threshold. Two instances run per release, one per axis,
//! with independent lifetimes.

use log::trace;

/// Exponential friction for a free fling, per second.
///
/// The remaining travel of an unobstructed axis is `velocity / friction`,
/// so 3.2 lets an 8000 px/s throw cover roughly 2500 px before resting.
pub const FLING_FRICTION: f32 = 3.2;

/// Friction applied when a fling is intercepted mid-flight. High enough to
/// catch the element within a few hundred milliseconds.
pub const BRAKE_FRICTION: f32 = 12.0;

/// Peak speed (px/sec) a braked fling is normalized to: the faster axis is
/// rescaled to this, the slower axis by the same factor.
pub const BRAKE_TARGET_SPEED: f32 = 600.0;

/// Speed (px/sec) below which an axis counts as settled.
pub const STOP_VELOCITY: f32 = 50.0;

/// Hard ceiling on simulation time. An axis that has not settled by then
/// (misconfigured friction, runaway velocity) is forced to rest in place.
pub const MAX_FLING_DURATION_MS: f32 = 3_000.0;

/// One axis of an inertial fling.
#[derive(Clone, Copy, Debug)]
pub struct AxisFling {
    value: f32,
    velocity: f32,
    friction: f32,
    scale: f32,
    min: f32,
    max: f32,
    elapsed_ms: f32,
    settled: bool,
}

impl AxisFling {
    /// Starts an axis simulation.
    ///
    /// `friction` is the per-second exponential decay rate; `scale` converts
    /// velocity into displacement (1.0 for a free fling, reduced when
    /// braking). An inverted clamp range is reordered, and a start value
    /// outside the range is pulled onto the nearer boundary.
    pub fn new(value: f32, velocity: f32, friction: f32, scale: f32, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            velocity,
            friction: friction.max(0.0),
            scale,
            min,
            max,
            elapsed_ms: 0.0,
            settled: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the simulation by `dt_ms` milliseconds.
    ///
    /// Returns the new value and whether the axis has settled. Settlement is
    /// terminal: further calls keep returning the resting value.
    pub fn advance(&mut self, dt_ms: f32) -> (f32, bool) {
        if self.settled {
            return (self.value, true);
        }

        let dt_ms = dt_ms.max(0.0);
        self.elapsed_ms += dt_ms;
        let dt = dt_ms / 1_000.0;

        self.value += self.velocity * self.scale * dt;
        self.velocity *= (-self.friction * dt).exp();

        if self.value <= self.min {
            self.value = self.min;
            self.settled = true;
        } else if self.value >= self.max {
            self.value = self.max;
            self.settled = true;
        } else if self.velocity.abs() < STOP_VELOCITY {
            self.settled = true;
        } else if self.elapsed_ms >= MAX_FLING_DURATION_MS {
            trace!("fling axis forced to settle after {} ms", self.elapsed_ms);
            self.settled = true;
        }

        (self.value, self.settled)
    }
}

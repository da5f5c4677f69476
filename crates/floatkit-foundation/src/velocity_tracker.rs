//! Velocity estimation from a sliding window of pointer samples.
//!
//! Uses the impulse strategy: velocity is derived from the kinetic energy the
//! sampled movement imparts, which is robust against irregular sample spacing
//! from real input pipelines.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one contribute.
pub const WINDOW_MS: i64 = 400;

/// A gap this long between consecutive samples means the pointer stopped;
/// anything older than the gap is discarded.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// A position reading with its timestamp.
#[derive(Clone, Copy, Default)]
struct TrackedSample {
    time_ms: i64,
    value: f32,
}

/// 1D velocity tracker over a bounded time window.
///
/// Feed it absolute positions as they arrive; `velocity()` answers in
/// units/second. An empty or single-sample window deterministically yields
/// zero.
#[derive(Clone)]
pub struct VelocityTracker1D {
    /// Ring buffer of samples; `index` is the newest entry.
    samples: [Option<TrackedSample>; HISTORY_SIZE],
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

    /// Records a position at the given time (milliseconds).
    pub fn add_sample(&mut self, time_ms: i64, value: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(TrackedSample { time_ms, value });
    }

    /// Estimates the current velocity in units/second.
    ///
    /// Returns 0.0 when fewer than two usable samples remain in the window or
    /// when the pointer has not moved.
    pub fn velocity(&self) -> f32 {
        let mut values = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current_index = self.index;
        let mut previous_time_ms = newest.time_ms;

        while let Some(sample) = self.samples[current_index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = previous_time_ms - sample.time_ms;
            if age > WINDOW_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time_ms = sample.time_ms;

            values[sample_count] = sample.value;
            times[sample_count] = -(age as f32);

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };

            sample_count += 1;
            if sample_count >= HISTORY_SIZE {
                break;
            }
        }

        if sample_count < 2 {
            return 0.0;
        }

        let velocity_per_ms = impulse_velocity(&values, &times, sample_count);
        velocity_per_ms * 1000.0
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity: accumulate the work each segment contributes
/// and convert the resulting kinetic energy back to a signed speed.
fn impulse_velocity(values: &[f32; HISTORY_SIZE], times: &[f32; HISTORY_SIZE], count: usize) -> f32 {
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

        let segment_delta = values[i] - values[i - 1];
        let v_curr = segment_delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// Per-axis velocity estimate, in logical px/sec.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude of the velocity vector.
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Two-axis tracker fed by pointer positions.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, time_ms: i64, position: floatkit_graphics::Point) {
        self.x.add_sample(time_ms, position.x);
        self.y.add_sample(time_ms, position.y);
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.x.velocity(), self.y.velocity())
    }

    /// Estimates the velocity with its magnitude capped at `max_magnitude`.
    ///
    /// A zero or non-finite cap yields zero velocity; a raw estimate over the
    /// cap is scaled down uniformly so the direction is preserved.
    pub fn velocity_capped(&self, max_magnitude: f32) -> Velocity {
        if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
            return Velocity::ZERO;
        }

        let raw = self.velocity();
        let magnitude = raw.magnitude();
        if !magnitude.is_finite() || magnitude == 0.0 {
            return Velocity::ZERO;
        }
        if magnitude <= max_magnitude {
            return raw;
        }

        let scale = max_magnitude / magnitude;
        Velocity::new(raw.x * scale, raw.y * scale)
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatkit_graphics::Point;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn single_sample_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn constant_velocity() {
        let mut tracker = VelocityTracker1D::new();
        // Moving at 100 px per 10ms = 10000 px/s
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);
        tracker.add_sample(20, 200.0);
        tracker.add_sample(30, 300.0);

        let velocity = tracker.velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn negative_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 300.0);
        tracker.add_sample(10, 200.0);
        tracker.add_sample(20, 100.0);

        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn reset_clears_window() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);

        tracker.reset();

        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn samples_outside_window_ignored() {
        let mut tracker = VelocityTracker1D::new();
        // A stale reading well outside the window, then a fresh burst.
        tracker.add_sample(0, 1_000.0);
        tracker.add_sample(500, 0.0);
        tracker.add_sample(510, 100.0);
        tracker.add_sample(520, 200.0);

        let velocity = tracker.velocity();
        assert!(
            velocity > 0.0,
            "stale sample should not drag the estimate negative, got {}",
            velocity
        );
    }

    #[test]
    fn gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(ASSUME_STOPPED_MS + 1, 100.0);

        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn irregular_spacing_tolerated() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(7, 70.0);
        tracker.add_sample(30, 300.0);
        tracker.add_sample(34, 340.0);

        let velocity = tracker.velocity();
        assert!(
            (velocity - 10000.0).abs() < 2000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn capped_velocity_preserves_direction() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, Point::new(0.0, 0.0));
        tracker.add_sample(1, Point::new(30.0, 40.0));
        tracker.add_sample(2, Point::new(60.0, 80.0));

        let capped = tracker.velocity_capped(1_000.0);
        assert!((capped.magnitude() - 1_000.0).abs() < 1.0);
        // Direction of travel (3, 4, 5 triangle) survives the rescale.
        assert!((capped.x / capped.y - 0.75).abs() < 0.01);
    }

    #[test]
    fn degenerate_cap_returns_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, Point::new(0.0, 0.0));
        tracker.add_sample(10, Point::new(100.0, 0.0));

        assert_eq!(tracker.velocity_capped(0.0), Velocity::ZERO);
        assert_eq!(tracker.velocity_capped(f32::NAN), Velocity::ZERO);
    }

    #[test]
    fn two_axis_tracker_splits_components() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, Point::new(0.0, 0.0));
        tracker.add_sample(10, Point::new(100.0, 0.0));
        tracker.add_sample(20, Point::new(200.0, 0.0));

        let velocity = tracker.velocity();
        assert!(velocity.x > 0.0);
        assert_eq!(velocity.y, 0.0);
    }
}

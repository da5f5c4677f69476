//! Two-axis fling driver.

use floatkit_animation::AxisFling;
use floatkit_foundation::Velocity;
use floatkit_graphics::Point;
use log::debug;

/// One released drag in flight: two independent axis simulations.
///
/// The axes are not synchronized; X may settle while Y is still moving, or
/// the other way round. The simulation as a whole completes when the later
/// finishing axis settles, and the resting point combines each axis's final
/// value.
pub struct FlingSimulation {
    x: AxisFling,
    y: AxisFling,
    x_range: (f32, f32),
    y_range: (f32, f32),
    braked: bool,
}

impl FlingSimulation {
    /// Starts both axes from the release position and velocity.
    pub fn start(
        position: Point,
        velocity: Velocity,
        friction: f32,
        x_range: (f32, f32),
        y_range: (f32, f32),
    ) -> Self {
        Self {
            x: AxisFling::new(position.x, velocity.x, friction, 1.0, x_range.0, x_range.1),
            y: AxisFling::new(position.y, velocity.y, friction, 1.0, y_range.0, y_range.1),
            x_range,
            y_range,
            braked: false,
        }
    }

    /// Advances both axes and returns the combined position plus whether
    /// the whole simulation has settled.
    pub fn advance(&mut self, dt_ms: f32) -> (Point, bool) {
        let (x, x_settled) = self.x.advance(dt_ms);
        let (y, y_settled) = self.y.advance(dt_ms);
        (Point::new(x, y), x_settled && y_settled)
    }

    /// Intercepts the fling mid-flight.
    ///
    /// Both axis simulations are discarded and restarted from their current
    /// value and velocity with one uniform scale factor that normalizes the
    /// faster axis's speed to `target_speed`, under the much higher brake
    /// friction. The slower axis is rescaled by the same factor, so its
    /// remaining motion shrinks proportionally even when that looks
    /// disproportionate next to the faster axis.
    pub fn brake(&mut self, brake_friction: f32, target_speed: f32) {
        let top_speed = self.x.velocity().abs().max(self.y.velocity().abs());
        let scale = if top_speed > 0.0 {
            (target_speed / top_speed).min(1.0)
        } else {
            0.0
        };
        debug!("braking fling, top speed {} scaled by {}", top_speed, scale);

        self.x = AxisFling::new(
            self.x.value(),
            self.x.velocity(),
            brake_friction,
            scale,
            self.x_range.0,
            self.x_range.1,
        );
        self.y = AxisFling::new(
            self.y.value(),
            self.y.velocity(),
            brake_friction,
            scale,
            self.y_range.0,
            self.y_range.1,
        );
        self.braked = true;
    }

    pub fn is_braked(&self) -> bool {
        self.braked
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

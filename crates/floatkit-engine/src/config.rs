//! Construction-time engine configuration.

use floatkit_animation::{DockSpec, BRAKE_FRICTION, BRAKE_TARGET_SPEED, FLING_FRICTION};
use floatkit_foundation::gesture_constants::{
    FLING_START_VELOCITY, MAX_FLING_VELOCITY, TOUCH_SLOP,
};

/// How far past the visible edge a fling may carry the element before the
/// clamp stops it, in logical pixels. A small margin lets a hard throw
/// visibly overshoot instead of dead-stopping at the edge.
pub const OVERSHOOT_MARGIN: f32 = 32.0;

/// All tunables of the engine, fixed for its lifetime.
///
/// Defaults come from the shared gesture and motion constants; hosts that
/// need platform-specific feel override individual fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Drag-vs-tap displacement threshold, logical px.
    pub touch_slop: f32,
    /// Release velocity magnitude (px/sec) above which a fling starts.
    pub fling_start_velocity: f32,
    /// Cap applied to the estimated release velocity magnitude.
    pub max_fling_velocity: f32,
    /// Per-second exponential friction of a free fling.
    pub fling_friction: f32,
    /// Friction applied after a brake interception.
    pub brake_friction: f32,
    /// Peak speed (px/sec) the faster axis is normalized to on brake.
    pub brake_target_speed: f32,
    /// Allowed travel past the visible bounds, logical px.
    pub overshoot: f32,
    /// Docking speed, duration floor, and easing.
    pub docking: DockSpec,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            fling_start_velocity: FLING_START_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            fling_friction: FLING_FRICTION,
            brake_friction: BRAKE_FRICTION,
            brake_target_speed: BRAKE_TARGET_SPEED,
            overshoot: OVERSHOOT_MARGIN,
            docking: DockSpec::default(),
        }
    }
}

//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! hosts can scale them through the engine configuration; the defaults here
//! work well for typical mobile displays.

/// Touch slop in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position, the gesture is classified as a drag and a tap will no longer
/// fire on release. The classification is distance-only: a slow sub-slop
/// wiggle of any duration still counts as a tap, which downstream tap
/// handling (e.g. menu opening) depends on.
///
/// Value of 8.0 was chosen as a reasonable touch slop that:
/// - Is large enough to ignore minor finger jitter on touch screens
/// - Is small enough to feel responsive for intentional drags
/// - Matches common platform conventions (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP)
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum release velocity magnitude (logical px/sec) that starts a fling.
///
/// Below this the element simply stays where the drag released it. The check
/// is against the Euclidean magnitude of the estimated (vx, vy), so a fast
/// horizontal throw flings even when the vertical component is negligible.
pub const FLING_START_VELOCITY: f32 = 750.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Velocity estimates are clamped to this magnitude before they reach the
/// simulation, bounding the effect of sensor noise and timestamp jitter.
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

//! Motion simulation for Floatkit
//!
//! Pure, tick-driven motion math: easing curves, per-axis inertial fling
//! decay, and the magnetic docking animation. Nothing in this crate owns a
//! clock; the host advances every simulation with explicit `dt` values,
//! which keeps the physics deterministic and independently testable.

mod docking;
mod easing;
mod fling;

pub use docking::{dock_target, AnchorSide, AnchorSpec, DockAnimation, DockSpec};
pub use easing::Easing;
pub use fling::{
    AxisFling, BRAKE_FRICTION, BRAKE_TARGET_SPEED, FLING_FRICTION, MAX_FLING_DURATION_MS,
    STOP_VELOCITY,
};

//! Gesture-to-motion engine for draggable overlay elements
//!
//! [`OverlayEngine`] converts a raw pointer stream into drag updates, taps,
//! inertial flings with brake interception, and magnetic edge docking. The
//! host supplies the element through the narrow [`DragHost`] capability,
//! receives state changes through [`DragListener`], pushes pointer samples
//! with `submit_pointer`, and drives the whole engine from its frame source
//! with `advance(dt)`. At most one of drag, fling, or docking writes the
//! element position at any instant; the engine enforces that by cancelling
//! the running motion before starting the next one.

mod config;
mod engine;
mod host;
mod motion;

pub use config::{EngineConfig, OVERSHOOT_MARGIN};
pub use engine::OverlayEngine;
pub use host::{DragHost, DragListener, Viewport};
pub use motion::FlingSimulation;

pub use floatkit_animation::{AnchorSide, AnchorSpec, DockSpec, Easing};
pub use floatkit_foundation::{GestureEvent, PointerEventKind, PointerSample, Velocity};
pub use floatkit_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::OverlayEngine;
    pub use crate::host::{DragHost, DragListener, Viewport};
    pub use floatkit_animation::{AnchorSide, AnchorSpec};
    pub use floatkit_foundation::{PointerEventKind, PointerSample};
    pub use floatkit_graphics::{Point, Size};
}

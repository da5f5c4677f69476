//! Pointer input interpretation for Floatkit
//!
//! This crate turns a raw stream of pointer samples into normalized gesture
//! events: press, drag-start, drag-to, tap, and release. It owns the touch
//! slop disambiguation, the drag session bookkeeping, and the velocity
//! estimation that the motion crates consume on release.

pub mod gesture_constants;
mod interpreter;
mod pointer;
mod velocity_tracker;

pub use interpreter::{DragSession, GestureEvent, GestureInterpreter};
pub use pointer::{PointerEventKind, PointerId, PointerQueue, PointerSample};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::interpreter::{GestureEvent, GestureInterpreter};
    pub use crate::pointer::{PointerEventKind, PointerQueue, PointerSample};
    pub use crate::velocity_tracker::{Velocity, VelocityTracker};
}

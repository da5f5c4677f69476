//! Boundary contracts between the engine and its host environment.

use floatkit_graphics::{Point, Size};

/// Narrow capability over the positioned element.
///
/// The engine never owns rendering or window placement; it only reads and
/// writes coordinates through this trait. Hosts implement it over whatever
/// actually draws the element.
pub trait DragHost {
    /// Current top-left origin of the element, absolute screen coordinates.
    fn position(&self) -> Point;

    /// Moves the element. Called from drag updates, fling ticks, and docking
    /// ticks, never from more than one of them within a single frame.
    fn set_position(&mut self, position: Point);

    /// Current element size.
    fn size(&self) -> Size;
}

/// Callbacks from the engine back to the host.
///
/// All methods default to no-ops so hosts implement only what they observe.
pub trait DragListener {
    fn on_press(&mut self, x: f32, y: f32) {
        let _ = (x, y);
    }

    fn on_drag_start(&mut self, x: f32, y: f32) {
        let _ = (x, y);
    }

    fn on_drag_to(&mut self, x: f32, y: f32, within_slop: bool) {
        let _ = (x, y, within_slop);
    }

    fn on_tap(&mut self) {}

    fn on_released_at(&mut self, x: f32, y: f32) {
        let _ = (x, y);
    }
}

/// Current display environment: visible bounds and pixel density.
///
/// Supplied at construction and again whenever it changes (rotation,
/// resize); the engine recomputes clamp ranges and docking distances from
/// the latest value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub density: f32,
}

impl Viewport {
    /// A non-positive density is treated as 1.0.
    pub fn new(width: f32, height: f32, density: f32) -> Self {
        Self {
            width,
            height,
            density: if density > 0.0 { density } else { 1.0 },
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

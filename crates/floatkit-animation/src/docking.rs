//! Magnetic edge docking.
//!
//! Docking pulls the element to an anchor on a horizontal screen edge and
//! animates it there over a distance-proportional duration, with the elapsed
//! fraction shaped through a bounce easing so the element rebounds off its
//! destination before settling. Docking is independent of the fling
//! machinery; the engine guarantees the two never drive the element at once.

use floatkit_graphics::{Point, Rect, Size};
use log::trace;

use crate::easing::Easing;

/// Reference docking speed in density-independent px per second.
pub const DOCK_REFERENCE_SPEED: f32 = 1_500.0;

/// Fixed duration offset applied to every docking, so even a zero-distance
/// docking animates visibly.
pub const DOCK_MIN_DURATION_MS: f32 = 250.0;

/// Which horizontal edge the element docks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorSide {
    /// The left edge in left-to-right layouts.
    Start,
    /// The right edge in left-to-right layouts.
    End,
}

/// Where along the chosen edge the element comes to rest.
///
/// `normalized_y` is the vertical position of the element's center as a
/// fraction of the viewport height, clamped to [0, 1]. Immutable for the
/// lifetime of a docking operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorSpec {
    pub side: AnchorSide,
    pub normalized_y: f32,
}

impl AnchorSpec {
    pub fn new(side: AnchorSide, normalized_y: f32) -> Self {
        Self {
            side,
            normalized_y: normalized_y.clamp(0.0, 1.0),
        }
    }
}

/// Docking animation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockSpec {
    /// Density-independent px per second of travel.
    pub reference_speed: f32,
    /// Duration floor applied regardless of distance.
    pub min_duration_ms: f32,
    /// Curve the elapsed fraction is shaped through.
    pub easing: Easing,
}

impl Default for DockSpec {
    fn default() -> Self {
        Self {
            reference_speed: DOCK_REFERENCE_SPEED,
            min_duration_ms: DOCK_MIN_DURATION_MS,
            easing: Easing::BounceOut,
        }
    }
}

/// Computes the destination bounds for an element docking to `anchor`.
///
/// The element lands flush against the chosen edge with its vertical center
/// at `normalized_y` of the viewport height, pulled inside the viewport when
/// the anchor would push it past the top or bottom.
pub fn dock_target(element_size: Size, viewport_size: Size, anchor: &AnchorSpec) -> Rect {
    let x = match anchor.side {
        AnchorSide::Start => 0.0,
        AnchorSide::End => viewport_size.width - element_size.width,
    };

    let max_y = (viewport_size.height - element_size.height).max(0.0);
    let y = (viewport_size.height * anchor.normalized_y - element_size.height / 2.0)
        .clamp(0.0, max_y);

    Rect::from_origin_size(Point::new(x, y), element_size)
}

/// A running docking animation from one bounds rectangle to another.
#[derive(Clone, Copy, Debug)]
pub struct DockAnimation {
    start: Rect,
    target: Rect,
    easing: Easing,
    duration_ms: f32,
    elapsed_ms: f32,
    finished: bool,
}

impl DockAnimation {
    /// Starts a docking animation.
    ///
    /// Duration is the density-normalized Euclidean distance between the two
    /// origins divided by the reference speed, plus the minimum offset. A
    /// non-positive density is treated as 1.0.
    pub fn new(start: Rect, target: Rect, density: f32, spec: &DockSpec) -> Self {
        let density = if density > 0.0 { density } else { 1.0 };
        let distance_dp = start.origin().distance_to(target.origin()) / density;
        let travel_ms = if spec.reference_speed > 0.0 {
            distance_dp / spec.reference_speed * 1_000.0
        } else {
            0.0
        };
        let duration_ms = travel_ms + spec.min_duration_ms.max(0.0);
        trace!(
            "docking over {} dp in {} ms",
            distance_dp,
            duration_ms
        );

        Self {
            start,
            target,
            easing: spec.easing,
            duration_ms,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> Rect {
        self.target
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances by `dt_ms` and returns the interpolated bounds plus whether
    /// the animation just reached (or already reached) its destination.
    ///
    /// The interpolation fraction is linear in elapsed time; the displayed
    /// rectangle passes through the easing of that fraction. On completion
    /// the returned bounds are exactly the target.
    pub fn advance(&mut self, dt_ms: f32) -> (Rect, bool) {
        if self.finished {
            return (self.target, true);
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let fraction = if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if fraction >= 1.0 {
            self.finished = true;
            return (self.target, true);
        }

        let eased = self.easing.transform(fraction);
        (self.start.lerp(&self.target, eased), false)
    }
}

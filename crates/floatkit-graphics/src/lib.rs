//! Pure math/data for geometry in Floatkit
//!
//! This crate contains the geometry primitives shared by the input
//! interpretation and motion simulation crates. It has no dependencies and no
//! notion of rendering; everything here is plain value math.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}

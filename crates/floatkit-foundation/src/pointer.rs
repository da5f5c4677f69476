//! Pointer sample types and the frame-boundary queue.
//!
//! Platform shells push raw pointer samples into a [`PointerQueue`] as they
//! arrive and the engine drains the queue once per tick, so pointer handling
//! and simulation steps never interleave within a frame.

use floatkit_graphics::Point;
use smallvec::SmallVec;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single raw pointer reading.
///
/// Timestamps are integer milliseconds from any monotonic origin; only
/// differences between samples matter. Positions are absolute screen
/// coordinates in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub time_ms: i64,
    pub position: Point,
}

impl PointerSample {
    pub fn new(kind: PointerEventKind, time_ms: i64, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            time_ms,
            position,
        }
    }

    /// Tag the sample with a pointer identity.
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// FIFO buffer of pointer samples awaiting the next tick.
///
/// Inline capacity covers the handful of samples a display refresh interval
/// typically accumulates, so steady-state dragging never heap-allocates.
#[derive(Default)]
pub struct PointerQueue {
    queue: SmallVec<[PointerSample; 8]>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, sample: PointerSample) {
        self.queue.push(sample);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains every queued sample, in arrival order, into `handler`.
    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerSample),
    {
        for sample in self.queue.drain(..) {
            handler(sample);
        }
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut queue = PointerQueue::new();
        queue.push(PointerSample::new(
            PointerEventKind::Down,
            0,
            Point::new(1.0, 0.0),
        ));
        queue.push(PointerSample::new(
            PointerEventKind::Move,
            5,
            Point::new(2.0, 0.0),
        ));
        queue.push(PointerSample::new(
            PointerEventKind::Up,
            10,
            Point::new(3.0, 0.0),
        ));

        let mut seen = Vec::new();
        queue.drain(|sample| seen.push(sample.position.x));

        assert_eq!(seen, vec![1.0, 2.0, 3.0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards_pending_samples() {
        let mut queue = PointerQueue::new();
        queue.push(PointerSample::new(PointerEventKind::Down, 0, Point::ZERO));
        queue.clear();

        let mut count = 0;
        queue.drain(|_| count += 1);
        assert_eq!(count, 0);
    }
}

//! Slop-based press/drag/tap interpretation.
//!
//! [`GestureInterpreter`] is the touch state machine: it owns the drag
//! session, feeds the velocity tracker, and turns raw pointer samples into
//! normalized [`GestureEvent`]s. It never touches the dragged element itself;
//! the engine applies positions and routes events to the host listener.

use floatkit_graphics::{Point, Size};
use log::trace;

use crate::pointer::{PointerEventKind, PointerSample};
use crate::velocity_tracker::{Velocity, VelocityTracker};

/// Per-gesture bookkeeping, alive from pointer down until the gesture ends.
///
/// The `original_*` fields are captured exactly once, at the initiating
/// press. `is_detached_from_origin` latches: once the touch has strayed past
/// the slop it stays set even if the finger wanders back.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    original_element_position: Point,
    current_element_position: Point,
    original_touch_point: Point,
    is_dragging: bool,
    is_detached_from_origin: bool,
}

impl DragSession {
    fn open(element_position: Point, touch_point: Point) -> Self {
        Self {
            original_element_position: element_position,
            current_element_position: element_position,
            original_touch_point: touch_point,
            is_dragging: false,
            is_detached_from_origin: false,
        }
    }

    pub fn current_element_position(&self) -> Point {
        self.current_element_position
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_detached_from_origin(&self) -> bool {
        self.is_detached_from_origin
    }
}

/// Normalized gesture event produced from raw pointer samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Pointer went down; carries the element's center.
    Press { center: Point },
    /// First move of the session; carries the element's new origin.
    DragStart { position: Point },
    /// Subsequent move. `within_slop` is the instantaneous
    /// distance-under-slop test against the original touch point.
    DragTo { position: Point, within_slop: bool },
    /// Pointer came up without ever leaving the slop radius.
    Tap,
    /// Pointer came up after a real drag; carries the element's final
    /// delta-based origin and the capped velocity estimate.
    Release { position: Point, velocity: Velocity },
}

/// The press/drag/tap state machine.
///
/// State walks `IDLE -> PRESSED -> { DRAGGING -> RELEASED | TAP }` and back
/// to idle; no session survives the transition back. Tap-vs-drag is decided
/// purely by Euclidean distance against the slop, never by elapsed time.
pub struct GestureInterpreter {
    slop: f32,
    max_velocity: f32,
    tracker: VelocityTracker,
    session: Option<DragSession>,
    active: bool,
}

impl GestureInterpreter {
    pub fn new(slop: f32, max_velocity: f32) -> Self {
        Self {
            slop,
            max_velocity,
            tracker: VelocityTracker::new(),
            session: None,
            active: false,
        }
    }

    /// Begins interpreting pointer samples. No-op while already active.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
    }

    /// Stops interpreting and discards any in-flight session. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.session = None;
        self.tracker.reset();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Routes a sample by kind. `element_origin`/`element_size` describe the
    /// dragged element at this instant and are only read on pointer down.
    pub fn handle(
        &mut self,
        sample: &PointerSample,
        element_origin: Point,
        element_size: Size,
    ) -> Option<GestureEvent> {
        match sample.kind {
            PointerEventKind::Down => self.on_pointer_down(sample, element_origin, element_size),
            PointerEventKind::Move => self.on_pointer_move(sample),
            PointerEventKind::Up => self.on_pointer_up(sample),
            PointerEventKind::Cancel => {
                self.on_pointer_cancel();
                None
            }
        }
    }

    /// Opens a fresh session, discarding any prior one, and resets the
    /// velocity window before any further sample is processed.
    pub fn on_pointer_down(
        &mut self,
        sample: &PointerSample,
        element_origin: Point,
        element_size: Size,
    ) -> Option<GestureEvent> {
        if !self.active {
            return None;
        }

        self.tracker.reset();
        self.tracker.add_sample(sample.time_ms, sample.position);
        self.session = Some(DragSession::open(element_origin, sample.position));
        trace!(
            "gesture: press at ({}, {})",
            sample.position.x,
            sample.position.y
        );

        let center = Point::new(
            element_origin.x + element_size.width / 2.0,
            element_origin.y + element_size.height / 2.0,
        );
        Some(GestureEvent::Press { center })
    }

    /// Updates the delta-based element position and classifies the move.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> Option<GestureEvent> {
        if !self.active {
            return None;
        }
        let session = self.session.as_mut()?;

        self.tracker.add_sample(sample.time_ms, sample.position);

        let delta = sample.position - session.original_touch_point;
        session.current_element_position = session.original_element_position + delta;

        let displacement = session.original_touch_point.distance_to(sample.position);
        let within_slop = displacement < self.slop;
        if !within_slop {
            session.is_detached_from_origin = true;
        }

        if !session.is_dragging {
            session.is_dragging = true;
            trace!("gesture: drag start");
            return Some(GestureEvent::DragStart {
                position: session.current_element_position,
            });
        }

        Some(GestureEvent::DragTo {
            position: session.current_element_position,
            within_slop,
        })
    }

    /// Ends the session as either a tap or a release.
    ///
    /// A tap requires both that the session never detached from its origin
    /// and that the final touch point is still within the slop radius.
    pub fn on_pointer_up(&mut self, sample: &PointerSample) -> Option<GestureEvent> {
        if !self.active {
            return None;
        }
        let mut session = self.session.take()?;

        let delta = sample.position - session.original_touch_point;
        session.current_element_position = session.original_element_position + delta;

        let displacement = session.original_touch_point.distance_to(sample.position);
        let within_slop = displacement < self.slop;

        if !session.is_detached_from_origin && within_slop {
            trace!("gesture: tap");
            return Some(GestureEvent::Tap);
        }

        let velocity = self.tracker.velocity_capped(self.max_velocity);
        trace!(
            "gesture: release at ({}, {}) velocity ({}, {})",
            session.current_element_position.x,
            session.current_element_position.y,
            velocity.x,
            velocity.y
        );
        Some(GestureEvent::Release {
            position: session.current_element_position,
            velocity,
        })
    }

    /// Discards the session without emitting a tap or release.
    pub fn on_pointer_cancel(&mut self) {
        if self.session.take().is_some() {
            trace!("gesture: cancelled");
        }
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f32 = 10.0;
    const MAX_VELOCITY: f32 = 8_000.0;

    fn interpreter() -> GestureInterpreter {
        let mut interpreter = GestureInterpreter::new(SLOP, MAX_VELOCITY);
        interpreter.activate();
        interpreter
    }

    fn down(time_ms: i64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(PointerEventKind::Down, time_ms, Point::new(x, y))
    }

    fn move_to(time_ms: i64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(PointerEventKind::Move, time_ms, Point::new(x, y))
    }

    fn up(time_ms: i64, x: f32, y: f32) -> PointerSample {
        PointerSample::new(PointerEventKind::Up, time_ms, Point::new(x, y))
    }

    #[test]
    fn press_reports_element_center() {
        let mut gi = interpreter();
        let event = gi.on_pointer_down(&down(0, 100.0, 100.0), Point::new(80.0, 80.0), Size::new(40.0, 40.0));
        assert_eq!(
            event,
            Some(GestureEvent::Press {
                center: Point::new(100.0, 100.0)
            })
        );
    }

    #[test]
    fn up_within_slop_is_tap() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::ZERO, Size::ZERO);
        let event = gi.on_pointer_up(&up(30, 103.0, 102.0));
        assert_eq!(event, Some(GestureEvent::Tap));
        assert!(gi.session().is_none());
    }

    #[test]
    fn sub_slop_wiggle_of_any_length_is_still_a_tap() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::ZERO, Size::ZERO);
        // A long, slow wiggle that never leaves the slop radius.
        for i in 1..50 {
            gi.on_pointer_move(&move_to(i * 100, 100.0 + (i % 3) as f32, 100.0));
        }
        let event = gi.on_pointer_up(&up(5_000, 101.0, 100.0));
        assert_eq!(event, Some(GestureEvent::Tap));
    }

    #[test]
    fn first_move_emits_drag_start_then_drag_to() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::new(100.0, 100.0), Size::ZERO);

        let first = gi.on_pointer_move(&move_to(10, 100.0, 100.0));
        assert_eq!(
            first,
            Some(GestureEvent::DragStart {
                position: Point::new(100.0, 100.0)
            })
        );

        let second = gi.on_pointer_move(&move_to(20, 130.0, 100.0));
        assert_eq!(
            second,
            Some(GestureEvent::DragTo {
                position: Point::new(130.0, 100.0),
                within_slop: false
            })
        );
    }

    #[test]
    fn drag_position_tracks_touch_delta() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 200.0, 200.0), Point::new(50.0, 60.0), Size::ZERO);
        gi.on_pointer_move(&move_to(10, 200.0, 200.0));
        let event = gi.on_pointer_move(&move_to(20, 230.0, 190.0));
        assert_eq!(
            event,
            Some(GestureEvent::DragTo {
                position: Point::new(80.0, 50.0),
                within_slop: false
            })
        );
    }

    #[test]
    fn detachment_latches_after_leaving_slop() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::ZERO, Size::ZERO);
        gi.on_pointer_move(&move_to(10, 100.0, 100.0));
        gi.on_pointer_move(&move_to(20, 130.0, 100.0));
        // Finger comes back within the slop radius before release.
        gi.on_pointer_move(&move_to(30, 102.0, 100.0));

        assert!(gi.session().unwrap().is_detached_from_origin());

        let event = gi.on_pointer_up(&up(40, 101.0, 100.0));
        assert!(
            matches!(event, Some(GestureEvent::Release { .. })),
            "a detached session never ends in a tap, got {:?}",
            event
        );
    }

    #[test]
    fn release_carries_capped_velocity() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 0.0, 0.0), Point::ZERO, Size::ZERO);
        gi.on_pointer_move(&move_to(10, 100.0, 0.0));
        gi.on_pointer_move(&move_to(20, 200.0, 0.0));
        gi.on_pointer_move(&move_to(30, 300.0, 0.0));

        let event = gi.on_pointer_up(&up(40, 400.0, 0.0));
        match event {
            Some(GestureEvent::Release { velocity, .. }) => {
                assert!(velocity.x > 0.0);
                assert!(velocity.magnitude() <= MAX_VELOCITY + 1.0);
            }
            other => panic!("expected release, got {:?}", other),
        }
    }

    #[test]
    fn new_press_discards_prior_session() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::ZERO, Size::ZERO);
        gi.on_pointer_move(&move_to(10, 150.0, 100.0));
        assert!(gi.session().unwrap().is_detached_from_origin());

        gi.on_pointer_down(&down(100, 300.0, 300.0), Point::ZERO, Size::ZERO);
        let session = gi.session().unwrap();
        assert!(!session.is_detached_from_origin());
        assert!(!session.is_dragging());
    }

    #[test]
    fn cancel_discards_session_silently() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 100.0, 100.0), Point::ZERO, Size::ZERO);
        gi.on_pointer_cancel();
        assert!(gi.session().is_none());
        // The up that may still arrive afterwards finds no session.
        assert_eq!(gi.on_pointer_up(&up(10, 100.0, 100.0)), None);
    }

    #[test]
    fn inactive_interpreter_ignores_samples() {
        let mut gi = GestureInterpreter::new(SLOP, MAX_VELOCITY);
        assert_eq!(
            gi.on_pointer_down(&down(0, 0.0, 0.0), Point::ZERO, Size::ZERO),
            None
        );

        gi.activate();
        gi.on_pointer_down(&down(0, 0.0, 0.0), Point::ZERO, Size::ZERO);
        gi.deactivate();
        assert_eq!(gi.on_pointer_move(&move_to(10, 50.0, 0.0)), None);
        assert!(gi.session().is_none());
    }

    #[test]
    fn activate_is_idempotent() {
        let mut gi = interpreter();
        gi.on_pointer_down(&down(0, 0.0, 0.0), Point::ZERO, Size::ZERO);
        gi.activate();
        assert!(gi.session().is_some(), "re-activation must not reset state");
        gi.deactivate();
        gi.deactivate();
        assert!(!gi.is_active());
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut gi = interpreter();
        assert_eq!(gi.on_pointer_move(&move_to(0, 10.0, 10.0)), None);
        assert_eq!(gi.on_pointer_up(&up(10, 10.0, 10.0)), None);
    }
}

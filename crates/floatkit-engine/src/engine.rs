//! The overlay engine: gesture interpretation wired to motion simulation.

use floatkit_animation::{dock_target, AnchorSpec, DockAnimation};
use floatkit_foundation::{
    GestureEvent, GestureInterpreter, PointerEventKind, PointerQueue, PointerSample, Velocity,
};
use floatkit_graphics::{Point, Rect};
use log::debug;

use crate::config::EngineConfig;
use crate::host::{DragHost, DragListener, Viewport};
use crate::motion::FlingSimulation;

/// The single motion source allowed to write the element position.
///
/// Replacing the variant is the cancellation: the previous simulation (and
/// a pending docking completion callback) is dropped with its state, so no
/// stale tick can ever fire afterwards.
enum Motion {
    Idle,
    Fling(FlingSimulation),
    Dock {
        animation: DockAnimation,
        on_complete: Option<Box<dyn FnOnce()>>,
    },
}

/// Coordinator for one draggable overlay element.
///
/// Pointer samples arrive through [`submit_pointer`](Self::submit_pointer)
/// and are queued; every [`advance`](Self::advance) first drains the queue
/// in arrival order and then steps the running motion exactly once. Both
/// phases run on the caller's thread, so pointer handling and simulation
/// ticks never interleave.
pub struct OverlayEngine<H: DragHost, L: DragListener> {
    config: EngineConfig,
    viewport: Viewport,
    interpreter: GestureInterpreter,
    queue: PointerQueue,
    motion: Motion,
    host: H,
    listener: L,
}

impl<H: DragHost, L: DragListener> OverlayEngine<H, L> {
    pub fn new(host: H, listener: L, viewport: Viewport, config: EngineConfig) -> Self {
        Self {
            interpreter: GestureInterpreter::new(config.touch_slop, config.max_fling_velocity),
            config,
            viewport,
            queue: PointerQueue::new(),
            motion: Motion::Idle,
            host,
            listener,
        }
    }

    /// Places the element and begins listening for pointer samples.
    ///
    /// No-op while already active: repeated activation neither moves the
    /// element nor resets any state.
    pub fn activate(&mut self, initial_position: Point) {
        if self.interpreter.is_active() {
            return;
        }
        self.host.set_position(initial_position);
        self.interpreter.activate();
        debug!(
            "engine activated at ({}, {})",
            initial_position.x, initial_position.y
        );
    }

    /// Stops listening, discards any session, queued samples, and running
    /// motion. Idempotent; no callbacks fire from the discarded state.
    pub fn deactivate(&mut self) {
        self.interpreter.deactivate();
        self.queue.clear();
        self.stop_motion();
    }

    pub fn is_active(&self) -> bool {
        self.interpreter.is_active()
    }

    pub fn is_flinging(&self) -> bool {
        matches!(self.motion, Motion::Fling(_))
    }

    pub fn is_docking(&self) -> bool {
        matches!(self.motion, Motion::Dock { .. })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Installs new display bounds/density.
    ///
    /// Future clamp ranges and docking distances use the new values. When no
    /// motion is running, the element is pulled back inside the visible
    /// range right away (rotation can strand it off-screen).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Motion::Idle = self.motion {
            let size = self.host.size();
            let position = self.host.position();
            let clamped = Point::new(
                position.x.clamp(0.0, (viewport.width - size.width).max(0.0)),
                position.y.clamp(0.0, (viewport.height - size.height).max(0.0)),
            );
            if clamped != position {
                self.host.set_position(clamped);
            }
        }
    }

    /// Queues a pointer sample for the next `advance`. Dropped while the
    /// engine is inactive.
    pub fn submit_pointer(&mut self, sample: PointerSample) {
        if !self.interpreter.is_active() {
            return;
        }
        self.queue.push(sample);
    }

    /// One engine tick: drain queued pointer samples in order, then step the
    /// running motion by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f32) {
        let mut queue = std::mem::take(&mut self.queue);
        queue.drain(|sample| self.process_pointer(sample));
        self.queue = queue;

        self.step_motion(dt_ms);
    }

    /// Intercepts a fling in flight, normalizing both axes to the brake
    /// target speed under brake friction. No-op when nothing is flinging.
    pub fn brake(&mut self) {
        if let Motion::Fling(simulation) = &mut self.motion {
            simulation.brake(self.config.brake_friction, self.config.brake_target_speed);
        }
    }

    /// Starts docking the element to `anchor`, superseding any running
    /// fling or previous docking (whose completion callback never fires).
    pub fn dock(&mut self, anchor: AnchorSpec) {
        self.dock_with(anchor, || {});
    }

    /// Like [`dock`](Self::dock), invoking `on_complete` exactly once when
    /// the element comes to rest on the anchor.
    pub fn dock_with<F>(&mut self, anchor: AnchorSpec, on_complete: F)
    where
        F: FnOnce() + 'static,
    {
        self.stop_motion();

        let size = self.host.size();
        let start = Rect::from_origin_size(self.host.position(), size);
        let target = dock_target(size, self.viewport.size(), &anchor);
        let animation = DockAnimation::new(start, target, self.viewport.density, &self.config.docking);
        debug!(
            "docking to ({}, {}) over {} ms",
            target.x,
            target.y,
            animation.duration_ms()
        );
        self.motion = Motion::Dock {
            animation,
            on_complete: Some(Box::new(on_complete)),
        };
    }

    fn process_pointer(&mut self, sample: PointerSample) {
        // A new press must find the engine quiescent: whatever was driving
        // the element stops, silently, before the session resets.
        if sample.kind == PointerEventKind::Down {
            self.stop_motion();
        }

        let event = self
            .interpreter
            .handle(&sample, self.host.position(), self.host.size());

        match event {
            Some(GestureEvent::Press { center }) => self.listener.on_press(center.x, center.y),
            Some(GestureEvent::DragStart { position }) => {
                self.listener.on_drag_start(position.x, position.y);
            }
            Some(GestureEvent::DragTo {
                position,
                within_slop,
            }) => {
                self.host.set_position(position);
                self.listener.on_drag_to(position.x, position.y, within_slop);
            }
            Some(GestureEvent::Tap) => self.listener.on_tap(),
            Some(GestureEvent::Release { position, velocity }) => {
                self.host.set_position(position);
                if velocity.magnitude() > self.config.fling_start_velocity {
                    self.start_fling(position, velocity);
                } else {
                    self.listener.on_released_at(position.x, position.y);
                }
            }
            None => {}
        }
    }

    fn start_fling(&mut self, position: Point, velocity: Velocity) {
        let size = self.host.size();
        let overshoot = self.config.overshoot;
        let x_range = (-overshoot, self.viewport.width - size.width + overshoot);
        let y_range = (-overshoot, self.viewport.height - size.height + overshoot);
        debug!(
            "fling started with velocity ({}, {})",
            velocity.x, velocity.y
        );
        self.motion = Motion::Fling(FlingSimulation::start(
            position,
            velocity,
            self.config.fling_friction,
            x_range,
            y_range,
        ));
    }

    fn step_motion(&mut self, dt_ms: f32) {
        match &mut self.motion {
            Motion::Idle => {}
            Motion::Fling(simulation) => {
                let (position, settled) = simulation.advance(dt_ms);
                self.host.set_position(position);
                if settled {
                    self.motion = Motion::Idle;
                    debug!("fling settled at ({}, {})", position.x, position.y);
                    self.listener.on_released_at(position.x, position.y);
                }
            }
            Motion::Dock {
                animation,
                on_complete,
            } => {
                let (bounds, finished) = animation.advance(dt_ms);
                let callback = if finished { on_complete.take() } else { None };
                self.host.set_position(bounds.origin());
                if finished {
                    self.motion = Motion::Idle;
                    debug!("docked at ({}, {})", bounds.x, bounds.y);
                    if let Some(callback) = callback {
                        callback();
                    }
                }
            }
        }
    }

    fn stop_motion(&mut self) {
        if !matches!(self.motion, Motion::Idle) {
            debug!("cancelling running motion");
        }
        self.motion = Motion::Idle;
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;

//! Gesture state machine
//!
//! Tracks one pointer from down to up and resolves it into a selection, a
//! depth-fixed planar drag, or a rotation gesture. Crossing the rotation
//! threshold emits a [`GestureEvent::ThresholdCrossed`] toward the carousel.
//!
//! States: `Idle → Selecting → {DraggingPlane | Rotating} → Idle`. The
//! sub-mode an object drag maps to is fixed per engine instance by
//! [`GesturePolicy`]; policies are mutually exclusive.

use std::f32::consts::FRAC_PI_2;

use crate::interaction::pointer::PointerSample;
use crate::scene::{NodeKey, Scene};

/// Which interaction an engine build maps a selected object's drag to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePolicy {
    /// Move the object across the plane held at the anchor depth; depth
    /// from the viewer never changes.
    DragPlane,
    /// Rotate around +Y with immediate visual feedback; crossing the
    /// accumulated-rotation threshold advances the carousel at once.
    RotateCycle,
    /// Rotate a fixed 90° on release once the pointer travelled far enough
    /// horizontally; the carousel advance is deferred by a settle delay so
    /// the rotation stays perceptible before the swap.
    ReleaseRotate,
}

/// Event emitted toward the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Accumulated rotation (or release travel) crossed the configured
    /// threshold. `direction` carries the sign of the rotation; the
    /// release variant always advances forward.
    ThresholdCrossed { direction: i32 },
}

/// Tuning for the gesture state machine. Defaults follow the deployed
/// behavior: 0.01 rad/px gain, 90° rotation threshold, 50 px swipe
/// threshold with a 300 ms settle delay, objects held 1 unit from the
/// viewer.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    pub policy: GesturePolicy,
    /// Radians of yaw per pixel of horizontal pointer travel.
    pub sensitivity: f32,
    /// Accumulated-yaw bound (radians) that triggers a carousel advance.
    pub rotate_threshold: f32,
    /// Horizontal travel (pixels) for the release variant.
    pub swipe_threshold_px: f32,
    /// Seconds between release and the deferred `ThresholdCrossed`.
    pub settle_delay: f64,
    /// Distance along the pointer ray at which dragged objects are held.
    pub anchor_depth: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            policy: GesturePolicy::RotateCycle,
            sensitivity: 0.01,
            rotate_threshold: FRAC_PI_2,
            swipe_threshold_px: 50.0,
            settle_delay: 0.3,
            anchor_depth: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Pointer is down on an object; no sub-mode entered yet.
    Selecting,
    DraggingPlane,
    Rotating,
}

/// The central pointer state machine. Single writer of all gesture state;
/// reads the scene for the selected object and mutates only its transform.
pub struct GestureController {
    config: GestureConfig,
    phase: Phase,
    selected: Option<NodeKey>,
    down_x: f32,
    last_x: f32,
    accumulated: f32,
    /// `(fire_at, direction)` for the release variant's deferred event.
    deferred: Option<(f64, i32)>,
}

impl GestureController {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            selected: None,
            down_x: 0.0,
            last_x: 0.0,
            accumulated: 0.0,
            deferred: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The object the active gesture operates on, if any.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<NodeKey> {
        self.selected
    }

    /// Rotation accumulated since the gesture began (or the last threshold
    /// reset). Exactly `0.0` right after a reset.
    #[inline]
    #[must_use]
    pub fn accumulated_rotation(&self) -> f32 {
        self.accumulated
    }

    /// Pointer-down with the hit-test result for this sample. A miss keeps
    /// the controller idle; a hit enters `Selecting`.
    pub fn on_down(&mut self, sample: &PointerSample, hit: Option<NodeKey>) {
        let Some(object) = hit else {
            return;
        };
        self.phase = Phase::Selecting;
        self.selected = Some(object);
        self.down_x = sample.x;
        self.last_x = sample.x;
        self.accumulated = 0.0;
    }

    /// Pointer-move. Applies the policy's transform mutation and returns a
    /// threshold event if this move crossed the bound.
    pub fn on_move(&mut self, sample: &PointerSample, scene: &mut Scene) -> Option<GestureEvent> {
        let object = self.selected?;
        if !scene.contains(object) {
            // The slot swapped the object out from under us; never mutate a
            // released node.
            self.reset();
            return None;
        }

        match self.config.policy {
            GesturePolicy::DragPlane => {
                self.phase = Phase::DraggingPlane;
                let point = sample.ray.point_at(self.config.anchor_depth);
                if let Some(node) = scene.get_mut(object) {
                    // Depth stays fixed: only x/y follow the pointer.
                    node.transform.position.x = point.x;
                    node.transform.position.y = point.y;
                }
                None
            }
            GesturePolicy::RotateCycle => {
                self.phase = Phase::Rotating;
                let delta_x = sample.x - self.last_x;
                self.last_x = sample.x;
                let delta = delta_x * self.config.sensitivity;
                if let Some(node) = scene.get_mut(object) {
                    node.transform.yaw += delta;
                }
                self.accumulated += delta;

                if self.accumulated.abs() >= self.config.rotate_threshold {
                    let direction = if self.accumulated >= 0.0 { 1 } else { -1 };
                    // End the gesture before pointer-up so one swipe cannot
                    // trigger twice.
                    self.reset();
                    return Some(GestureEvent::ThresholdCrossed { direction });
                }
                None
            }
            GesturePolicy::ReleaseRotate => {
                // Travel is measured on release; just track the pointer.
                self.last_x = sample.x;
                None
            }
        }
    }

    /// Pointer-up. Ends the gesture; under [`GesturePolicy::ReleaseRotate`]
    /// this is where the swipe is committed and the deferred advance
    /// scheduled.
    pub fn on_up(&mut self, sample: &PointerSample, scene: &mut Scene) {
        if self.config.policy == GesturePolicy::ReleaseRotate {
            if let Some(object) = self.selected {
                let travel = sample.x - self.down_x;
                if travel.abs() > self.config.swipe_threshold_px && scene.contains(object) {
                    if let Some(node) = scene.get_mut(object) {
                        node.transform.yaw += FRAC_PI_2 * travel.signum();
                    }
                    self.deferred = Some((sample.time + self.config.settle_delay, 1));
                }
            }
        }
        self.reset();
    }

    /// Fires a scheduled release-variant event once its settle delay has
    /// elapsed. Called from the engine's update turn.
    pub fn poll_deferred(&mut self, now: f64) -> Option<GestureEvent> {
        let (fire_at, direction) = self.deferred?;
        if now >= fire_at {
            self.deferred = None;
            Some(GestureEvent::ThresholdCrossed { direction })
        } else {
            None
        }
    }

    /// Forced cancellation for a specific object: the slot calls this when
    /// it replaces the displayed node so an in-flight gesture cannot mutate
    /// a detached object. Accumulators are discarded; no event fires.
    pub fn cancel_for(&mut self, object: NodeKey) {
        if self.selected == Some(object) {
            self.reset();
        }
    }

    /// Full cancellation, e.g. on session end. Also drops any deferred
    /// advance.
    pub fn cancel(&mut self) {
        self.reset();
        self.deferred = None;
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.selected = None;
        self.accumulated = 0.0;
    }
}

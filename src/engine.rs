//! Engine Core Module
//!
//! [`Engine`] is the single-threaded update point that wires the
//! interaction pipeline together: pointer events go through ray projection
//! and hit testing into the gesture controller; threshold events advance
//! the carousel, which issues loads; completions are drained once per
//! update turn and applied to the asset slot. Because completions are only
//! ever applied here, the slot's sequence check is atomic with respect to
//! every other pending completion.
//!
//! # Example
//!
//! ```rust,ignore
//! use spindle::{Engine, EngineConfig, PointerEvent};
//!
//! let config = EngineConfig::new(vec!["models/glasses.glb".into()]);
//! let mut engine = Engine::new(config, resolver)?;
//! engine.start();
//!
//! // Per frame:
//! engine.handle_pointer(PointerEvent::Down { x, y, time });
//! engine.update(time);
//! ```

use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;

use crate::assets::{AssetHandle, AssetLoader, AssetResolver, LoadCompletion, SequenceId};
use crate::carousel::{AssetSlot, Carousel};
use crate::errors::Result;
use crate::interaction::gesture::{GestureConfig, GestureController, GestureEvent};
use crate::interaction::pointer::{PointerEvent, PointerSample};
use crate::interaction::{hit, pointer};
use crate::scene::{Camera, NodeKey, Scene};

/// Construction-time configuration. The asset sequence and gesture policy
/// are fixed for the session; there is no persisted state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cyclic asset sequence, length ≥ 1.
    pub handles: Vec<AssetHandle>,
    pub gesture: GestureConfig,
    /// World-space point displayed assets are anchored at.
    pub anchor: Vec3,
    /// Initial viewport size in pixels.
    pub viewport: (f32, f32),
    /// Vertical field of view in degrees.
    pub camera_fov: f32,
    pub camera_near: f32,
    pub camera_far: f32,
}

impl EngineConfig {
    /// Defaults mirror a handheld AR session: assets held one meter in
    /// front of the viewer, 60° field of view.
    #[must_use]
    pub fn new(handles: Vec<AssetHandle>) -> Self {
        Self {
            handles,
            gesture: GestureConfig::default(),
            anchor: Vec3::new(0.0, 0.0, -1.0),
            viewport: (1280.0, 720.0),
            camera_fov: 60.0,
            camera_near: 0.01,
            camera_far: 20.0,
        }
    }
}

/// The central coordinator. See the module docs for the data flow.
pub struct Engine {
    pub scene: Scene,
    pub camera: Camera,
    pub loader: AssetLoader,
    pub slot: AssetSlot,
    pub carousel: Carousel,
    pub gestures: GestureController,
    viewport: (f32, f32),
}

impl Engine {
    /// Fails if the configured handle sequence is empty.
    pub fn new(config: EngineConfig, resolver: Arc<dyn AssetResolver>) -> Result<Self> {
        let aspect = config.viewport.0 / config.viewport.1.max(1.0);
        let camera =
            Camera::new_perspective(config.camera_fov, aspect, config.camera_near, config.camera_far);
        Ok(Self {
            scene: Scene::new(),
            camera,
            loader: AssetLoader::new(resolver),
            slot: AssetSlot::new(config.anchor),
            carousel: Carousel::new(config.handles)?,
            gestures: GestureController::new(config.gesture),
            viewport: config.viewport,
        })
    }

    /// Issues the initial load for the handle under the carousel cursor.
    pub fn start(&self) -> SequenceId {
        self.carousel.request_current(&self.loader)
    }

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Window-resize handling: updates the viewport used for pointer
    /// unprojection and the camera aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.camera.set_aspect(width / height.max(1.0));
    }

    /// Feeds one pointer event through the interaction pipeline. Threshold
    /// events are routed to the carousel internally; the produced event is
    /// also returned for observability.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        match event {
            PointerEvent::Down { x, y, time } => {
                let sample = self.sample(x, y, time);
                let candidates: Vec<NodeKey> = self.slot.current().into_iter().collect();
                let hit = hit::test(sample.ray, &self.scene, &candidates).map(|h| h.object);
                self.gestures.on_down(&sample, hit);
                None
            }
            PointerEvent::Moved { x, y, time } => {
                let sample = self.sample(x, y, time);
                let event = self.gestures.on_move(&sample, &mut self.scene);
                if let Some(event) = event {
                    self.route(event);
                }
                event
            }
            PointerEvent::Up { x, y, time } => {
                let sample = self.sample(x, y, time);
                self.gestures.on_up(&sample, &mut self.scene);
                None
            }
        }
    }

    /// One turn of the update loop, invoked once per display frame with the
    /// current session time in seconds: fires any deferred gesture event,
    /// drains load completions, refreshes world matrices.
    pub fn update(&mut self, now: f64) {
        if let Some(event) = self.gestures.poll_deferred(now) {
            self.route(event);
        }
        let completions: Vec<LoadCompletion> = self.loader.poll().collect();
        for completion in completions {
            self.apply_completion(completion);
        }
        self.scene.update_world();
    }

    /// Routes one completion through the slot, cancelling any gesture that
    /// held the replaced object. Public so hosts and tests can control
    /// completion order explicitly.
    pub fn apply_completion(&mut self, completion: LoadCompletion) {
        if let Some(replaced) = self.slot.apply(completion, &mut self.scene) {
            self.gestures.cancel_for(replaced);
        }
    }

    /// Blocks for the next completion (up to `timeout`) and applies it.
    /// Returns whether one arrived. For headless tools and tests.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        match self.loader.wait(timeout) {
            Some(completion) => {
                self.apply_completion(completion);
                self.scene.update_world();
                true
            }
            None => false,
        }
    }

    /// Session teardown: cancels any gesture and detaches the displayed
    /// object. The carousel cursor survives so a new session resumes where
    /// the previous one left off.
    pub fn reset_session(&mut self) {
        self.gestures.cancel();
        self.slot.clear(&mut self.scene);
    }

    fn route(&mut self, event: GestureEvent) {
        let GestureEvent::ThresholdCrossed { direction } = event;
        self.carousel.advance(direction, &self.loader);
    }

    fn sample(&self, x: f32, y: f32, time: f64) -> PointerSample {
        let ray = pointer::project(x, y, self.viewport, &self.camera);
        PointerSample { x, y, ray, time }
    }
}

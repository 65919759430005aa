//! End-to-end engine tests
//!
//! Drives the full pipeline through the public surface: pointer events in,
//! ray projection, hit testing, gesture thresholds, carousel advances,
//! asynchronous loads, slot swaps. Timing-sensitive behavior is driven with
//! explicit timestamps so nothing here sleeps except for load completions.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;
use std::time::Duration;

use spindle::assets::{AssetHandle, AssetResolver, FnResolver, Prefab};
use spindle::errors::SpindleError;
use spindle::interaction::{GestureConfig, GestureEvent, GesturePolicy};
use spindle::{Engine, EngineConfig, PointerEvent};

const TIMEOUT: Duration = Duration::from_secs(5);
const EPSILON: f32 = 1e-5;

/// Resolver whose prefabs carry a pick bound sized by the handle, so tests
/// can tell which asset ended up on screen. Radii stay well under the 1 m
/// anchor distance so off-center rays genuinely miss.
fn sized_resolver() -> Arc<dyn AssetResolver> {
    Arc::new(FnResolver(|handle: &AssetHandle| {
        Ok(Prefab::with_bounds(handle.uri(), handle.uri().len() as f32 * 0.1))
    }))
}

fn engine_with(uris: &[&str], policy: GesturePolicy) -> Engine {
    let mut config = EngineConfig::new(uris.iter().map(|&u| AssetHandle::from(u)).collect());
    config.gesture = GestureConfig {
        policy,
        ..GestureConfig::default()
    };
    Engine::new(config, sized_resolver()).unwrap()
}

/// Engine with the first asset loaded and attached.
fn started_engine(uris: &[&str], policy: GesturePolicy) -> Engine {
    let mut engine = engine_with(uris, policy);
    engine.start();
    assert!(engine.pump_blocking(TIMEOUT), "initial load should complete");
    engine
}

fn down(x: f32, y: f32, time: f64) -> PointerEvent {
    PointerEvent::Down { x, y, time }
}

fn moved(x: f32, y: f32, time: f64) -> PointerEvent {
    PointerEvent::Moved { x, y, time }
}

fn up(x: f32, y: f32, time: f64) -> PointerEvent {
    PointerEvent::Up { x, y, time }
}

// ============================================================================
// Swipe-to-Advance (threshold during drag)
// ============================================================================

#[test]
fn swipe_past_threshold_loads_the_next_asset() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::RotateCycle);
    let first = engine.slot.current().expect("first asset attached");
    assert_eq!(engine.loader.issued(), 1);

    // Press on the object at screen center (default viewport 1280x720,
    // asset anchored one meter straight ahead).
    engine.handle_pointer(down(640.0, 360.0, 0.0));
    assert_eq!(engine.gestures.selected(), Some(first));

    // 200 px rightward: 2.0 rad of rotation, well past pi/2
    let event = engine.handle_pointer(moved(840.0, 360.0, 0.1));
    assert_eq!(event, Some(GestureEvent::ThresholdCrossed { direction: 1 }));
    assert_eq!(engine.loader.issued(), 2, "crossing issues the next load");

    engine.handle_pointer(up(840.0, 360.0, 0.2));
    assert!(engine.pump_blocking(TIMEOUT));

    let second = engine.slot.current().expect("replacement attached");
    assert_ne!(second, first);
    assert!(!engine.scene.contains(first), "old object released");
    assert_eq!(engine.carousel.index(), 1);

    let node = engine.scene.get(second).unwrap();
    assert!(node.transform.yaw.abs() < EPSILON, "swap resets rotation");
    assert_eq!(node.transform.position, engine.slot.anchor());
}

#[test]
fn sub_threshold_drag_only_rotates() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::RotateCycle);
    let key = engine.slot.current().unwrap();

    engine.handle_pointer(down(640.0, 360.0, 0.0));
    // 50 px = 0.5 rad, below pi/2
    let event = engine.handle_pointer(moved(690.0, 360.0, 0.1));
    assert!(event.is_none());
    engine.handle_pointer(up(690.0, 360.0, 0.2));

    assert_eq!(engine.loader.issued(), 1, "no advance was triggered");
    let yaw = engine.scene.get(key).unwrap().transform.yaw;
    assert!((yaw - 0.5).abs() < EPSILON, "rotation survives the release");
    assert_eq!(engine.carousel.index(), 0);
}

// ============================================================================
// Rapid Advances and Out-of-Order Completions
// ============================================================================

#[test]
fn rapid_advances_settle_on_the_last_request() {
    let mut engine = started_engine(&["a", "bb", "ccc"], GesturePolicy::RotateCycle);

    // Two advances before any of their completions is applied
    engine.carousel.advance(1, &engine.loader);
    engine.carousel.advance(1, &engine.loader);
    assert_eq!(engine.loader.issued(), 3);
    assert_eq!(engine.carousel.index(), 2);

    // Apply both, in whichever order they resolved
    assert!(engine.pump_blocking(TIMEOUT));
    assert!(engine.pump_blocking(TIMEOUT));

    let key = engine.slot.current().expect("final asset attached");
    let radius = engine.scene.get(key).unwrap().bounds.unwrap().radius;
    assert!(
        (radius - 0.3).abs() < EPSILON,
        "displayed asset must be \"ccc\", got radius {radius}"
    );
    assert_eq!(engine.scene.roots().len(), 1, "exactly one object on screen");
}

#[test]
fn wraparound_returns_to_the_first_asset() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::RotateCycle);

    engine.carousel.advance(1, &engine.loader);
    engine.carousel.advance(1, &engine.loader);
    assert_eq!(engine.carousel.index(), 0);

    assert!(engine.pump_blocking(TIMEOUT));
    assert!(engine.pump_blocking(TIMEOUT));

    let key = engine.slot.current().unwrap();
    let radius = engine.scene.get(key).unwrap().bounds.unwrap().radius;
    assert!((radius - 0.1).abs() < EPSILON, "wrapped back to \"a\"");
}

// ============================================================================
// Misses and Failures
// ============================================================================

#[test]
fn press_off_the_object_is_inert() {
    let mut engine = started_engine(&["a"], GesturePolicy::RotateCycle);
    let key = engine.slot.current().unwrap();

    // Far corner: the ray misses the anchored object
    engine.handle_pointer(down(10.0, 10.0, 0.0));
    assert!(engine.gestures.is_idle());

    let event = engine.handle_pointer(moved(400.0, 10.0, 0.1));
    assert!(event.is_none());
    engine.handle_pointer(up(400.0, 10.0, 0.2));

    assert_eq!(engine.loader.issued(), 1);
    let yaw = engine.scene.get(key).unwrap().transform.yaw;
    assert!(yaw.abs() < EPSILON, "nothing was rotated");
}

#[test]
fn failed_load_leaves_an_empty_scene_without_crashing() {
    let resolver = Arc::new(FnResolver(|handle: &AssetHandle| {
        Err::<Prefab, _>(SpindleError::AssetNotFound(handle.uri().to_string()))
    }));
    let config = EngineConfig::new(vec![AssetHandle::from("missing.glb")]);
    let mut engine = Engine::new(config, resolver).unwrap();

    engine.start();
    assert!(engine.pump_blocking(TIMEOUT), "the failure still completes");

    assert!(engine.slot.current().is_none());
    assert_eq!(engine.slot.load_failures(), 1);
    assert_eq!(engine.scene.node_count(), 0);

    // Pointer input over the empty scene is harmless
    engine.handle_pointer(down(640.0, 360.0, 0.0));
    assert!(engine.gestures.is_idle());
    engine.update(1.0);
}

// ============================================================================
// Release-Variant Timing
// ============================================================================

#[test]
fn release_swipe_advances_after_the_settle_delay() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::ReleaseRotate);
    let key = engine.slot.current().unwrap();

    engine.handle_pointer(down(640.0, 360.0, 1.0));
    engine.handle_pointer(up(840.0, 360.0, 1.0));

    // Quarter turn applied immediately, advance deferred
    let yaw = engine.scene.get(key).unwrap().transform.yaw;
    assert!((yaw - FRAC_PI_2).abs() < EPSILON);
    assert_eq!(engine.loader.issued(), 1);

    engine.update(1.1);
    assert_eq!(engine.loader.issued(), 1, "still inside the settle delay");

    engine.update(1.35);
    assert_eq!(engine.loader.issued(), 2, "deferred advance fired");
    assert_eq!(engine.carousel.index(), 1);
}

#[test]
fn release_below_swipe_threshold_never_advances() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::ReleaseRotate);

    engine.handle_pointer(down(640.0, 360.0, 1.0));
    engine.handle_pointer(up(670.0, 360.0, 1.2));

    engine.update(5.0);
    assert_eq!(engine.loader.issued(), 1);
    assert_eq!(engine.carousel.index(), 0);
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[test]
fn viewport_resize_moves_the_screen_center() {
    let mut engine = started_engine(&["a"], GesturePolicy::RotateCycle);
    engine.set_viewport(640.0, 480.0);
    assert_eq!(engine.viewport(), (640.0, 480.0));

    // The object is now under the new center, not the old one
    engine.handle_pointer(down(320.0, 240.0, 0.0));
    assert!(!engine.gestures.is_idle());
    engine.handle_pointer(up(320.0, 240.0, 0.1));

    engine.handle_pointer(down(640.0, 360.0, 0.2));
    assert!(engine.gestures.is_idle(), "old center now maps off the object");
}

#[test]
fn reset_session_clears_the_scene_but_keeps_the_cursor() {
    let mut engine = started_engine(&["a", "bb"], GesturePolicy::RotateCycle);
    engine.carousel.advance(1, &engine.loader);
    assert!(engine.pump_blocking(TIMEOUT));

    engine.handle_pointer(down(640.0, 360.0, 0.0));
    engine.reset_session();

    assert!(engine.slot.current().is_none());
    assert_eq!(engine.scene.node_count(), 0);
    assert!(engine.gestures.is_idle());
    assert_eq!(engine.carousel.index(), 1, "cursor survives the session");

    // A new session resumes from the kept position
    engine.start();
    assert!(engine.pump_blocking(TIMEOUT));
    let key = engine.slot.current().unwrap();
    let radius = engine.scene.get(key).unwrap().bounds.unwrap().radius;
    assert!((radius - 0.2).abs() < EPSILON);
}

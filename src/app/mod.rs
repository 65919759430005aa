//! Windowing integration (feature `winit`)
//!
//! Translates winit window events into the engine's platform-independent
//! [`PointerEvent`](crate::interaction::PointerEvent)s.

pub mod input;

pub use input::PointerAdapter;

//! Pointer interaction module
//!
//! Maps 2D pointer input to 3D intent:
//! - [`pointer`]: screen-coordinate to world-ray projection
//! - [`hit`]: ray vs. scene-subtree intersection
//! - [`gesture`]: the selection / drag / rotate state machine

pub mod gesture;
pub mod hit;
pub mod pointer;

pub use gesture::{GestureConfig, GestureController, GestureEvent, GesturePolicy};
pub use hit::Hit;
pub use pointer::{PointerEvent, PointerSample, Ray, project};

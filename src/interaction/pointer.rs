use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::scene::Camera;

/// World-space ray: origin plus normalized direction. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// `dir` is normalized on construction.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Platform-independent pointer event, as delivered by the windowing host.
/// Coordinates are raw screen pixels; `time` is host session time in
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32, time: f64 },
    Moved { x: f32, y: f32, time: f64 },
    Up { x: f32, y: f32, time: f64 },
}

/// One processed pointer coordinate: screen position, the world ray it
/// produced, and the event timestamp. Ephemeral; not retained beyond the
/// current gesture.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub ray: Ray,
    pub time: f64,
}

/// Projects raw screen coordinates through the camera into a world-space
/// ray.
///
/// Pure and deterministic: identical inputs always produce the identical
/// ray. Screen pixels are converted to NDC using the viewport size (y
/// flipped, wgpu depth range), then the far-plane point is unprojected and
/// the ray runs from the camera position through it.
#[must_use]
pub fn project(x: f32, y: f32, viewport: (f32, f32), camera: &Camera) -> Ray {
    let (width, height) = viewport;
    let ndc_x = (x / width.max(1.0)) * 2.0 - 1.0;
    let ndc_y = 1.0 - (y / height.max(1.0)) * 2.0;

    let far = *camera.inverse_view_projection() * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far = far.xyz() / far.w;

    let origin = camera.position();
    Ray::new(origin, far - origin)
}

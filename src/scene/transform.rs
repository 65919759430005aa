use glam::{Affine3A, Mat4, Quat, Vec3};

/// TRS component restricted to the carousel's interaction model: a position,
/// a single yaw angle around +Y, and a non-uniform scale.
///
/// Gestures only ever rotate displayed objects around the vertical axis, so
/// the rotation is stored as a plain scalar instead of a quaternion; this
/// keeps threshold accumulation exact and the swap-time reset trivial.
///
/// Matrix caching uses a shadow-state dirty check: the cached local matrix is
/// recomputed only when one of the public fields differs from the value seen
/// at the previous [`update_local_matrix`](Self::update_local_matrix) call.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation around +Y in radians. Gesture deltas accumulate here.
    pub yaw: f32,
    pub scale: Vec3,

    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    last_position: Vec3,
    last_yaw: f32,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_yaw: 0.0,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the local matrix if any TRS field changed since the last
    /// call. Returns whether a recompute happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.yaw != self.last_yaw
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                Quat::from_rotation_y(self.yaw),
                self.position,
            );

            self.last_position = self.position;
            self.last_yaw = self.yaw;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// The yaw expressed as a quaternion, for hosts that consume rotations.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// World matrix, for CPU-side hit testing and logic.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as `Mat4`, the form renderers upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    /// Written by [`Scene::update_world`](crate::scene::Scene::update_world)
    /// after hierarchy propagation.
    pub(crate) fn set_world_matrix(&mut self, mat: Affine3A) {
        self.world_matrix = mat;
    }

    /// Forces a recompute on the next update.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

use glam::{Affine3A, Mat4, Vec3};

/// Perspective camera with cached view/projection matrices.
///
/// Uses `Mat4::perspective_rh`, so NDC depth is in `[0, 1]` (wgpu
/// convention). In an AR session the camera pose comes from the device each
/// frame via [`update_view`](Self::update_view); the default pose is
/// identity at the origin, looking down -Z.
#[derive(Debug, Clone)]
pub struct Camera {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    world_matrix: Affine3A,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection: Mat4,
    inverse_view_projection: Mat4,
}

impl Camera {
    /// `fov` is the vertical field of view in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            world_matrix: Affine3A::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            inverse_view_projection: Mat4::IDENTITY,
        };
        cam.refresh();
        cam
    }

    /// Updates the aspect ratio, e.g. on window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.refresh();
    }

    /// Adopts a new camera pose (world transform); the view matrix is its
    /// inverse.
    pub fn update_view(&mut self, world: &Affine3A) {
        self.world_matrix = *world;
        self.view_matrix = Mat4::from(*world).inverse();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        self.view_projection = self.projection_matrix * self.view_matrix;
        self.inverse_view_projection = self.view_projection.inverse();
    }

    /// Camera position in world space.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.world_matrix.translation.into()
    }

    #[inline]
    #[must_use]
    pub fn view_projection(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Clip-to-world matrix used by pointer unprojection.
    #[inline]
    #[must_use]
    pub fn inverse_view_projection(&self) -> &Mat4 {
        &self.inverse_view_projection
    }
}

use glam::Vec3;

/// Local-space bounding sphere attached to a node for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Nearest non-negative ray parameter at which `origin + t * dir` meets
    /// the sphere, or `None` if the ray misses. `dir` must be normalized.
    #[must_use]
    pub fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let oc = origin - self.center;
        let b = oc.dot(dir);
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t0 = -b - sqrt_disc;
        if t0 >= 0.0 {
            return Some(t0);
        }
        let t1 = -b + sqrt_disc;
        // Ray origin inside the sphere still counts as a hit.
        (t1 >= 0.0).then_some(t1)
    }
}

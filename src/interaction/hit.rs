use glam::Affine3A;

use crate::interaction::pointer::Ray;
use crate::scene::bounds::BoundingSphere;
use crate::scene::{NodeKey, Scene};

/// Result of a ray test: the top-level candidate that owns the nearest
/// intersected node, and the hit distance along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub object: NodeKey,
    pub distance: f32,
}

/// Intersects `ray` against every candidate subtree and returns the
/// top-level candidate owning the nearest intersected descendant, or `None`.
///
/// Candidates are not mutated. Ties are deterministic: the strict `<`
/// comparison keeps the earliest candidate in iteration order.
#[must_use]
pub fn test(ray: Ray, scene: &Scene, candidates: &[NodeKey]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for &candidate in candidates {
        if let Some(distance) = subtree_distance(ray, scene, candidate) {
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Hit {
                    object: candidate,
                    distance,
                });
            }
        }
    }
    best
}

/// Nearest intersection distance over a whole subtree, testing each node's
/// world-space bounding sphere. Loaded assets are hierarchies; a hit on any
/// descendant counts for the subtree root.
fn subtree_distance(ray: Ray, scene: &Scene, root: NodeKey) -> Option<f32> {
    let mut nearest: Option<f32> = None;
    let mut stack = vec![root];

    while let Some(key) = stack.pop() {
        let Some(node) = scene.get(key) else {
            continue;
        };
        if !node.visible {
            continue;
        }
        if let Some(bounds) = node.bounds {
            let world = node.world_matrix();
            let sphere = BoundingSphere::new(
                world.transform_point3(bounds.center),
                bounds.radius * max_axis_scale(world),
            );
            if let Some(t) = sphere.intersect_ray(ray.origin, ray.dir) {
                if nearest.is_none_or(|n| t < n) {
                    nearest = Some(t);
                }
            }
        }
        stack.extend_from_slice(node.children());
    }

    nearest
}

/// Conservative world radius scale: the largest axis length of the rotation
/// and scale part of the matrix.
fn max_axis_scale(world: &Affine3A) -> f32 {
    world
        .matrix3
        .x_axis
        .length()
        .max(world.matrix3.y_axis.length())
        .max(world.matrix3.z_axis.length())
}

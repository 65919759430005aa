use glam::Vec3;

use crate::scene::BoundingSphere;

/// A resolved renderable hierarchy before instantiation into a
/// [`Scene`](crate::scene::Scene).
///
/// Owned by its [`LoadCompletion`](crate::assets::LoadCompletion) until the
/// slot either instantiates it or discards it as stale; a discarded prefab
/// is simply dropped and never touches the render graph.
#[derive(Debug, Clone)]
pub struct Prefab {
    pub name: String,
    pub root: PrefabNode,
}

impl Prefab {
    #[must_use]
    pub fn new(name: impl Into<String>, root: PrefabNode) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Single-node prefab with a pick bound at the local origin; enough for
    /// placeholder assets and tests.
    #[must_use]
    pub fn with_bounds(name: impl Into<String>, radius: f32) -> Self {
        Self::new(
            name,
            PrefabNode {
                bounds: Some(BoundingSphere::new(Vec3::ZERO, radius)),
                ..PrefabNode::new()
            },
        )
    }
}

/// One node of a prefab hierarchy. `scale` is authored by the resolver
/// (e.g. the 0.3 shrink a glTF pipeline applies); position and yaw of the
/// root are overridden by the slot's anchor on attach.
#[derive(Debug, Clone)]
pub struct PrefabNode {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
    pub bounds: Option<BoundingSphere>,
    pub children: Vec<PrefabNode>,
}

impl PrefabNode {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,
            bounds: None,
            children: Vec::new(),
        }
    }
}

impl Default for PrefabNode {
    fn default() -> Self {
        Self::new()
    }
}

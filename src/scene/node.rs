use glam::Affine3A;

use crate::scene::NodeKey;
use crate::scene::bounds::BoundingSphere;
use crate::scene::transform::Transform;

/// A minimal scene node: hierarchy links, a transform, and an optional
/// local-space bound used by the hit tester.
///
/// Nodes form a tree through parent/child handles. A subtree is visible to
/// rendering and hit testing only while its root is attached to the scene
/// (see [`Scene::attach`](crate::scene::Scene::attach)).
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    /// Transform component (hot data, read every hit test)
    pub transform: Transform,
    /// Local-space pick bound; `None` for pure grouping nodes
    pub bounds: Option<BoundingSphere>,
    /// Invisible nodes are skipped by the hit tester
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            bounds: None,
            visible: true,
        }
    }

    /// Node with a pick bound, the common case for loaded asset meshes.
    #[must_use]
    pub fn with_bounds(bounds: BoundingSphere) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// World matrix as propagated by the last
    /// [`Scene::update_world`](crate::scene::Scene::update_world) pass.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

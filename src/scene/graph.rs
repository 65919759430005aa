use glam::Affine3A;
use slotmap::SlotMap;

use crate::assets::prefab::{Prefab, PrefabNode};
use crate::scene::node::Node;
use crate::scene::NodeKey;

/// Pure-data scene graph: node storage plus the root list that stands in for
/// the host render graph.
///
/// A node is part of the render graph (and therefore hit-testable) only
/// while the root of its subtree is attached. Insertion alone leaves a
/// subtree detached, which is what the asset slot relies on to build a
/// replacement object before atomically swapping it in.
pub struct Scene {
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<NodeKey>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Inserts a detached node.
    pub fn insert(&mut self, node: Node) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Inserts a node as a child of `parent`, keeping both links in sync.
    pub fn insert_child(&mut self, mut node: Node, parent: NodeKey) -> NodeKey {
        node.parent = Some(parent);
        let key = self.nodes.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        key
    }

    /// Builds the subtree described by `prefab` and returns its (detached)
    /// root.
    pub fn instantiate(&mut self, prefab: &Prefab) -> NodeKey {
        let root = self.insert(Self::node_from(&prefab.root));
        let mut stack: Vec<(&PrefabNode, NodeKey)> =
            prefab.root.children.iter().map(|c| (c, root)).collect();
        while let Some((pnode, parent)) = stack.pop() {
            let key = self.insert_child(Self::node_from(pnode), parent);
            for child in &pnode.children {
                stack.push((child, key));
            }
        }
        root
    }

    fn node_from(pnode: &PrefabNode) -> Node {
        let mut node = Node::new();
        node.transform.position = pnode.position;
        node.transform.yaw = pnode.yaw;
        node.transform.scale = pnode.scale;
        node.bounds = pnode.bounds;
        node
    }

    /// Attaches a subtree root to the render graph. No-op if already
    /// attached or the key is dead.
    pub fn attach(&mut self, key: NodeKey) {
        if self.nodes.contains_key(key) && !self.roots.contains(&key) {
            self.roots.push(key);
        }
    }

    /// Detaches a subtree root from the render graph; the nodes survive.
    pub fn detach(&mut self, key: NodeKey) {
        self.roots.retain(|&root| root != key);
    }

    /// Detaches `key` and removes the whole subtree from storage.
    pub fn remove_subtree(&mut self, key: NodeKey) {
        self.detach(key);
        // Unlink from a parent if this was an interior node.
        if let Some(parent) = self.nodes.get(key).and_then(Node::parent) {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|&child| child != key);
            }
        }
        let mut stack = vec![key];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn is_attached(&self, key: NodeKey) -> bool {
        self.roots.contains(&key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Propagates world matrices through every attached subtree.
    ///
    /// Iterative traversal; loaded asset hierarchies can be deep enough that
    /// recursion is not worth the risk.
    pub fn update_world(&mut self) {
        let mut stack: Vec<(NodeKey, Affine3A)> = self
            .roots
            .iter()
            .map(|&key| (key, Affine3A::IDENTITY))
            .collect();

        while let Some((key, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };
            node.transform.update_local_matrix();
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);
            for &child in &node.children {
                stack.push((child, world));
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

//! Scene graph module
//!
//! The minimal render-host capability set the interaction engine needs:
//! - [`Node`]: scene node (hierarchy, transform, optional bound)
//! - [`Transform`]: position / yaw / scale with cached matrices
//! - [`Scene`]: node storage plus the attached-root list
//! - [`Camera`]: perspective projection used for pointer unprojection

pub mod bounds;
pub mod camera;
pub mod graph;
pub mod node;
pub mod transform;

pub use bounds::BoundingSphere;
pub use camera::Camera;
pub use graph::Scene;
pub use node::Node;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] stored in a [`Scene`].
    pub struct NodeKey;
}

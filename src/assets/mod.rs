//! Asset loading module
//!
//! - [`AssetHandle`]: opaque identifier naming a loadable asset
//! - [`Prefab`]: a resolved renderable hierarchy, ready to instantiate
//! - [`AssetLoader`]: background loading with strictly increasing sequence
//!   ids; completions may arrive in any order and staleness is the
//!   receiver's concern

pub mod handle;
pub mod loader;
pub mod prefab;

pub use handle::AssetHandle;
pub use loader::{AssetLoader, AssetResolver, FnResolver, LoadCompletion, SequenceId};
pub use prefab::{Prefab, PrefabNode};

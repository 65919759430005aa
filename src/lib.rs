#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Spindle — single-pointer interaction and asset carousel for AR scenes.
//!
//! The crate turns raw 2D pointer input into 3D intent: tapping selects the
//! displayed object, dragging moves it across a depth-fixed plane or spins it
//! around +Y, and once the accumulated rotation crosses a threshold the
//! displayed asset is swapped for the next one in a cyclic sequence. Asset
//! swaps are asynchronous and race-safe: every load request carries a
//! monotonic sequence id, and a slot only ever attaches the result of the
//! newest request it has observed.
//!
//! # Architecture
//!
//! - [`Engine`]: the single-threaded update point wiring everything together
//! - [`GestureController`]: the pointer-gesture state machine
//! - [`Carousel`] / [`AssetSlot`]: cyclic asset sequence and atomic swap
//! - [`AssetLoader`]: background loading with ordering tokens
//! - [`Scene`] / [`Camera`]: the minimal render-host capability set

pub mod assets;
pub mod carousel;
pub mod engine;
pub mod errors;
pub mod interaction;
pub mod scene;

#[cfg(feature = "winit")]
pub mod app;

pub use assets::{
    AssetHandle, AssetLoader, AssetResolver, FnResolver, LoadCompletion, Prefab, PrefabNode,
    SequenceId,
};
pub use carousel::{AssetSlot, Carousel};
pub use engine::{Engine, EngineConfig};
pub use errors::{Result, SpindleError};
pub use interaction::{
    GestureConfig, GestureController, GestureEvent, GesturePolicy, PointerEvent, PointerSample, Ray,
};
pub use scene::{BoundingSphere, Camera, Node, NodeKey, Scene, Transform};

#[cfg(feature = "winit")]
pub use app::PointerAdapter;

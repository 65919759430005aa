//! Asset carousel module
//!
//! - [`Carousel`]: ordered, cyclic sequence of asset handles with a cursor
//! - [`AssetSlot`]: owns the one displayed object and applies load
//!   completions atomically, discarding stale ones

pub mod carousel;
pub mod slot;

pub use carousel::Carousel;
pub use slot::AssetSlot;

//! Error Types
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, SpindleError>`.
//!
//! Failure in this crate is recoverable by design: a failed asset load leaves
//! the previously displayed object in place, a pointer-down that hits nothing
//! is a normal `None`, and stale load completions are counted rather than
//! surfaced. The variants below exist for the few places where a caller can
//! actually act on the failure.

use thiserror::Error;

/// The main error type for the spindle engine.
#[derive(Error, Debug)]
pub enum SpindleError {
    /// The requested asset does not exist in the resolver's backing store.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// The asset exists but could not be resolved into a renderable
    /// hierarchy (decode failure, background task failure, ...).
    #[error("Failed to load asset {handle}: {reason}")]
    LoadFailed {
        /// URI of the asset that failed
        handle: String,
        /// Human-readable failure description
        reason: String,
    },

    /// File I/O error from a resolver.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A carousel was constructed with an empty handle sequence.
    #[error("Carousel requires at least one asset handle")]
    EmptySequence,
}

/// Alias for `Result<T, SpindleError>`.
pub type Result<T> = std::result::Result<T, SpindleError>;

use crate::assets::{AssetHandle, AssetLoader, SequenceId};
use crate::errors::{Result, SpindleError};

/// Ordered, cyclic sequence of asset handles with a current-index cursor.
///
/// The cursor only moves through [`advance`](Self::advance), driven by
/// threshold events from the gesture controller. The index is always in
/// `[0, len)`; advancing past either end wraps.
pub struct Carousel {
    sequence: Vec<AssetHandle>,
    index: usize,
}

impl Carousel {
    /// Fails with [`SpindleError::EmptySequence`] if `sequence` is empty.
    /// A single-element sequence is legal; advancing it re-requests the
    /// same handle.
    pub fn new(sequence: Vec<AssetHandle>) -> Result<Self> {
        if sequence.is_empty() {
            return Err(SpindleError::EmptySequence);
        }
        Ok(Self { sequence, index: 0 })
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false; kept for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Handle under the cursor.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &AssetHandle {
        &self.sequence[self.index]
    }

    /// Moves the cursor by `direction` (±1) with wraparound and issues the
    /// load for the new handle.
    pub fn advance(&mut self, direction: i32, loader: &AssetLoader) -> SequenceId {
        let len = self.sequence.len() as i64;
        self.index = (self.index as i64 + i64::from(direction)).rem_euclid(len) as usize;
        log::debug!("carousel advanced to index {} ({})", self.index, self.current());
        loader.request(self.sequence[self.index].clone())
    }

    /// Requests the handle under the cursor without moving it — the initial
    /// load, and session restore.
    pub fn request_current(&self, loader: &AssetLoader) -> SequenceId {
        loader.request(self.sequence[self.index].clone())
    }
}

use glam::Vec3;

use crate::assets::{LoadCompletion, SequenceId};
use crate::scene::{NodeKey, Scene};

/// Owns the single "currently displayed" object of a carousel position.
///
/// Invariants:
/// - at most one object is attached to the scene per slot at any time
/// - the attached object always stems from the highest sequence id this
///   slot has observed; anything older is discarded without ever touching
///   the render graph
/// - every freshly attached object starts at zero yaw, so gesture
///   thresholds are measured against what is actually on screen
pub struct AssetSlot {
    current: Option<NodeKey>,
    latest: SequenceId,
    anchor: Vec3,
    stale_discards: u64,
    load_failures: u64,
}

impl AssetSlot {
    /// `anchor` is the world-space point displayed assets are held at —
    /// the fixed offset in front of the viewer.
    #[must_use]
    pub fn new(anchor: Vec3) -> Self {
        Self {
            current: None,
            latest: SequenceId(0),
            anchor,
            stale_discards: 0,
            load_failures: 0,
        }
    }

    /// The displayed object, if a load has completed.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<NodeKey> {
        self.current
    }

    /// Highest sequence id observed so far.
    #[inline]
    #[must_use]
    pub fn latest_sequence(&self) -> SequenceId {
        self.latest
    }

    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Diagnostic: completions discarded as stale.
    #[inline]
    #[must_use]
    pub fn stale_discards(&self) -> u64 {
        self.stale_discards
    }

    /// Diagnostic: load failures observed.
    #[inline]
    #[must_use]
    pub fn load_failures(&self) -> u64 {
        self.load_failures
    }

    /// Routes one resolved load request.
    ///
    /// Stale completions (sequence below the latest observed) are dropped
    /// silently; their prefab is released here without being attached. A
    /// failure keeps the previous object visible. On success the old
    /// subtree is detached and removed, the new one instantiated and
    /// attached at the anchor with its yaw reset to zero.
    ///
    /// Returns the replaced object when a swap happened so the caller can
    /// cancel gestures still holding it.
    pub fn apply(&mut self, completion: LoadCompletion, scene: &mut Scene) -> Option<NodeKey> {
        if completion.sequence < self.latest {
            self.stale_discards += 1;
            log::debug!(
                "discarding stale completion {:?} for {} (latest {:?})",
                completion.sequence,
                completion.handle,
                self.latest
            );
            return None;
        }
        self.latest = completion.sequence;

        match completion.result {
            Ok(prefab) => {
                let replaced = self.current.take();
                if let Some(old) = replaced {
                    scene.remove_subtree(old);
                }

                let key = scene.instantiate(&prefab);
                if let Some(node) = scene.get_mut(key) {
                    node.transform.position = self.anchor;
                    node.transform.yaw = 0.0;
                }
                scene.attach(key);
                self.current = Some(key);
                log::info!(
                    "slot attached {} ({:?})",
                    completion.handle,
                    completion.sequence
                );
                replaced
            }
            Err(err) => {
                self.load_failures += 1;
                log::warn!("load failed for {}: {err}", completion.handle);
                None
            }
        }
    }

    /// Detaches and removes the displayed object (session teardown).
    /// Returns it so gestures can be cancelled.
    pub fn clear(&mut self, scene: &mut Scene) -> Option<NodeKey> {
        let old = self.current.take();
        if let Some(key) = old {
            scene.remove_subtree(key);
        }
        old
    }
}

// Snapshotting wrapper around one upstream transform

use glam::Mat4;

use crate::transform::{matrix_or_identity, SharedTransform, Transform};

/// Holds the upstream matrix as of the last [`recalc`](Self::recalc).
///
/// The cache is only refreshed when the source is assigned or `recalc` is
/// called. Upstream changes in between are not seen by [`Transform::matrix`];
/// callers that need fresh data must `recalc` first.
#[derive(Clone)]
pub struct CachedTransform {
    source: Option<SharedTransform>,
    mtr: Mat4,
}

impl CachedTransform {
    /// Wraps `source` and snapshots it immediately.
    pub fn new(source: Option<SharedTransform>) -> Self {
        let mut cached = Self {
            source: None,
            mtr: Mat4::IDENTITY,
        };
        cached.set_transform_source(source);
        cached
    }

    pub fn transform_source(&self) -> Option<&SharedTransform> {
        self.source.as_ref()
    }

    /// Replaces the upstream and recalculates.
    pub fn set_transform_source(&mut self, source: Option<SharedTransform>) {
        self.source = source;
        self.recalc();
    }

    /// Snapshots the current upstream matrix, identity if there is none.
    pub fn recalc(&mut self) {
        self.mtr = matrix_or_identity(self.source.as_deref());
        log::trace!("cached transform recalculated: {:?}", self.mtr);
    }
}

impl Default for CachedTransform {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transform for CachedTransform {
    fn matrix(&self) -> Mat4 {
        self.mtr
    }
}

impl std::fmt::Debug for CachedTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedTransform")
            .field("has_source", &self.source.is_some())
            .field("mtr", &self.mtr)
            .finish()
    }
}

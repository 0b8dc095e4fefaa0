//! Viewport dimensions and the shared live handle onto them.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::px::Px;

/// Current viewport dimensions in physical pixels.
///
/// Both values are positive once the host surface has produced a real
/// measurement; the very first layout pass may report zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// Viewport width. Every slide is exactly this wide.
    pub width: Px,
    /// Viewport height.
    pub height: Px,
}

impl ViewportState {
    /// Creates a viewport state from raw pixel dimensions.
    pub fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Whether a real (non-zero-width) measurement has arrived yet.
    pub fn is_measured(&self) -> bool {
        self.width > Px::ZERO
    }
}

/// Shared handle onto the live [`ViewportState`].
///
/// The tracker writes through this handle and the reconciler reads through
/// it, so a settle event evaluated after a resize always sees the
/// post-resize width rather than a value captured at gesture start.
#[derive(Clone, Default)]
pub struct ViewportHandle {
    inner: Arc<RwLock<ViewportState>>,
}

impl ViewportHandle {
    /// Creates a handle with an initial measurement.
    pub fn new(initial: ViewportState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Reads the current viewport state.
    pub fn get(&self) -> ViewportState {
        *self.inner.read()
    }

    /// Reads the current viewport width.
    pub fn width(&self) -> Px {
        self.inner.read().width
    }

    /// Overwrites the stored state in place.
    pub fn set(&self, state: ViewportState) {
        *self.inner.write() = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_until_nonzero_width() {
        let handle = ViewportHandle::default();
        assert!(!handle.get().is_measured());

        handle.set(ViewportState::new(Px(320), Px(568)));
        assert!(handle.get().is_measured());
        assert_eq!(handle.width(), Px(320));
    }

    #[test]
    fn test_live_reads_see_latest_write() {
        let writer = ViewportHandle::new(ViewportState::new(Px(320), Px(568)));
        let reader = writer.clone();

        writer.set(ViewportState::new(Px(568), Px(320)));
        assert_eq!(reader.width(), Px(568));
    }
}

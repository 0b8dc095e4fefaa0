//! Bidirectional mapping between slide indices and scroll offsets.
//!
//! The mapping is pure arithmetic parameterized by the current viewport
//! width. [`Reconciler`] reads that width through the live
//! [`ViewportHandle`] on every call, so a settle event evaluated after a
//! resize resolves against the post-resize width and never against a value
//! captured when the gesture started.

use crate::px::Px;
use crate::viewport::ViewportHandle;

/// Resolves offsets to indices and indices to offsets at the live width.
#[derive(Clone)]
pub struct Reconciler {
    viewport: ViewportHandle,
    slide_count: usize,
}

impl Reconciler {
    /// Creates a reconciler over the shared viewport handle.
    pub fn new(viewport: ViewportHandle, slide_count: usize) -> Self {
        Self {
            viewport,
            slide_count,
        }
    }

    /// Number of slides this reconciler resolves against.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether the viewport has produced a real measurement yet.
    pub fn is_measured(&self) -> bool {
        self.viewport.get().is_measured()
    }

    /// Offset at which slide `index` rests.
    pub fn offset_for_index(&self, index: usize) -> Px {
        offset_for_index(self.viewport.width(), index)
    }

    /// Resolves a settle offset to the nearest slide index.
    ///
    /// Returns `None` while the viewport is still unmeasured (zero width),
    /// which callers treat as "no change".
    pub fn index_for_offset(&self, offset_x: f32) -> Option<usize> {
        index_for_offset(self.viewport.width(), self.slide_count, offset_x)
    }
}

/// Offset at which slide `index` rests for the given width.
pub fn offset_for_index(width: Px, index: usize) -> Px {
    width.saturating_mul_index(index)
}

/// Resolves an offset to the nearest in-range slide index.
///
/// Settle offsets deviate from exact multiples of the width by a few pixels,
/// larger and asymmetric on Android, so the quotient is rounded rather than
/// truncated; truncation would misresolve boundary offsets near the last
/// slide. A non-positive width short-circuits to `None` instead of dividing.
pub fn index_for_offset(width: Px, slide_count: usize, offset_x: f32) -> Option<usize> {
    if width <= Px::ZERO || slide_count == 0 {
        return None;
    }
    let quotient = offset_x / width.to_f32();
    if !quotient.is_finite() {
        return None;
    }
    let max_index = (slide_count - 1) as f32;
    Some(quotient.round().clamp(0.0, max_index) as usize)
}

//! Canonical navigation state and the only code allowed to mutate it.

use tracing::{debug, warn};

use crate::paging::Reconciler;
use crate::surface::SeekRequest;

/// Snapshot of the carousel's logical navigation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the active slide, always within `0..slide_count`.
    pub active_index: usize,
    /// Total number of slides, fixed for the component lifetime.
    pub slide_count: usize,
}

impl NavigationState {
    /// Whether the active slide is the last one.
    ///
    /// Vacuously true for an empty carousel so the done control is still
    /// selected over a next control that could never advance.
    pub fn is_last_slide(&self) -> bool {
        self.slide_count <= 1 || self.active_index == self.slide_count - 1
    }
}

/// Payload of a slide-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Index the carousel moved to.
    pub to: usize,
    /// Index the carousel moved from.
    pub from: usize,
}

/// Result of evaluating a settle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The offset resolved to the slide already active; jitter absorbed.
    Unchanged,
    /// The active index moved; notify exactly once with this payload.
    Moved(SlideChange),
}

/// Result of an explicit jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotoOutcome {
    /// Index the carousel now rests on, after clamping.
    pub index: usize,
    /// Whether the index actually changed.
    pub moved: bool,
    /// Seek the caller must issue, absent while the viewport is unmeasured.
    pub seek: Option<SeekRequest>,
}

/// Finite-state machine over slide indices `0..N-1`.
///
/// This is the single owner of [`NavigationState`]. It has exactly two entry
/// points: [`explicit_goto`](Self::explicit_goto) for programmatic jumps and
/// [`on_settle`](Self::on_settle) for gesture settling. Resize corrections
/// never pass through here, which is what guarantees they never produce a
/// notification.
pub struct SlideIndexController {
    nav: NavigationState,
    reconciler: Reconciler,
}

impl SlideIndexController {
    /// Creates a controller resting on slide 0.
    pub fn new(reconciler: Reconciler) -> Self {
        let nav = NavigationState {
            active_index: 0,
            slide_count: reconciler.slide_count(),
        };
        Self { nav, reconciler }
    }

    /// Current navigation snapshot.
    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    /// Index of the active slide.
    pub fn active_index(&self) -> usize {
        self.nav.active_index
    }

    /// Jumps to `target`, clamping out-of-range input.
    ///
    /// Emits no notification itself: callers representing a genuine
    /// navigation action notify explicitly from the returned outcome.
    pub fn explicit_goto(&mut self, target: isize) -> GotoOutcome {
        let index = self.clamp_target(target);
        let moved = index != self.nav.active_index;
        self.nav.active_index = index;
        GotoOutcome {
            index,
            moved,
            seek: self.seek_for(index),
        }
    }

    /// Evaluates a settle offset against the live viewport width.
    ///
    /// Resolving to the already-active index is a no-op, which both absorbs
    /// settle jitter and makes repeated delivery of the same event
    /// idempotent. An unmeasured viewport resolves to no change.
    pub fn on_settle(&mut self, offset_x: f32) -> SettleOutcome {
        let Some(new_index) = self.reconciler.index_for_offset(offset_x) else {
            return SettleOutcome::Unchanged;
        };
        if new_index == self.nav.active_index {
            return SettleOutcome::Unchanged;
        }
        let from = self.nav.active_index;
        self.nav.active_index = new_index;
        debug!(from, to = new_index, "settle moved active slide");
        SettleOutcome::Moved(SlideChange {
            to: new_index,
            from,
        })
    }

    /// Corrective seek that realigns the surface with the active index.
    ///
    /// Used by the viewport tracker after a resize; deliberately bypasses
    /// the two mutating entry points.
    pub fn corrective_seek(&self) -> Option<SeekRequest> {
        self.seek_for(self.nav.active_index)
            .map(|seek| SeekRequest::corrective(seek.offset))
    }

    fn seek_for(&self, index: usize) -> Option<SeekRequest> {
        if self.reconciler.is_measured() {
            Some(SeekRequest::animated(self.reconciler.offset_for_index(index)))
        } else {
            None
        }
    }

    fn clamp_target(&self, target: isize) -> usize {
        let max_index = self.nav.slide_count.saturating_sub(1);
        if target < 0 {
            warn!(target, "goto target below range, clamping to 0");
            0
        } else if target as usize > max_index {
            warn!(target, max_index, "goto target above range, clamping");
            max_index
        } else {
            target as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::px::Px;
    use crate::viewport::{ViewportHandle, ViewportState};

    fn controller(count: usize, width: i32) -> SlideIndexController {
        let handle = ViewportHandle::new(ViewportState::new(Px(width), Px(568)));
        SlideIndexController::new(Reconciler::new(handle, count))
    }

    #[test]
    fn test_goto_clamps_both_directions() {
        let mut fsm = controller(4, 320);

        let low = fsm.explicit_goto(-5);
        assert_eq!(low.index, 0);
        assert!(!low.moved);

        let high = fsm.explicit_goto(99);
        assert_eq!(high.index, 3);
        assert!(high.moved);
        assert_eq!(high.seek, Some(SeekRequest::animated(Px(960))));
    }

    #[test]
    fn test_repeated_goto_reports_no_move() {
        let mut fsm = controller(4, 320);
        assert!(fsm.explicit_goto(2).moved);
        assert!(!fsm.explicit_goto(2).moved);
        assert!(!fsm.explicit_goto(2).moved);
        assert_eq!(fsm.active_index(), 2);
    }

    #[test]
    fn test_goto_on_unmeasured_viewport_skips_seek() {
        let mut fsm = controller(4, 0);
        let outcome = fsm.explicit_goto(2);
        assert_eq!(outcome.index, 2);
        assert_eq!(outcome.seek, None);
    }

    #[test]
    fn test_settle_jitter_is_absorbed() {
        let mut fsm = controller(3, 320);
        assert_eq!(fsm.on_settle(5.0), SettleOutcome::Unchanged);
        assert_eq!(fsm.active_index(), 0);
    }

    #[test]
    fn test_settle_transition_reports_once() {
        let mut fsm = controller(3, 320);
        assert_eq!(
            fsm.on_settle(317.0),
            SettleOutcome::Moved(SlideChange { to: 1, from: 0 })
        );
        // Redelivery of the same settled offset is idempotent.
        assert_eq!(fsm.on_settle(317.0), SettleOutcome::Unchanged);
    }

    #[test]
    fn test_settle_on_unmeasured_viewport_is_no_change() {
        let mut fsm = controller(3, 0);
        assert_eq!(fsm.on_settle(317.0), SettleOutcome::Unchanged);
        assert_eq!(fsm.active_index(), 0);
    }

    #[test]
    fn test_last_slide_flag() {
        let mut fsm = controller(3, 320);
        assert!(!fsm.navigation().is_last_slide());
        fsm.explicit_goto(2);
        assert!(fsm.navigation().is_last_slide());
    }
}

//! Contract with the host's paged scrollable surface.
//!
//! The carousel never renders or scrolls anything itself. The host owns a
//! horizontally paged list primitive and implements [`ScrollSurface`] on a
//! handle to it; in return it feeds layout measurements and
//! [`ScrollSettleEvent`]s into the carousel.

use crate::px::Px;

/// An imperative repositioning command for the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekRequest {
    /// Target horizontal offset in physical pixels.
    pub offset: Px,
    /// Whether the surface should animate toward the target.
    ///
    /// Corrective seeks after a resize are never animated; the reposition
    /// must be invisible to the user.
    pub animated: bool,
}

impl SeekRequest {
    /// A non-animated corrective seek.
    pub fn corrective(offset: Px) -> Self {
        Self {
            offset,
            animated: false,
        }
    }

    /// An animated navigation seek.
    pub fn animated(offset: Px) -> Self {
        Self {
            offset,
            animated: true,
        }
    }
}

/// Signal that inertial scrolling from a drag gesture has come to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettleEvent {
    /// Final horizontal content offset reported by the surface.
    ///
    /// Real surfaces settle a few pixels away from an exact multiple of the
    /// page width; resolution back to a slide index rounds.
    pub offset_x: f32,
}

/// Host-implemented handle to the underlying paged list.
pub trait ScrollSurface {
    /// Repositions the surface to the requested offset.
    fn seek_to(&mut self, seek: SeekRequest);
}

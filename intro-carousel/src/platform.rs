//! Platform identity and platform-derived layout constants.
//!
//! The carousel consumes platform facts, it never discovers them: the host
//! reports which platform it runs on and how tall the status bar is, and
//! this module turns those facts into seek timing and content spacers.

use crate::px::Px;
use crate::scheduler::SeekTiming;
use crate::viewport::ViewportState;

/// Height of one control bar row in the bottom-button layout.
pub const CONTROL_BAR_HEIGHT: Px = Px(44);
/// Clearance above the pagination row reserved under every slide.
pub const PAGINATION_CLEARANCE: Px = Px(64);
/// Top inset added by a display cutout.
pub const CUTOUT_TOP_INSET: Px = Px(44);
/// Bottom inset added by the home indicator on cutout devices.
pub const CUTOUT_BOTTOM_INSET: Px = Px(34);
/// Default status-bar height assumed when the host does not report one.
pub const DEFAULT_STATUS_BAR_HEIGHT: Px = Px(20);

// Portrait-height signature of the first cutout phone generation.
const CUTOUT_EDGE: Px = Px(812);

/// Host platform the carousel is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// iOS phones and tablets.
    #[default]
    Ios,
    /// Android devices.
    Android,
}

impl Platform {
    /// Timing policy for corrective seeks on this platform.
    ///
    /// The Android paged list re-lays itself out after a dimension change
    /// and a seek issued in the same callback races that re-layout, so the
    /// seek waits one tick. iOS applies the seek synchronously.
    pub fn seek_timing(self) -> SeekTiming {
        match self {
            Platform::Ios => SeekTiming::Immediate,
            Platform::Android => SeekTiming::NextTick,
        }
    }
}

/// Whether the viewport matches a phone with a display cutout.
///
/// Either edge is checked so the detection survives rotation.
pub fn has_display_cutout(platform: Platform, viewport: ViewportState) -> bool {
    platform == Platform::Ios
        && (viewport.width == CUTOUT_EDGE || viewport.height == CUTOUT_EDGE)
}

/// Vertical clearances a slide renderer should leave free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentSpacers {
    /// Space reserved above slide content.
    pub top: Px,
    /// Space reserved below slide content.
    pub bottom: Px,
}

/// Computes the spacers for the current platform, viewport, and layout flags.
pub fn content_spacers(
    platform: Platform,
    viewport: ViewportState,
    status_bar_height: Option<Px>,
    bottom_button: bool,
    show_skip_button: bool,
) -> ContentSpacers {
    let cutout = has_display_cutout(platform, viewport);

    let mut bottom = PAGINATION_CLEARANCE;
    if bottom_button {
        bottom += CONTROL_BAR_HEIGHT;
        if show_skip_button {
            bottom += CONTROL_BAR_HEIGHT;
        }
    }
    if cutout {
        bottom += CUTOUT_BOTTOM_INSET;
    }

    let status_bar = match platform {
        Platform::Ios => DEFAULT_STATUS_BAR_HEIGHT,
        Platform::Android => status_bar_height.unwrap_or(Px::ZERO),
    };
    let mut top = status_bar;
    if cutout {
        top += CUTOUT_TOP_INSET;
    }

    ContentSpacers { top, bottom }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: i32, height: i32) -> ViewportState {
        ViewportState::new(Px(width), Px(height))
    }

    #[test]
    fn test_cutout_detection_survives_rotation() {
        assert!(has_display_cutout(Platform::Ios, viewport(375, 812)));
        assert!(has_display_cutout(Platform::Ios, viewport(812, 375)));
        assert!(!has_display_cutout(Platform::Ios, viewport(320, 568)));
        assert!(!has_display_cutout(Platform::Android, viewport(375, 812)));
    }

    #[test]
    fn test_bottom_spacer_stacks_control_bars() {
        let base = content_spacers(Platform::Ios, viewport(320, 568), None, false, false);
        assert_eq!(base.bottom, Px(64));

        let one_bar = content_spacers(Platform::Ios, viewport(320, 568), None, true, false);
        assert_eq!(one_bar.bottom, Px(64 + 44));

        let two_bars = content_spacers(Platform::Ios, viewport(320, 568), None, true, true);
        assert_eq!(two_bars.bottom, Px(64 + 44 + 44));
    }

    #[test]
    fn test_cutout_insets_added_on_both_edges() {
        let spacers = content_spacers(Platform::Ios, viewport(375, 812), None, false, false);
        assert_eq!(spacers.bottom, Px(64 + 34));
        assert_eq!(spacers.top, Px(20 + 44));
    }

    #[test]
    fn test_android_uses_reported_status_bar() {
        let spacers = content_spacers(Platform::Android, viewport(360, 640), Some(Px(24)), false, false);
        assert_eq!(spacers.top, Px(24));

        let unreported = content_spacers(Platform::Android, viewport(360, 640), None, false, false);
        assert_eq!(unreported.top, Px::ZERO);
    }
}

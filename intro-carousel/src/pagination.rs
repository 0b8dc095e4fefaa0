//! Pure derivation of the pagination indicator and control row.
//!
//! [`pagination_layout`] maps a navigation snapshot plus configuration to a
//! visual description. It mutates nothing upstream; the facade hands it a
//! copy of [`NavigationState`] and renders whatever comes back.

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::callback::RenderSlot;
use crate::color::Color;
use crate::controller::NavigationState;

/// Default color of the active pagination dot.
pub const DEFAULT_ACTIVE_DOT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.9);
/// Default color of inactive pagination dots.
pub const DEFAULT_DOT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.2);

/// Which control a slot renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Dismiss the carousel without finishing it.
    Skip,
    /// Advance to the following slide.
    Next,
    /// Finish the carousel from the last slide.
    Done,
}

/// Where the controls sit relative to the dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPlacement {
    /// Skip floats in the left corner, next/done in the right corner.
    FloatingCorners,
    /// Controls stack in a fixed full-width bar under the dots.
    BottomBar,
}

/// One pagination dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Whether this dot marks the active slide.
    pub active: bool,
    /// Fill color for this dot.
    pub color: Color,
}

/// A control the host should render.
#[derive(Clone, PartialEq)]
pub struct Control {
    /// Which control this is.
    pub kind: ControlKind,
    /// Label text for the default rendering.
    pub label: String,
    /// Custom rendering hook, when the host supplied one.
    pub renderer: Option<RenderSlot>,
}

/// Configuration for the pagination row.
#[derive(Clone, PartialEq, Setters)]
pub struct PaginationArgs {
    /// Label for the skip control.
    pub skip_label: String,
    /// Label for the next control.
    pub next_label: String,
    /// Label for the done control.
    pub done_label: String,
    /// Color of inactive dots.
    pub dot_color: Color,
    /// Color of the active dot.
    pub active_dot_color: Color,
    /// Place controls in a fixed bottom bar instead of floating corners.
    pub bottom_button: bool,
    /// Offer a skip control at all.
    pub show_skip_button: bool,
    /// Custom renderer for the skip control.
    #[setters(skip)]
    pub skip_renderer: Option<RenderSlot>,
    /// Custom renderer for the next control.
    #[setters(skip)]
    pub next_renderer: Option<RenderSlot>,
    /// Custom renderer for the done control.
    #[setters(skip)]
    pub done_renderer: Option<RenderSlot>,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            skip_label: "Skip".to_string(),
            next_label: "Next".to_string(),
            done_label: "Done".to_string(),
            dot_color: DEFAULT_DOT_COLOR,
            active_dot_color: DEFAULT_ACTIVE_DOT_COLOR,
            bottom_button: false,
            show_skip_button: false,
            skip_renderer: None,
            next_renderer: None,
            done_renderer: None,
        }
    }
}

impl PaginationArgs {
    /// Sets a custom renderer for the skip control.
    pub fn skip_renderer(mut self, renderer: impl Into<RenderSlot>) -> Self {
        self.skip_renderer = Some(renderer.into());
        self
    }

    /// Sets a custom renderer for the next control.
    pub fn next_renderer(mut self, renderer: impl Into<RenderSlot>) -> Self {
        self.next_renderer = Some(renderer.into());
        self
    }

    /// Sets a custom renderer for the done control.
    pub fn done_renderer(mut self, renderer: impl Into<RenderSlot>) -> Self {
        self.done_renderer = Some(renderer.into());
        self
    }
}

/// Visual description of the pagination row.
#[derive(Clone, PartialEq)]
pub struct PaginationLayout {
    /// One dot per slide, empty when the carousel has at most one slide.
    pub dots: SmallVec<[Dot; 8]>,
    /// Skip control, absent on the last slide or when not offered.
    pub left_control: Option<Control>,
    /// Next control, or done on the last slide.
    pub right_control: Control,
    /// How the host should position the controls.
    pub placement: ControlPlacement,
}

/// Derives the pagination row from a navigation snapshot.
///
/// The skip control is suppressed on the last slide and for carousels with
/// at most one slide; the placement mode never changes which controls are
/// chosen. An empty carousel counts as resting on its last slide, so the
/// right-hand control degrades to done.
pub fn pagination_layout(nav: NavigationState, args: &PaginationArgs) -> PaginationLayout {
    let is_last = nav.is_last_slide();

    let mut dots = SmallVec::new();
    if nav.slide_count > 1 {
        for i in 0..nav.slide_count {
            dots.push(Dot {
                active: i == nav.active_index,
                color: if i == nav.active_index {
                    args.active_dot_color
                } else {
                    args.dot_color
                },
            });
        }
    }

    let left_control = if args.show_skip_button && !is_last && nav.slide_count > 1 {
        Some(Control {
            kind: ControlKind::Skip,
            label: args.skip_label.clone(),
            renderer: args.skip_renderer.clone(),
        })
    } else {
        None
    };

    let right_control = if is_last {
        Control {
            kind: ControlKind::Done,
            label: args.done_label.clone(),
            renderer: args.done_renderer.clone(),
        }
    } else {
        Control {
            kind: ControlKind::Next,
            label: args.next_label.clone(),
            renderer: args.next_renderer.clone(),
        }
    };

    PaginationLayout {
        dots,
        left_control,
        right_control,
        placement: if args.bottom_button {
            ControlPlacement::BottomBar
        } else {
            ControlPlacement::FloatingCorners
        },
    }
}

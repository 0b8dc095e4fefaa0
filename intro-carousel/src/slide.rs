//! Slide descriptors and content resolution.
//!
//! A slide's content is rendered one of two ways: the host supplies a
//! single custom renderer for every slide, or every slide carries a
//! structured layout for the built-in title/image/description rendering.
//! The choice is resolved exactly once when the carousel is constructed;
//! mixing the two is a configuration error, not something decided per frame.

use derive_setters::Setters;
use thiserror::Error;

use crate::callback::RenderSlotWith;
use crate::color::Color;
use crate::platform::ContentSpacers;
use crate::viewport::ViewportState;

/// Structured layout for the default slide rendering.
#[derive(Clone, PartialEq, Default, Setters)]
pub struct SlideLayout {
    /// Headline shown near the top of the slide.
    pub title: String,
    /// Body text shown under the image.
    pub description: String,
    /// Opaque image source understood by the host, if the slide has one.
    #[setters(skip)]
    pub image: Option<String>,
    /// Full-bleed background color.
    pub background: Color,
}

impl SlideLayout {
    /// Sets the image source.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// One slide of the carousel.
///
/// The sequence and its order are fixed for the component lifetime; a
/// slide's position in the input `Vec` is its index.
#[derive(Clone, PartialEq, Default)]
pub struct Slide {
    /// Layout for the default rendering; absent when a custom content
    /// renderer is responsible for this carousel.
    pub layout: Option<SlideLayout>,
}

impl Slide {
    /// A slide rendered by the built-in layout.
    pub fn with_layout(layout: SlideLayout) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    /// An opaque slide rendered by a custom content renderer.
    pub fn opaque() -> Self {
        Self { layout: None }
    }
}

/// Snapshot handed to a custom content renderer for one slide.
#[derive(Clone, PartialEq)]
pub struct SlideInfo {
    /// Index of the slide being rendered.
    pub index: usize,
    /// Total slide count.
    pub slide_count: usize,
    /// Current viewport dimensions; every slide is exactly viewport-wide.
    pub viewport: ViewportState,
    /// Vertical clearances the renderer should leave free.
    pub spacers: ContentSpacers,
    /// The slide's layout descriptor, when one was supplied.
    pub layout: Option<SlideLayout>,
}

/// How slide content gets rendered, fixed at construction.
#[derive(Clone)]
pub enum SlideContent {
    /// Host renderer invoked with a [`SlideInfo`] per slide.
    Custom(RenderSlotWith<SlideInfo>),
    /// Built-in title/image/description rendering from [`SlideLayout`]s.
    DefaultLayout,
}

/// Rejected slide/renderer combinations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideContentError {
    /// A custom renderer and per-slide layouts were both supplied.
    #[error("slide {index} carries a layout but a custom content renderer is configured")]
    AmbiguousContent {
        /// First offending slide.
        index: usize,
    },
    /// The default rendering was selected but a slide has nothing to render.
    #[error("slide {index} has no layout and no custom content renderer is configured")]
    MissingLayout {
        /// First offending slide.
        index: usize,
    },
}

/// Resolves the content mode for a slide sequence, once, at configuration.
pub fn resolve_content(
    renderer: Option<RenderSlotWith<SlideInfo>>,
    slides: &[Slide],
) -> Result<SlideContent, SlideContentError> {
    match renderer {
        Some(renderer) => {
            if let Some(index) = slides.iter().position(|s| s.layout.is_some()) {
                return Err(SlideContentError::AmbiguousContent { index });
            }
            Ok(SlideContent::Custom(renderer))
        }
        None => {
            if let Some(index) = slides.iter().position(|s| s.layout.is_none()) {
                return Err(SlideContentError::MissingLayout { index });
            }
            Ok(SlideContent::DefaultLayout)
        }
    }
}

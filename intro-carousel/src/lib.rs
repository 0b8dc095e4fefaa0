//! Headless paging state machine for full-screen onboarding carousels.
//!
//! The host application owns a horizontally paged list primitive and the
//! pixels; this crate owns the state that has to stay consistent underneath
//! it: the logical active-slide index, the continuous scroll offset, and the
//! viewport dimensions, reconciled across gesture settling, programmatic
//! jumps, and rotation. On top of that it derives the pagination row (dots
//! plus skip/next/done controls) as a pure function of the navigation state.
//!
//! # Usage
//!
//! Implement [`ScrollSurface`] on a handle to your paged list, then feed
//! layout measurements and settle events into an [`IntroCarousel`]:
//!
//! ```
//! # fn main() -> Result<(), intro_carousel::CarouselError> {
//! use intro_carousel::{
//!     CarouselArgs, IntroCarousel, PaginationArgs, Platform, Px, ScrollSettleEvent,
//!     ScrollSurface, SeekRequest, Slide, SlideLayout,
//! };
//!
//! struct PagedList {
//!     offset: Px,
//! }
//!
//! impl ScrollSurface for PagedList {
//!     fn seek_to(&mut self, seek: SeekRequest) {
//!         self.offset = seek.offset;
//!     }
//! }
//!
//! let slides = vec![
//!     Slide::with_layout(SlideLayout::default().title("Welcome".to_string())),
//!     Slide::with_layout(SlideLayout::default().title("All set".to_string())),
//! ];
//! let mut carousel = IntroCarousel::new(
//!     slides,
//!     CarouselArgs::default()
//!         .platform(Platform::Ios)
//!         .pagination(PaginationArgs::default().show_skip_button(true)),
//! )?;
//!
//! let mut list = PagedList { offset: Px::ZERO };
//! carousel.handle_layout(&mut list, Px(320), Px(568));
//!
//! // A swipe settles a few pixels short of the next slide; it still counts.
//! carousel.handle_settle(ScrollSettleEvent { offset_x: 317.0 });
//! assert_eq!(carousel.active_index(), 1);
//! assert_eq!(carousel.pagination().dots.len(), 2);
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod carousel;
pub mod color;
pub mod controller;
pub mod paging;
pub mod pagination;
pub mod platform;
pub mod px;
pub mod scheduler;
pub mod slide;
pub mod surface;
pub mod viewport;

pub use callback::{Callback, CallbackWith, RenderSlot, RenderSlotWith};
pub use carousel::{CarouselArgs, CarouselError, IntroCarousel};
pub use color::Color;
pub use controller::{NavigationState, SlideChange};
pub use pagination::{
    Control, ControlKind, ControlPlacement, Dot, PaginationArgs, PaginationLayout,
};
pub use platform::{ContentSpacers, Platform};
pub use px::Px;
pub use slide::{Slide, SlideContent, SlideInfo, SlideLayout};
pub use surface::{ScrollSettleEvent, ScrollSurface, SeekRequest};
pub use viewport::ViewportState;

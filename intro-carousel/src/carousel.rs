//! The onboarding carousel component facade.
//!
//! [`IntroCarousel`] owns the navigation state machine and wires the three
//! event sources together: layout measurements from the host surface,
//! settle events from gestures, and programmatic jumps. All entry points
//! are synchronous calls on the host's event thread.

use derive_setters::Setters;
use thiserror::Error;
use tracing::debug;

use crate::callback::{Callback, CallbackWith, RenderSlotWith};
use crate::controller::{SettleOutcome, SlideChange, SlideIndexController};
use crate::paging::Reconciler;
use crate::pagination::{PaginationArgs, PaginationLayout, pagination_layout};
use crate::platform::{Platform, content_spacers};
use crate::px::Px;
use crate::scheduler::{SeekDisposition, SeekScheduler, TaskId};
use crate::slide::{Slide, SlideContent, SlideContentError, SlideInfo, resolve_content};
use crate::surface::{ScrollSettleEvent, ScrollSurface};
use crate::viewport::{ViewportHandle, ViewportState};

/// Configuration for [`IntroCarousel`].
#[derive(Clone, Setters)]
pub struct CarouselArgs {
    /// Pagination labels, colors, flags, and control renderers.
    pub pagination: PaginationArgs,
    /// Platform the host is embedding the carousel on.
    pub platform: Platform,
    /// Status-bar height reported by the host, if it reports one.
    #[setters(skip)]
    pub status_bar_height: Option<Px>,
    /// Notification for genuine slide transitions.
    #[setters(skip)]
    pub on_slide_change: CallbackWith<SlideChange>,
    /// Notification for the done control.
    #[setters(skip)]
    pub on_done: Callback,
    /// Notification for the skip control.
    #[setters(skip)]
    pub on_skip: Callback,
    /// Custom per-slide content renderer.
    #[setters(skip)]
    pub content_renderer: Option<RenderSlotWith<SlideInfo>>,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            pagination: PaginationArgs::default(),
            platform: Platform::default(),
            status_bar_height: None,
            on_slide_change: CallbackWith::default(),
            on_done: Callback::default(),
            on_skip: Callback::default(),
            content_renderer: None,
        }
    }
}

impl CarouselArgs {
    /// Sets the status-bar height reported by the host.
    pub fn status_bar_height(mut self, height: Px) -> Self {
        self.status_bar_height = Some(height);
        self
    }

    /// Sets the slide-change notification handler.
    pub fn on_slide_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(SlideChange) + Send + Sync + 'static,
    {
        self.on_slide_change = CallbackWith::new(handler);
        self
    }

    /// Sets the done-control handler.
    pub fn on_done<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_done = Callback::new(handler);
        self
    }

    /// Sets the skip-control handler.
    pub fn on_skip<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_skip = Callback::new(handler);
        self
    }

    /// Sets a custom content renderer for every slide.
    pub fn content_renderer(mut self, renderer: impl Into<RenderSlotWith<SlideInfo>>) -> Self {
        self.content_renderer = Some(renderer.into());
        self
    }
}

/// Rejected carousel configurations.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("carousel requires at least one slide")]
    EmptySlides,
    /// The slide sequence and content renderer disagree.
    #[error(transparent)]
    Content(#[from] SlideContentError),
}

/// A horizontally paged, full-screen onboarding carousel.
///
/// The carousel is headless: the host owns the paged list surface and the
/// pixels, this type owns the state. The host feeds in layout measurements
/// via [`handle_layout`](Self::handle_layout), settle events via
/// [`handle_settle`](Self::handle_settle), and one call to
/// [`tick`](Self::tick) per scheduling tick; it reads back
/// [`pagination`](Self::pagination) and [`slide_info`](Self::slide_info)
/// whenever it renders.
pub struct IntroCarousel {
    args: CarouselArgs,
    slides: Vec<Slide>,
    content: SlideContent,
    viewport: ViewportHandle,
    controller: SlideIndexController,
    scheduler: SeekScheduler,
    parked_seek: Option<TaskId>,
}

impl IntroCarousel {
    /// Creates a carousel over a fixed slide sequence.
    ///
    /// The slide count and order are fixed for the component's lifetime.
    /// Content mode is resolved here, once: either every slide carries a
    /// layout, or a custom renderer handles all of them.
    pub fn new(slides: Vec<Slide>, args: CarouselArgs) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlides);
        }
        let content = resolve_content(args.content_renderer.clone(), &slides)?;
        let viewport = ViewportHandle::default();
        let reconciler = Reconciler::new(viewport.clone(), slides.len());
        let controller = SlideIndexController::new(reconciler);
        let scheduler = SeekScheduler::new(args.platform.seek_timing());
        Ok(Self {
            args,
            slides,
            content,
            viewport,
            controller,
            scheduler,
            parked_seek: None,
        })
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Index of the active slide.
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Current viewport dimensions.
    pub fn viewport(&self) -> ViewportState {
        self.viewport.get()
    }

    /// Resolved content mode for slide rendering.
    pub fn content(&self) -> &SlideContent {
        &self.content
    }

    /// Whether a corrective seek is parked for the next tick.
    pub fn has_pending_seek(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Feeds a layout measurement from the host surface.
    ///
    /// An unchanged measurement is a no-op. A changed one overwrites the
    /// stored dimensions (the host re-renders every slide at the new size)
    /// and issues a corrective seek to `active_index * new_width`, without
    /// a slide-change notification, since nothing navigated. Depending on
    /// the platform policy the seek runs now or on the next [`tick`].
    ///
    /// Known limitation: if the corrective seek races an in-flight gesture,
    /// the final resting offset is unspecified. This is rare enough to be
    /// accepted rather than worked around.
    ///
    /// [`tick`]: Self::tick
    pub fn handle_layout(&mut self, surface: &mut dyn ScrollSurface, width: Px, height: Px) {
        let measured = ViewportState::new(width, height);
        if measured == self.viewport.get() {
            return;
        }
        self.viewport.set(measured);
        debug!(
            width = width.raw(),
            height = height.raw(),
            "viewport changed, realigning scroll offset"
        );
        match self.scheduler.schedule() {
            SeekDisposition::RunNow => {
                if let Some(seek) = self.controller.corrective_seek() {
                    surface.seek_to(seek);
                }
            }
            SeekDisposition::Deferred(id) => self.parked_seek = Some(id),
        }
    }

    /// Feeds a gesture settle event.
    ///
    /// Resolves the offset against the live (post-resize) viewport width.
    /// Fires `on_slide_change` exactly once when the active index moved and
    /// not at all for jitter around the current slide.
    pub fn handle_settle(&mut self, event: ScrollSettleEvent) {
        if let SettleOutcome::Moved(change) = self.controller.on_settle(event.offset_x) {
            self.args.on_slide_change.call(change);
        }
    }

    /// Runs one scheduling tick, delivering a parked corrective seek.
    ///
    /// The seek target is computed here, not at schedule time: navigation
    /// that landed between the layout event and this tick must win, so the
    /// parked task realigns with whatever index is active when it fires.
    pub fn tick(&mut self, surface: &mut dyn ScrollSurface) {
        if let Some(id) = self.scheduler.take_due() {
            if self.parked_seek == Some(id) {
                self.parked_seek = None;
            }
            if let Some(seek) = self.controller.corrective_seek() {
                surface.seek_to(seek);
            }
        }
    }

    /// Jumps to `target`, clamping out-of-range input to `[0, N-1]`.
    ///
    /// Programmatic jumps emit no slide-change notification.
    pub fn go_to_slide(&mut self, surface: &mut dyn ScrollSurface, target: isize) {
        let outcome = self.controller.explicit_goto(target);
        if let Some(seek) = outcome.seek {
            surface.seek_to(seek);
        }
    }

    /// Activates the next control: advances one slide and notifies.
    ///
    /// This is the one genuine navigation action among the controls, so it
    /// issues the slide-change notification itself, with the
    /// post-transition index pair, and only when the index actually moved.
    pub fn press_next(&mut self, surface: &mut dyn ScrollSurface) {
        let from = self.controller.active_index();
        let outcome = self.controller.explicit_goto(from as isize + 1);
        if let Some(seek) = outcome.seek {
            surface.seek_to(seek);
        }
        if outcome.moved {
            self.args.on_slide_change.call(SlideChange {
                to: outcome.index,
                from,
            });
        }
    }

    /// Activates the done control.
    pub fn press_done(&self) {
        self.args.on_done.call();
    }

    /// Activates the skip control.
    pub fn press_skip(&self) {
        self.args.on_skip.call();
    }

    /// Derives the pagination row from the current navigation state.
    pub fn pagination(&self) -> PaginationLayout {
        pagination_layout(self.controller.navigation(), &self.args.pagination)
    }

    /// Snapshot for rendering slide `index`.
    ///
    /// Returns `None` for an out-of-range index.
    pub fn slide_info(&self, index: usize) -> Option<SlideInfo> {
        let slide = self.slides.get(index)?;
        let viewport = self.viewport.get();
        Some(SlideInfo {
            index,
            slide_count: self.slides.len(),
            viewport,
            spacers: content_spacers(
                self.args.platform,
                viewport,
                self.args.status_bar_height,
                self.args.pagination.bottom_button,
                self.args.pagination.show_skip_button,
            ),
            layout: slide.layout.clone(),
        })
    }

    /// Releases the component: cancels any parked corrective seek so it can
    /// never run against a released surface handle.
    pub fn unmount(&mut self) {
        if let Some(id) = self.parked_seek.take() {
            self.scheduler.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use parking_lot::Mutex;

    use super::*;
    use crate::pagination::ControlKind;
    use crate::slide::SlideLayout;
    use crate::surface::SeekRequest;

    #[derive(Default)]
    struct RecordingSurface {
        seeks: Vec<SeekRequest>,
    }

    impl ScrollSurface for RecordingSurface {
        fn seek_to(&mut self, seek: SeekRequest) {
            self.seeks.push(seek);
        }
    }

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::with_layout(SlideLayout::default().title(format!("slide {i}"))))
            .collect()
    }

    fn change_log(args: CarouselArgs) -> (CarouselArgs, Arc<Mutex<Vec<SlideChange>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let args = args.on_slide_change(move |change| sink.lock().push(change));
        (args, log)
    }

    fn mounted(count: usize, args: CarouselArgs) -> (IntroCarousel, RecordingSurface) {
        let mut carousel = IntroCarousel::new(slides(count), args).expect("valid config");
        let mut surface = RecordingSurface::default();
        carousel.handle_layout(&mut surface, Px(320), Px(568));
        surface.seeks.clear();
        (carousel, surface)
    }

    #[test]
    fn test_empty_slide_sequence_is_rejected() {
        let result = IntroCarousel::new(Vec::new(), CarouselArgs::default());
        assert!(matches!(result, Err(CarouselError::EmptySlides)));
    }

    #[test]
    fn test_settle_jitter_emits_nothing() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, _surface) = mounted(3, args);

        carousel.handle_settle(ScrollSettleEvent { offset_x: 5.0 });
        assert_eq!(carousel.active_index(), 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_settle_near_next_slide_notifies_once() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, _surface) = mounted(3, args);

        carousel.handle_settle(ScrollSettleEvent { offset_x: 317.0 });
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(log.lock().as_slice(), &[SlideChange { to: 1, from: 0 }]);
    }

    #[test]
    fn test_goto_clamps_and_never_notifies() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(4, args);

        carousel.go_to_slide(&mut surface, -5);
        assert_eq!(carousel.active_index(), 0);

        carousel.go_to_slide(&mut surface, 99);
        assert_eq!(carousel.active_index(), 3);
        assert_eq!(surface.seeks.last().map(|s| s.offset), Some(Px(960)));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_repeated_goto_is_idempotent() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(4, args);

        for _ in 0..3 {
            carousel.go_to_slide(&mut surface, 2);
        }
        assert_eq!(carousel.active_index(), 2);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_resize_keeps_index_and_realigns_offset() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(3, args);
        carousel.go_to_slide(&mut surface, 1);
        surface.seeks.clear();

        // Rotation: width 320 -> 568. Index must hold, offset must follow.
        carousel.handle_layout(&mut surface, Px(568), Px(320));
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(
            surface.seeks.as_slice(),
            &[SeekRequest::corrective(Px(568))]
        );
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_settle_after_resize_uses_new_width() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(3, args);
        carousel.handle_layout(&mut surface, Px(568), Px(320));

        // 560 is slide 1 at the new width; at the old width it would round
        // to slide 2.
        carousel.handle_settle(ScrollSettleEvent { offset_x: 560.0 });
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_unchanged_layout_is_a_no_op() {
        let (mut carousel, mut surface) = mounted(3, CarouselArgs::default());
        carousel.handle_layout(&mut surface, Px(320), Px(568));
        assert!(surface.seeks.is_empty());
        assert!(!carousel.has_pending_seek());
    }

    #[test]
    fn test_android_defers_corrective_seek_one_tick() {
        let args = CarouselArgs::default().platform(Platform::Android);
        let (mut carousel, mut surface) = mounted(3, args);

        carousel.handle_layout(&mut surface, Px(568), Px(320));
        assert!(surface.seeks.is_empty());
        assert!(carousel.has_pending_seek());

        carousel.tick(&mut surface);
        assert_eq!(
            surface.seeks.as_slice(),
            &[SeekRequest::corrective(Px::ZERO)]
        );
        assert!(!carousel.has_pending_seek());
    }

    #[test]
    fn test_deferred_seek_follows_navigation_before_tick() {
        let args = CarouselArgs::default().platform(Platform::Android);
        let (mut carousel, mut surface) = mounted(3, args);
        carousel.go_to_slide(&mut surface, 1);

        // Rotation parks a corrective seek; a jump lands before the tick.
        carousel.handle_layout(&mut surface, Px(568), Px(320));
        carousel.go_to_slide(&mut surface, 2);
        surface.seeks.clear();

        // The parked seek must realign with slide 2, not with the index
        // that was active when the rotation was measured.
        carousel.tick(&mut surface);
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(
            surface.seeks.as_slice(),
            &[SeekRequest::corrective(Px(1136))]
        );
    }

    #[test]
    fn test_unmount_cancels_parked_seek() {
        let args = CarouselArgs::default().platform(Platform::Android);
        let (mut carousel, mut surface) = mounted(3, args);

        carousel.handle_layout(&mut surface, Px(568), Px(320));
        carousel.unmount();
        carousel.tick(&mut surface);
        assert!(surface.seeks.is_empty());
    }

    #[test]
    fn test_press_next_advances_and_notifies_once() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(3, args);

        carousel.press_next(&mut surface);
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(surface.seeks.last().map(|s| s.offset), Some(Px(320)));
        assert_eq!(log.lock().as_slice(), &[SlideChange { to: 1, from: 0 }]);
    }

    #[test]
    fn test_press_next_on_last_slide_does_nothing() {
        let (args, log) = change_log(CarouselArgs::default());
        let (mut carousel, mut surface) = mounted(3, args);
        carousel.go_to_slide(&mut surface, 2);
        surface.seeks.clear();

        carousel.press_next(&mut surface);
        assert_eq!(carousel.active_index(), 2);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_done_and_skip_forward_to_callbacks() {
        let dones = Arc::new(AtomicUsize::new(0));
        let skips = Arc::new(AtomicUsize::new(0));
        let d = dones.clone();
        let s = skips.clone();
        let args = CarouselArgs::default()
            .on_done(move || {
                d.fetch_add(1, Ordering::SeqCst);
            })
            .on_skip(move || {
                s.fetch_add(1, Ordering::SeqCst);
            });
        let (carousel, _surface) = mounted(3, args);

        carousel.press_done();
        carousel.press_skip();
        assert_eq!(dones.load(Ordering::SeqCst), 1);
        assert_eq!(skips.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unwired_callbacks_are_guarded_no_ops() {
        let (mut carousel, mut surface) = mounted(3, CarouselArgs::default());
        carousel.handle_settle(ScrollSettleEvent { offset_x: 317.0 });
        carousel.press_next(&mut surface);
        carousel.press_done();
        carousel.press_skip();
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_pagination_snapshot_on_last_slide() {
        let args = CarouselArgs::default()
            .pagination(PaginationArgs::default().show_skip_button(true));
        let (mut carousel, mut surface) = mounted(3, args);
        carousel.go_to_slide(&mut surface, 2);

        let layout = carousel.pagination();
        assert!(layout.left_control.is_none());
        assert_eq!(layout.right_control.kind, ControlKind::Done);
        assert_eq!(layout.dots.len(), 3);
        assert!(layout.dots[2].active);
    }

    #[test]
    fn test_slide_info_carries_layout_and_spacers() {
        let (carousel, _surface) = mounted(3, CarouselArgs::default());
        let info = carousel.slide_info(1).expect("index in range");
        assert_eq!(info.index, 1);
        assert_eq!(info.slide_count, 3);
        assert_eq!(info.viewport.width, Px(320));
        assert_eq!(info.layout.as_ref().map(|l| l.title.as_str()), Some("slide 1"));
        assert!(info.spacers.bottom > Px::ZERO);
        assert!(carousel.slide_info(3).is_none());
    }

    #[test]
    fn test_settle_before_first_measurement_is_ignored() {
        let mut carousel = IntroCarousel::new(slides(3), CarouselArgs::default()).expect("valid config");
        carousel.handle_settle(ScrollSettleEvent { offset_x: 317.0 });
        assert_eq!(carousel.active_index(), 0);
    }
}

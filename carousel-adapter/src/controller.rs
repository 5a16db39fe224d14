use carousel::{Carousel, CarouselOptions, NavPhase, RenderUpdate};

use crate::{Easing, Tween};

/// Default animated transition length.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and
/// drives its animated renders with a tween.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` for gestures
/// - `on_resize` when the viewport changes
/// - `tick(now_ms)` each frame
///
/// `tick` returns the offset the host should apply this frame, already
/// written back into the engine so the engine's `live_offset` stays
/// authoritative. Animated transitions end with the engine's completion
/// signal fired from inside `tick`; the host never calls it directly.
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    tween: Option<Tween>,
    transition_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(c: Carousel) -> Self {
        Self {
            c,
            tween: None,
            transition_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::EaseOutQuad,
        }
    }

    pub fn with_transition(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.transition_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel {
        self.c
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn next(&mut self, now_ms: u64) {
        self.c.next(now_ms);
    }

    pub fn prev(&mut self, now_ms: u64) {
        self.c.prev(now_ms);
    }

    pub fn go_to_slide(&mut self, index: i64, now_ms: u64) {
        self.c.go_to_slide(index, now_ms);
    }

    pub fn go_to_page(&mut self, page: usize, now_ms: u64) {
        self.c.go_to_page(page, now_ms);
    }

    pub fn select_thumb(&mut self, index: usize, now_ms: u64) {
        self.c.select_thumb(index, now_ms);
    }

    /// Call with the main-axis pointer coordinate when a press starts.
    pub fn on_pointer_down(&mut self, pos: f64, now_ms: u64) {
        self.c.begin_drag(pos, now_ms);
    }

    pub fn on_pointer_move(&mut self, pos: f64, now_ms: u64) {
        self.c.drag_move(pos, now_ms);
    }

    /// Call on release or cancel.
    pub fn on_pointer_up(&mut self, now_ms: u64) {
        self.c.end_drag(now_ms);
    }

    /// Call when the host viewport changes: `viewport_width` feeds
    /// breakpoint resolution, `container_size` the track geometry.
    pub fn on_resize(&mut self, viewport_width: f64, container_size: f64, now_ms: u64) {
        self.c.set_container_size(container_size, now_ms);
        self.c.on_resize_event(viewport_width, now_ms);
    }

    /// Advances the controller by one frame.
    ///
    /// Drives engine timers, drains at most one coalesced drag frame, starts
    /// a tween for each animated render, and fires the completion signal
    /// when a tween finishes. Returns the update to apply, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<RenderUpdate> {
        self.c.tick(now_ms);

        // The gesture path intercepts the render offset directly and
        // bypasses the animated channel.
        if let Some(offset) = self.c.take_drag_frame() {
            self.c.set_live_offset(offset);
            return Some(RenderUpdate {
                offset,
                instant: true,
            });
        }

        if let Some(update) = self.c.take_render_update() {
            if update.instant {
                self.tween = None;
                self.c.set_live_offset(update.offset);
                return Some(update);
            }
            self.tween = Some(Tween::new(
                self.c.live_offset(),
                update.offset,
                now_ms,
                self.transition_ms,
                self.easing,
            ));
        }

        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        self.c.set_live_offset(offset);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.c.complete_transition(now_ms);
            debug_assert!(self.c.phase() != NavPhase::Transitioning);
            // Renormalization may have queued an instant rewind.
            if let Some(update) = self.c.take_render_update() {
                self.c.set_live_offset(update.offset);
                return Some(update);
            }
        }

        Some(RenderUpdate {
            offset,
            instant: false,
        })
    }
}

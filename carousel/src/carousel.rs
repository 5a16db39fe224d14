use core::cell::Cell;

use crate::autoplay::AutoplayScheduler;
use crate::breakpoints::ResizeDebouncer;
use crate::clones::ClonePlan;
use crate::geometry::compute_dimensions;
use crate::gesture::{DragBounds, DragRelease, GestureTracker};
use crate::pagination;
use crate::state::{NavSnapshot, NavState};
use crate::types::{Dimensions, NavPhase, PageState, RenderUpdate};
use crate::CarouselOptions;

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - The host drives it with pointer samples, resize events and a `now_ms`
///   clock, and applies the [`RenderUpdate`]s it emits.
/// - The applied offset is written back with [`Self::set_live_offset`], so
///   the engine's view of the track is authoritative and the rendering
///   layer stays write-only.
///
/// All navigation intents (`next`, `prev`, `go_to_slide`, `go_to_page`,
/// drag commits, thumbnail selection) funnel into one guarded state
/// machine: requests are accepted only from [`NavPhase::Idle`], and a
/// request that arrives mid-transition is dropped, not queued.
///
/// For tween-driven animated transitions, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    state: NavState,
    dims: Dimensions,
    plan: ClonePlan,
    gesture: GestureTracker,
    autoplay: AutoplayScheduler,
    resize: ResizeDebouncer,
    container_size: f64,
    pending_render: Option<RenderUpdate>,
    enabled: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel from options.
    ///
    /// A zero slide count is the degenerate construction: a diagnostic is
    /// emitted and the instance stays inert, with every operation a no-op
    /// and every query returning its default.
    pub fn new(mut options: CarouselOptions) -> Self {
        let enabled = options.slide_count > 0;
        if !enabled {
            cwarn!("carousel constructed without slides; instance is inert");
        }
        cdebug!(
            slide_count = options.slide_count,
            visible_count = options.visible_count,
            loop_enabled = options.loop_enabled,
            "Carousel::new"
        );

        let initial_width = options.initial_viewport_width;
        if enabled {
            if let Some(ov) = options
                .breakpoints
                .as_ref()
                .and_then(|t| t.resolve(initial_width))
                .copied()
            {
                apply_override(&mut options, ov);
            }
        }

        let plan = ClonePlan::build(
            options.slide_count,
            options.visible_count,
            options.loop_enabled,
        );
        let container_size = options.initial_container_size;
        let dims = compute_dimensions(
            container_size,
            options.slide_count,
            plan.rendered_len(),
            options.visible_count,
            options.gap,
            0,
        );

        let initial_index = if enabled {
            options.initial_index.min(options.slide_count - 1) as i64
        } else {
            0
        };

        let autoplay = AutoplayScheduler::new(if enabled {
            options.autoplay_interval_ms
        } else {
            0
        });

        let mut c = Self {
            state: NavState {
                current_index: initial_index,
                phase: NavPhase::Idle,
                live_offset: 0.0,
            },
            dims,
            plan,
            gesture: GestureTracker::default(),
            autoplay,
            resize: ResizeDebouncer::new(initial_width),
            container_size,
            pending_render: None,
            enabled,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };

        if c.enabled {
            let offset = c.offset_for_index(initial_index);
            c.state.live_offset = offset;
            c.pending_render = Some(RenderUpdate {
                offset,
                instant: true,
            });
        }
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// False for the inert instance built from degenerate options.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn slide_count(&self) -> usize {
        self.options.slide_count
    }

    pub fn phase(&self) -> NavPhase {
        self.state.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.state.phase == NavPhase::Dragging
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.phase == NavPhase::Transitioning
    }

    /// The logical index, allowed to roam outside `[0, N)` while a looping
    /// transition is in flight.
    pub fn current_index(&self) -> i64 {
        self.state.current_index
    }

    /// The current index wrapped into `[0, N)`.
    pub fn active_index(&self) -> usize {
        pagination::wrap_index(self.state.current_index, self.options.slide_count)
    }

    /// The offset the host last applied to the track.
    pub fn live_offset(&self) -> f64 {
        self.state.live_offset
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn clone_plan(&self) -> &ClonePlan {
        &self.plan
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn container_size(&self) -> f64 {
        self.container_size
    }

    /// Records the container's measured main-axis size.
    pub fn set_container_size(&mut self, size: f64, now_ms: u64) {
        if !self.enabled || self.container_size == size {
            return;
        }
        self.container_size = size;
        self.recompute_dimensions(now_ms);
        self.notify();
    }

    /// Writes back the offset the host actually applied this frame.
    pub fn set_live_offset(&mut self, offset: f64) {
        if !self.enabled || self.state.live_offset == offset {
            return;
        }
        self.state.live_offset = offset;
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, NavPhase) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    /// Takes the most recent pending visual update, if any.
    ///
    /// Updates coalesce: a newly issued render supersedes one the host has
    /// not drained yet.
    pub fn take_render_update(&mut self) -> Option<RenderUpdate> {
        self.pending_render.take()
    }

    /// Takes the most recent coalesced drag frame offset, if any.
    ///
    /// This is the gesture path's write-intercept of the render offset; it
    /// bypasses the animated render channel entirely.
    pub fn take_drag_frame(&mut self) -> Option<f64> {
        self.gesture.take_frame_update()
    }

    /// True while host click/activation events should be ignored after a
    /// drag.
    pub fn suppresses_activation(&self, now_ms: u64) -> bool {
        self.gesture.suppresses_activation(now_ms)
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.state.phase);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn max_index(&self) -> i64 {
        self.options
            .slide_count
            .saturating_sub(self.options.visible_count) as i64
    }

    /// Render offset for a logical index: clone shift applied when looping,
    /// clamped into the track bounds otherwise.
    pub fn offset_for_index(&self, index: i64) -> f64 {
        let span = self.dims.slide_span();
        if self.plan.loop_active() {
            (index + self.plan.shift() as i64) as f64 * span
        } else {
            let clamped = index.clamp(0, self.max_index());
            (clamped as f64 * span).clamp(0.0, self.dims.max_offset)
        }
    }

    fn recompute_dimensions(&mut self, now_ms: u64) {
        self.dims = compute_dimensions(
            self.container_size,
            self.options.slide_count,
            self.plan.rendered_len(),
            self.options.visible_count,
            self.options.gap,
            now_ms,
        );
    }

    fn push_render(&mut self, offset: f64, instant: bool) {
        self.pending_render = Some(RenderUpdate { offset, instant });
        self.notify();
    }

    /// Dimensions are recomputed on every render so a resize between
    /// navigations cannot leave a stale slide size in the offset math.
    fn render_at(&mut self, index: i64, instant: bool, now_ms: u64) {
        self.recompute_dimensions(now_ms);
        let offset = self.offset_for_index(index);
        if instant {
            self.state.live_offset = offset;
        }
        self.push_render(offset, instant);
    }

    fn begin_transition(&mut self, target: i64, now_ms: u64) {
        ctrace!(target, "begin_transition");
        self.autoplay.stop();
        self.batch_update(|c| {
            c.state.phase = NavPhase::Transitioning;
            c.state.current_index = target;
            c.render_at(target, false, now_ms);
        });
        self.autoplay.restart(now_ms);
    }

    /// Navigates to a logical index with an animated transition.
    ///
    /// Dropped silently while a drag or another transition is in flight.
    pub fn go_to_slide(&mut self, index: i64, now_ms: u64) {
        if !self.enabled {
            return;
        }
        if self.state.phase != NavPhase::Idle {
            ctrace!(index, "go_to_slide dropped: not idle");
            return;
        }
        self.begin_transition(index, now_ms);
    }

    /// Advances by the configured step size.
    ///
    /// Without looping, a step that would exceed the bound is a no-op: the
    /// engine stays idle and the autoplay schedule is left untouched.
    pub fn next(&mut self, now_ms: u64) {
        self.step_by(self.options.step_size as i64, now_ms);
    }

    /// Retreats by the configured step size.
    pub fn prev(&mut self, now_ms: u64) {
        self.step_by(-(self.options.step_size as i64), now_ms);
    }

    fn step_by(&mut self, step: i64, now_ms: u64) {
        if !self.enabled {
            return;
        }
        if self.state.phase != NavPhase::Idle {
            ctrace!(step, "step dropped: not idle");
            return;
        }
        let current = self.state.current_index;
        let target = if self.plan.loop_active() {
            current + step
        } else {
            let max = self.max_index();
            if (step > 0 && current >= max) || (step < 0 && current <= 0) {
                return;
            }
            (current + step).clamp(0, max)
        };
        self.begin_transition(target, now_ms);
    }

    /// Navigates to a pagination page.
    pub fn go_to_page(&mut self, page: usize, now_ms: u64) {
        if !self.enabled {
            return;
        }
        let target = pagination::page_target(
            page,
            self.options.slide_count,
            self.options.visible_count,
            self.plan.loop_active(),
        );
        self.go_to_slide(target, now_ms);
    }

    /// Navigates to the slide a thumbnail control points at.
    pub fn select_thumb(&mut self, index: usize, now_ms: u64) {
        if !self.enabled {
            return;
        }
        let target = index.min(self.options.slide_count - 1) as i64;
        self.go_to_slide(target, now_ms);
    }

    fn drag_bounds(&self) -> DragBounds {
        if self.dims.inner_max_offset > 0.0 {
            DragBounds::Inner {
                min: 0.0,
                max: self.dims.inner_max_offset,
            }
        } else {
            // One viewport-worth of travel when the track has no usable
            // extent yet.
            DragBounds::Cap {
                max_travel: self.dims.slide_size * self.options.visible_count as f64,
            }
        }
    }

    /// Starts a drag at the given main-axis pointer coordinate.
    ///
    /// Refused while dragging is disabled or a transition is in flight. On
    /// acceptance autoplay stops and the current live offset becomes the
    /// drag origin, so a drag picks up exactly where the track sits.
    pub fn begin_drag(&mut self, pos: f64, now_ms: u64) {
        if !self.enabled || !self.options.drag_enabled {
            return;
        }
        match self.state.phase {
            NavPhase::Transitioning => {
                ctrace!("drag refused: transition in flight");
                return;
            }
            NavPhase::Dragging => return,
            NavPhase::Idle => {}
        }
        self.autoplay.stop();
        self.recompute_dimensions(now_ms);
        self.state.phase = NavPhase::Dragging;
        self.gesture.begin(pos, self.state.live_offset, now_ms);
        self.notify();
    }

    /// Feeds a pointer move sample into an active drag.
    ///
    /// The resulting live offset lands in the coalesced frame channel
    /// ([`Self::take_drag_frame`]); it does not produce a [`RenderUpdate`].
    pub fn drag_move(&mut self, pos: f64, now_ms: u64) {
        if !self.enabled || self.state.phase != NavPhase::Dragging {
            return;
        }
        let bounds = self.drag_bounds();
        self.gesture.movement(pos, bounds, now_ms);
    }

    /// Ends an active drag, deciding between tap, snap-back, commit and
    /// overscroll wrap.
    pub fn end_drag(&mut self, now_ms: u64) {
        if !self.enabled || self.state.phase != NavPhase::Dragging {
            return;
        }
        let bounds = self.drag_bounds();
        let span = self.dims.slide_span();
        let release = self.gesture.release(span, bounds, now_ms);
        ctrace!(?release, "end_drag");
        self.state.phase = NavPhase::Idle;

        match release {
            DragRelease::Tap => {
                self.batch_update(|c| {
                    let current = c.state.current_index;
                    c.render_at(current, true, now_ms);
                });
                self.autoplay.restart(now_ms);
            }
            DragRelease::SnapBack => {
                let current = self.state.current_index;
                self.go_to_slide(current, now_ms);
            }
            DragRelease::Commit {
                slides_moved,
                toward_previous,
            } => {
                let current = self.state.current_index;
                let moved = slides_moved as i64;
                let mut target = if toward_previous {
                    current - moved
                } else {
                    current + moved
                };
                if !self.plan.loop_active() {
                    target = target.clamp(0, self.max_index());
                }
                self.go_to_slide(target, now_ms);
            }
            DragRelease::Overscroll { offset } => {
                self.batch_update(|c| {
                    let target = if c.plan.loop_active() {
                        c.nearest_wrapped_index(offset)
                    } else {
                        c.state.current_index
                    };
                    c.state.current_index = target;
                    c.render_at(target, true, now_ms);
                });
                self.autoplay.restart(now_ms);
            }
        }
    }

    /// Maps a release offset at a loop bound to the logical slide whose
    /// rendered slot is nearest, wrapped into `[0, N)`. Overscroll past the
    /// tail therefore lands on the first slides and overscroll past the
    /// head on the last ones, instead of resetting to slide 0.
    fn nearest_wrapped_index(&self, offset: f64) -> i64 {
        let span = self.dims.slide_span();
        if span <= 0.0 {
            return 0;
        }
        let slot = (offset / span + 0.5) as i64;
        let logical = slot - self.plan.shift() as i64;
        pagination::wrap_index(logical, self.options.slide_count) as i64
    }

    /// The host's render-completion signal, fired once per animated render.
    ///
    /// With looping, an index that roamed outside `[0, N)` is renormalized
    /// and re-rendered instantly at the wrapped position before the engine
    /// returns to idle.
    pub fn complete_transition(&mut self, now_ms: u64) {
        if !self.enabled || self.state.phase != NavPhase::Transitioning {
            return;
        }
        self.batch_update(|c| {
            c.state.phase = NavPhase::Idle;
            let n = c.options.slide_count as i64;
            let index = c.state.current_index;
            if c.plan.loop_active() && (index < 0 || index >= n) {
                let wrapped = pagination::wrap_index(index, c.options.slide_count) as i64;
                ctrace!(from = index, to = wrapped, "renormalize");
                c.state.current_index = wrapped;
                c.render_at(wrapped, true, now_ms);
            } else {
                c.notify();
            }
        });
        self.autoplay.ensure_running(now_ms);
    }

    /// Records a viewport resize; the new width settles through a 250 ms
    /// debounce and a 50-unit hysteresis before breakpoints re-resolve.
    pub fn on_resize_event(&mut self, viewport_width: f64, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.resize.record(viewport_width, now_ms);
    }

    /// Advances time-driven behavior: settled resizes and autoplay.
    ///
    /// An autoplay tick that lands while a drag or transition is in flight
    /// is skipped silently; the schedule keeps its phase.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.enabled {
            return;
        }
        if let Some(width) = self.resize.poll(now_ms) {
            cdebug!(width, "resize settled");
            self.apply_breakpoints(width);
            self.refresh(now_ms);
        }
        if self.autoplay.poll(now_ms) {
            if self.state.phase == NavPhase::Idle {
                self.next(now_ms);
            } else {
                ctrace!("autoplay tick skipped");
            }
        }
    }

    fn apply_breakpoints(&mut self, width: f64) {
        let Some(ov) = self
            .options
            .breakpoints
            .as_ref()
            .and_then(|t| t.resolve(width))
            .copied()
        else {
            return;
        };
        cdebug!(width, "applying breakpoint override");
        apply_override(&mut self.options, ov);
        if let Some(interval) = ov.autoplay_interval_ms {
            self.autoplay.set_interval(interval);
        }
    }

    /// Rebuilds the clone plan and geometry for the active configuration
    /// and re-renders instantly at the current slide.
    ///
    /// Any in-flight transition or drag is abandoned; the index is brought
    /// back into range first.
    pub fn refresh(&mut self, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.autoplay.stop();
        self.batch_update(|c| {
            c.plan = ClonePlan::build(
                c.options.slide_count,
                c.options.visible_count,
                c.options.loop_enabled,
            );
            c.state.phase = NavPhase::Idle;
            let index = if c.plan.loop_active() {
                pagination::wrap_index(c.state.current_index, c.options.slide_count) as i64
            } else {
                c.state.current_index.clamp(0, c.max_index())
            };
            c.state.current_index = index;
            c.render_at(index, true, now_ms);
        });
        self.autoplay.restart(now_ms);
    }

    pub fn total_pages(&self) -> usize {
        if !self.enabled {
            return 0;
        }
        pagination::total_pages(
            self.options.slide_count,
            self.options.visible_count,
            self.plan.loop_active(),
        )
    }

    pub fn active_page(&self) -> usize {
        pagination::active_page(
            self.state.current_index,
            self.options.slide_count,
            self.options.visible_count,
            self.plan.loop_active(),
        )
    }

    pub fn page_state(&self) -> PageState {
        PageState {
            total_pages: self.total_pages(),
            active_page: self.active_page(),
        }
    }

    /// Iterates pagination bullets without allocating; exactly one is
    /// active. The active bullet is the host's accessible "current" marker.
    pub fn for_each_bullet(&self, mut f: impl FnMut(usize, bool)) {
        if !self.enabled {
            return;
        }
        let active = self.active_page();
        for i in 0..self.total_pages() {
            f(i, i == active);
        }
    }

    /// Whether a `prev` call can change the index. Always true when looping.
    pub fn prev_enabled(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.plan.loop_active() || self.state.current_index > 0
    }

    /// Whether a `next` call can change the index. Always true when looping.
    pub fn next_enabled(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.plan.loop_active() || self.state.current_index < self.max_index()
    }

    /// Returns a lightweight snapshot of the navigational state.
    pub fn snapshot(&self) -> NavSnapshot {
        self.state.snapshot()
    }

    /// Restores navigational state from a previously captured snapshot.
    ///
    /// The index is brought back into range and re-rendered instantly.
    pub fn restore_snapshot(&mut self, snapshot: NavSnapshot, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.batch_update(|c| {
            let index = if c.plan.loop_active() {
                pagination::wrap_index(snapshot.current_index, c.options.slide_count) as i64
            } else {
                snapshot.current_index.clamp(0, c.max_index())
            };
            c.state.phase = NavPhase::Idle;
            c.state.current_index = index;
            c.render_at(index, true, now_ms);
        });
    }

    /// Stops autoplay permanently and abandons any in-flight gesture.
    ///
    /// The host discards clones and listeners on its side; the engine only
    /// has timers and state to let go of.
    pub fn teardown(&mut self) {
        self.autoplay.stop();
        self.gesture = GestureTracker::default();
        self.pending_render = None;
        self.state.phase = NavPhase::Idle;
        self.notify();
    }
}

fn apply_override(options: &mut CarouselOptions, ov: crate::breakpoints::BreakpointOverride) {
    if let Some(gap) = ov.gap {
        options.gap = gap;
    }
    if let Some(visible_count) = ov.visible_count {
        options.visible_count = visible_count.max(1);
    }
    if let Some(step_size) = ov.step_size {
        options.step_size = step_size.max(1);
    }
    if let Some(loop_enabled) = ov.loop_enabled {
        options.loop_enabled = loop_enabled;
    }
    if let Some(interval) = ov.autoplay_interval_ms {
        options.autoplay_interval_ms = interval;
    }
}

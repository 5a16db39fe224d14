//! Pointer/touch drag tracking: live offset interception, velocity
//! estimation, and the release-commit decision.

/// Displacement at or below which a gesture is a non-navigating tap.
pub const DRAG_DEAD_ZONE: f64 = 5.0;
/// A release within this window and beyond [`QUICK_SWIPE_MIN_DISTANCE`]
/// commits regardless of distance-per-slide.
pub const QUICK_SWIPE_MAX_MS: u64 = 300;
pub const QUICK_SWIPE_MIN_DISTANCE: f64 = 30.0;
/// Velocity (units/ms) beyond which a release commits.
pub const FAST_SWIPE_VELOCITY: f64 = 0.3;
/// How long host click/activation events stay suppressed after a real drag.
pub const ACTIVATION_SUPPRESS_MS: u64 = 100;

/// Bounds applied to the live offset while dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragBounds {
    /// Full-track bounds; the drag may roam into clone territory.
    Inner { min: f64, max: f64 },
    /// Fallback when no usable track extent exists: at most one
    /// viewport-worth of travel from the drag's starting offset.
    Cap { max_travel: f64 },
}

/// What a drag release resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragRelease {
    /// Within the dead-zone: no index change, no suppression.
    Tap,
    /// Moved, but no commit heuristic held: animate back to the current index.
    SnapBack,
    /// Navigate by `slides_moved` in the indicated direction.
    Commit {
        slides_moved: usize,
        toward_previous: bool,
    },
    /// Released at or beyond an inner bound; carries the release offset.
    Overscroll { offset: f64 },
}

/// Converts raw pointer samples into a live drag offset and a velocity
/// estimate, and decides on release whether a navigation commit occurred.
///
/// The tracker owns the coalesced visual update: at most one frame offset is
/// pending at a time and each move supersedes it, so a host draining once
/// per frame applies only the newest value.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    dragging: bool,
    start_pos: f64,
    last_pos: f64,
    start_offset: f64,
    candidate_offset: f64,
    start_ms: u64,
    last_move_ms: u64,
    velocity: f64,
    moved: bool,
    pending_frame: Option<f64>,
    released_at_ms: Option<u64>,
}

impl GestureTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Signed displacement since the drag started.
    pub fn delta(&self) -> f64 {
        self.last_pos - self.start_pos
    }

    /// Latest velocity sample, in distance units per millisecond.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether the gesture left the dead-zone at any point.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// True while host click/activation events should be ignored.
    ///
    /// Latches for [`ACTIVATION_SUPPRESS_MS`] after a release that actually
    /// dragged, so a slide's click target does not fire from a swipe.
    pub fn suppresses_activation(&self, now_ms: u64) -> bool {
        if self.dragging {
            return self.moved;
        }
        match self.released_at_ms {
            Some(at) => now_ms.saturating_sub(at) < ACTIVATION_SUPPRESS_MS,
            None => false,
        }
    }

    /// Takes the most recently scheduled frame offset, if any.
    ///
    /// Superseded values are never observed: only the newest survives until
    /// the host drains it.
    pub fn take_frame_update(&mut self) -> Option<f64> {
        self.pending_frame.take()
    }

    pub(crate) fn begin(&mut self, pos: f64, current_offset: f64, now_ms: u64) {
        self.dragging = true;
        self.start_pos = pos;
        self.last_pos = pos;
        self.start_offset = current_offset;
        self.candidate_offset = current_offset;
        self.start_ms = now_ms;
        self.last_move_ms = now_ms;
        self.velocity = 0.0;
        self.moved = false;
        self.pending_frame = None;
        self.released_at_ms = None;
    }

    pub(crate) fn movement(&mut self, pos: f64, bounds: DragBounds, now_ms: u64) {
        if !self.dragging {
            return;
        }

        let elapsed = now_ms.saturating_sub(self.last_move_ms);
        if elapsed > 0 {
            self.velocity = (pos - self.last_pos) / elapsed as f64;
        }
        self.last_pos = pos;
        self.last_move_ms = now_ms;

        let delta = self.delta();
        if delta.abs() > DRAG_DEAD_ZONE {
            self.moved = true;
        }

        // Positive delta drags the track toward previous slides, i.e. a
        // smaller track offset.
        let raw = self.start_offset - delta;
        let clamped = match bounds {
            DragBounds::Inner { min, max } => raw.clamp(min, max),
            DragBounds::Cap { max_travel } => raw.clamp(
                self.start_offset - max_travel,
                self.start_offset + max_travel,
            ),
        };
        self.candidate_offset = clamped;
        self.pending_frame = Some(clamped);
    }

    pub(crate) fn release(
        &mut self,
        slide_span: f64,
        bounds: DragBounds,
        now_ms: u64,
    ) -> DragRelease {
        self.dragging = false;
        // A release cancels any still-pending frame update.
        self.pending_frame = None;

        let delta = self.delta();
        if delta.abs() <= DRAG_DEAD_ZONE {
            self.velocity = 0.0;
            return DragRelease::Tap;
        }

        self.released_at_ms = Some(now_ms);

        if let DragBounds::Inner { min, max } = bounds {
            if self.candidate_offset <= min || self.candidate_offset >= max {
                return DragRelease::Overscroll {
                    offset: self.candidate_offset,
                };
            }
        }

        let slides_moved = if slide_span > 0.0 {
            ((delta.abs() / slide_span) + 0.5) as usize
        } else {
            1
        }
        .max(1);

        let elapsed = now_ms.saturating_sub(self.start_ms);
        let quick_swipe = elapsed < QUICK_SWIPE_MAX_MS && delta.abs() > QUICK_SWIPE_MIN_DISTANCE;
        let fast_swipe = self.velocity.abs() > FAST_SWIPE_VELOCITY;
        let far_drag = delta.abs() > slide_span / 2.0;

        if quick_swipe || fast_swipe || far_drag {
            DragRelease::Commit {
                slides_moved,
                toward_previous: delta > 0.0 || self.velocity > 0.0,
            }
        } else {
            DragRelease::SnapBack
        }
    }
}

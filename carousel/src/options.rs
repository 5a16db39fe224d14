use alloc::sync::Arc;

use crate::breakpoints::BreakpointTable;
use crate::carousel::Carousel;
use crate::types::{NavPhase, Orientation};

/// A callback fired when the carousel's navigational state changes.
///
/// The second argument is the phase after the change.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, NavPhase) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Breakpoint overrides mutate these values in place while the instance is
/// alive; the struct is both the initial configuration and the active one.
pub struct CarouselOptions {
    /// Number of original slides. Zero builds an inert instance.
    pub slide_count: usize,
    pub orientation: Orientation,
    /// Spacing between adjacent slides, in host distance units.
    pub gap: f64,
    /// Number of slides shown at once.
    pub visible_count: usize,
    /// Slides advanced per `next`/`prev` call.
    pub step_size: usize,
    /// Requests infinite looping; forced off for degenerate slide counts.
    pub loop_enabled: bool,
    pub drag_enabled: bool,
    /// Milliseconds between automatic advances; 0 disables autoplay.
    pub autoplay_interval_ms: u64,
    pub breakpoints: Option<BreakpointTable>,
    /// Logical index to show first.
    pub initial_index: usize,
    /// Content-box size of the viewport container along the main axis.
    pub initial_container_size: f64,
    /// Viewport width used for the initial breakpoint resolution.
    pub initial_viewport_width: f64,
    /// Optional callback fired when the carousel's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            orientation: Orientation::Horizontal,
            gap: 0.0,
            visible_count: 1,
            step_size: 1,
            loop_enabled: true,
            drag_enabled: true,
            autoplay_interval_ms: 0,
            breakpoints: None,
            initial_index: 0,
            initial_container_size: 0.0,
            initial_viewport_width: 0.0,
            on_change: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_loop_enabled(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn with_drag_enabled(mut self, drag_enabled: bool) -> Self {
        self.drag_enabled = drag_enabled;
        self
    }

    /// Sets the autoplay interval; 0 disables autoplay.
    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Option<BreakpointTable>) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_initial_container_size(mut self, size: f64) -> Self {
        self.initial_container_size = size;
        self
    }

    pub fn with_initial_viewport_width(mut self, width: f64) -> Self {
        self.initial_viewport_width = width;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, NavPhase) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            slide_count: self.slide_count,
            orientation: self.orientation,
            gap: self.gap,
            visible_count: self.visible_count,
            step_size: self.step_size,
            loop_enabled: self.loop_enabled,
            drag_enabled: self.drag_enabled,
            autoplay_interval_ms: self.autoplay_interval_ms,
            breakpoints: self.breakpoints.clone(),
            initial_index: self.initial_index,
            initial_container_size: self.initial_container_size,
            initial_viewport_width: self.initial_viewport_width,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("slide_count", &self.slide_count)
            .field("orientation", &self.orientation)
            .field("gap", &self.gap)
            .field("visible_count", &self.visible_count)
            .field("step_size", &self.step_size)
            .field("loop_enabled", &self.loop_enabled)
            .field("drag_enabled", &self.drag_enabled)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("breakpoints", &self.breakpoints)
            .field("initial_index", &self.initial_index)
            .field("initial_container_size", &self.initial_container_size)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .finish_non_exhaustive()
    }
}

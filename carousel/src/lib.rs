//! A headless carousel engine.
//!
//! For adapter-level utilities (tween-driven transitions, thumbnail sync),
//! see the `carousel-adapter` crate.
//!
//! This crate focuses on the state machine and geometry that turn navigation
//! intents (button press, drag gesture, autoplay tick, page-control click,
//! thumbnail selection, viewport resize) into a consistent rendered offset
//! and slide index, including the infinite-loop illusion built from boundary
//! duplicates.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container size along the carousel axis
//! - pointer samples and resize events, plus a `now_ms` clock
//! - an "apply visual offset" capability consuming [`RenderUpdate`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod breakpoints;
mod carousel;
mod clones;
mod geometry;
mod gesture;
mod options;
mod pagination;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use breakpoints::{
    Breakpoint, BreakpointOverride, BreakpointTable, RESIZE_DEBOUNCE_MS, RESIZE_HYSTERESIS,
};
pub use carousel::Carousel;
pub use clones::ClonePlan;
pub use geometry::compute_dimensions;
pub use gesture::{
    GestureTracker, ACTIVATION_SUPPRESS_MS, DRAG_DEAD_ZONE, FAST_SWIPE_VELOCITY,
    QUICK_SWIPE_MAX_MS, QUICK_SWIPE_MIN_DISTANCE,
};
pub use options::{CarouselOptions, OnChangeCallback};
pub use pagination::{active_page, page_target, total_pages};
pub use state::NavSnapshot;
pub use types::{Dimensions, NavPhase, Orientation, PageState, RenderUpdate, RenderedSlide};

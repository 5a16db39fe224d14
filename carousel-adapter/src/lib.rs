//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A [`Controller`] that drives animated transitions with a tween and
//!   fires the engine's completion signal at the right moment
//! - Thumbnail-strip selection sync
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod thumbs;
mod tween;


pub use controller::{Controller, DEFAULT_TRANSITION_MS};
pub use thumbs::{active_thumb, ThumbStrip};
pub use tween::{Easing, Tween};

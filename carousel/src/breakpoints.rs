//! Responsive reconfiguration: width thresholds and resize debouncing.

use alloc::vec::Vec;

/// Quiet window a resize burst must observe before breakpoints re-resolve.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
/// Width change below which a settled resize is ignored.
pub const RESIZE_HYSTERESIS: f64 = 50.0;

/// A partial configuration override; only the present keys are applied.
///
/// Overrides are cumulative across breakpoint changes: a key missing from
/// the newly active tier retains whatever value the previous tier (or the
/// base configuration) left behind.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointOverride {
    pub gap: Option<f64>,
    pub visible_count: Option<usize>,
    pub step_size: Option<usize>,
    pub loop_enabled: Option<bool>,
    /// 0 disables autoplay.
    pub autoplay_interval_ms: Option<u64>,
}

/// One tier: active for viewport widths at or above `min_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub overrides: BreakpointOverride,
}

/// Ascending set of width-keyed overrides; at most one tier is active.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Builds a table, sorting tiers ascending by threshold.
    pub fn new(mut entries: Vec<Breakpoint>) -> Self {
        entries.sort_by_key(|bp| bp.min_width);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Picks the greatest threshold at or below `width`.
    pub fn resolve(&self, width: f64) -> Option<&BreakpointOverride> {
        let mut active = None;
        for bp in &self.entries {
            if width >= bp.min_width as f64 {
                active = Some(&bp.overrides);
            } else {
                break;
            }
        }
        active
    }
}

/// Debounces resize events and suppresses sub-hysteresis width changes.
///
/// Each recorded event supersedes the pending one, restarting the quiet
/// window. `poll` hands back a settled width at most once, and only when it
/// differs from the last applied width by more than the hysteresis.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ResizeDebouncer {
    pending: Option<(f64, u64)>,
    last_applied: Option<f64>,
}

impl ResizeDebouncer {
    pub(crate) fn new(initial_width: f64) -> Self {
        Self {
            pending: None,
            last_applied: (initial_width > 0.0).then_some(initial_width),
        }
    }

    pub(crate) fn record(&mut self, width: f64, now_ms: u64) {
        self.pending = Some((width, now_ms));
    }

    pub(crate) fn poll(&mut self, now_ms: u64) -> Option<f64> {
        let (width, recorded_at) = self.pending?;
        if now_ms.saturating_sub(recorded_at) < RESIZE_DEBOUNCE_MS {
            return None;
        }
        self.pending = None;
        match self.last_applied {
            Some(last) if (width - last).abs() <= RESIZE_HYSTERESIS => None,
            _ => {
                self.last_applied = Some(width);
                Some(width)
            }
        }
    }
}

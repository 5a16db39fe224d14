use crate::types::NavPhase;

/// A lightweight, serializable snapshot of navigational state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Useful for restoring a carousel across host teardown/rebuild cycles
/// without coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSnapshot {
    pub current_index: i64,
    pub live_offset: f64,
}

/// The engine-internal navigational state record.
///
/// Every mutation flows through explicit transition helpers on
/// [`crate::Carousel`] that compute the next record and swap it in, so the
/// ordering of the five event sources stays easy to reason about.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct NavState {
    pub(crate) current_index: i64,
    pub(crate) phase: NavPhase,
    pub(crate) live_offset: f64,
}

impl NavState {
    pub(crate) fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current_index: self.current_index,
            live_offset: self.live_offset,
        }
    }
}

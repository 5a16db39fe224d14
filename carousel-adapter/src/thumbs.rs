use core::fmt;

use carousel::Carousel;

/// Returns the thumbnail index that should show as selected, if any.
pub fn active_thumb(c: &Carousel) -> Option<usize> {
    c.enabled().then(|| c.active_index())
}

/// Mirrors a strip of thumbnail controls against the carousel.
///
/// Hosts keep one of these per strip and call [`ThumbStrip::sync`] after
/// every state change (e.g. from the engine's `on_change` callback or once
/// per frame); it reports the newly selected thumb only when the selection
/// actually moved, so the host toggles controls at most once per change.
#[derive(Clone, PartialEq, Eq)]
pub struct ThumbStrip {
    count: usize,
    checked: Option<usize>,
}

impl ThumbStrip {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            checked: None,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The currently checked thumb, if the strip has synced at least once.
    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    /// Re-derives the selection; returns the thumb to check when it changed.
    pub fn sync(&mut self, c: &Carousel) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let active = active_thumb(c)?.min(self.count - 1);
        if self.checked == Some(active) {
            return None;
        }
        self.checked = Some(active);
        Some(active)
    }
}

impl fmt::Debug for ThumbStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbStrip")
            .field("count", &self.count)
            .field("checked", &self.checked)
            .finish()
    }
}

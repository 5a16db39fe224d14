//! Track geometry: slide sizing and translation bounds.

use crate::types::Dimensions;

/// Computes the derived track geometry for one configuration.
///
/// `rendered_count` is the length of the rendered sequence (originals plus
/// boundary clones); `slide_count` is the number of originals. The extent is
/// derived from state rather than measured back from a renderer, so the
/// value is a pure function of its inputs. Callers cache it together with
/// `now_ms` and are responsible for recomputing when inputs change.
pub fn compute_dimensions(
    container_size: f64,
    slide_count: usize,
    rendered_count: usize,
    visible_count: usize,
    gap: f64,
    now_ms: u64,
) -> Dimensions {
    let visible = visible_count.max(1);
    let total_gaps = gap * (visible as f64 - 1.0);
    // Degenerate containers yield zero, not negative, slide sizes.
    let slide_size = ((container_size - total_gaps) / visible as f64).max(0.0);

    let track_extent = if rendered_count == 0 {
        0.0
    } else {
        rendered_count as f64 * slide_size + (rendered_count as f64 - 1.0) * gap
    };

    let max_index = slide_count.saturating_sub(visible);
    let span = slide_size + gap;

    Dimensions {
        container_size,
        slide_size,
        gap,
        track_extent,
        inner_max_offset: (track_extent - container_size).max(0.0),
        max_offset: max_index as f64 * span,
        computed_at_ms: now_ms,
    }
}

//! Boundary duplicates for the infinite-loop illusion.
//!
//! The engine never materializes clones. A [`ClonePlan`] is a pure value:
//! it defines the index shift used in offset math and describes which
//! original slides a rendering layer should duplicate at each boundary, for
//! renderers that truly require contiguous elements. Rebuilding the plan is
//! recomputation, so it is idempotent and cannot leak stale duplicates.

use alloc::vec::Vec;

use crate::types::RenderedSlide;

/// The rendered slide sequence: head clones, originals, tail clones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClonePlan {
    head: Vec<usize>,
    tail: Vec<usize>,
    shift: usize,
    count: usize,
    loop_active: bool,
}

impl ClonePlan {
    /// Builds the plan for `count` slides with `visible_count` shown at once.
    ///
    /// Looping requires more than one slide and more slides than are visible;
    /// otherwise it is forced off and the plan carries no clones. With a
    /// single visible slide the first and last slides are duplicated once
    /// each (shift 1); otherwise the first and last `visible_count` slides
    /// are duplicated in original order (shift = `visible_count`).
    pub fn build(count: usize, visible_count: usize, loop_requested: bool) -> Self {
        let loop_active = loop_requested && count > 1 && count > visible_count;
        if !loop_active {
            return Self {
                head: Vec::new(),
                tail: Vec::new(),
                shift: 0,
                count,
                loop_active: false,
            };
        }

        if visible_count == 1 {
            return Self {
                head: alloc::vec![count - 1],
                tail: alloc::vec![0],
                shift: 1,
                count,
                loop_active: true,
            };
        }

        let head = (count - visible_count..count).collect();
        let tail = (0..visible_count).collect();
        Self {
            head,
            tail,
            shift: visible_count,
            count,
            loop_active: true,
        }
    }

    /// Whether looping survived the degenerate-count checks.
    pub fn loop_active(&self) -> bool {
        self.loop_active
    }

    /// Offset (in slots) between a logical index and its rendered position.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Source indices of the head (prepended) clones, in render order.
    pub fn head(&self) -> &[usize] {
        &self.head
    }

    /// Source indices of the tail (appended) clones, in render order.
    pub fn tail(&self) -> &[usize] {
        &self.tail
    }

    pub fn clone_count(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Length of the rendered sequence (originals plus clones).
    pub fn rendered_len(&self) -> usize {
        self.count + self.clone_count()
    }

    /// Iterates the rendered sequence without allocating.
    pub fn for_each_rendered(&self, mut f: impl FnMut(RenderedSlide)) {
        let mut slot = 0;
        for &source_index in &self.head {
            f(RenderedSlide {
                slot,
                source_index,
                is_clone: true,
            });
            slot += 1;
        }
        for source_index in 0..self.count {
            f(RenderedSlide {
                slot,
                source_index,
                is_clone: false,
            });
            slot += 1;
        }
        for &source_index in &self.tail {
            f(RenderedSlide {
                slot,
                source_index,
                is_clone: true,
            });
            slot += 1;
        }
    }
}

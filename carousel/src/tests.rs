use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn expected_total_pages(count: usize, visible: usize, looping: bool) -> usize {
    if looping {
        count
    } else {
        count.saturating_sub(visible).saturating_add(1).max(1)
    }
}

fn expected_wrap(index: i64, count: usize) -> usize {
    let n = count as i64;
    (((index % n) + n) % n) as usize
}

/// A looping single-visible carousel: 4 slides of 100 units, no gap.
fn looping_carousel() -> Carousel {
    Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_loop_enabled(true),
    )
}

/// A clamped two-visible carousel: 5 slides, container 100, no gap.
fn clamped_carousel() -> Carousel {
    Carousel::new(
        CarouselOptions::new(5)
            .with_visible_count(2)
            .with_initial_container_size(100.0)
            .with_loop_enabled(false),
    )
}

/// Drains the pending render and applies it the way a host would.
fn apply_render(c: &mut Carousel) -> Option<RenderUpdate> {
    let update = c.take_render_update()?;
    c.set_live_offset(update.offset);
    Some(update)
}

#[test]
fn geometry_derives_sizes_and_bounds() {
    let d = compute_dimensions(300.0, 5, 5, 2, 10.0, 7);
    assert_eq!(d.slide_size, 145.0);
    assert_eq!(d.slide_span(), 155.0);
    assert_eq!(d.track_extent, 5.0 * 145.0 + 4.0 * 10.0);
    assert_eq!(d.inner_max_offset, d.track_extent - 300.0);
    // max_index = 5 - 2 = 3
    assert_eq!(d.max_offset, 3.0 * 155.0);
    assert_eq!(d.computed_at_ms, 7);
}

#[test]
fn geometry_handles_degenerate_containers() {
    let d = compute_dimensions(0.0, 3, 3, 1, 0.0, 0);
    assert_eq!(d.slide_size, 0.0);
    assert_eq!(d.inner_max_offset, 0.0);

    let d = compute_dimensions(10.0, 0, 0, 1, 5.0, 0);
    assert_eq!(d.track_extent, 0.0);
}

#[test]
fn clone_plan_single_visible_duplicates_once_each_side() {
    let plan = ClonePlan::build(4, 1, true);
    assert!(plan.loop_active());
    assert_eq!(plan.shift(), 1);
    assert_eq!(plan.head(), &[3]);
    assert_eq!(plan.tail(), &[0]);
    assert_eq!(plan.rendered_len(), 6);
}

#[test]
fn clone_plan_multi_visible_duplicates_visible_count_in_order() {
    let plan = ClonePlan::build(5, 2, true);
    assert_eq!(plan.shift(), 2);
    assert_eq!(plan.head(), &[3, 4]);
    assert_eq!(plan.tail(), &[0, 1]);
    assert_eq!(plan.rendered_len(), 9);

    let mut sources = Vec::new();
    plan.for_each_rendered(|s| sources.push((s.slot, s.source_index, s.is_clone)));
    assert_eq!(sources.len(), 9);
    assert_eq!(sources[0], (0, 3, true));
    assert_eq!(sources[1], (1, 4, true));
    assert_eq!(sources[2], (2, 0, false));
    assert_eq!(sources[8], (8, 1, true));
}

#[test]
fn clone_plan_degenerate_counts_force_loop_off() {
    for (count, visible) in [(0, 1), (1, 1), (3, 3), (2, 4)] {
        let plan = ClonePlan::build(count, visible, true);
        assert!(!plan.loop_active(), "count={count} visible={visible}");
        assert_eq!(plan.shift(), 0);
        assert_eq!(plan.rendered_len(), count);
    }
}

#[test]
fn clone_plan_rebuild_is_idempotent() {
    let a = ClonePlan::build(6, 3, true);
    let b = ClonePlan::build(6, 3, true);
    assert_eq!(a, b);
    assert_eq!(a.clone_count(), b.clone_count());
}

#[test]
fn initial_render_is_instant_at_shifted_offset() {
    let mut c = looping_carousel();
    let update = c.take_render_update().unwrap();
    assert!(update.instant);
    // index 0 + shift 1, slide span 100
    assert_eq!(update.offset, 100.0);
    assert_eq!(c.live_offset(), 100.0);
}

#[test]
fn go_to_slide_enters_transitioning_and_renders_animated() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.go_to_slide(2, 0);
    assert!(c.is_transitioning());
    assert_eq!(c.current_index(), 2);
    let update = c.take_render_update().unwrap();
    assert!(!update.instant);
    assert_eq!(update.offset, 300.0);
}

#[test]
fn navigation_requests_are_dropped_while_transitioning() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.go_to_slide(1, 0);
    c.take_render_update();

    c.next(10);
    c.prev(10);
    c.go_to_slide(3, 10);
    c.go_to_page(2, 10);
    c.select_thumb(3, 10);
    assert_eq!(c.current_index(), 1);
    assert!(c.take_render_update().is_none(), "no render issued");

    c.complete_transition(20);
    assert!(!c.is_transitioning());
    c.next(30);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn completion_renormalizes_roaming_index() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.go_to_slide(3, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    c.next(100);
    assert_eq!(c.current_index(), 4);
    apply_render(&mut c);

    c.complete_transition(500);
    assert_eq!(c.current_index(), 0);
    let update = c.take_render_update().unwrap();
    assert!(update.instant, "rewind render must skip animation");
    assert_eq!(update.offset, 100.0);
}

#[test]
fn completion_renormalizes_negative_index() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.prev(0);
    assert_eq!(c.current_index(), -1);
    apply_render(&mut c);
    c.complete_transition(400);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.active_index(), 3);
}

#[test]
fn non_loop_next_clamps_at_max_index() {
    let mut c = clamped_carousel();
    apply_render(&mut c);

    // maxIndex = 5 - 2 = 3
    c.go_to_slide(3, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    c.next(10);
    assert_eq!(c.current_index(), 3);
    assert!(!c.is_transitioning(), "bound step skips the transition");
    assert!(c.take_render_update().is_none());
}

#[test]
fn non_loop_prev_clamps_at_zero() {
    let mut c = clamped_carousel();
    apply_render(&mut c);
    c.prev(0);
    assert_eq!(c.current_index(), 0);
    assert!(!c.is_transitioning());
}

#[test]
fn step_size_moves_multiple_slides() {
    let mut c = Carousel::new(
        CarouselOptions::new(6)
            .with_step_size(2)
            .with_initial_container_size(100.0),
    );
    apply_render(&mut c);
    c.next(0);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn arrow_state_reflects_clamp_bounds() {
    let mut c = clamped_carousel();
    apply_render(&mut c);
    assert!(!c.prev_enabled());
    assert!(c.next_enabled());

    c.go_to_slide(3, 0);
    apply_render(&mut c);
    c.complete_transition(0);
    assert!(c.prev_enabled());
    assert!(!c.next_enabled());

    let c = looping_carousel();
    assert!(c.prev_enabled());
    assert!(c.next_enabled());
}

#[test]
fn total_pages_matches_model_across_counts() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..200 {
        let count = rng.gen_range_usize(1, 12);
        let visible = rng.gen_range_usize(1, 5);
        let looping = rng.gen_bool();
        let c = Carousel::new(
            CarouselOptions::new(count)
                .with_visible_count(visible)
                .with_loop_enabled(looping)
                .with_initial_container_size(200.0),
        );
        let loop_active = c.clone_plan().loop_active();
        assert_eq!(
            c.total_pages(),
            expected_total_pages(count, visible, loop_active),
            "count={count} visible={visible} looping={looping}"
        );
    }
}

#[test]
fn exactly_one_bullet_is_active() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(2, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    let mut total = 0;
    let mut active = Vec::new();
    c.for_each_bullet(|i, is_active| {
        total += 1;
        if is_active {
            active.push(i);
        }
    });
    assert_eq!(total, 4);
    assert_eq!(active, [2]);
}

#[test]
fn go_to_page_wraps_when_looping_and_clamps_otherwise() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_page(2, 0);
    assert_eq!(c.current_index(), 2);
    apply_render(&mut c);
    c.complete_transition(0);

    let mut c = clamped_carousel();
    apply_render(&mut c);
    c.go_to_page(10, 0);
    assert_eq!(c.current_index(), 3, "page clamps to maxIndex");
}

#[test]
fn thumb_selection_navigates_to_slide() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.select_thumb(3, 0);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.active_index(), 3);
}

#[test]
fn dead_zone_release_never_changes_index() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 0);
    assert!(c.is_dragging());
    c.drag_move(503.0, 16);
    c.end_drag(32);

    assert!(!c.is_dragging());
    assert_eq!(c.current_index(), 0);
    let update = c.take_render_update().unwrap();
    assert!(update.instant, "tap snaps back without animating");
    assert_eq!(update.offset, 100.0);
    assert!(!c.suppresses_activation(33), "taps do not suppress clicks");
}

#[test]
fn quick_swipe_commits_at_least_one_slide() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 1000);
    c.drag_move(460.0, 1100);
    c.end_drag(1150);

    // 40 units in 150ms: quick swipe toward the next slide.
    assert!(c.is_transitioning());
    assert_eq!(c.current_index(), 1);
}

#[test]
fn quick_swipe_toward_previous_decrements() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(2, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    c.begin_drag(500.0, 1000);
    c.drag_move(540.0, 1100);
    c.end_drag(1150);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn slow_short_drag_snaps_back() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(1, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    c.begin_drag(500.0, 1000);
    // 40 units over a full second: not quick, not fast, not far.
    c.drag_move(480.0, 1500);
    c.drag_move(460.0, 2000);
    c.end_drag(2000);

    assert!(c.is_transitioning(), "snap-back animates to the same slide");
    assert_eq!(c.current_index(), 1);
    let update = c.take_render_update().unwrap();
    assert!(!update.instant);
    assert_eq!(update.offset, 200.0);
}

#[test]
fn far_slow_drag_still_commits() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 0);
    c.drag_move(470.0, 500);
    c.drag_move(440.0, 1000);
    c.end_drag(1000);

    // 60 units > span/2: far drag commits despite the slow release.
    assert_eq!(c.current_index(), 1);
}

#[test]
fn fast_release_velocity_commits() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 0);
    c.drag_move(490.0, 350);
    // Final sample: 10 units in 10ms, well past the velocity threshold.
    c.drag_move(480.0, 360);
    c.end_drag(360);

    assert_eq!(c.current_index(), 1);
}

#[test]
fn drag_frames_are_coalesced_to_the_newest() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 0);
    c.drag_move(490.0, 16);
    c.drag_move(485.0, 32);
    c.drag_move(470.0, 48);

    // Only the last scheduled offset survives.
    assert_eq!(c.take_drag_frame(), Some(130.0));
    assert_eq!(c.take_drag_frame(), None);
    c.end_drag(64);
}

#[test]
fn drag_is_refused_while_transitioning() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(1, 0);

    c.begin_drag(500.0, 10);
    assert!(!c.is_dragging());
    assert!(c.is_transitioning());
}

#[test]
fn drag_is_refused_when_disabled() {
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_drag_enabled(false),
    );
    apply_render(&mut c);
    c.begin_drag(500.0, 0);
    assert!(!c.is_dragging());
}

#[test]
fn drag_begins_from_the_applied_offset() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    // Host mid-animation: offset 130 applied, transition completed.
    c.go_to_slide(1, 0);
    c.take_render_update();
    c.set_live_offset(130.0);
    c.complete_transition(100);
    c.take_render_update();

    c.begin_drag(500.0, 200);
    c.drag_move(495.0, 216);
    assert_eq!(c.take_drag_frame(), Some(135.0));
    c.end_drag(232);
}

#[test]
fn overscroll_past_head_wraps_to_last_slide() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    // live offset 100 (index 0); drag 200 units toward previous slides
    // pins the candidate at the head bound.
    c.begin_drag(300.0, 0);
    c.drag_move(500.0, 100);
    c.end_drag(150);

    assert_eq!(c.current_index(), 3, "head overscroll wraps to the tail");
    let update = c.take_render_update().unwrap();
    assert!(update.instant);
    assert_eq!(update.offset, 400.0);
}

#[test]
fn overscroll_past_tail_wraps_to_first_slide() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(3, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    c.begin_drag(500.0, 1000);
    c.drag_move(400.0, 1100);
    c.end_drag(1150);

    assert_eq!(c.current_index(), 0, "tail overscroll wraps to the head");
}

#[test]
fn non_loop_overscroll_snaps_to_current() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_visible_count(2)
            .with_initial_container_size(100.0)
            .with_loop_enabled(false),
    );
    apply_render(&mut c);

    c.begin_drag(500.0, 0);
    c.drag_move(800.0, 100);
    c.end_drag(150);

    assert_eq!(c.current_index(), 0);
    let update = c.take_render_update().unwrap();
    assert!(update.instant);
    assert_eq!(update.offset, 0.0);
}

#[test]
fn activation_suppression_expires() {
    let mut c = looping_carousel();
    apply_render(&mut c);

    c.begin_drag(500.0, 1000);
    c.drag_move(460.0, 1100);
    c.end_drag(1150);

    assert!(c.suppresses_activation(1150));
    assert!(c.suppresses_activation(1249));
    assert!(!c.suppresses_activation(1250));
}

#[test]
fn autoplay_fires_next_when_idle() {
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_autoplay_interval_ms(1000),
    );
    apply_render(&mut c);

    c.tick(0); // arms the schedule
    c.tick(999);
    assert_eq!(c.current_index(), 0);
    c.tick(1000);
    assert_eq!(c.current_index(), 1);
    assert!(c.is_transitioning());
}

#[test]
fn autoplay_tick_is_skipped_while_dragging() {
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_autoplay_interval_ms(1000),
    );
    apply_render(&mut c);
    c.tick(0);

    c.begin_drag(500.0, 500);
    c.tick(1000);
    assert_eq!(c.current_index(), 0, "suppressed tick performs no change");
    c.tick(1500);
    assert_eq!(c.current_index(), 0, "no reschedule outside the interval");
}

#[test]
fn autoplay_tick_is_skipped_while_transitioning() {
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_autoplay_interval_ms(1000),
    );
    apply_render(&mut c);
    c.tick(0);

    c.go_to_slide(2, 100);
    // go_to_slide re-based the deadline to 1100; a poll at 1000 is early
    // and one at 1100 lands mid-transition.
    c.tick(1100);
    assert_eq!(c.current_index(), 2);

    c.complete_transition(1200);
    c.tick(2100);
    assert_eq!(c.current_index(), 3);
}

#[test]
fn autoplay_phase_survives_suppressed_ticks() {
    use crate::autoplay::AutoplayScheduler;

    let mut s = AutoplayScheduler::new(100);
    assert!(!s.poll(0)); // arms at 100
    assert!(s.poll(100));
    // Far behind: fires once, then re-phases to the next boundary.
    assert!(s.poll(450));
    assert!(!s.poll(460));
    assert!(s.poll(500));
}

#[test]
fn autoplay_disabled_interval_never_fires() {
    let mut s = crate::autoplay::AutoplayScheduler::new(0);
    assert!(!s.is_configured());
    assert!(!s.poll(0));
    assert!(!s.poll(10_000));
}

#[test]
fn breakpoint_resolution_picks_highest_threshold_leq_width() {
    let table = BreakpointTable::new(alloc::vec![
        Breakpoint {
            min_width: 0,
            overrides: BreakpointOverride {
                visible_count: Some(1),
                ..Default::default()
            },
        },
        Breakpoint {
            min_width: 561,
            overrides: BreakpointOverride {
                visible_count: Some(2),
                ..Default::default()
            },
        },
        Breakpoint {
            min_width: 769,
            overrides: BreakpointOverride {
                visible_count: Some(3),
                ..Default::default()
            },
        },
        Breakpoint {
            min_width: 1025,
            overrides: BreakpointOverride {
                visible_count: Some(4),
                ..Default::default()
            },
        },
    ]);

    assert_eq!(table.resolve(800.0).unwrap().visible_count, Some(3));
    assert_eq!(table.resolve(560.0).unwrap().visible_count, Some(1));
    assert_eq!(table.resolve(1025.0).unwrap().visible_count, Some(4));
    assert_eq!(table.resolve(0.0).unwrap().visible_count, Some(1));
}

fn responsive_options() -> CarouselOptions {
    CarouselOptions::new(8)
        .with_initial_container_size(400.0)
        .with_initial_viewport_width(1200.0)
        .with_breakpoints(Some(BreakpointTable::new(alloc::vec![
            Breakpoint {
                min_width: 0,
                overrides: BreakpointOverride {
                    visible_count: Some(1),
                    ..Default::default()
                },
            },
            Breakpoint {
                min_width: 769,
                overrides: BreakpointOverride {
                    visible_count: Some(2),
                    gap: Some(10.0),
                    ..Default::default()
                },
            },
            Breakpoint {
                min_width: 1025,
                overrides: BreakpointOverride {
                    visible_count: Some(4),
                    ..Default::default()
                },
            },
        ])))
}

#[test]
fn construction_applies_the_initial_breakpoint() {
    let c = Carousel::new(responsive_options());
    assert_eq!(c.options().visible_count, 4);
    // Only the active tier applies; the 769 tier's gap is not in effect.
    assert_eq!(c.options().gap, 0.0);
    assert_eq!(c.clone_plan().shift(), 4);
}

#[test]
fn resize_reconfigures_after_debounce() {
    let mut c = Carousel::new(responsive_options());
    apply_render(&mut c);
    assert_eq!(c.options().visible_count, 4);

    c.on_resize_event(800.0, 0);
    c.tick(100);
    assert_eq!(c.options().visible_count, 4, "still inside the quiet window");
    c.tick(250);
    assert_eq!(c.options().visible_count, 2);
    assert_eq!(c.options().gap, 10.0);
    assert_eq!(c.clone_plan().shift(), 2);

    let update = c.take_render_update().unwrap();
    assert!(update.instant, "refresh re-renders without animating");

    // Back up to the widest tier: keys missing from it retain the values
    // the 769 tier set.
    c.on_resize_event(1200.0, 300);
    c.tick(551);
    assert_eq!(c.options().visible_count, 4);
    assert_eq!(c.options().gap, 10.0, "overrides are cumulative");
}

#[test]
fn resize_below_hysteresis_is_ignored() {
    let mut c = Carousel::new(responsive_options());
    apply_render(&mut c);

    c.on_resize_event(1180.0, 0);
    c.tick(300);
    assert_eq!(c.options().visible_count, 4, "20-unit change is noise");
}

#[test]
fn resize_burst_restarts_the_quiet_window() {
    let mut c = Carousel::new(responsive_options());
    apply_render(&mut c);

    c.on_resize_event(800.0, 0);
    c.on_resize_event(790.0, 200);
    c.tick(260);
    assert_eq!(c.options().visible_count, 4, "burst supersedes the pending width");
    c.tick(450);
    assert_eq!(c.options().visible_count, 2);
}

#[test]
fn refresh_abandons_inflight_transition() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.next(0);
    assert!(c.is_transitioning());

    c.refresh(100);
    assert!(!c.is_transitioning());
    assert_eq!(c.current_index(), 1);
    let update = c.take_render_update().unwrap();
    assert!(update.instant);
}

#[test]
fn inert_instance_ignores_everything() {
    let mut c = Carousel::new(CarouselOptions::new(0));
    assert!(!c.enabled());
    assert!(c.take_render_update().is_none());

    c.next(0);
    c.prev(0);
    c.go_to_slide(3, 0);
    c.go_to_page(1, 0);
    c.begin_drag(100.0, 0);
    c.tick(10_000);
    c.refresh(0);

    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), NavPhase::Idle);
    assert_eq!(c.total_pages(), 0);
    assert!(c.take_render_update().is_none());
}

#[test]
fn single_slide_forces_loop_off() {
    let mut c = Carousel::new(
        CarouselOptions::new(1)
            .with_initial_container_size(100.0)
            .with_loop_enabled(true),
    );
    assert!(!c.clone_plan().loop_active());
    assert_eq!(c.total_pages(), 1);
    apply_render(&mut c);
    c.next(0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn snapshot_restores_navigational_state() {
    let mut c = looping_carousel();
    apply_render(&mut c);
    c.go_to_slide(2, 0);
    apply_render(&mut c);
    c.complete_transition(0);

    let snapshot = c.snapshot();
    assert_eq!(snapshot.current_index, 2);

    let mut fresh = looping_carousel();
    apply_render(&mut fresh);
    fresh.restore_snapshot(snapshot, 50);
    assert_eq!(fresh.current_index(), 2);
    let update = fresh.take_render_update().unwrap();
    assert!(update.instant);
    assert_eq!(update.offset, 300.0);
}

#[test]
fn on_change_fires_once_per_navigation() {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let mut c = Carousel::new(
        CarouselOptions::new(4)
            .with_initial_container_size(100.0)
            .with_on_change(Some(move |_: &Carousel, _| {
                seen.fetch_add(1, Ordering::SeqCst);
            })),
    );
    apply_render(&mut c); // set_live_offset notifies once

    let before = hits.load(Ordering::SeqCst);
    c.go_to_slide(2, 0);
    assert_eq!(
        hits.load(Ordering::SeqCst) - before,
        1,
        "phase + index + render collapse into one notification"
    );
}

#[test]
fn random_navigation_keeps_invariants() {
    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let count = rng.gen_range_usize(1, 10);
        let visible = rng.gen_range_usize(1, 4);
        let looping = rng.gen_bool();
        let mut c = Carousel::new(
            CarouselOptions::new(count)
                .with_visible_count(visible)
                .with_loop_enabled(looping)
                .with_initial_container_size(300.0),
        );
        apply_render(&mut c);

        let mut now = 0u64;
        for _ in 0..40 {
            now += 100;
            match rng.gen_range_usize(0, 5) {
                0 => c.next(now),
                1 => c.prev(now),
                2 => c.go_to_page(rng.gen_range_usize(0, c.total_pages().max(1)), now),
                3 => {
                    apply_render(&mut c);
                    c.complete_transition(now);
                }
                _ => {
                    c.tick(now);
                }
            }
            apply_render(&mut c);

            let loop_active = c.clone_plan().loop_active();
            if !c.is_transitioning() {
                if loop_active {
                    assert!(
                        (0..count as i64).contains(&c.current_index()),
                        "settled looping index in range"
                    );
                } else {
                    let max = count.saturating_sub(visible) as i64;
                    assert!((0..=max).contains(&c.current_index()));
                }
            }
            assert!(c.active_page() < c.total_pages().max(1));
            assert_eq!(
                c.active_index(),
                expected_wrap(c.current_index(), count)
            );

            let mut active = 0;
            c.for_each_bullet(|_, is_active| active += usize::from(is_active));
            assert_eq!(active, 1);
        }
    }
}

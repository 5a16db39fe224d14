// Example: autoplay advancing a looping gallery, host running at 60fps.
use carousel::CarouselOptions;
use carousel_adapter::Controller;

fn main() {
    let mut ctl = Controller::new(
        CarouselOptions::new(4)
            .with_initial_container_size(320.0)
            .with_autoplay_interval_ms(2_000),
    );

    let mut frame = 0u64;
    for now in (0..12_000u64).step_by(16) {
        if let Some(update) = ctl.tick(now) {
            frame += 1;
            if frame % 8 == 0 || update.instant {
                println!(
                    "t={now}ms slide={} page={} offset={:.0}{}",
                    ctl.carousel().active_index(),
                    ctl.carousel().active_page(),
                    update.offset,
                    if update.instant { " (instant)" } else { "" },
                );
            }
        }
    }
}

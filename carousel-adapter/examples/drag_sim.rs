// Example: a simulated pointer fling driven through the adapter controller.
use carousel::CarouselOptions;
use carousel_adapter::Controller;

fn main() {
    let mut ctl = Controller::new(CarouselOptions::new(6).with_initial_container_size(480.0));
    let mut now = 0u64;
    ctl.tick(now);

    ctl.on_pointer_down(400.0, now);
    for _ in 0..6 {
        now += 16;
        ctl.on_pointer_move(400.0 - now as f64 * 0.8, now);
        if let Some(update) = ctl.tick(now) {
            println!("t={now}ms drag offset={:.1}", update.offset);
        }
    }
    ctl.on_pointer_up(now);

    loop {
        now += 16;
        match ctl.tick(now) {
            Some(update) => println!(
                "t={now}ms offset={:.1} instant={}",
                update.offset, update.instant
            ),
            None => break,
        }
    }
    println!("settled on slide {}", ctl.carousel().active_index());
}

use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_initial_container_size(640.0)
            .with_gap(16.0),
    );

    println!("pages={} active={}", c.total_pages(), c.active_page());
    if let Some(update) = c.take_render_update() {
        println!("initial offset={} instant={}", update.offset, update.instant);
        c.set_live_offset(update.offset);
    }

    c.next(0);
    let update = c.take_render_update().expect("next() renders");
    println!(
        "after next: index={} offset={}",
        c.current_index(),
        update.offset
    );
    c.set_live_offset(update.offset);
    c.complete_transition(400);
    println!("settled: index={} page={}", c.current_index(), c.active_page());

    c.clone_plan().for_each_rendered(|s| {
        println!(
            "slot {} -> slide {}{}",
            s.slot,
            s.source_index,
            if s.is_clone { " (clone)" } else { "" }
        );
    });
}

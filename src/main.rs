/*
 * Portfolio Particle Field
 *
 * Runs the portfolio page effects in a nannou window: the drifting particle
 * background with its proximity lines, the typewriter hero line, counters,
 * scroll reveal and the navbar. The mouse wheel scrolls the page.
 *
 * An optional JSON page configuration can be passed as the first argument.
 */

use particle_field::{app, logging};

fn main() {
    // Keep the logger alive for as long as the app runs
    let _logger = match logging::setup() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {e}");
            None
        }
    };

    nannou::app(app::model).update(app::update).run();
}

/*
 * Dots
 *
 * A screensaver-style visual: dots drift around the window, bounce off
 * its edges, and get joined by thin lines when they come close to each
 * other or to the mouse cursor. Press Escape to quit.
 */

use dots::app::{model, update};

fn main() {
    env_logger::init();

    nannou::app(model).update(update).run();
}

/*
 * Application Module
 *
 * This module wires the simulation and renderer into nannou's
 * model/update/view loop.
 *
 * - Ticks run on a fixed timestep, decoupled from the frame rate
 * - Each frame draws the latest state only
 * - Escape ends the program
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::{Camera, NannouCanvas};
use crate::canvas::InputSource;
use crate::debug::{DebugInfo, TickClock};
use crate::input::{mouse_moved, AppInput};
use crate::params::SimulationParams;
use crate::renderer::Renderer;
use crate::simulation::{Simulation, TickOutcome};

pub const WINDOW_TITLE: &str = "Dots";

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub renderer: Renderer,
    pub params: SimulationParams,
    pub debug_info: DebugInfo,
    pub tick_clock: TickClock,
    pub camera: Camera,
    pub cursor_seen: bool,
}

impl Model {
    pub fn new(params: SimulationParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let simulation = Simulation::new(&params, &mut rng);

        Self {
            simulation,
            renderer: Renderer::new(&params),
            debug_info: DebugInfo::default(),
            tick_clock: TickClock::new(params.ticks_per_second),
            camera: Camera::new(params.width, params.height),
            cursor_seen: false,
            params,
        }
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    let built = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .build();

    if let Err(err) = built {
        log::error!("failed to create window: {:?}", err);
        std::process::exit(1);
    }

    log::info!(
        "starting {} particles in a {}x{} window ({} preset)",
        params.num_particles,
        params.width,
        params.height,
        params.name()
    );

    Model::new(params, rand::random())
}

// Run the ticks due since the last frame
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();

    let input = AppInput::new(app, model);
    let due = model.tick_clock.advance(update.since_last);

    let mut ran = 0;
    for _ in 0..due {
        if model.simulation.tick(&input) == TickOutcome::Exit {
            log::info!("exit requested");
            app.quit();
            return;
        }
        ran += 1;
    }

    if let Some(tps) = model.tick_clock.record(update.since_last, ran) {
        model.debug_info.tps = tps;
        log::debug!("fps {:.1}, tps {:.1}", model.debug_info.fps, tps);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let cursor = AppInput::new(app, model).cursor_position();
    let mut canvas = NannouCanvas::new(&draw, model.camera);
    model.renderer.draw(
        &model.simulation.particles,
        cursor,
        &model.debug_info,
        &mut canvas,
    );

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Recorder, StaticInput};
    use std::time::Duration;

    #[test]
    fn model_is_seeded_from_params() {
        let model = Model::new(SimulationParams::exhaustive(), 9);
        assert_eq!(model.simulation.len(), 200);
        assert_eq!(model.renderer.pair_strategy, model.params.pair_strategy);
        assert_eq!(model.camera, Camera::new(1600.0, 900.0));
        assert!(!model.cursor_seen);

        let again = Model::new(SimulationParams::exhaustive(), 9);
        assert_eq!(model.simulation.particles, again.simulation.particles);
    }

    #[test]
    fn frames_without_due_ticks_still_render_latest_state() {
        let mut model = Model::new(SimulationParams::default(), 3);
        let before = model.simulation.particles.clone();

        // A frame too short for a tick
        assert_eq!(model.tick_clock.advance(Duration::from_millis(1)), 0);

        let mut recorder = Recorder::new();
        model.renderer.draw(
            &model.simulation.particles,
            StaticInput::default().cursor,
            &model.debug_info,
            &mut recorder,
        );
        assert_eq!(recorder.circles().count(), before.len());

        // A long frame runs several ticks before the next draw
        let due = model.tick_clock.advance(Duration::from_millis(50));
        for _ in 0..due {
            model.simulation.tick(&StaticInput::default());
        }
        assert_eq!(due, 3);
        assert_ne!(model.simulation.particles, before);
    }
}

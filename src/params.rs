/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunable values of the visual. They are fixed at compile time; the two
 * presets reproduce the two flavours of the effect.
 */

use nannou::prelude::*;

use crate::connection::{PairStrategy, StrokePolicy};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub num_particles: usize,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub connect_distance: f32,
    // Extra reach for lines to the cursor
    pub cursor_margin: f32,
    pub dot_radius: f32,
    pub ticks_per_second: u32,
    pub pair_strategy: PairStrategy,
    pub stroke_policy: StrokePolicy,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::windowed()
    }
}

impl SimulationParams {
    // Slow dots, origin-sorted window of 50, lines thin out towards the middle distance
    pub fn windowed() -> Self {
        Self {
            num_particles: 200,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            speed: 0.2,
            connect_distance: 100.0,
            cursor_margin: 30.0,
            dot_radius: 1.5,
            ticks_per_second: 60,
            pair_strategy: PairStrategy::Windowed { window: 50 },
            stroke_policy: StrokePolicy::Falloff,
        }
    }

    // Faster dots, every pair tested, lines thicken as pairs close in
    pub fn exhaustive() -> Self {
        let connect_distance = 80.0;
        Self {
            speed: 0.3,
            connect_distance,
            pair_strategy: PairStrategy::Exhaustive,
            stroke_policy: StrokePolicy::Proximity {
                threshold: connect_distance,
            },
            ..Self::windowed()
        }
    }

    pub fn bounds(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn cursor_distance(&self) -> f32 {
        self.connect_distance + self.cursor_margin
    }

    pub fn name(&self) -> &'static str {
        match self.pair_strategy {
            PairStrategy::Exhaustive => "exhaustive",
            PairStrategy::Windowed { .. } => "windowed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_windowed_preset() {
        let params = SimulationParams::default();
        assert_eq!(params, SimulationParams::windowed());
        assert_eq!(params.bounds(), vec2(1600.0, 900.0));
        assert_eq!(params.cursor_distance(), 130.0);
        assert_eq!(params.name(), "windowed");
    }

    #[test]
    fn exhaustive_preset_uses_its_own_threshold() {
        let params = SimulationParams::exhaustive();
        assert_eq!(params.speed, 0.3);
        assert_eq!(params.cursor_distance(), 110.0);
        assert_eq!(params.stroke_policy, StrokePolicy::Proximity { threshold: 80.0 });
        assert_eq!(params.num_particles, 200);
    }
}

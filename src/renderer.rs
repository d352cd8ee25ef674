/*
 * Renderer Module
 *
 * This module draws the particles, the lines between nearby particles,
 * the lines from particles to the cursor, and the rate overlay.
 *
 * It only reads the latest simulation state, so it does not care how
 * many ticks ran since the previous frame. Sorting for the windowed
 * strategy happens on a scratch copy of the positions.
 */

use nannou::prelude::*;

use crate::canvas::Canvas;
use crate::connection::{link, PairStrategy, StrokePolicy};
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::particle::Particle;

// Where the FPS/TPS readout goes, in screen space
pub const OVERLAY_POSITION: (f32, f32) = (10.0, 10.0);

#[derive(Clone, Debug)]
pub struct Renderer {
    pub dot_radius: f32,
    pub connect_distance: f32,
    pub cursor_distance: f32,
    pub pair_strategy: PairStrategy,
    pub stroke_policy: StrokePolicy,
}

impl Renderer {
    pub fn new(params: &SimulationParams) -> Self {
        Self {
            dot_radius: params.dot_radius,
            connect_distance: params.connect_distance,
            cursor_distance: params.cursor_distance(),
            pair_strategy: params.pair_strategy,
            stroke_policy: params.stroke_policy.with_threshold(params.connect_distance),
        }
    }

    // Draw one frame
    pub fn draw(
        &self,
        particles: &[Particle],
        cursor: Option<Vec2>,
        debug_info: &DebugInfo,
        canvas: &mut impl Canvas,
    ) {
        for particle in particles {
            canvas.circle(particle.position, self.dot_radius);
        }

        self.draw_connections(particles, canvas);
        if let Some(cursor) = cursor {
            self.draw_cursor_links(particles, cursor, canvas);
        }

        let (x, y) = OVERLAY_POSITION;
        canvas.text(&debug_info.overlay_text(), vec2(x, y));
    }

    pub fn draw_connections(&self, particles: &[Particle], canvas: &mut impl Canvas) {
        let mut positions: Vec<Vec2> = particles.iter().map(|p| p.position).collect();

        let segments =
            self.pair_strategy
                .segments(&mut positions, self.connect_distance, &self.stroke_policy);

        for segment in segments {
            canvas.line(segment.from, segment.to, segment.weight);
        }
    }

    // Every particle is checked against the cursor, whatever the pair strategy
    pub fn draw_cursor_links(&self, particles: &[Particle], cursor: Vec2, canvas: &mut impl Canvas) {
        for particle in particles {
            if let Some(segment) = link(
                particle.position,
                cursor,
                self.cursor_distance,
                &self.stroke_policy,
            ) {
                canvas.line(segment.from, segment.to, segment.weight);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Recorder;

    fn exhaustive() -> Renderer {
        Renderer::new(&SimulationParams::exhaustive())
    }

    fn particle(x: f32, y: f32) -> Particle {
        Particle::new(vec2(x, y), vec2(1.0, 0.0))
    }

    #[test]
    fn draws_a_dot_per_particle_and_the_overlay() {
        let particles = vec![particle(10.0, 10.0), particle(500.0, 500.0)];
        let mut recorder = Recorder::new();
        let info = DebugInfo {
            fps: 59.7,
            tps: 60.0,
            ..DebugInfo::default()
        };

        exhaustive().draw(&particles, None, &info, &mut recorder);

        let circles: Vec<_> = recorder.circles().collect();
        assert_eq!(circles, vec![(vec2(10.0, 10.0), 1.5), (vec2(500.0, 500.0), 1.5)]);
        assert_eq!(recorder.lines().count(), 0);
        assert_eq!(recorder.texts().collect::<Vec<_>>(), vec!["FPS: 59, TPS: 60"]);
    }

    #[test]
    fn connects_close_pairs_only() {
        let far_cursor = Some(vec2(-1000.0, -1000.0));
        let info = DebugInfo::default();

        let mut near = Recorder::new();
        exhaustive().draw(&[particle(0.0, 0.0), particle(50.0, 0.0)], far_cursor, &info, &mut near);
        assert!(near.has_line_between(vec2(0.0, 0.0), vec2(50.0, 0.0)));

        let mut far = Recorder::new();
        exhaustive().draw(&[particle(0.0, 0.0), particle(200.0, 0.0)], far_cursor, &info, &mut far);
        assert_eq!(far.lines().count(), 0);
    }

    #[test]
    fn unseen_cursor_draws_no_cursor_lines() {
        let particles = vec![particle(800.0, 450.0), particle(810.0, 450.0)];
        let info = DebugInfo::default();

        let mut recorder = Recorder::new();
        exhaustive().draw(&particles, None, &info, &mut recorder);
        assert_eq!(recorder.lines().count(), 1);
        assert!(recorder.has_line_between(vec2(800.0, 450.0), vec2(810.0, 450.0)));

        recorder.clear();
        exhaustive().draw(&particles, Some(vec2(800.0, 450.0)), &info, &mut recorder);
        assert_eq!(recorder.lines().count(), 3);
    }

    #[test]
    fn proximity_threshold_follows_connect_distance() {
        let params = SimulationParams {
            connect_distance: 120.0,
            ..SimulationParams::exhaustive()
        };
        let renderer = Renderer::new(&params);
        assert_eq!(renderer.stroke_policy, StrokePolicy::Proximity { threshold: 120.0 });

        // 120/60 * 0.2
        let mut recorder = Recorder::new();
        renderer.draw_connections(&[particle(0.0, 0.0), particle(60.0, 0.0)], &mut recorder);
        let weights: Vec<f32> = recorder.lines().map(|(_, _, w)| w).collect();
        assert_eq!(weights.len(), 1);
        assert!((weights[0] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn cursor_reach_extends_past_pair_threshold() {
        let renderer = exhaustive();
        let mut recorder = Recorder::new();

        // 100px is beyond the 80px pair threshold but inside the 110px cursor reach
        renderer.draw_cursor_links(&[particle(100.0, 0.0)], Vec2::ZERO, &mut recorder);
        assert!(recorder.has_line_between(vec2(100.0, 0.0), Vec2::ZERO));

        recorder.clear();
        renderer.draw_cursor_links(&[particle(120.0, 0.0)], Vec2::ZERO, &mut recorder);
        assert_eq!(recorder.lines().count(), 0);
    }

    #[test]
    fn cursor_on_particle_uses_clamped_width() {
        let mut recorder = Recorder::new();
        exhaustive().draw_cursor_links(&[particle(40.0, 40.0)], vec2(40.0, 40.0), &mut recorder);
        let weights: Vec<f32> = recorder.lines().map(|(_, _, w)| w).collect();
        assert_eq!(weights, vec![1.0]);

        recorder.clear();
        let windowed = Renderer::new(&SimulationParams::windowed());
        windowed.draw_cursor_links(&[particle(40.0, 40.0)], vec2(40.0, 40.0), &mut recorder);
        let weights: Vec<f32> = recorder.lines().map(|(_, _, w)| w).collect();
        assert_eq!(weights, vec![0.5]);
    }

    #[test]
    fn windowed_draw_leaves_particle_order_alone() {
        let particles = vec![particle(300.0, 300.0), particle(10.0, 10.0), particle(20.0, 10.0)];
        let before = particles.clone();
        let mut recorder = Recorder::new();

        Renderer::new(&SimulationParams::windowed()).draw(
            &particles,
            None,
            &DebugInfo::default(),
            &mut recorder,
        );

        assert_eq!(particles, before);
        assert!(recorder.has_line_between(vec2(10.0, 10.0), vec2(20.0, 10.0)));
        assert_eq!(recorder.lines().count(), 1);
    }
}

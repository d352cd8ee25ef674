/*
 * Simulation Module
 *
 * This module owns the particle collection and advances it one tick
 * at a time. The order of the particles carries no meaning.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::canvas::InputSource;
use crate::params::SimulationParams;
use crate::particle::Particle;

// Key that ends the program
pub const EXIT_KEY: Key = Key::Escape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    pub particles: Vec<Particle>,
    pub speed: f32,
    pub bounds: Vec2,
}

impl Simulation {
    pub fn new<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> Self {
        let bounds = params.bounds();
        let particles = (0..params.num_particles)
            .map(|_| Particle::random(rng, bounds))
            .collect();

        Self::from_particles(particles, params)
    }

    pub fn from_particles(particles: Vec<Particle>, params: &SimulationParams) -> Self {
        Self {
            particles,
            speed: params.speed,
            bounds: params.bounds(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Advance every particle once, unless the user asked to leave
    pub fn tick(&mut self, input: &impl InputSource) -> TickOutcome {
        if input.is_key_pressed(EXIT_KEY) {
            return TickOutcome::Exit;
        }

        self.step();
        TickOutcome::Continue
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.speed, self.bounds);
        }
    }
}

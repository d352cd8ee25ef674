/*
 * Particle Module
 *
 * This module defines the Particle struct and its motion model.
 * Each particle moves in a straight line at a constant speed and
 * bounces off the screen edges by negating the heading on the
 * axis that left the screen.
 */

use nannou::prelude::*;
use rand::Rng;

// Heading used when a zero-length vector has to be normalized
pub const DEFAULT_DIRECTION: Vec2 = Vec2::X;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub direction: Vec2,
}

impl Particle {
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction: normalize_or_default(direction),
        }
    }

    // Spawn a particle on a random whole pixel inside the screen, heading anywhere
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let x = rng.gen_range(0..bounds.x.max(1.0) as u32) as f32;
        let y = rng.gen_range(0..bounds.y.max(1.0) as u32) as f32;

        Self {
            position: vec2(x, y),
            direction: random_direction(rng),
        }
    }

    // Advance one tick and flip the heading on any axis that left [0, bounds]
    pub fn step(&mut self, speed: f32, bounds: Vec2) {
        let velocity = self.direction * speed;
        self.position += velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.direction.x = -self.direction.x;
        }

        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.direction.y = -self.direction.y;
        }
    }
}

// Sample the [-1, 1] square and normalize. The angle distribution is biased
// towards the diagonals since the square is not the unit disk.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let dx = rng.gen_range(-1.0..=1.0);
    let dy = rng.gen_range(-1.0..=1.0);
    normalize_or_default(vec2(dx, dy))
}

pub fn normalize_or_default(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > f32::EPSILON && len.is_finite() {
        v / len
    } else {
        DEFAULT_DIRECTION
    }
}

/*
 * Debug Information Module
 *
 * This module tracks the frame and tick rates shown in the overlay and
 * paces the fixed-timestep simulation.
 *
 * Includes:
 * - FPS (frames per second, as reported by the host)
 * - TPS (ticks actually run per second)
 */

use std::time::Duration;

// Upper bound on ticks run for a single frame, to avoid a spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub tps: f32,
}

impl DebugInfo {
    pub fn overlay_text(&self) -> String {
        format!("FPS: {}, TPS: {}", self.fps as i32, self.tps as i32)
    }
}

// Turns elapsed frame time into a whole number of fixed ticks
#[derive(Clone, Debug)]
pub struct TickClock {
    step: Duration,
    accumulator: Duration,
    window: Duration,
    ticks_in_window: u32,
    tps: f32,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let step = Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1)));
        Self {
            step,
            accumulator: Duration::ZERO,
            window: Duration::ZERO,
            ticks_in_window: 0,
            tps: 0.0,
        }
    }

    // Account for `elapsed` time and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.step;
            due += 1;
        }

        // Drop whatever could not be caught up on
        if due == MAX_TICKS_PER_FRAME && self.accumulator >= self.step {
            log::debug!("tick clock fell behind by {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        due
    }

    // Record ticks that actually ran; returns a fresh TPS sample once a second
    pub fn record(&mut self, elapsed: Duration, ticks: u32) -> Option<f32> {
        self.window += elapsed;
        self.ticks_in_window += ticks;

        if self.window >= Duration::from_secs(1) {
            self.tps = self.ticks_in_window as f32 / self.window.as_secs_f32();
            self.window = Duration::ZERO;
            self.ticks_in_window = 0;
            Some(self.tps)
        } else {
            None
        }
    }
}

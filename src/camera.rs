/*
 * Camera Module
 *
 * This module converts between screen space (origin top-left, y down),
 * which the simulation uses, and nannou's window space (origin at the
 * centre, y up). It also provides the nannou implementation of Canvas.
 */

use nannou::prelude::*;

use crate::canvas::Canvas;

// Width of the box the overlay text is laid out in
const TEXT_BOX_WIDTH: f32 = 300.0;
const FONT_SIZE: u32 = 14;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub size: Vec2,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: vec2(width, height),
        }
    }

    // Screen space to nannou window space
    pub fn screen_to_window(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.size.x / 2.0, self.size.y / 2.0 - point.y)
    }

    // Nannou window space to screen space
    pub fn window_to_screen(&self, point: Vec2) -> Vec2 {
        vec2(point.x + self.size.x / 2.0, self.size.y / 2.0 - point.y)
    }
}

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    camera: Camera,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, camera: Camera) -> Self {
        Self { draw, camera }
    }
}

impl Canvas for NannouCanvas<'_> {
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.draw
            .ellipse()
            .xy(self.camera.screen_to_window(center))
            .radius(radius)
            .color(WHITE);
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32) {
        self.draw
            .line()
            .start(self.camera.screen_to_window(from))
            .end(self.camera.screen_to_window(to))
            .weight(weight)
            .color(WHITE);
    }

    fn text(&mut self, text: &str, at: Vec2) {
        // Nannou places text by its centre, so shift the box to start at `at`
        let top_left = self.camera.screen_to_window(at);
        let line_height = FONT_SIZE as f32 + 4.0;

        self.draw
            .text(text)
            .x_y(top_left.x + TEXT_BOX_WIDTH / 2.0, top_left.y - line_height / 2.0)
            .w_h(TEXT_BOX_WIDTH, line_height)
            .left_justify()
            .color(WHITE)
            .font_size(FONT_SIZE);
    }
}

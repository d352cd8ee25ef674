/*
 * Input Module
 *
 * This module exposes nannou's polled keyboard and mouse state to the
 * simulation through InputSource, converting the cursor into screen space.
 *
 * Nannou reports the mouse at the window centre before it ever enters the
 * window, so the cursor only counts once a mouse move has been seen.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;
use crate::canvas::InputSource;

pub struct AppInput<'a> {
    app: &'a App,
    camera: Camera,
    cursor_seen: bool,
}

impl<'a> AppInput<'a> {
    pub fn new(app: &'a App, model: &Model) -> Self {
        Self {
            app,
            camera: model.camera,
            cursor_seen: model.cursor_seen,
        }
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, _pos: Point2) {
    if !model.cursor_seen {
        log::debug!("cursor entered the window");
    }
    model.cursor_seen = true;
}

impl InputSource for AppInput<'_> {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.app.keys.down.contains(&key)
    }

    fn cursor_position(&self) -> Option<Vec2> {
        if !self.cursor_seen {
            return None;
        }

        let mouse = vec2(self.app.mouse.x, self.app.mouse.y);
        Some(self.camera.window_to_screen(mouse))
    }
}

/*
 * Canvas Module
 *
 * This module defines the seam between the simulation and the host
 * framework. The core only talks to these traits, which lets it run
 * headless in tests and benchmarks.
 *
 * All coordinates are in screen space: origin at the top-left corner,
 * x growing right, y growing down.
 */

use nannou::prelude::*;

// Polled input the simulation reads each tick and frame
pub trait InputSource {
    fn is_key_pressed(&self, key: Key) -> bool;
    // None until the pointer has been seen over the window
    fn cursor_position(&self) -> Option<Vec2>;
}

// Drawing primitives the renderer writes to
pub trait Canvas {
    fn circle(&mut self, center: Vec2, radius: f32);
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32);
    fn text(&mut self, text: &str, at: Vec2);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2, weight: f32 },
    Text { text: String, at: Vec2 },
}

// A canvas that remembers what was drawn
#[derive(Default, Debug)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, weight } => Some((*from, *to, *weight)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    // True if a line joins a and b in either direction
    pub fn has_line_between(&self, a: Vec2, b: Vec2) -> bool {
        self.lines()
            .any(|(from, to, _)| (from == a && to == b) || (from == b && to == a))
    }
}

impl Canvas for Recorder {
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32) {
        self.commands.push(DrawCommand::Line { from, to, weight });
    }

    fn text(&mut self, text: &str, at: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
        });
    }
}

// Fixed input: a cursor that never moves and a set of held keys
#[derive(Clone, Debug, Default)]
pub struct StaticInput {
    pub cursor: Option<Vec2>,
    pub keys_down: Vec<Key>,
}

impl StaticInput {
    pub fn at(cursor: Vec2) -> Self {
        Self {
            cursor: Some(cursor),
            keys_down: Vec::new(),
        }
    }

    pub fn press(mut self, key: Key) -> Self {
        self.keys_down.push(key);
        self
    }
}

impl InputSource for StaticInput {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }
}

/*
 * Dots - Module Definitions
 *
 * This file defines the module structure for the dots and lines visual.
 * The simulation and renderer only depend on the traits in `canvas`;
 * `app`, `camera` and `input` plug them into nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use canvas::{Canvas, DrawCommand, InputSource, Recorder, StaticInput};
pub use connection::{PairStrategy, StrokePolicy};
pub use debug::{DebugInfo, TickClock};
pub use params::SimulationParams;
pub use particle::Particle;
pub use renderer::Renderer;
pub use simulation::{Simulation, TickOutcome};

// Define modules
pub mod app;
pub mod camera;
pub mod canvas;
pub mod connection;
pub mod debug;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod simulation;

// Constants
pub const SCREEN_WIDTH: f32 = 1600.0;
pub const SCREEN_HEIGHT: f32 = 900.0;

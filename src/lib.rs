/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure of the portfolio effects crate:
 * the particle field and its render loop, the page effects (typewriter,
 * counters, navbar, scroll reveal, glow orb) and the nannou front end.
 */

// Re-export key components for easier access
pub use error::{Error, Result};
pub use field::ParticleField;
pub use page::Page;
pub use params::{FieldParams, PageConfig};
pub use point::Point;
pub use render_loop::RenderLoop;
pub use surface::{DrawCommand, NannouSurface, RecordingSurface, Surface};

// Define modules
pub mod app;
pub mod counter;
pub mod debug;
pub mod error;
pub mod field;
pub mod glow_orb;
pub mod input;
pub mod logging;
pub mod navbar;
pub mod page;
pub mod params;
pub mod point;
pub mod render_loop;
pub mod renderer;
pub mod reveal;
pub mod surface;
pub mod typewriter;
pub mod ui;

// Constants
pub const WINDOW_TITLE: &str = "Portfolio Particle Field";
/// Vertical distance scrolled per mouse wheel line.
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;

//! Presenting generations.
//!
//! The simulation only knows the `Renderer` trait; which implementation it
//! talks to is decided once at start-up.

mod interactive;
mod plain;
mod terminal;

pub use interactive::{InteractiveRenderer, TerminalGlyphs};
pub use plain::PlainRenderer;
pub use terminal::{TerminalGuard, check_fits};

use crate::application::FrameDelay;
use crate::domain::Grid;

/// What the renderer wants the loop to do after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// Draws one generation per call. A renderer may lengthen or shorten the
/// pause before the next generation, or ask the loop to stop.
/// Output failures are handled (and logged) inside the renderer.
pub trait Renderer {
    fn draw(&mut self, grid: &Grid, delay: &mut FrameDelay) -> Signal;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, grid: &Grid, delay: &mut FrameDelay) -> Signal {
        (**self).draw(grid, delay)
    }
}

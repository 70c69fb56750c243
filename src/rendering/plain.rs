use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::error;

use super::{Renderer, Signal};
use crate::application::FrameDelay;
use crate::domain::Grid;

/// Clears the console and prints the whole grid as text, once per generation
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl PlainRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(self.out, "{grid}")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn draw(&mut self, grid: &Grid, _delay: &mut FrameDelay) -> Signal {
        match self.write_frame(grid) {
            Ok(()) => Signal::Continue,
            Err(err) => {
                error!("cannot write frame to console: {err}");
                Signal::Quit
            }
        }
    }
}

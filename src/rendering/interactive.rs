use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use log::{debug, error, info};
use unicode_width::UnicodeWidthChar;

use super::terminal::{TerminalGuard, check_fits};
use super::{Renderer, Signal};
use crate::application::FrameDelay;
use crate::domain::{Glyphs, Grid};
use crate::error::{Error, Result};
use crate::input::{Command, KeySource, TerminalKeys};

/// Glyphs encoded once for the terminal, with the number of display
/// columns each one occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalGlyphs {
    alive: String,
    dead: String,
    width: usize,
}

impl TerminalGlyphs {
    pub fn new(glyphs: Glyphs) -> Self {
        let width = |c: char| c.width().unwrap_or(1).max(1);
        Self {
            alive: glyphs.alive.to_string(),
            dead: glyphs.dead.to_string(),
            width: width(glyphs.alive).max(width(glyphs.dead)),
        }
    }

    /// Display columns used by one cell
    pub const fn width(&self) -> usize {
        self.width
    }

    fn glyph(&self, alive: bool) -> &str {
        if alive { &self.alive } else { &self.dead }
    }
}

/// Repaints the board in place and reads single key presses between frames:
/// `q` quits, `s` pauses until `s` again (or `q`), `+` and `-` change speed.
pub struct InteractiveRenderer<W: Write, K: KeySource> {
    out: W,
    keys: K,
    glyphs: TerminalGlyphs,
    line: String,
    _guard: Option<TerminalGuard>,
}

impl InteractiveRenderer<Stdout, TerminalKeys> {
    /// Take over the terminal for `grid`. Fails, leaving the terminal as it
    /// was, when the screen is smaller than the grid.
    pub fn open(grid: &Grid) -> Result<Self> {
        let glyphs = TerminalGlyphs::new(grid.glyphs());
        let guard = TerminalGuard::enter().map_err(Error::Terminal)?;
        let screen = guard.size().map_err(Error::Terminal)?;
        check_fits(grid.dimensions(), glyphs.width(), screen)?;
        info!(
            "interactive display {}x{} on {}x{} screen",
            grid.rows(),
            grid.columns(),
            screen.0,
            screen.1
        );

        let mut renderer = Self::new(io::stdout(), TerminalKeys, glyphs);
        renderer._guard = Some(guard);
        Ok(renderer)
    }
}

impl<W: Write, K: KeySource> InteractiveRenderer<W, K> {
    /// Renderer over any output and key source, without touching terminal modes
    pub fn new(out: W, keys: K, glyphs: TerminalGlyphs) -> Self {
        Self {
            out,
            keys,
            glyphs,
            line: String::new(),
            _guard: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn paint(&mut self, grid: &Grid) -> io::Result<()> {
        for (y, row) in grid.row_slices().enumerate() {
            self.line.clear();
            for cell in row {
                self.line.push_str(self.glyphs.glyph(cell.alive_this_round));
            }
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, y), Print(&self.line))?;
        }
        self.out.flush()
    }

    /// Handle at most one key per frame, dropping whatever was typed after it
    fn handle_keys(&mut self, delay: &mut FrameDelay) -> io::Result<Signal> {
        let Some(key) = self.keys.poll()? else {
            return Ok(Signal::Continue);
        };
        let signal = match Command::from_key(key) {
            Some(Command::Quit) => Signal::Quit,
            Some(Command::Stop) => self.wait_until_resumed()?,
            Some(command) => {
                command.adjust(delay);
                debug!("delay now {:?}", delay.duration());
                Signal::Continue
            }
            None => Signal::Continue,
        };
        self.keys.discard_pending()?;
        Ok(signal)
    }

    /// Block until the stop key is pressed again or the user quits
    fn wait_until_resumed(&mut self) -> io::Result<Signal> {
        debug!("paused");
        self.keys.discard_pending()?;
        loop {
            match Command::from_key(self.keys.wait()?) {
                Some(Command::Quit) => return Ok(Signal::Quit),
                Some(Command::Stop) => {
                    debug!("resumed");
                    return Ok(Signal::Continue);
                }
                _ => {}
            }
        }
    }
}

impl<W: Write, K: KeySource> Renderer for InteractiveRenderer<W, K> {
    fn draw(&mut self, grid: &Grid, delay: &mut FrameDelay) -> Signal {
        let result = self
            .paint(grid)
            .and_then(|()| self.handle_keys(delay));
        match result {
            Ok(signal) => signal,
            Err(err) => {
                error!("terminal I/O failed: {err}");
                Signal::Quit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::scripted::ScriptedKeys;
    use std::time::Duration;

    const GLYPHS: Glyphs = Glyphs::new('o', '.');

    fn blinker() -> Grid {
        let mut grid = Grid::new(3, 3, GLYPHS).unwrap();
        for x in 0..3 {
            grid.set(1, x, true);
        }
        grid
    }

    fn renderer(keys: &[Option<char>]) -> InteractiveRenderer<Vec<u8>, ScriptedKeys> {
        InteractiveRenderer::new(
            Vec::new(),
            ScriptedKeys::new(keys.iter().copied()),
            TerminalGlyphs::new(GLYPHS),
        )
    }

    #[test]
    fn test_paint_positions_each_row() {
        let mut renderer = renderer(&[]);
        assert_eq!(
            renderer.draw(&blinker(), &mut FrameDelay::default()),
            Signal::Continue
        );

        let mut expected = Vec::new();
        for (y, row) in ["...", "ooo", "..."].iter().enumerate() {
            queue!(expected, MoveTo(0, y as u16), Print(row)).unwrap();
        }
        assert_eq!(renderer.output(), &expected);
    }

    #[test]
    fn test_quit_key() {
        let mut renderer = renderer(&[None, Some('q')]);
        let grid = blinker();
        let mut delay = FrameDelay::default();
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Continue);
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Quit);
    }

    #[test]
    fn test_speed_keys_adjust_delay() {
        let mut renderer = renderer(&[Some('+'), None, Some('+'), None, Some('-')]);
        let grid = blinker();
        let mut delay = FrameDelay::default();
        renderer.draw(&grid, &mut delay);
        assert_eq!(delay.duration(), Duration::from_millis(250));
        renderer.draw(&grid, &mut delay);
        assert_eq!(delay.duration(), Duration::from_millis(200));
        renderer.draw(&grid, &mut delay);
        assert_eq!(delay.duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut renderer = renderer(&[Some('x'), None, Some('?')]);
        let grid = blinker();
        let mut delay = FrameDelay::default();
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Continue);
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Continue);
        assert_eq!(delay, FrameDelay::default());
    }

    #[test]
    fn test_stop_blocks_until_resumed() {
        // Keys pressed while paused, other than stop and quit, do nothing
        let mut renderer = renderer(&[Some('s'), None, Some('+'), None, Some('s')]);
        let mut delay = FrameDelay::default();
        assert_eq!(renderer.draw(&blinker(), &mut delay), Signal::Continue);
        assert_eq!(delay, FrameDelay::default());
        assert!(renderer.keys.is_empty());
    }

    #[test]
    fn test_quit_while_stopped() {
        let mut renderer = renderer(&[Some('s'), None, Some('q')]);
        assert_eq!(
            renderer.draw(&blinker(), &mut FrameDelay::default()),
            Signal::Quit
        );
    }

    #[test]
    fn test_keys_typed_after_a_command_are_dropped() {
        let mut renderer = renderer(&[Some('+'), Some('q')]);
        let grid = blinker();
        let mut delay = FrameDelay::default();
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Continue);
        assert_eq!(renderer.draw(&grid, &mut delay), Signal::Continue);
        assert_eq!(delay.duration(), Duration::from_millis(250));
        assert!(renderer.keys.is_empty());
    }

    #[test]
    fn test_keys_typed_before_stop_do_not_resume() {
        let mut renderer = renderer(&[Some('s'), Some('s'), Some('+'), None, Some('q')]);
        let mut delay = FrameDelay::default();
        assert_eq!(renderer.draw(&blinker(), &mut delay), Signal::Quit);
        assert_eq!(delay, FrameDelay::default());
    }

    #[test]
    fn test_lost_key_source_quits() {
        // Pausing with nothing left to read fails the wait
        let mut renderer = renderer(&[Some('s')]);
        assert_eq!(
            renderer.draw(&blinker(), &mut FrameDelay::default()),
            Signal::Quit
        );
    }

    #[test]
    fn test_wide_glyph_width() {
        assert_eq!(TerminalGlyphs::new(Glyphs::new('o', ' ')).width(), 1);
        assert_eq!(TerminalGlyphs::new(Glyphs::new('世', ' ')).width(), 2);
    }
}

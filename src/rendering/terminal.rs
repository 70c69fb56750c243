use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, error};

use crate::error::{Error, Result};

/// Holds the terminal in raw mode on the alternate screen.
/// Dropping the guard puts the terminal back the way it was, on every
/// exit path including a failed setup.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        debug!("terminal switched to raw mode");
        Ok(guard)
    }

    /// (rows, columns) of the terminal window
    pub fn size(&self) -> io::Result<(usize, usize)> {
        let (columns, rows) = terminal::size()?;
        Ok((rows as usize, columns as usize))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            error!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {err}");
        }
        debug!("terminal restored");
    }
}

/// Check that a grid of `rows` x `columns` cells, each `cell_width`
/// display columns wide, fits on a screen of `screen` (rows, columns).
pub fn check_fits(
    (rows, columns): (usize, usize),
    cell_width: usize,
    screen: (usize, usize),
) -> Result<()> {
    let (screen_rows, screen_columns) = screen;
    if screen_rows < rows {
        return Err(Error::DisplayTooSmall {
            dimension: "rows",
            needed: rows,
            available: screen_rows,
        });
    }
    let needed = columns.saturating_mul(cell_width);
    if screen_columns < needed {
        return Err(Error::DisplayTooSmall {
            dimension: "columns",
            needed,
            available: screen_columns,
        });
    }
    Ok(())
}

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::application::FrameDelay;

pub const KEY_QUIT: char = 'q';
pub const KEY_STOP: char = 's';
pub const KEY_SPEED_UP: char = '+';
pub const KEY_SPEED_DOWN: char = '-';

/// What a key press asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Pause; the same key resumes
    Stop,
    SpeedUp,
    SpeedDown,
}

impl Command {
    /// Map a key press to a command. Unknown keys map to None.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            KeyCode::Char(KEY_QUIT) => Some(Self::Quit),
            KeyCode::Char(KEY_STOP) => Some(Self::Stop),
            KeyCode::Char(KEY_SPEED_UP) => Some(Self::SpeedUp),
            KeyCode::Char(KEY_SPEED_DOWN) => Some(Self::SpeedDown),
            _ => None,
        }
    }

    /// Apply a pacing command to the delay; other commands leave it alone
    pub fn adjust(self, delay: &mut FrameDelay) {
        match self {
            Self::SpeedUp => delay.speed_up(),
            Self::SpeedDown => delay.slow_down(),
            Self::Quit | Self::Stop => {}
        }
    }
}

/// Where key presses come from
pub trait KeySource {
    /// Next pending key press, without blocking
    fn poll(&mut self) -> io::Result<Option<KeyEvent>>;

    /// Block until a key is pressed
    fn wait(&mut self) -> io::Result<KeyEvent>;

    /// Throw away keys typed ahead of the current frame
    fn discard_pending(&mut self) -> io::Result<()> {
        while self.poll()?.is_some() {}
        Ok(())
    }
}

/// Key presses from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll(&mut self) -> io::Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn wait(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }
}

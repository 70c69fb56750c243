use std::time::Duration;

/// Pause between two generations. Interactive controls nudge it in fixed
/// steps; it never drops below zero or rises above `MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDelay(Duration);

impl FrameDelay {
    pub const DEFAULT: Self = Self(Duration::from_millis(300));
    pub const STEP: Duration = Duration::from_millis(50);
    pub const MAX: Duration = Duration::from_nanos(999_999_999);
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Delay clamped to `MAX`
    pub fn new(delay: Duration) -> Self {
        Self(delay.min(Self::MAX))
    }

    pub const fn duration(&self) -> Duration {
        self.0
    }

    /// Shorter pause, floored at zero
    pub fn speed_up(&mut self) {
        self.0 = self.0.saturating_sub(Self::STEP);
    }

    /// Longer pause, unless that would pass `MAX`
    pub fn slow_down(&mut self) {
        let longer = self.0 + Self::STEP;
        if longer <= Self::MAX {
            self.0 = longer;
        }
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! Two-phase blink

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{
    bounds::Half,
    color::Rgb,
    strip::{MirroredFrame, MirroredPixel},
    timer::Timer,
};

/// Full blink cycle
pub const BLINK_PERIOD: Duration = Duration::from_millis(600);
/// Start of the lit phase within the cycle
pub const BLINK_LIT_AT: Duration = Duration::from_millis(250);

/// Colors of the blink phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkColors {
    /// Upper half during the lit phase
    pub top: Rgb,
    /// Lower half during the lit phase
    pub bottom: Rgb,
    /// Whole strip during the dark phase
    pub background: Rgb,
}

/// Background for the first part of each cycle, split colors for the rest
#[derive(Debug, Clone, Default)]
pub struct BlinkPattern {
    timer: Timer,
}

impl BlinkPattern {
    pub const fn new() -> Self {
        Self {
            timer: Timer::new(),
        }
    }
}

impl Pattern for BlinkPattern {
    type Params = BlinkColors;

    fn render(&mut self, frame: &mut [MirroredPixel], colors: BlinkColors, now: Instant) {
        self.timer.start(now);
        if self.timer.has_elapsed(BLINK_PERIOD, now) {
            self.timer.reset(now);
        }

        if self.timer.has_elapsed(BLINK_LIT_AT, now) {
            frame.fill_half(Half::Top, colors.top);
            frame.fill_half(Half::Bottom, colors.bottom);
        } else {
            frame.fill_color(colors.background);
        }
    }

    fn start(&mut self, now: Instant) {
        self.timer.start(now);
    }

    fn reset(&mut self, now: Instant) {
        self.timer.reset(now);
    }
}

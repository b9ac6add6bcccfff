//! Mirrored counter-rotating rainbow

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{
    strip::{MirroredFrame, MirroredPixel},
    timer::Timer,
};

/// Interval between hue steps
pub const RAINBOW_STEP_INTERVAL: Duration = Duration::from_millis(40);
/// Hue advance per step, in degrees
pub const RAINBOW_HUE_STEP: u16 = 10;
const SATURATION: u8 = 255;
const VALUE: u8 = 127;

/// Rainbow spread over the strip, scrolling in opposite directions on the
/// left and right sides
#[derive(Debug, Clone, Default)]
pub struct RainbowPattern {
    timer: Timer,
    /// Hue of index 0, in degrees (0-359)
    hue_offset: u16,
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self {
            timer: Timer::new(),
            hue_offset: 0,
        }
    }

    /// Current hue of index 0, in degrees
    pub const fn hue_offset(&self) -> u16 {
        self.hue_offset
    }
}

impl Pattern for RainbowPattern {
    type Params = ();

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&mut self, frame: &mut [MirroredPixel], (): (), now: Instant) {
        self.timer.start(now);
        if self.timer.has_elapsed(RAINBOW_STEP_INTERVAL, now) {
            self.hue_offset = (self.hue_offset + RAINBOW_HUE_STEP) % 360;
            self.timer.reset(now);
        }

        let len = frame.len();
        let offset = i32::from(self.hue_offset);
        for index in 0..len {
            let spread = (index * 360 / len) as i32;
            frame.set_left_hsb(index, offset + spread, SATURATION, VALUE);
            frame.set_right_hsb(index, offset - spread, SATURATION, VALUE);
        }
    }

    fn start(&mut self, now: Instant) {
        self.timer.start(now);
    }

    fn reset(&mut self, now: Instant) {
        self.timer.reset(now);
    }
}

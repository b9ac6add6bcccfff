//! Celebration fade
//!
//! A ping-pong brightness oscillator: the amplitude climbs in fixed steps
//! until it reaches the swap level, the two colors trade halves, and the
//! amplitude falls back to its floor. Whenever the amplitude is above the
//! fade bound a white term is computed; the last one is blended into every
//! channel until the next peak replaces it.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    bounds::Half,
    color::Rgb,
    strip::{MirroredFrame, MirroredPixel},
};

/// Amplitude at which the color is shown at full strength
pub const VICTORY_FADE_BOUND: i32 = 30;
/// Amplitude at which the colors swap halves (1.3x the bound)
pub const VICTORY_SWAP_AMPLITUDE: i32 = VICTORY_FADE_BOUND * 13 / 10;
/// Starting and floor amplitude
pub const VICTORY_MIN_AMPLITUDE: i32 = 5;
const AMPLITUDE_STEP: i32 = 2;
const WHITE_PER_STEP: i32 = 5;

/// Colors of a celebration fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryColors {
    /// Starts on the lower half
    pub first: Rgb,
    /// Starts on the upper half
    pub second: Rgb,
}

/// Oscillating two-color fade
#[derive(Debug, Clone)]
pub struct VictoryFade {
    amplitude: i32,
    /// Falling towards the floor
    bright: bool,
    /// Colors currently traded between the halves
    swapped: bool,
    /// White blend, latched at the last amplitude above the bound
    white: i32,
}

impl Default for VictoryFade {
    fn default() -> Self {
        Self::new()
    }
}

impl VictoryFade {
    pub const fn new() -> Self {
        Self {
            amplitude: VICTORY_MIN_AMPLITUDE,
            bright: false,
            swapped: false,
            white: 0,
        }
    }

    pub const fn amplitude(&self) -> i32 {
        self.amplitude
    }

    pub const fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// White term added to every channel
    pub const fn white(&self) -> i32 {
        self.white
    }

    fn step(&mut self) {
        let at_peak = self.amplitude >= VICTORY_SWAP_AMPLITUDE;
        if at_peak || self.bright {
            if at_peak {
                self.swapped = !self.swapped;
            }
            self.amplitude -= AMPLITUDE_STEP;
            self.bright = true;
        }
        if self.amplitude <= VICTORY_MIN_AMPLITUDE || !self.bright {
            self.amplitude += AMPLITUDE_STEP;
            self.bright = false;
        }
        // Kept through the descent and the next climb
        if self.amplitude > VICTORY_FADE_BOUND {
            self.white = (self.amplitude - VICTORY_FADE_BOUND) * WHITE_PER_STEP;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shade(&self, color: Rgb) -> Rgb {
        let channel = |value: u8| {
            (i32::from(value) * self.amplitude / VICTORY_FADE_BOUND + self.white).clamp(0, 255)
                as u8
        };
        Rgb {
            r: channel(color.r),
            g: channel(color.g),
            b: channel(color.b),
        }
    }
}

impl Pattern for VictoryFade {
    type Params = VictoryColors;

    fn render(&mut self, frame: &mut [MirroredPixel], colors: VictoryColors, _now: Instant) {
        self.step();

        let (lower, upper) = if self.swapped {
            (colors.second, colors.first)
        } else {
            (colors.first, colors.second)
        };
        frame.fill_half(Half::Bottom, self.shade(lower));
        frame.fill_half(Half::Top, self.shade(upper));
    }
}

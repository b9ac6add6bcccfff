//! Comet sweeps
//!
//! Each index lights up in turn, one stagger interval apart, and fades out
//! over the next two intervals. The sweep restarts once the last index has
//! faded.

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{
    bounds::Half,
    color::{Rgb, scale_channel},
    strip::{MirroredFrame, MirroredPixel},
    timer::Timer,
};

/// Delay between two consecutive indices lighting up
pub const COMET_STAGGER: Duration = Duration::from_millis(100);
/// Brightness factor per second of remaining glow
const RAMP_SCALE: f32 = 255.0;

/// Sweep direction along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CometDirection {
    /// From the last index towards index 0
    Up,
    /// From index 0 towards the last index
    Down,
}

/// Colors of a comet sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CometColors {
    /// One head color over one background
    Single { foreground: Rgb, background: Rgb },
    /// Each half glows and rests in its own color
    Split { top: Rgb, bottom: Rgb },
}

impl CometColors {
    /// Color of an index that is fading
    fn head(self, position: usize, len: usize) -> Rgb {
        match self {
            Self::Single { foreground, .. } => foreground,
            Self::Split { .. } => self.rest(position, len),
        }
    }

    /// Color of an index that is not lit
    fn rest(self, position: usize, len: usize) -> Rgb {
        match self {
            Self::Single { background, .. } => background,
            Self::Split { top, bottom } => match Half::of(position, len) {
                Half::Top => top,
                Half::Bottom => bottom,
            },
        }
    }
}

/// Time-staggered traveling brightness wavefront
#[derive(Debug, Clone)]
pub struct CometPattern {
    direction: CometDirection,
    timer: Timer,
}

impl CometPattern {
    pub const fn new(direction: CometDirection) -> Self {
        Self {
            direction,
            timer: Timer::new(),
        }
    }

    /// Brightness of the step-`step` index, or `None` if it is not glowing
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn glow(step: usize, elapsed: Duration) -> Option<f32> {
        let step = step as u32;
        if elapsed < COMET_STAGGER * step {
            return None;
        }
        let remaining = (COMET_STAGGER * (step + 2)).checked_sub(elapsed)?;
        let brightness = RAMP_SCALE * (remaining.as_micros() as f32 / 1_000_000.0);
        (brightness > 0.0).then_some(brightness)
    }
}

impl Pattern for CometPattern {
    type Params = CometColors;

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut [MirroredPixel], colors: CometColors, now: Instant) {
        let len = frame.len();
        self.timer.start(now);
        if self.timer.has_elapsed(COMET_STAGGER * (len as u32 + 2), now) {
            self.timer.reset(now);
        }
        let elapsed = self.timer.get(now);

        for step in 0..len {
            let position = match self.direction {
                CometDirection::Up => len - step - 1,
                CometDirection::Down => step,
            };
            let color = match Self::glow(step, elapsed) {
                Some(brightness) => {
                    let head = colors.head(position, len);
                    Rgb {
                        r: scale_channel(head.r, brightness),
                        g: scale_channel(head.g, brightness),
                        b: scale_channel(head.b, brightness),
                    }
                }
                None => colors.rest(position, len),
            };
            frame.set_color(position, color);
        }
    }

    fn start(&mut self, now: Instant) {
        self.timer.start(now);
    }

    fn reset(&mut self, now: Instant) {
        self.timer.reset(now);
    }
}

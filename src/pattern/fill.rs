//! Stateless fills: whole strip, halves, and thirds

use embassy_time::Instant;

use super::Pattern;
use crate::{
    bounds::{Half, Third, third_range},
    color::Rgb,
    strip::{MirroredFrame, MirroredPixel},
};

/// Fills every index, both sides, with one color
#[derive(Debug, Clone, Default)]
pub struct SolidFill;

impl Pattern for SolidFill {
    type Params = Rgb;

    fn render(&mut self, frame: &mut [MirroredPixel], color: Rgb, _now: Instant) {
        frame.fill_color(color);
    }
}

/// Colors of the two strip halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfColors {
    pub top: Rgb,
    pub bottom: Rgb,
}

/// Fills each half with its own color
#[derive(Debug, Clone, Default)]
pub struct SplitHalves;

impl Pattern for SplitHalves {
    type Params = HalfColors;

    fn render(&mut self, frame: &mut [MirroredPixel], colors: HalfColors, _now: Instant) {
        frame.fill_half(Half::Top, colors.top);
        frame.fill_half(Half::Bottom, colors.bottom);
    }
}

/// Fills one third of the strip, leaving the rest untouched
#[derive(Debug, Clone, Default)]
pub struct ThirdsSplit;

impl Pattern for ThirdsSplit {
    type Params = (Rgb, Third);

    fn render(&mut self, frame: &mut [MirroredPixel], (color, third): (Rgb, Third), _now: Instant) {
        let range = third_range(frame.len(), third);
        frame.fill_range(range, color);
    }
}

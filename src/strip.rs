//! Mirrored LED strip buffer
//!
//! Every index holds two independently settable pixels, one per physical
//! side. Patterns render into a `&mut [MirroredPixel]` frame through the
//! [`MirroredFrame`] helpers; [`MirroredStrip`] owns the storage and hands the
//! committed frame to an [`OutputDriver`].

use core::ops::Range;

use crate::OutputDriver;
use crate::bounds::{Half, half_range};
use crate::color::{BLACK, Rgb, hsb_to_rgb};

/// Left and right pixel at one strip index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirroredPixel {
    pub left: Rgb,
    pub right: Rgb,
}

impl MirroredPixel {
    /// Both sides set to the same color
    pub const fn uniform(color: Rgb) -> Self {
        Self {
            left: color,
            right: color,
        }
    }
}

/// Write helpers for a mirrored frame
///
/// Writes to indices past the end of the frame are ignored.
pub trait MirroredFrame {
    /// Set both sides of one index
    fn set_color(&mut self, index: usize, color: Rgb);

    /// Set the left side of one index
    fn set_left(&mut self, index: usize, color: Rgb);

    /// Set the right side of one index
    fn set_right(&mut self, index: usize, color: Rgb);

    /// Set the left side from hue (degrees), saturation and value
    fn set_left_hsb(&mut self, index: usize, hue: i32, sat: u8, val: u8) {
        self.set_left(index, hsb_to_rgb(hue, sat, val));
    }

    /// Set the right side from hue (degrees), saturation and value
    fn set_right_hsb(&mut self, index: usize, hue: i32, sat: u8, val: u8) {
        self.set_right(index, hsb_to_rgb(hue, sat, val));
    }

    /// Set both sides of every index in `range`
    fn fill_range(&mut self, range: Range<usize>, color: Rgb);

    /// Set both sides of one half
    fn fill_half(&mut self, half: Half, color: Rgb);

    /// Set every index, both sides
    fn fill_color(&mut self, color: Rgb);

    /// Turn every pixel off
    fn clear_all(&mut self) {
        self.fill_color(BLACK);
    }
}

impl MirroredFrame for [MirroredPixel] {
    fn set_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = MirroredPixel::uniform(color);
        }
    }

    fn set_left(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            pixel.left = color;
        }
    }

    fn set_right(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            pixel.right = color;
        }
    }

    fn fill_range(&mut self, range: Range<usize>, color: Rgb) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        for pixel in &mut self[start..end] {
            *pixel = MirroredPixel::uniform(color);
        }
    }

    fn fill_half(&mut self, half: Half, color: Rgb) {
        let range = half_range(self.len(), half);
        self.fill_range(range, color);
    }

    fn fill_color(&mut self, color: Rgb) {
        for pixel in self.iter_mut() {
            *pixel = MirroredPixel::uniform(color);
        }
    }
}

/// Fixed-capacity mirrored strip
///
/// `MAX_LEDS` is the buffer capacity; the active length is set at
/// construction and clamped to the capacity.
#[derive(Debug, Clone)]
pub struct MirroredStrip<const MAX_LEDS: usize> {
    pixels: [MirroredPixel; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> MirroredStrip<MAX_LEDS> {
    /// Create a dark strip of `len` indices
    pub fn new(len: usize) -> Self {
        Self {
            pixels: [MirroredPixel::default(); MAX_LEDS],
            len: len.min(MAX_LEDS),
        }
    }

    /// Number of active indices
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active part of the buffer
    pub fn frame(&self) -> &[MirroredPixel] {
        &self.pixels[..self.len]
    }

    /// Mutable active part of the buffer
    pub fn frame_mut(&mut self) -> &mut [MirroredPixel] {
        &mut self.pixels[..self.len]
    }

    /// Pixel pair at `index`
    pub fn pixel(&self, index: usize) -> Option<MirroredPixel> {
        self.frame().get(index).copied()
    }

    /// Set both sides of one index
    pub fn set_color(&mut self, index: usize, color: Rgb) {
        self.frame_mut().set_color(index, color);
    }

    /// Set the left side of one index
    pub fn set_left(&mut self, index: usize, color: Rgb) {
        self.frame_mut().set_left(index, color);
    }

    /// Set the right side of one index
    pub fn set_right(&mut self, index: usize, color: Rgb) {
        self.frame_mut().set_right(index, color);
    }

    /// Turn every pixel off
    pub fn clear_all(&mut self) {
        self.frame_mut().clear_all();
    }

    /// Hand the active frame to the output driver
    pub fn commit<O: OutputDriver>(&self, output: &mut O) {
        output.write(self.frame());
    }
}

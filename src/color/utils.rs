pub use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert a hue in degrees plus 8-bit saturation and value to RGB
///
/// Hue wraps modulo 360 (negative values included) and is mapped onto the
/// 256-step hue circle used by `smart_leds`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsb_to_rgb(hue_degrees: i32, sat: u8, val: u8) -> Rgb {
    let degrees = hue_degrees.rem_euclid(360) as u32;
    hsv2rgb(Hsv {
        hue: ((degrees * 256) / 360) as u8,
        sat,
        val,
    })
}

/// Multiply a channel by a float factor, truncate, and clamp to 0-255
///
/// The factor is not normalized: anything that pushes the product past 255
/// saturates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(channel: u8, factor: f32) -> u8 {
    let scaled = libm::floorf(f32::from(channel) * factor);
    scaled.clamp(0.0, 255.0) as u8
}

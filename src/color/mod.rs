mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::{Palette, PaletteColor};
pub use utils::{hsb_to_rgb, hsv2rgb, rgb_from_u32, scale_channel};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

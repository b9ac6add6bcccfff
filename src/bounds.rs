//! Index ranges of the strip partitions
//!
//! All ranges are clamped to `0..len`, so degenerate strip lengths produce
//! empty or short ranges instead of out-of-range access.

use core::ops::Range;

/// One half of the strip
///
/// `Top` is the upper index range `[len/2, len)`, `Bottom` the lower range
/// `[0, len/2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// Half that contains `index`
    pub const fn of(index: usize, len: usize) -> Self {
        if index >= len / 2 { Self::Top } else { Self::Bottom }
    }
}

/// One third of the strip, counted from index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Third {
    First,
    Second,
    Last,
}

/// Get the index range of a strip half
pub const fn half_range(len: usize, half: Half) -> Range<usize> {
    let center = len / 2;
    match half {
        Half::Bottom => 0..center,
        Half::Top => center..len,
    }
}

/// Get the index range of a strip third
///
/// The outer thirds are `len/3` long; the middle third takes the rest.
pub const fn third_range(len: usize, third: Third) -> Range<usize> {
    let third_len = len / 3;
    let upper_start = len - third_len;
    match third {
        Third::First => 0..third_len,
        Third::Second => third_len..upper_start,
        Third::Last => upper_start..len,
    }
}

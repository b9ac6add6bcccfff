//! Pattern catalogue with compile-time known renderers
//!
//! Every renderer is constructed once and kept for the process lifetime,
//! because the animated ones depend on a continuously running [`Timer`]
//! for visual continuity across ticks.
//!
//! [`Timer`]: crate::timer::Timer

mod blink;
mod comet;
mod fill;
mod rainbow;
mod victory;

use embassy_time::Instant;

pub use blink::{BLINK_LIT_AT, BLINK_PERIOD, BlinkColors, BlinkPattern};
pub use comet::{COMET_STAGGER, CometColors, CometDirection, CometPattern};
pub use fill::{HalfColors, SolidFill, SplitHalves, ThirdsSplit};
pub use rainbow::{RAINBOW_HUE_STEP, RAINBOW_STEP_INTERVAL, RainbowPattern};
pub use victory::{
    VICTORY_FADE_BOUND, VICTORY_MIN_AMPLITUDE, VICTORY_SWAP_AMPLITUDE, VictoryColors,
    VictoryFade,
};

use crate::binding::{Look, VictorySlot};
use crate::bounds::Half;
use crate::color::Palette;
use crate::strip::MirroredPixel;
use crate::telemetry::GamePieces;

pub trait Pattern {
    /// Per-call parameters (colors, zone)
    type Params;

    /// Render into the frame
    fn render(&mut self, frame: &mut [MirroredPixel], params: Self::Params, now: Instant);

    /// Start the internal timer, if any
    fn start(&mut self, _now: Instant) {}

    /// Zero the internal timer, if any
    fn reset(&mut self, _now: Instant) {}
}

/// One instance of every renderer
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    solid: SolidFill,
    halves: SplitHalves,
    thirds: ThirdsSplit,
    blink: BlinkPattern,
    comet_up: CometPattern,
    comet_down: CometPattern,
    comet_up_split: CometPattern,
    comet_down_split: CometPattern,
    rainbow: RainbowPattern,
    balance_victory: VictoryFade,
    score_victory: VictoryFade,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLibrary {
    pub const fn new() -> Self {
        Self {
            solid: SolidFill,
            halves: SplitHalves,
            thirds: ThirdsSplit,
            blink: BlinkPattern::new(),
            comet_up: CometPattern::new(CometDirection::Up),
            comet_down: CometPattern::new(CometDirection::Down),
            comet_up_split: CometPattern::new(CometDirection::Up),
            comet_down_split: CometPattern::new(CometDirection::Down),
            rainbow: RainbowPattern::new(),
            balance_victory: VictoryFade::new(),
            score_victory: VictoryFade::new(),
        }
    }

    /// Start every pattern timer
    pub fn start(&mut self, now: Instant) {
        self.blink.start(now);
        self.comet_up.start(now);
        self.comet_down.start(now);
        self.comet_up_split.start(now);
        self.comet_down_split.start(now);
        self.rainbow.start(now);
    }

    /// Zero every pattern timer
    pub fn reset_timers(&mut self, now: Instant) {
        self.blink.reset(now);
        self.comet_up.reset(now);
        self.comet_down.reset(now);
        self.comet_up_split.reset(now);
        self.comet_down_split.reset(now);
        self.rainbow.reset(now);
    }

    pub const fn rainbow(&self) -> &RainbowPattern {
        &self.rainbow
    }

    pub const fn victory(&self, slot: VictorySlot) -> &VictoryFade {
        match slot {
            VictorySlot::Balance => &self.balance_victory,
            VictorySlot::Score => &self.score_victory,
        }
    }

    /// Render a look, resolving palette symbols and piece-dependent colors
    pub fn render(
        &mut self,
        look: Look,
        frame: &mut [MirroredPixel],
        palette: &Palette,
        pieces: GamePieces,
        now: Instant,
    ) {
        match look {
            Look::Solid(color) => self.solid.render(frame, palette.get(color), now),
            Look::Halves { top, bottom } => {
                let colors = HalfColors {
                    top: palette.get(top),
                    bottom: palette.get(bottom),
                };
                self.halves.render(frame, colors, now);
            }
            Look::PieceHalf {
                lit,
                cone,
                cube,
                dark,
            } => {
                let piece = palette.get(if pieces.wants_cone { cone } else { cube });
                let dark = palette.get(dark);
                let colors = match lit {
                    Half::Top => HalfColors {
                        top: piece,
                        bottom: dark,
                    },
                    Half::Bottom => HalfColors {
                        top: dark,
                        bottom: piece,
                    },
                };
                self.halves.render(frame, colors, now);
            }
            Look::Third { color, third } => {
                self.thirds.render(frame, (palette.get(color), third), now);
            }
            Look::Blink {
                top,
                bottom,
                background,
            } => {
                let colors = BlinkColors {
                    top: palette.get(top),
                    bottom: palette.get(bottom),
                    background: palette.get(background),
                };
                self.blink.render(frame, colors, now);
            }
            Look::CometUp {
                foreground,
                background,
            } => {
                let colors = CometColors::Single {
                    foreground: palette.get(foreground),
                    background: palette.get(background),
                };
                self.comet_up.render(frame, colors, now);
            }
            Look::CometDown {
                foreground,
                background,
            } => {
                let colors = CometColors::Single {
                    foreground: palette.get(foreground),
                    background: palette.get(background),
                };
                self.comet_down.render(frame, colors, now);
            }
            Look::CometUpSplit { top, bottom } => {
                let colors = CometColors::Split {
                    top: palette.get(top),
                    bottom: palette.get(bottom),
                };
                self.comet_up_split.render(frame, colors, now);
            }
            Look::CometDownSplit { top, bottom } => {
                let colors = CometColors::Split {
                    top: palette.get(top),
                    bottom: palette.get(bottom),
                };
                self.comet_down_split.render(frame, colors, now);
            }
            Look::Rainbow => self.rainbow.render(frame, (), now),
            Look::Victory {
                slot,
                first,
                second,
            } => {
                let colors = VictoryColors {
                    first: palette.get(first),
                    second: palette.get(second),
                };
                let fade = match slot {
                    VictorySlot::Balance => &mut self.balance_victory,
                    VictorySlot::Score => &mut self.score_victory,
                };
                fade.render(frame, colors, now);
            }
        }
    }
}

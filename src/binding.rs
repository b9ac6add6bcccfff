//! Status to pattern bindings
//!
//! A [`Look`] names a pattern of the catalogue together with its palette
//! colors. [`StatusBindings`] assigns one look to every status.

use crate::bounds::{Half, Third};
use crate::color::PaletteColor;
use crate::status::Status;

/// Which celebration fade instance a look drives
///
/// Each slot keeps its own oscillator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictorySlot {
    Balance,
    Score,
}

/// Pattern plus parameters shown for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Look {
    /// Whole strip in one color
    Solid(PaletteColor),
    /// Each half in its own color
    Halves { top: PaletteColor, bottom: PaletteColor },
    /// One half in the wanted piece color, the other dark
    ///
    /// Uses `cone` when a cone is wanted, `cube` otherwise.
    PieceHalf {
        lit: Half,
        cone: PaletteColor,
        cube: PaletteColor,
        dark: PaletteColor,
    },
    /// One third of the strip
    Third { color: PaletteColor, third: Third },
    /// Background, then split colors, repeating
    Blink {
        top: PaletteColor,
        bottom: PaletteColor,
        background: PaletteColor,
    },
    CometUp {
        foreground: PaletteColor,
        background: PaletteColor,
    },
    CometDown {
        foreground: PaletteColor,
        background: PaletteColor,
    },
    /// Upward comet glowing in the color of each half
    CometUpSplit { top: PaletteColor, bottom: PaletteColor },
    /// Downward comet glowing in the color of each half
    CometDownSplit { top: PaletteColor, bottom: PaletteColor },
    /// Mirrored scrolling rainbow
    Rainbow,
    /// Celebration fade
    Victory {
        slot: VictorySlot,
        first: PaletteColor,
        second: PaletteColor,
    },
}

const ARM_UNCALIBRATED_COLOR: PaletteColor = PaletteColor::Red;
const BATTERY_LOW_COLOR: PaletteColor = PaletteColor::Orange;
const CONE_COLOR: PaletteColor = PaletteColor::Yellow;
const CUBE_COLOR: PaletteColor = PaletteColor::Purple;

/// Default look of a status
pub const fn default_look(status: Status) -> Look {
    use PaletteColor::{Black, Blue, Gold, Green, Orange, Pink, White};

    match status {
        Status::BatteryLow => Look::Solid(BATTERY_LOW_COLOR),
        Status::ArmUncalibrated => Look::Solid(ARM_UNCALIBRATED_COLOR),
        Status::ConeLow => Look::Third {
            color: CONE_COLOR,
            third: Third::First,
        },
        Status::ConeMid => Look::Third {
            color: CONE_COLOR,
            third: Third::Second,
        },
        Status::ConeHigh => Look::Third {
            color: CONE_COLOR,
            third: Third::Last,
        },
        Status::CubeLow => Look::Third {
            color: CUBE_COLOR,
            third: Third::First,
        },
        Status::CubeMid => Look::Third {
            color: CUBE_COLOR,
            third: Third::Second,
        },
        Status::CubeHigh => Look::Third {
            color: CUBE_COLOR,
            third: Third::Last,
        },
        Status::HoldCone => Look::Blink {
            top: CONE_COLOR,
            bottom: CONE_COLOR,
            background: White,
        },
        Status::HoldCube => Look::Blink {
            top: CUBE_COLOR,
            bottom: CUBE_COLOR,
            background: White,
        },
        Status::IntakeCone => Look::CometUp {
            foreground: White,
            background: CONE_COLOR,
        },
        Status::IntakeCube => Look::CometUp {
            foreground: White,
            background: CUBE_COLOR,
        },
        Status::ReleaseCone => Look::CometDown {
            foreground: Black,
            background: CONE_COLOR,
        },
        Status::ReleaseCube => Look::CometDown {
            foreground: Black,
            background: CUBE_COLOR,
        },
        Status::WantCone => Look::Solid(CONE_COLOR),
        Status::WantCube => Look::Solid(CUBE_COLOR),
        Status::IntakeUnknown => Look::CometUpSplit {
            top: CUBE_COLOR,
            bottom: CONE_COLOR,
        },
        Status::ReleaseUnknown => Look::CometDownSplit {
            top: CUBE_COLOR,
            bottom: CONE_COLOR,
        },
        Status::Calibrating => Look::Blink {
            top: ARM_UNCALIBRATED_COLOR,
            bottom: ARM_UNCALIBRATED_COLOR,
            background: Black,
        },
        Status::ResetPose => Look::Blink {
            top: Orange,
            bottom: Pink,
            background: Green,
        },
        Status::Shelf => Look::PieceHalf {
            lit: Half::Top,
            cone: CONE_COLOR,
            cube: CUBE_COLOR,
            dark: Black,
        },
        Status::Floor => Look::PieceHalf {
            lit: Half::Bottom,
            cone: CONE_COLOR,
            cube: CUBE_COLOR,
            dark: Black,
        },
        Status::BalanceVictory => Look::Victory {
            slot: VictorySlot::Balance,
            first: Blue,
            second: Gold,
        },
        Status::AutoScore => Look::Victory {
            slot: VictorySlot::Score,
            first: CONE_COLOR,
            second: CUBE_COLOR,
        },
        Status::Default => Look::Rainbow,
    }
}

/// Look assigned to every status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBindings {
    looks: [Look; Status::COUNT],
}

impl Default for StatusBindings {
    fn default() -> Self {
        let mut looks = [Look::Rainbow; Status::COUNT];
        for status in Status::ALL {
            looks[status as usize] = default_look(status);
        }
        Self { looks }
    }
}

impl StatusBindings {
    /// Look bound to `status`
    pub const fn look(&self, status: Status) -> Look {
        self.looks[status as usize]
    }

    /// Rebind one status
    #[must_use]
    pub const fn with(mut self, status: Status, look: Look) -> Self {
        self.looks[status as usize] = look;
        self
    }
}

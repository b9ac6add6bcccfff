//! Robot behavior statuses shown on the strip
//!
//! One closed set shared by every deployment. A deployment's rule table
//! decides which of them can actually be produced.

const STATUS_NAME_WANT_CUBE: &str = "want_cube";
const STATUS_NAME_WANT_CONE: &str = "want_cone";
const STATUS_NAME_HOLD_CUBE: &str = "hold_cube";
const STATUS_NAME_HOLD_CONE: &str = "hold_cone";
const STATUS_NAME_INTAKE_CUBE: &str = "intake_cube";
const STATUS_NAME_INTAKE_CONE: &str = "intake_cone";
const STATUS_NAME_INTAKE_UNKNOWN: &str = "intake_unknown";
const STATUS_NAME_RELEASE_CUBE: &str = "release_cube";
const STATUS_NAME_RELEASE_CONE: &str = "release_cone";
const STATUS_NAME_RELEASE_UNKNOWN: &str = "release_unknown";
const STATUS_NAME_DEFAULT: &str = "default";
const STATUS_NAME_BATTERY_LOW: &str = "battery_low";
const STATUS_NAME_ARM_UNCALIBRATED: &str = "arm_uncalibrated";
const STATUS_NAME_CALIBRATING: &str = "calibrating";
const STATUS_NAME_CUBE_LOW: &str = "cube_low";
const STATUS_NAME_CUBE_MID: &str = "cube_mid";
const STATUS_NAME_CUBE_HIGH: &str = "cube_high";
const STATUS_NAME_CONE_LOW: &str = "cone_low";
const STATUS_NAME_CONE_MID: &str = "cone_mid";
const STATUS_NAME_CONE_HIGH: &str = "cone_high";
const STATUS_NAME_RESET_POSE: &str = "reset_pose";
const STATUS_NAME_FLOOR: &str = "floor";
const STATUS_NAME_SHELF: &str = "shelf";
const STATUS_NAME_BALANCE_VICTORY: &str = "balance_victory";
const STATUS_NAME_AUTO_SCORE: &str = "auto_score";

/// Discrete robot-behavior state driving the light output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    WantCube,
    WantCone,
    HoldCube,
    HoldCone,
    IntakeCube,
    IntakeCone,
    IntakeUnknown,
    ReleaseCube,
    ReleaseCone,
    ReleaseUnknown,
    Default,
    BatteryLow,
    ArmUncalibrated,
    Calibrating,
    CubeLow,
    CubeMid,
    CubeHigh,
    ConeLow,
    ConeMid,
    ConeHigh,
    ResetPose,
    Floor,
    Shelf,
    BalanceVictory,
    AutoScore,
}

impl Status {
    /// Number of statuses
    pub const COUNT: usize = 25;

    /// Every status, in discriminant order
    pub const ALL: [Self; Self::COUNT] = [
        Self::WantCube,
        Self::WantCone,
        Self::HoldCube,
        Self::HoldCone,
        Self::IntakeCube,
        Self::IntakeCone,
        Self::IntakeUnknown,
        Self::ReleaseCube,
        Self::ReleaseCone,
        Self::ReleaseUnknown,
        Self::Default,
        Self::BatteryLow,
        Self::ArmUncalibrated,
        Self::Calibrating,
        Self::CubeLow,
        Self::CubeMid,
        Self::CubeHigh,
        Self::ConeLow,
        Self::ConeMid,
        Self::ConeHigh,
        Self::ResetPose,
        Self::Floor,
        Self::Shelf,
        Self::BalanceVictory,
        Self::AutoScore,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WantCube => STATUS_NAME_WANT_CUBE,
            Self::WantCone => STATUS_NAME_WANT_CONE,
            Self::HoldCube => STATUS_NAME_HOLD_CUBE,
            Self::HoldCone => STATUS_NAME_HOLD_CONE,
            Self::IntakeCube => STATUS_NAME_INTAKE_CUBE,
            Self::IntakeCone => STATUS_NAME_INTAKE_CONE,
            Self::IntakeUnknown => STATUS_NAME_INTAKE_UNKNOWN,
            Self::ReleaseCube => STATUS_NAME_RELEASE_CUBE,
            Self::ReleaseCone => STATUS_NAME_RELEASE_CONE,
            Self::ReleaseUnknown => STATUS_NAME_RELEASE_UNKNOWN,
            Self::Default => STATUS_NAME_DEFAULT,
            Self::BatteryLow => STATUS_NAME_BATTERY_LOW,
            Self::ArmUncalibrated => STATUS_NAME_ARM_UNCALIBRATED,
            Self::Calibrating => STATUS_NAME_CALIBRATING,
            Self::CubeLow => STATUS_NAME_CUBE_LOW,
            Self::CubeMid => STATUS_NAME_CUBE_MID,
            Self::CubeHigh => STATUS_NAME_CUBE_HIGH,
            Self::ConeLow => STATUS_NAME_CONE_LOW,
            Self::ConeMid => STATUS_NAME_CONE_MID,
            Self::ConeHigh => STATUS_NAME_CONE_HIGH,
            Self::ResetPose => STATUS_NAME_RESET_POSE,
            Self::Floor => STATUS_NAME_FLOOR,
            Self::Shelf => STATUS_NAME_SHELF,
            Self::BalanceVictory => STATUS_NAME_BALANCE_VICTORY,
            Self::AutoScore => STATUS_NAME_AUTO_SCORE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

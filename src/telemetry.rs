//! Per-tick telemetry read from the collaborating subsystems

/// Match phase reported by the driver station
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RobotMode {
    #[default]
    Disabled,
    Autonomous,
    Teleop,
    /// Enabled, but neither autonomous nor teleop
    Test,
}

impl RobotMode {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// What a subsystem is currently doing, as far as the lights care
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityKind {
    #[default]
    Idle,
    Calibrating,
    ScoringLow,
    ScoringMid,
    ScoringHigh,
    ShelfPickup,
    FloorPickup,
    Balancing,
    Holding,
    Intaking,
    Releasing,
}

impl ActivityKind {
    /// Arm activities that get a short highlight on the strip
    pub const fn is_arm_highlight(self) -> bool {
        matches!(
            self,
            Self::ScoringLow
                | Self::ScoringMid
                | Self::ScoringHigh
                | Self::ShelfPickup
                | Self::FloorPickup
        )
    }
}

/// Effector want/have flags for both game piece kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamePieces {
    pub wants_cone: bool,
    pub wants_cube: bool,
    pub has_cone: bool,
    pub has_cube: bool,
}

impl GamePieces {
    /// Whether the piece of interest is a cube
    ///
    /// True when a cube is wanted, or when only a cube is held.
    pub const fn prefers_cube(self) -> bool {
        self.wants_cube || (self.has_cube && !self.has_cone)
    }

    /// Holding a cube and no cone
    pub const fn holds_only_cube(self) -> bool {
        self.has_cube && !self.has_cone
    }
}

/// Read access to the collaborating subsystems
///
/// Every accessor is expected to be total and non-blocking.
pub trait RobotTelemetry {
    /// Battery voltage in volts
    fn battery_voltage(&self) -> f32;

    fn mode(&self) -> RobotMode;

    fn arm_calibrated(&self) -> bool;

    fn arm_activity(&self) -> ActivityKind;

    fn drive_activity(&self) -> ActivityKind;

    /// Drivetrain is level after balancing
    fn drive_upright(&self) -> bool;

    fn effector_activity(&self) -> ActivityKind;

    fn game_pieces(&self) -> GamePieces;
}

/// Telemetry values collected once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    pub battery_voltage: f32,
    pub mode: RobotMode,
    pub arm_calibrated: bool,
    pub arm_activity: ActivityKind,
    pub drive_activity: ActivityKind,
    pub drive_upright: bool,
    pub effector_activity: ActivityKind,
    pub pieces: GamePieces,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            battery_voltage: 12.5,
            mode: RobotMode::Disabled,
            arm_calibrated: false,
            arm_activity: ActivityKind::Idle,
            drive_activity: ActivityKind::Idle,
            drive_upright: false,
            effector_activity: ActivityKind::Idle,
            pieces: GamePieces::default(),
        }
    }
}

impl TelemetrySnapshot {
    /// Read every accessor of `source` once
    pub fn capture<T: RobotTelemetry + ?Sized>(source: &T) -> Self {
        Self {
            battery_voltage: source.battery_voltage(),
            mode: source.mode(),
            arm_calibrated: source.arm_calibrated(),
            arm_activity: source.arm_activity(),
            drive_activity: source.drive_activity(),
            drive_upright: source.drive_upright(),
            effector_activity: source.effector_activity(),
            pieces: source.game_pieces(),
        }
    }
}

impl RobotTelemetry for TelemetrySnapshot {
    fn battery_voltage(&self) -> f32 {
        self.battery_voltage
    }

    fn mode(&self) -> RobotMode {
        self.mode
    }

    fn arm_calibrated(&self) -> bool {
        self.arm_calibrated
    }

    fn arm_activity(&self) -> ActivityKind {
        self.arm_activity
    }

    fn drive_activity(&self) -> ActivityKind {
        self.drive_activity
    }

    fn drive_upright(&self) -> bool {
        self.drive_upright
    }

    fn effector_activity(&self) -> ActivityKind {
        self.effector_activity
    }

    fn game_pieces(&self) -> GamePieces {
        self.pieces
    }
}

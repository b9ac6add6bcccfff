//! Ordered classification rules
//!
//! Each rule is a guard over the telemetry snapshot and the classifier
//! state. Rules are evaluated in table order; the first one that yields a
//! status wins. Some guards mutate timers and latches even when they do not
//! match, so the table must be evaluated exactly once per tick.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use super::{ClassifierConfig, ClassifierState};
use crate::status::Status;
use crate::telemetry::{ActivityKind, RobotMode, TelemetrySnapshot};

/// Maximum number of rules in a table
pub const MAX_RULES: usize = 16;

/// One guarded classification rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Battery at or below the low-voltage threshold
    BatteryLow,
    /// Robot enabled with an uncalibrated arm
    ArmUncalibrated,
    /// Disabled housekeeping, with the post-balance celebration hold
    Disabled,
    /// Autonomous balance celebration and scoring
    Autonomous,
    /// Arm calibration in progress
    Calibrating,
    /// Rainbow grace period after the arm becomes calibrated in teleop
    CalibrationGrace,
    /// Short highlight of scoring and pickup arm moves
    ArmHighlight,
    /// Effector holding a piece
    Hold,
    /// Effector intaking
    Intake,
    /// Effector releasing
    Release,
    /// Wanted piece indicator
    Want,
}

/// Full competition rule set, in priority order
pub const FULL_RULES: [Rule; 11] = [
    Rule::BatteryLow,
    Rule::ArmUncalibrated,
    Rule::Disabled,
    Rule::Autonomous,
    Rule::Calibrating,
    Rule::CalibrationGrace,
    Rule::ArmHighlight,
    Rule::Hold,
    Rule::Intake,
    Rule::Release,
    Rule::Want,
];

/// Reduced rule set: battery check and disabled housekeeping only
pub const MINIMAL_RULES: [Rule; 2] = [Rule::BatteryLow, Rule::Disabled];

const _: () = assert!(FULL_RULES.len() <= MAX_RULES);
const _: () = assert!(MINIMAL_RULES.len() <= MAX_RULES);

/// Ordered, fixed-capacity rule list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule, MAX_RULES>,
}

impl RuleTable {
    /// Create an empty table (always classifies as default)
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a table from rules in priority order
    ///
    /// Returns the first rule that did not fit
    pub fn from_rules(rules: &[Rule]) -> Result<Self, Rule> {
        let mut table = Self::new();
        for rule in rules {
            table.push(*rule)?;
        }
        Ok(table)
    }

    /// Full rule set
    pub fn full() -> Self {
        // Cannot overflow, see the capacity assertions above
        Self::from_rules(&FULL_RULES).unwrap_or_default()
    }

    /// Reduced rule set
    pub fn minimal() -> Self {
        Self::from_rules(&MINIMAL_RULES).unwrap_or_default()
    }

    /// Append a rule with the lowest priority so far
    ///
    /// Returns the rule if the table is full
    pub fn push(&mut self, rule: Rule) -> Result<(), Rule> {
        self.rules.push(rule)
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.rules.contains(&rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied()
    }
}

impl Rule {
    /// Evaluate the guard, applying its state mutations
    pub(crate) fn apply(
        self,
        config: &ClassifierConfig,
        state: &mut ClassifierState,
        telemetry: &TelemetrySnapshot,
        now: Instant,
    ) -> Option<Status> {
        match self {
            Self::BatteryLow => {
                (telemetry.battery_voltage <= config.battery_low_voltage)
                    .then_some(Status::BatteryLow)
            }
            Self::ArmUncalibrated => (!telemetry.arm_calibrated && telemetry.mode.is_enabled())
                .then_some(Status::ArmUncalibrated),
            Self::Disabled => Self::disabled(config, state, telemetry, now),
            Self::Autonomous => Self::autonomous(state, telemetry, now),
            Self::Calibrating => (telemetry.arm_activity == ActivityKind::Calibrating)
                .then_some(Status::Calibrating),
            Self::CalibrationGrace => Self::calibration_grace(config, state, telemetry, now),
            Self::ArmHighlight => Self::arm_highlight(config, state, telemetry, now),
            Self::Hold => {
                if telemetry.effector_activity != ActivityKind::Holding {
                    return None;
                }
                if telemetry.pieces.holds_only_cube() {
                    Some(Status::HoldCube)
                } else if telemetry.pieces.has_cone {
                    Some(Status::HoldCone)
                } else {
                    None
                }
            }
            Self::Intake => (telemetry.effector_activity == ActivityKind::Intaking).then(|| {
                Self::by_wanted_piece(
                    telemetry,
                    Status::IntakeCube,
                    Status::IntakeCone,
                    Status::IntakeUnknown,
                )
            }),
            Self::Release => (telemetry.effector_activity == ActivityKind::Releasing).then(|| {
                Self::by_wanted_piece(
                    telemetry,
                    Status::ReleaseCube,
                    Status::ReleaseCone,
                    Status::ReleaseUnknown,
                )
            }),
            Self::Want => {
                if telemetry.pieces.wants_cube {
                    Some(Status::WantCube)
                } else if telemetry.pieces.wants_cone {
                    Some(Status::WantCone)
                } else {
                    None
                }
            }
        }
    }

    fn disabled(
        config: &ClassifierConfig,
        state: &mut ClassifierState,
        telemetry: &TelemetrySnapshot,
        now: Instant,
    ) -> Option<Status> {
        if telemetry.mode != RobotMode::Disabled {
            return None;
        }

        let celebrating = state.balance_timer.get(now) > Duration::from_ticks(0)
            && !state.balance_timer.has_elapsed(config.balance_victory_hold, now)
            && !state.balance_leds_done;
        if celebrating {
            return Some(Status::BalanceVictory);
        }

        state.grace_timer.stop(now);
        state.grace_timer.reset(now);
        state.balance_timer.reset(now);
        state.balance_leds_done = true;
        state.balance_started = false;
        Some(Status::Default)
    }

    fn autonomous(
        state: &mut ClassifierState,
        telemetry: &TelemetrySnapshot,
        now: Instant,
    ) -> Option<Status> {
        if telemetry.mode != RobotMode::Autonomous {
            return None;
        }

        if telemetry.drive_activity == ActivityKind::Balancing {
            state.balance_started = true;
        }
        if telemetry.drive_upright && state.balance_started {
            state.balance_leds_done = false;
            state.balance_timer.restart(now);
            return Some(Status::BalanceVictory);
        }

        matches!(
            telemetry.effector_activity,
            ActivityKind::Releasing | ActivityKind::Intaking
        )
        .then_some(Status::AutoScore)
    }

    fn calibration_grace(
        config: &ClassifierConfig,
        state: &mut ClassifierState,
        telemetry: &TelemetrySnapshot,
        now: Instant,
    ) -> Option<Status> {
        let calibrated = telemetry.arm_calibrated || !config.require_arm_calibration;
        let applies = calibrated
            && !state.grace_timer.has_elapsed(config.rainbow_grace_window, now)
            && telemetry.mode == RobotMode::Teleop
            && !state.rainbow_grace_consumed;
        if !applies {
            return None;
        }

        if state.grace_timer.has_elapsed(config.rainbow_grace, now) {
            state.grace_timer.reset(now);
            state.grace_timer.stop(now);
            state.rainbow_grace_consumed = true;
        }
        state.grace_timer.start(now);
        Some(Status::Default)
    }

    fn arm_highlight(
        config: &ClassifierConfig,
        state: &mut ClassifierState,
        telemetry: &TelemetrySnapshot,
        now: Instant,
    ) -> Option<Status> {
        if state.highlight_timer.has_elapsed(config.arm_highlight, now) {
            return None;
        }

        let cube = telemetry.pieces.prefers_cube();
        let status = match telemetry.arm_activity {
            // Mid-node scoring shows the high tier as well
            ActivityKind::ScoringHigh | ActivityKind::ScoringMid => {
                if cube { Status::CubeHigh } else { Status::ConeHigh }
            }
            ActivityKind::ScoringLow => {
                if cube { Status::CubeLow } else { Status::ConeLow }
            }
            ActivityKind::ShelfPickup => Status::Shelf,
            ActivityKind::FloorPickup => Status::Floor,
            _ => return None,
        };
        state.highlight_timer.start(now);
        Some(status)
    }

    const fn by_wanted_piece(
        telemetry: &TelemetrySnapshot,
        cube: Status,
        cone: Status,
        unknown: Status,
    ) -> Status {
        if telemetry.pieces.wants_cube {
            cube
        } else if telemetry.pieces.wants_cone {
            cone
        } else {
            unknown
        }
    }
}

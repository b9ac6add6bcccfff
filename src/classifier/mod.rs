//! Status classification
//!
//! Maps a telemetry snapshot plus classifier-owned timers and latches to a
//! single [`Status`]. The ordered [`RuleTable`] in the configuration decides
//! which guards a deployment uses.

mod rules;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use rules::{FULL_RULES, MAX_RULES, MINIMAL_RULES, Rule, RuleTable};

use crate::status::Status;
use crate::telemetry::TelemetrySnapshot;
use crate::timer::Timer;

/// Default battery voltage at or below which the battery is reported low
pub const DEFAULT_BATTERY_LOW_VOLTAGE: f32 = 9.0;
/// Default hold of the balance celebration after the robot is disabled
pub const DEFAULT_BALANCE_VICTORY_HOLD: Duration = Duration::from_millis(2_500);
/// Default length of the rainbow grace after calibration
pub const DEFAULT_RAINBOW_GRACE: Duration = Duration::from_millis(3_000);
/// Default window in which the grace rule stays active
pub const DEFAULT_RAINBOW_GRACE_WINDOW: Duration = Duration::from_millis(3_020);
/// Default length of the arm-move highlight
pub const DEFAULT_ARM_HIGHLIGHT: Duration = Duration::from_millis(2_000);

/// Classifier thresholds and rule table
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub battery_low_voltage: f32,
    pub balance_victory_hold: Duration,
    pub rainbow_grace: Duration,
    pub rainbow_grace_window: Duration,
    pub arm_highlight: Duration,
    /// Whether the grace rule waits for arm calibration
    pub require_arm_calibration: bool,
    pub rules: RuleTable,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            battery_low_voltage: DEFAULT_BATTERY_LOW_VOLTAGE,
            balance_victory_hold: DEFAULT_BALANCE_VICTORY_HOLD,
            rainbow_grace: DEFAULT_RAINBOW_GRACE,
            rainbow_grace_window: DEFAULT_RAINBOW_GRACE_WINDOW,
            arm_highlight: DEFAULT_ARM_HIGHLIGHT,
            require_arm_calibration: true,
            rules: RuleTable::full(),
        }
    }
}

impl ClassifierConfig {
    /// Configuration of the reduced deployment
    pub fn minimal() -> Self {
        Self {
            rules: RuleTable::minimal(),
            ..Self::default()
        }
    }
}

/// Timers and latches carried across ticks
///
/// Latches are only changed by the classification rules; the external
/// timer reset leaves them alone.
#[derive(Debug, Clone, Default)]
pub struct ClassifierState {
    /// Runs while the balance celebration is shown
    pub(crate) balance_timer: Timer,
    /// Post-calibration rainbow grace, also stopped while disabled
    pub(crate) grace_timer: Timer,
    /// Arm-move highlight window
    pub(crate) highlight_timer: Timer,
    pub(crate) rainbow_grace_consumed: bool,
    pub(crate) balance_leds_done: bool,
    pub(crate) balance_started: bool,
}

impl ClassifierState {
    pub const fn new() -> Self {
        Self {
            balance_timer: Timer::new(),
            grace_timer: Timer::new(),
            highlight_timer: Timer::new(),
            rainbow_grace_consumed: false,
            balance_leds_done: false,
            balance_started: false,
        }
    }

    /// Zero every timer, keeping the latches
    pub fn reset_timers(&mut self, now: Instant) {
        self.balance_timer.reset(now);
        self.grace_timer.reset(now);
        self.highlight_timer.reset(now);
    }

    pub const fn balance_timer(&self) -> &Timer {
        &self.balance_timer
    }

    pub const fn grace_timer(&self) -> &Timer {
        &self.grace_timer
    }

    pub const fn highlight_timer(&self) -> &Timer {
        &self.highlight_timer
    }

    pub const fn rainbow_grace_consumed(&self) -> bool {
        self.rainbow_grace_consumed
    }

    pub const fn balance_leds_done(&self) -> bool {
        self.balance_leds_done
    }

    pub const fn balance_started(&self) -> bool {
        self.balance_started
    }
}

/// Prioritized rule engine
#[derive(Debug, Clone, Default)]
pub struct StatusClassifier {
    config: ClassifierConfig,
    state: ClassifierState,
}

impl StatusClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            state: ClassifierState::new(),
        }
    }

    /// Classify one tick
    ///
    /// Mutates the classifier state, so call it exactly once per tick.
    pub fn evaluate(&mut self, telemetry: &TelemetrySnapshot, now: Instant) -> Status {
        // Keep the highlight window primed while no highlighted arm move runs
        if !telemetry.arm_activity.is_arm_highlight() {
            self.state.highlight_timer.reset(now);
        }

        for rule in self.config.rules.iter() {
            if let Some(status) = rule.apply(&self.config, &mut self.state, telemetry, now) {
                return status;
            }
        }
        Status::Default
    }

    /// Zero the classifier timers, keeping the latches
    pub fn reset_timers(&mut self, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[StatusClassifier.reset_timers] resetting classifier timers");
        self.state.reset_timers(now);
    }

    pub const fn state(&self) -> &ClassifierState {
        &self.state
    }

    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

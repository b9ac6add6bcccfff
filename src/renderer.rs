use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::binding::StatusBindings;
use crate::classifier::{ClassifierConfig, StatusClassifier};
use crate::color::Palette;
use crate::control::{ControlIntent, ControlReceiver};
use crate::pattern::PatternLibrary;
use crate::status::Status;
use crate::strip::MirroredStrip;
use crate::telemetry::{RobotTelemetry, TelemetrySnapshot};

/// Default number of strip indices
pub const DEFAULT_LED_COUNT: usize = 60;

/// Configuration for the status lights
#[derive(Debug, Clone)]
pub struct StatusLightsConfig {
    /// Strip length, clamped to the renderer capacity
    pub led_count: usize,
    pub palette: Palette,
    pub classifier: ClassifierConfig,
    pub bindings: StatusBindings,
}

impl Default for StatusLightsConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            palette: Palette::DEFAULT,
            classifier: ClassifierConfig::default(),
            bindings: StatusBindings::default(),
        }
    }
}

/// Status renderer - the per-tick orchestrator
pub struct StatusRenderer<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
{
    // External dependencies and configuration
    output: O,
    intents: ControlReceiver<'a, INTENT_CHANNEL_SIZE>,
    palette: Palette,
    bindings: StatusBindings,

    // Internal state
    classifier: StatusClassifier,
    patterns: PatternLibrary,
    strip: MirroredStrip<MAX_LEDS>,
    last_status: Option<Status>,
    override_status: Option<Status>,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    StatusRenderer<'a, O, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a renderer and start the pattern timers
    pub fn new(
        output: O,
        intents: ControlReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &StatusLightsConfig,
        now: Instant,
    ) -> Self {
        let mut patterns = PatternLibrary::new();
        patterns.start(now);

        Self {
            output,
            intents,
            palette: config.palette,
            bindings: config.bindings,
            classifier: StatusClassifier::new(config.classifier.clone()),
            patterns,
            strip: MirroredStrip::new(config.led_count),
            last_status: None,
            override_status: None,
        }
    }

    /// Process one tick
    ///
    /// Drains pending intents, classifies the telemetry, renders the bound
    /// look and commits the strip. Returns the displayed status.
    pub fn tick<T: RobotTelemetry + ?Sized>(&mut self, telemetry: &T, now: Instant) -> Status {
        self.process_intents(now);

        let snapshot = TelemetrySnapshot::capture(telemetry);
        let classified = self.classifier.evaluate(&snapshot, now);
        let status = self.override_status.unwrap_or(classified);

        let changed = self.last_status != Some(status);
        if changed {
            #[cfg(feature = "esp32-log")]
            println!(
                "[StatusRenderer.tick] status changed: {:?} -> {}",
                self.last_status.map(Status::as_str),
                status.as_str()
            );
            self.strip.clear_all();
            self.last_status = Some(status);
        }

        let look = self.bindings.look(status);
        self.patterns.render(
            look,
            self.strip.frame_mut(),
            &self.palette,
            snapshot.pieces,
            now,
        );

        self.output.record_status(status, changed);
        self.strip.commit(&mut self.output);
        status
    }

    /// Zero every pattern and classifier timer, keeping the latches
    pub fn reset_timers(&mut self, now: Instant) {
        self.patterns.reset_timers(now);
        self.classifier.reset_timers(now);
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self, now: Instant) {
        while let Ok(intent) = self.intents.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[StatusRenderer.process_intents] intent: {:?}", intent);

            match intent {
                ControlIntent::ResetTimers => self.reset_timers(now),
                ControlIntent::Override(status) => self.override_status = Some(status),
                ControlIntent::ClearOverride => self.override_status = None,
            }
        }
    }

    /// Status shown by the last tick
    pub const fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Forced status, if any
    pub const fn override_status(&self) -> Option<Status> {
        self.override_status
    }

    pub const fn strip(&self) -> &MirroredStrip<MAX_LEDS> {
        &self.strip
    }

    pub const fn classifier(&self) -> &StatusClassifier {
        &self.classifier
    }

    pub const fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

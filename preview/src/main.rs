//! Desktop preview app for status-light-composer
//!
//! Simulates the mirrored strip in a window. Telemetry is set by hand and the
//! renderer is ticked with synthetic time; reset and override go through the
//! control channel like they would on the robot.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use status_light_composer::{
    ActivityKind, ControlChannel, ControlSender, GamePieces, Instant, MirroredPixel,
    OutputDriver, RobotMode, Status, StatusLightsConfig, StatusRenderer, TelemetrySnapshot,
};

/// Maximum number of LEDs the renderer supports
const MAX_LEDS: usize = 120;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 30;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 14.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Control period of the simulated robot
const TICK_MS: u64 = 20;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 8;

/// Static intent channel for communication between UI and renderer
static CONTROL_CHANNEL: ControlChannel<INTENT_CHANNEL_SIZE> =
    ControlChannel::<INTENT_CHANNEL_SIZE>::new();

const MODES: [RobotMode; 4] = [
    RobotMode::Disabled,
    RobotMode::Autonomous,
    RobotMode::Teleop,
    RobotMode::Test,
];

const ARM_ACTIVITIES: [ActivityKind; 7] = [
    ActivityKind::Idle,
    ActivityKind::Calibrating,
    ActivityKind::ScoringLow,
    ActivityKind::ScoringMid,
    ActivityKind::ScoringHigh,
    ActivityKind::ShelfPickup,
    ActivityKind::FloorPickup,
];

const DRIVE_ACTIVITIES: [ActivityKind; 2] = [ActivityKind::Idle, ActivityKind::Balancing];

const EFFECTOR_ACTIVITIES: [ActivityKind; 4] = [
    ActivityKind::Idle,
    ActivityKind::Holding,
    ActivityKind::Intaking,
    ActivityKind::Releasing,
];

/// Simulated LED driver keeping the last committed frame
#[derive(Default)]
struct PreviewDriver {
    frame: Vec<MirroredPixel>,
    status: Option<Status>,
    transitions: usize,
}

impl OutputDriver for PreviewDriver {
    fn write(&mut self, frame: &[MirroredPixel]) {
        self.frame.clear();
        self.frame.extend_from_slice(frame);
    }

    fn record_status(&mut self, status: Status, changed: bool) {
        self.status = Some(status);
        if changed {
            self.transitions += 1;
        }
    }
}

type PreviewRenderer = StatusRenderer<'static, PreviewDriver, MAX_LEDS, INTENT_CHANNEL_SIZE>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Status Lights Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "status-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    renderer: PreviewRenderer,
    control: ControlSender<'static, INTENT_CHANNEL_SIZE>,
    telemetry: TelemetrySnapshot,
    /// Forced status selected in the UI
    override_status: Option<Status>,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the last tick
    last_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    led_size: f32,
    led_count: usize,
}

fn build_renderer(led_count: usize, now: Instant) -> PreviewRenderer {
    let config = StatusLightsConfig {
        led_count,
        ..StatusLightsConfig::default()
    };
    StatusRenderer::new(
        PreviewDriver::default(),
        CONTROL_CHANNEL.receiver(),
        &config,
        now,
    )
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            renderer: build_renderer(DEFAULT_LED_COUNT, Instant::from_millis(0)),
            control: CONTROL_CHANNEL.sender(),
            telemetry: TelemetrySnapshot::default(),
            override_status: None,
            t_ms: 0,
            last_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every control tick that fell into the elapsed synthetic time
    fn run_ticks(&mut self) {
        while self.last_tick_ms + TICK_MS <= self.t_ms {
            self.last_tick_ms += TICK_MS;
            self.renderer
                .tick(&self.telemetry, Instant::from_millis(self.last_tick_ms));
        }
    }

    /// Replace the renderer, keeping the selected override
    fn rebuild_renderer(&mut self) {
        self.renderer = build_renderer(self.led_count, Instant::from_millis(self.last_tick_ms));
        self.send_override(self.override_status);
    }

    fn send_override(&self, status: Option<Status>) {
        let _ = match status {
            Some(status) => self.control.override_status(status),
            None => self.control.clear_override(),
        };
    }

    fn telemetry_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("Mode:");
                for mode in MODES {
                    ui.selectable_value(&mut self.telemetry.mode, mode, format!("{mode:?}"));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Battery:");
                ui.add(
                    egui::Slider::new(&mut self.telemetry.battery_voltage, 7.0..=13.5)
                        .suffix(" V"),
                );
                ui.checkbox(&mut self.telemetry.arm_calibrated, "Arm calibrated");
                ui.checkbox(&mut self.telemetry.drive_upright, "Upright");
            });

            ui.horizontal(|ui| {
                activity_selector(ui, "Arm:", &mut self.telemetry.arm_activity, &ARM_ACTIVITIES);
                activity_selector(
                    ui,
                    "Drive:",
                    &mut self.telemetry.drive_activity,
                    &DRIVE_ACTIVITIES,
                );
                activity_selector(
                    ui,
                    "Effector:",
                    &mut self.telemetry.effector_activity,
                    &EFFECTOR_ACTIVITIES,
                );
            });

            ui.horizontal(|ui| {
                let GamePieces {
                    wants_cone,
                    wants_cube,
                    has_cone,
                    has_cube,
                } = &mut self.telemetry.pieces;
                ui.checkbox(wants_cone, "Want cone");
                ui.checkbox(wants_cube, "Want cube");
                ui.checkbox(has_cone, "Has cone");
                ui.checkbox(has_cube, "Has cube");
            });
        });
    }

    fn draw_side(&self, ui: &mut egui::Ui, label: &str, side: impl Fn(&MirroredPixel) -> [u8; 3]) {
        let frame = &self.renderer.output().frame;
        let available_width = ui.available_width();
        let led_pitch = self.led_size + LED_GAP;

        ui.label(label);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = frame.len().max(1).div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in frame.iter().enumerate() {
            let row = i / leds_per_row;
            let col = i % leds_per_row;
            let x = origin.x + col as f32 * led_pitch;
            let y = origin.y + row as f32 * led_pitch;

            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            let [r, g, b] = side(pixel);
            painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(r, g, b));
        }
    }
}

fn activity_selector(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut ActivityKind,
    choices: &[ActivityKind],
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(format!("{value:?}"))
        .show_ui(ui, |ui| {
            for choice in choices {
                ui.selectable_value(value, *choice, format!("{choice:?}"));
            }
        });
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_ticks();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Restart").clicked() {
                            self.t_ms = 0;
                            self.last_tick_ms = 0;
                            self.last_frame = StdInstant::now();
                            self.rebuild_renderer();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui.button("Reset timers").clicked() {
                            let _ = self.control.reset_timers();
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            // Strip length is fixed per renderer
                            self.rebuild_renderer();
                        }
                    });
                });
                // </LayoutControls>
            });

            ui.add_space(16.0);
            self.telemetry_controls(ui);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Override:");
                let mut selected = self.override_status;
                egui::ComboBox::from_id_salt("override_selector")
                    .selected_text(selected.map_or("none", Status::as_str))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut selected, None, "none");
                        for status in Status::ALL {
                            ui.selectable_value(&mut selected, Some(status), status.as_str());
                        }
                    });
                if selected != self.override_status {
                    self.override_status = selected;
                    self.send_override(selected);
                }

                let driver = self.renderer.output();
                ui.add_space(16.0);
                ui.label(format!(
                    "Status: {}  (transitions: {})",
                    driver.status.map_or("-", Status::as_str),
                    driver.transitions
                ));
            });

            ui.add_space(16.0);

            // === LED Display ===
            self.draw_side(ui, "Left", |pixel| [pixel.left.r, pixel.left.g, pixel.left.b]);
            ui.add_space(8.0);
            self.draw_side(ui, "Right", |pixel| [pixel.right.r, pixel.right.g, pixel.right.b]);
        });
    }
}

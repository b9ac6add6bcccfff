#![no_std]

pub mod binding;
pub mod bounds;
pub mod classifier;
pub mod color;
pub mod control;
pub mod pattern;
pub mod renderer;
pub mod status;
pub mod strip;
pub mod telemetry;
pub mod timer;

pub use binding::{Look, StatusBindings, VictorySlot};
pub use bounds::{Half, Third};
pub use classifier::{ClassifierConfig, ClassifierState, Rule, RuleTable, StatusClassifier};
pub use control::{ControlChannel, ControlIntent, ControlReceiver, ControlSender};
pub use pattern::{Pattern, PatternLibrary};
pub use renderer::{StatusLightsConfig, StatusRenderer};
pub use status::Status;
pub use strip::{MirroredFrame, MirroredPixel, MirroredStrip};
pub use telemetry::{ActivityKind, GamePieces, RobotMode, RobotTelemetry, TelemetrySnapshot};
pub use timer::Timer;

pub use color::{Hsv, Palette, PaletteColor, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms or a
/// simulation. The renderer is generic over this trait.
pub trait OutputDriver {
    /// Write the mirrored frame to the strip
    fn write(&mut self, frame: &[MirroredPixel]);

    /// Observe the status shown this tick
    ///
    /// Called once per tick before [`write`](Self::write); `changed` is set
    /// when the status differs from the previous tick.
    fn record_status(&mut self, _status: Status, _changed: bool) {}
}

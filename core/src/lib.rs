pub mod presets;
pub mod schedule;
pub mod timer;

// Re-exports for convenience
pub use presets::{AppConfig, AppConfigExt, Preset, PresetError};
pub use schedule::{FormatError, Stage, StageKind, parse_config};
pub use timer::{
    Cue, CueSink, TickSource, TimerEngine, TimerSnapshot, TimerStatus, VisualState,
};

use std::sync::Arc;

use steep_core::{AppConfig, TimerEngine};
use steep_types::AudioSettings;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::audio::AudioCueSink;
use crate::clock::IntervalClock;

/// The engine as the CLI drives it: real interval ticks, cues sent to audio.
pub type CliEngine = TimerEngine<IntervalClock, AudioCueSink>;

/// Shared handle to the engine, locked by both commands and the tick driver.
pub type EngineHandle = Arc<Mutex<CliEngine>>;

#[derive(Default)]
pub struct BackgroundTasks {
    pub tick_driver: Option<JoinHandle<()>>,
    pub audio: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.tick_driver.take() {
            handle.abort();
        }
        if let Some(handle) = self.audio.take() {
            handle.abort();
        }
    }
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub audio_settings: Arc<RwLock<AudioSettings>>,
    pub engine: EngineHandle,
    /// Configuration text currently loaded into the engine
    pub current_config: Arc<RwLock<String>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    /// Build a context around an engine with no stages loaded yet.
    pub fn new(config: AppConfig, clock: IntervalClock, sink: AudioCueSink) -> Self {
        let audio_settings = config.audio.clone();
        Self {
            config: Arc::new(RwLock::new(config)),
            audio_settings: Arc::new(RwLock::new(audio_settings)),
            engine: Arc::new(Mutex::new(TimerEngine::new(Vec::new(), clock, sink))),
            current_config: Arc::new(RwLock::new(String::new())),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }
}

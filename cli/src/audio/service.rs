//! Audio playback service
//!
//! Runs in a background task, receiving AudioEvents via channel. The
//! continuous tone runs on its own schedule, independent of the timer tick.

use std::sync::Arc;
use std::time::Duration;

use steep_core::timer::{Cue, CueSink};
use steep_types::AudioSettings;
use tokio::sync::{RwLock, mpsc};
use tokio::task::JoinHandle;

use super::events::AudioEvent;
use super::tone::TonePlayer;

/// Audio service that turns cue events into tones
pub struct AudioService {
    /// Channel to receive audio events
    event_rx: mpsc::Receiver<AudioEvent>,

    /// Shared audio settings (can be updated at runtime)
    settings: Arc<RwLock<AudioSettings>>,

    player: Arc<dyn TonePlayer>,

    /// Repeating tone task, if one is playing
    continuous: Option<JoinHandle<()>>,
}

impl AudioService {
    pub fn new(
        event_rx: mpsc::Receiver<AudioEvent>,
        settings: Arc<RwLock<AudioSettings>>,
        player: Arc<dyn TonePlayer>,
    ) -> Self {
        Self {
            event_rx,
            settings,
            player,
            continuous: None,
        }
    }

    /// Run the audio service until every sender is dropped
    pub async fn run(mut self) {
        while let Some(event) = self.event_rx.recv().await {
            self.handle(event).await;
        }
        self.stop_continuous();
    }

    pub async fn handle(&mut self, event: AudioEvent) {
        let settings = self.settings.read().await.clone();

        match event {
            AudioEvent::Alert => {
                if settings.enabled {
                    self.player.play(
                        settings.alert_hz,
                        Duration::from_millis(settings.tone_ms),
                        settings.volume,
                    );
                }
            }
            AudioEvent::ContinuousStart => {
                self.stop_continuous();
                if settings.enabled {
                    self.continuous = Some(spawn_continuous(Arc::clone(&self.player), settings));
                }
            }
            AudioEvent::ContinuousStop => self.stop_continuous(),
        }
    }

    pub fn is_continuous_playing(&self) -> bool {
        self.continuous.is_some()
    }

    /// Idempotent
    fn stop_continuous(&mut self) {
        if let Some(task) = self.continuous.take() {
            task.abort();
            tracing::debug!("continuous tone stopped");
        }
    }
}

fn spawn_continuous(player: Arc<dyn TonePlayer>, settings: AudioSettings) -> JoinHandle<()> {
    tracing::debug!(interval_ms = settings.interval_ms, "continuous tone started");
    let tone = Duration::from_millis(settings.tone_ms);
    // an interval's first tick completes immediately, so the first tone plays at once
    let mut interval = tokio::time::interval(Duration::from_millis(settings.interval_ms.max(1)));

    tokio::spawn(async move {
        loop {
            interval.tick().await;
            player.play(settings.continuous_hz, tone, settings.volume);
        }
    })
}

/// Sender handle for sending audio events
pub type AudioSender = mpsc::Sender<AudioEvent>;

/// Create a new audio channel
pub fn create_audio_channel() -> (AudioSender, mpsc::Receiver<AudioEvent>) {
    // Buffer size of 64 should be plenty for audio events
    mpsc::channel(64)
}

/// Cue sink that forwards engine cues to the audio service
#[derive(Clone)]
pub struct AudioCueSink {
    tx: AudioSender,
}

impl AudioCueSink {
    pub fn new(tx: AudioSender) -> Self {
        Self { tx }
    }
}

impl CueSink for AudioCueSink {
    fn emit(&mut self, cue: Cue) {
        if let Err(e) = self.tx.try_send(AudioEvent::from(cue)) {
            tracing::warn!(?cue, error = %e, "dropped audio cue");
        }
    }
}

//! Tone output backends

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Produces a single audible tone. Implementations must not block the caller
/// for the duration of the tone.
pub trait TonePlayer: Send + Sync + 'static {
    fn play(&self, hz: f32, duration: Duration, volume: u8);
}

/// Terminal bell; pitch and length are up to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct Bell;

impl TonePlayer for Bell {
    fn play(&self, _hz: f32, _duration: Duration, volume: u8) {
        if volume == 0 {
            return;
        }
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

#[cfg(feature = "rodio")]
mod synth {
    use std::time::Duration;

    use super::TonePlayer;

    /// Sine tone through the default output device
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SineTone;

    impl TonePlayer for SineTone {
        fn play(&self, hz: f32, duration: Duration, volume: u8) {
            std::thread::spawn(move || {
                use rodio::source::{SineWave, Source};
                use rodio::{OutputStream, Sink};

                let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
                    return;
                };
                let Ok(sink) = Sink::try_new(&stream_handle) else {
                    return;
                };

                sink.set_volume(volume as f32 / 100.0);
                sink.append(SineWave::new(hz).take_duration(duration));
                sink.sleep_until_end();
            });
        }
    }
}

#[cfg(feature = "rodio")]
pub fn default_player() -> Arc<dyn TonePlayer> {
    Arc::new(synth::SineTone)
}

#[cfg(not(feature = "rodio"))]
pub fn default_player() -> Arc<dyn TonePlayer> {
    Arc::new(Bell)
}

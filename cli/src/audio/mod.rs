//! Audio subsystem for stage cues
//!
//! Plays the one-shot alert chime and the repeating end-of-stage tone,
//! with terminal bells by default or synthesized tones with the `rodio`
//! feature.

mod events;
mod service;
mod tone;

pub use events::AudioEvent;
pub use service::{AudioCueSink, AudioSender, AudioService, create_audio_channel};
pub use tone::{Bell, TonePlayer, default_player};

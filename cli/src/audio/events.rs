//! Audio event types for timer cue integration

use steep_core::timer::Cue;

/// Events that can trigger audio playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Short chime when a range window opens
    Alert,

    /// Begin the repeating tone (replaces one already playing)
    ContinuousStart,

    /// Stop the repeating tone, if any
    ContinuousStop,
}

impl From<Cue> for AudioEvent {
    fn from(cue: Cue) -> Self {
        match cue {
            Cue::Alert => AudioEvent::Alert,
            Cue::ContinuousStart => AudioEvent::ContinuousStart,
            Cue::ContinuousStop => AudioEvent::ContinuousStop,
        }
    }
}

//! Cue signals and classification
//!
//! The engine decides *when* a cue starts or stops; producing sound is the
//! job of whatever implements `CueSink`.

use serde::{Deserialize, Serialize};

use super::VisualState;
use crate::schedule::{Stage, StageKind};

/// Seconds before a fixed target at which the yellow warning shows
pub const FIXED_WARNING_SECS: u32 = 5;

/// Audible signals requested by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    /// One-shot chime
    Alert,
    /// Start the repeating tone
    ContinuousStart,
    /// Stop the repeating tone
    ContinuousStop,
}

/// Receiver of cue signals (the signal emitter)
pub trait CueSink {
    fn emit(&mut self, cue: Cue);
}

impl CueSink for Vec<Cue> {
    fn emit(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// What a single tick means for the current stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    /// New visual state, if this second changes it
    pub visual: Option<VisualState>,
    pub alert: bool,
    pub start_continuous: bool,
}

/// Classify `elapsed` seconds into `stage`.
///
/// Pure: the same `(stage, elapsed)` pair always produces the same result.
pub fn classify(stage: &Stage, elapsed: u32) -> Classification {
    let mut out = Classification::default();

    match stage.kind {
        StageKind::Range { min, max } => {
            if elapsed == min {
                out.visual = Some(VisualState::Yellow);
                out.alert = true;
            }
            if elapsed >= max {
                out.visual = Some(VisualState::Blinking);
                out.start_continuous = elapsed == max;
            }
        }
        StageKind::Fixed { duration } => {
            if !stage.is_rinse && duration.checked_sub(FIXED_WARNING_SECS) == Some(elapsed) {
                out.visual = Some(VisualState::Yellow);
            }
            if elapsed == duration {
                out.start_continuous = true;
            }
            if elapsed > duration {
                out.visual = Some(VisualState::Blinking);
            }
        }
    }

    out
}

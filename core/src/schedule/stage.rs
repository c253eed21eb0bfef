//! Stage types
//!
//! A `Stage` is one timed step of a brewing session. Its timing is a tagged
//! variant so every consumer matches exhaustively on the kind instead of
//! probing optional fields.

use serde::{Deserialize, Serialize};

/// Timing target of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum StageKind {
    /// Single target time in seconds
    Fixed { duration: u32 },

    /// Target window in seconds, `min <= max`
    Range { min: u32, max: u32 },
}

/// One step of the ceremony
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage {
    pub kind: StageKind,

    /// Exact (trimmed) text this stage was parsed from
    pub original_text: String,

    /// True for stages that came from a parenthesized rinse group
    #[serde(default)]
    pub is_rinse: bool,
}

impl Stage {
    pub fn fixed(duration: u32, original_text: impl Into<String>) -> Self {
        Self {
            kind: StageKind::Fixed { duration },
            original_text: original_text.into(),
            is_rinse: false,
        }
    }

    pub fn range(min: u32, max: u32, original_text: impl Into<String>) -> Self {
        Self {
            kind: StageKind::Range { min, max },
            original_text: original_text.into(),
            is_rinse: false,
        }
    }

    /// Mark this stage as part of a rinse group
    pub fn rinse(mut self) -> Self {
        self.is_rinse = true;
        self
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, StageKind::Range { .. })
    }
}

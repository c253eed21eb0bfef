//! Session state exposed to renderers

use serde::{Deserialize, Serialize};

use crate::schedule::Stage;

/// Run status of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    /// Advanced past the last stage. Elapsed time keeps counting if the
    /// clock was running; only further advancing is disabled.
    Finished,
}

/// Visual hint for how close the current stage is to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    #[default]
    Normal,
    /// Approaching (fixed) or inside (range) the target
    Yellow,
    /// Target reached or overshot
    Blinking,
}

/// Background treatment a renderer should apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    Normal,
    Rinse,
    Yellow,
    Blinking,
}

/// Read-only view of the engine at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// None when there are no stages
    pub current_stage_index: Option<usize>,
    pub current_stage: Option<Stage>,
    pub elapsed_secs: u32,
    pub status: TimerStatus,
    pub visual_state: VisualState,
    pub stage_count: usize,
    pub continuous_cue_active: bool,
}

impl TimerSnapshot {
    pub fn is_last_stage(&self) -> bool {
        self.current_stage_index
            .is_some_and(|i| i + 1 >= self.stage_count)
    }

    pub fn can_retreat(&self) -> bool {
        self.current_stage_index.is_some_and(|i| i > 0)
    }

    /// Advancing is disabled once the last stage has been finished
    pub fn can_advance(&self) -> bool {
        self.stage_count > 0 && !(self.is_last_stage() && self.status == TimerStatus::Finished)
    }

    pub fn backdrop(&self) -> Backdrop {
        match self.visual_state {
            VisualState::Yellow => Backdrop::Yellow,
            VisualState::Blinking => Backdrop::Blinking,
            VisualState::Normal if self.current_stage.as_ref().is_some_and(|s| s.is_rinse) => {
                Backdrop::Rinse
            }
            VisualState::Normal => Backdrop::Normal,
        }
    }
}

//! Timer engine (the steeping state machine)
//!
//! # Lifecycle
//!
//! 1. Stage list loaded → index 0, `Idle`
//! 2. `start` → `Running`, the tick source delivers one tick per second
//! 3. Each tick increments elapsed time and, while running, classifies it
//!    against the stage
//! 4. `advance_stage` moves on (resetting the stage) or, on the last stage,
//!    marks the session `Finished`
//!
//! Transitions take `&mut self`, so a tick can never observe a half-applied
//! transition.

use super::clock::{Generation, TickSource};
use super::cue::{Cue, CueSink, classify};
use super::state::{TimerSnapshot, TimerStatus, VisualState};
use crate::schedule::Stage;

pub struct TimerEngine<T: TickSource, S: CueSink> {
    stages: Vec<Stage>,
    current_index: usize,
    elapsed_secs: u32,
    status: TimerStatus,
    visual_state: VisualState,

    // ─── Collaborators ──────────────────────────────────────────────────────
    clock: T,
    sink: S,

    // ─── Clock bookkeeping ──────────────────────────────────────────────────
    /// Tag of the current clock run; bumped on every resume and cancel
    generation: Generation,
    clock_live: bool,

    /// Whether a continuous cue has been started and not yet stopped
    continuous_active: bool,
}

impl<T: TickSource, S: CueSink> TimerEngine<T, S> {
    pub fn new(stages: Vec<Stage>, clock: T, sink: S) -> Self {
        Self {
            stages,
            current_index: 0,
            elapsed_secs: 0,
            status: TimerStatus::Idle,
            visual_state: VisualState::Normal,
            clock,
            sink,
            generation: 0,
            clock_live: false,
            continuous_active: false,
        }
    }

    /// Replace the stage list. Always restarts, even for an identical list.
    pub fn load(&mut self, stages: Vec<Stage>) {
        tracing::debug!(stages = stages.len(), "stage list replaced");
        self.stages = stages;
        self.restart();
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.stages.is_empty()).then_some(self.current_index)
    }

    pub fn current_stage(&self) -> Option<&Stage> {
        self.stages.get(self.current_index)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True while ticks are being accepted
    pub fn is_clock_live(&self) -> bool {
        self.clock_live
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            current_stage_index: self.current_index(),
            current_stage: self.current_stage().cloned(),
            elapsed_secs: self.elapsed_secs,
            status: self.status,
            visual_state: self.visual_state,
            stage_count: self.stages.len(),
            continuous_cue_active: self.continuous_active,
        }
    }

    // ─── Transitions ────────────────────────────────────────────────────────

    /// Start or resume counting. No-op while running or without stages.
    pub fn start(&mut self) {
        if self.status == TimerStatus::Running || self.stages.is_empty() {
            return;
        }
        self.status = TimerStatus::Running;
        self.resume_clock();
        tracing::debug!(stage = self.current_index, elapsed = self.elapsed_secs, "timer started");
    }

    /// Freeze elapsed time. No-op unless running.
    pub fn pause(&mut self) {
        if self.status != TimerStatus::Running {
            return;
        }
        self.status = TimerStatus::Paused;
        self.cancel_clock();
        tracing::debug!(elapsed = self.elapsed_secs, "timer paused");
    }

    /// Play/pause shortcut
    pub fn toggle(&mut self) {
        match self.status {
            TimerStatus::Idle | TimerStatus::Paused => self.start(),
            TimerStatus::Running | TimerStatus::Finished => self.pause(),
        }
    }

    /// Restart the current stage from zero, stopped
    pub fn reset(&mut self) {
        self.cancel_clock();
        self.silence();
        self.elapsed_secs = 0;
        self.status = TimerStatus::Idle;
        self.visual_state = VisualState::Normal;
    }

    /// Back to the first stage, stopped
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.reset();
    }

    /// Move to the next stage, or finish on the last one.
    ///
    /// Finishing leaves elapsed time and the clock untouched.
    pub fn advance_stage(&mut self) {
        if self.stages.is_empty() {
            return;
        }
        if self.current_index + 1 < self.stages.len() {
            self.current_index += 1;
            self.reset();
            tracing::debug!(stage = self.current_index, "advanced stage");
        } else {
            self.status = TimerStatus::Finished;
            tracing::debug!(elapsed = self.elapsed_secs, "session finished");
        }
    }

    /// Move to the previous stage. No-op on the first stage.
    pub fn retreat_stage(&mut self) {
        if self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        self.reset();
        tracing::debug!(stage = self.current_index, "retreated stage");
    }

    /// Jump to stage `index` without resetting elapsed time or status.
    ///
    /// Returns false (and changes nothing) when `index` is out of range.
    /// Callers wanting a clean start of that stage follow up with `reset`.
    pub fn set_stage(&mut self, index: usize) -> bool {
        if index >= self.stages.len() {
            return false;
        }
        self.current_index = index;
        self.silence();
        true
    }

    /// Stop an active continuous cue. Safe to call at any time.
    pub fn silence(&mut self) {
        if self.continuous_active {
            self.continuous_active = false;
            self.sink.emit(Cue::ContinuousStop);
        }
    }

    /// Deliver one clock tick.
    ///
    /// Returns false when the tick was discarded because it belongs to a
    /// cancelled clock run.
    pub fn tick(&mut self, generation: Generation) -> bool {
        if !self.clock_live || generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale tick dropped");
            return false;
        }

        self.elapsed_secs = self.elapsed_secs.saturating_add(1);

        // a finished session keeps counting but raises no further cues
        if self.status != TimerStatus::Running {
            return true;
        }

        if let Some(stage) = self.stages.get(self.current_index) {
            let result = classify(stage, self.elapsed_secs);
            if let Some(visual) = result.visual {
                self.visual_state = visual;
            }
            if result.alert {
                self.sink.emit(Cue::Alert);
            }
            if result.start_continuous && !self.continuous_active {
                self.continuous_active = true;
                self.sink.emit(Cue::ContinuousStart);
            }
        }

        true
    }

    // ─── Clock control ──────────────────────────────────────────────────────

    fn resume_clock(&mut self) {
        if self.clock_live {
            return;
        }
        self.generation += 1;
        self.clock_live = true;
        self.clock.resume(self.generation);
    }

    fn cancel_clock(&mut self) {
        if !self.clock_live {
            return;
        }
        self.generation += 1;
        self.clock_live = false;
        self.clock.cancel();
    }
}

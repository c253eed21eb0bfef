//! Timer system
//!
//! This module provides:
//! - **Engine**: the state machine that walks a stage list
//! - **Clock**: the injectable tick source the engine drives
//! - **Cues**: classification of elapsed time and the signals it produces
//! - **State**: statuses, visual hints and snapshots for renderers

mod clock;
mod cue;
mod engine;
mod state;

#[cfg(test)]
pub(crate) mod testing;


pub use clock::{Generation, NoClock, TickSource};
pub use cue::{Classification, Cue, CueSink, FIXED_WARNING_SECS, classify};
pub use engine::TimerEngine;
pub use state::{Backdrop, TimerSnapshot, TimerStatus, VisualState};

//! Tick source abstraction
//!
//! The engine never owns a real timer. It asks a `TickSource` to start
//! delivering one tick per second, tagged with a generation number, and to
//! cancel. Ticks carrying any other generation than the engine's current one
//! are discarded, so a tick that was already in flight when the clock was
//! cancelled can never change state.

/// Identifies one run of the clock
pub type Generation = u64;

/// Something that can deliver `TimerEngine::tick(generation)` once per second
pub trait TickSource {
    /// Begin delivering ticks tagged with `generation`.
    fn resume(&mut self, generation: Generation);

    /// Stop delivering ticks. Must be safe to call when already stopped.
    fn cancel(&mut self);
}

/// Tick source that never fires, for engines driven purely by hand
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClock;

impl TickSource for NoClock {
    fn resume(&mut self, _generation: Generation) {}

    fn cancel(&mut self) {}
}

//! Test doubles for driving the engine without real time

use super::{Cue, Generation, TickSource, TimerEngine};
use crate::schedule::{Stage, parse_config};

/// Tick source that only records what the engine asked of it
#[derive(Debug, Default)]
pub struct ManualClock {
    pub running: Option<Generation>,
    pub resumes: usize,
    pub cancels: usize,
}

impl TickSource for ManualClock {
    fn resume(&mut self, generation: Generation) {
        self.running = Some(generation);
        self.resumes += 1;
    }

    fn cancel(&mut self) {
        self.running = None;
        self.cancels += 1;
    }
}

pub type TestEngine = TimerEngine<ManualClock, Vec<Cue>>;

pub fn engine(stages: Vec<Stage>) -> TestEngine {
    TimerEngine::new(stages, ManualClock::default(), Vec::new())
}

pub fn engine_for(config: &str) -> TestEngine {
    engine(parse_config(config).expect("test config must parse"))
}

/// Deliver `n` ticks from the clock's current run
pub fn tick_n(engine: &mut TestEngine, n: u32) {
    for _ in 0..n {
        let generation = engine
            .clock()
            .running
            .expect("clock must be running to tick");
        assert!(engine.tick(generation));
    }
}

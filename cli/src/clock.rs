//! One-second tick source backed by a tokio interval
//!
//! Each run sends the generation it was started with; the engine drops ticks
//! from runs it has since cancelled.

use std::time::Duration;

use steep_core::timer::{Generation, TickSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub type TickSender = mpsc::UnboundedSender<Generation>;
pub type TickReceiver = mpsc::UnboundedReceiver<Generation>;

pub fn tick_channel() -> (TickSender, TickReceiver) {
    mpsc::unbounded_channel()
}

pub struct IntervalClock {
    ticks: TickSender,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl IntervalClock {
    pub fn new(ticks: TickSender) -> Self {
        Self::with_period(ticks, Duration::from_secs(1))
    }

    pub fn with_period(ticks: TickSender, period: Duration) -> Self {
        Self {
            ticks,
            period,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl TickSource for IntervalClock {
    /// Must be called from within a tokio runtime.
    fn resume(&mut self, generation: Generation) {
        self.cancel();

        let ticks = self.ticks.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            // first tick one full period after starting
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(generation).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, "tick clock resumed");
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("tick clock cancelled");
        }
    }
}

impl Drop for IntervalClock {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_with_generation() {
        let (tx, mut rx) = tick_channel();
        let mut clock = IntervalClock::new(tx);
        clock.resume(7);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, Some(7));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_delivery() {
        let (tx, mut rx) = tick_channel();
        let mut clock = IntervalClock::new(tx);
        clock.resume(1);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        clock.cancel();
        clock.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.recv().await, Some(1));
        assert!(rx.try_recv().is_err());
        assert!(!clock.is_running());
    }
}

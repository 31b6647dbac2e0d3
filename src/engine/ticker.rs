//! Live cooldown countdown.
//!
//! Recomputes the remaining seconds of one gate on a fixed interval, for the
//! "Refresh (42s)" label. Purely observational: it only reads the stamp.

use std::sync::Arc;

use crate::engine::cooldown::CooldownGate;
use crate::utils::Clock;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_COUNTDOWN_TICKS;

#[derive(Clone)]
pub struct CountdownTicker {
    gate: CooldownGate,
    clock: Arc<dyn Clock>,
}

impl CountdownTicker {
    pub fn new(gate: CooldownGate, clock: Arc<dyn Clock>) -> Self {
        Self { gate, clock }
    }

    /// Remaining whole seconds right now.
    pub fn tick(&self) -> i64 {
        let remaining = self.gate.remaining_secs(self.clock.now_ms());

        #[cfg(debug_assertions)]
        if PRINT_COUNTDOWN_TICKS {
            log::info!("[countdown] {}: {remaining}s", self.gate.key());
        }
        remaining
    }

    pub fn progress(&self) -> f32 {
        self.gate.progress(self.clock.now_ms())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::spawn_countdown;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;
    use tokio::sync::watch;
    use tokio::task::JoinHandle;

    use super::CountdownTicker;

    /// Publishes `ticker.tick()` every `every` until all receivers are dropped.
    /// Only changes are sent.
    pub fn spawn_countdown(
        ticker: CountdownTicker,
        every: Duration,
    ) -> (watch::Receiver<i64>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(ticker.tick());

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                if tx.is_closed() {
                    break;
                }
                let remaining = ticker.tick();
                tx.send_if_modified(|current| {
                    if *current == remaining {
                        return false;
                    }
                    *current = remaining;
                    true
                });
            }
        });

        (rx, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SharedStore;
    use crate::utils::app_time::ManualClock;
    use std::time::Duration;

    fn ticker_at(clock: &ManualClock) -> (CountdownTicker, CooldownGate) {
        let gate = CooldownGate::new(SharedStore::in_memory(), "k", 60_000);
        (
            CountdownTicker::new(gate.clone(), Arc::new(clock.clone())),
            gate,
        )
    }

    #[test]
    fn tick_reads_without_stamping() {
        let clock = ManualClock::at(0);
        let (ticker, gate) = ticker_at(&clock);

        assert_eq!(ticker.tick(), 0);
        assert!(gate.last_success_at().is_none());

        gate.record_success(0);
        clock.set(20_000);
        assert_eq!(ticker.tick(), 40);
        assert_eq!(gate.last_success_at(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_publishes_changes_until_zero() {
        let clock = ManualClock::at(0);
        let (ticker, gate) = ticker_at(&clock);
        gate.record_success(0);

        let (mut rx, handle) = spawn_countdown(ticker, Duration::from_secs(1));
        assert_eq!(*rx.borrow(), 60);

        clock.set(45_000);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 15);

        clock.set(61_000);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
        assert_eq!(gate.last_success_at(), Some(0));

        drop(rx);
        handle.await.unwrap();
    }
}

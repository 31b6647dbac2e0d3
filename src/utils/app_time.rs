// src/utils/app_time.rs

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Wall-clock source in epoch milliseconds.
///
/// Cooldown stamps must survive reloads, so they are wall-clock based rather
/// than `AppInstant` based.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // web_time falls through to std on native targets
        web_time::SystemTime::now()
            .duration_since(web_time::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::Clock;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Test clock that only moves when told to.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct ManualClock {
        ms: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub(crate) fn at(ms: i64) -> Self {
            Self {
                ms: Arc::new(AtomicI64::new(ms)),
            }
        }

        pub(crate) fn set(&self, ms: i64) {
            self.ms.store(ms, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.ms.load(Ordering::SeqCst)
        }
    }
}

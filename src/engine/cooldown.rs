//! Refresh cooldown shared across reloads.
//!
//! Each data page owns one cooldown domain. The gate only stores the time of
//! the last successful refresh; everything else is derived from it, so the
//! admission and countdown helpers are plain functions of `(now, last, duration)`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{COOLDOWN, PERSISTENCE};
use crate::store::SharedStore;
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_COOLDOWN_DECISIONS;

/// Independent cooldown domains, one per data page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CooldownDomain {
    BalanceStats,
    ClaimRewards,
}

impl CooldownDomain {
    pub fn store_key(&self) -> &'static str {
        match self {
            CooldownDomain::BalanceStats => PERSISTENCE.keys.balance_cooldown,
            CooldownDomain::ClaimRewards => PERSISTENCE.keys.claim_cooldown,
        }
    }
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected { remaining_ms: i64 },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }

    /// Remaining wait in whole seconds (rounded up); 0 when admitted.
    pub fn remaining_secs(&self) -> i64 {
        match self {
            Admission::Admitted => 0,
            Admission::Rejected { remaining_ms } => TimeUtils::ms_to_ceil_secs(*remaining_ms),
        }
    }
}

/// Time left before the next refresh is allowed, clamped to `[0, duration_ms]`.
///
/// A stamp in the future (clock moved backwards) counts as a full cooldown.
pub fn remaining_ms(now_ms: i64, last_success_at: Option<i64>, duration_ms: i64) -> i64 {
    let Some(last) = last_success_at else {
        return 0;
    };
    let elapsed = now_ms.saturating_sub(last);
    duration_ms.saturating_sub(elapsed).clamp(0, duration_ms.max(0))
}

pub fn remaining_secs(now_ms: i64, last_success_at: Option<i64>, duration_ms: i64) -> i64 {
    TimeUtils::ms_to_ceil_secs(remaining_ms(now_ms, last_success_at, duration_ms))
}

pub fn admit(now_ms: i64, last_success_at: Option<i64>, duration_ms: i64) -> Admission {
    match remaining_ms(now_ms, last_success_at, duration_ms) {
        0 => Admission::Admitted,
        remaining_ms => Admission::Rejected { remaining_ms },
    }
}

/// Persisted cooldown for one domain.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    store: SharedStore,
    key: String,
    duration_ms: i64,
    /// Set once a malformed stamp has been logged; cleared by a valid read
    malformed_reported: Arc<AtomicBool>,
}

impl CooldownGate {
    pub fn new(store: SharedStore, key: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            store,
            key: key.into(),
            duration_ms,
            malformed_reported: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Gate for a page domain with the default duration.
    pub fn for_domain(store: SharedStore, domain: CooldownDomain) -> Self {
        Self::new(store, domain.store_key(), COOLDOWN.duration_ms)
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored stamp, or `None` when absent or unparsable.
    ///
    /// A malformed stamp is logged once, not on every read.
    pub fn last_success_at(&self) -> Option<i64> {
        let raw = self.store.get(&self.key)?;
        match raw.trim().parse::<i64>() {
            Ok(ms) => {
                self.malformed_reported.store(false, Ordering::Relaxed);
                Some(ms)
            }
            Err(e) => {
                if !self.malformed_reported.swap(true, Ordering::Relaxed) {
                    log::warn!(
                        "Ignoring malformed cooldown stamp '{raw}' under '{}': {e}",
                        self.key
                    );
                }
                None
            }
        }
    }

    pub fn check(&self, now_ms: i64) -> Admission {
        let admission = admit(now_ms, self.last_success_at(), self.duration_ms);

        #[cfg(debug_assertions)]
        if PRINT_COOLDOWN_DECISIONS {
            log::info!("[cooldown] {} @ {now_ms}: {:?}", self.key, admission);
        }
        admission
    }

    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        remaining_ms(now_ms, self.last_success_at(), self.duration_ms)
    }

    pub fn remaining_secs(&self, now_ms: i64) -> i64 {
        remaining_secs(now_ms, self.last_success_at(), self.duration_ms)
    }

    /// Elapsed fraction of the cooldown in `[0, 1]`; 1 when no cooldown is active.
    pub fn progress(&self, now_ms: i64) -> f32 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        let remaining = self.remaining_ms(now_ms);
        (self.duration_ms - remaining) as f32 / self.duration_ms as f32
    }

    /// Stamps a successful refresh. The stored stamp never moves backwards.
    pub fn record_success(&self, now_ms: i64) -> i64 {
        let stamp = match self.last_success_at() {
            Some(prev) if prev > now_ms => prev,
            _ => now_ms,
        };
        self.store.set(&self.key, stamp.to_string());
        stamp
    }
}

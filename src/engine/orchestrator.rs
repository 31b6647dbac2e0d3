//! Fan-out fetch with all-or-nothing commit.
//!
//! A refresh runs every lookup of a [`LookupSet`] concurrently against one
//! identifier. Only a fully successful round touches persisted state: the
//! cooldown is stamped and the identifier is pushed into the recent list,
//! once each, after the results are assembled.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::data::{LookupError, LookupSet};
use crate::engine::cooldown::{Admission, CooldownDomain, CooldownGate};
use crate::engine::recency::RecencyCache;
use crate::store::SharedStore;
use crate::utils::Clock;
#[cfg(debug_assertions)]
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_FETCH_SUMMARY;

/// Error types for a refresh round
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Nothing to look up
    MissingIdentifier,
    /// The page is still cooling down
    CooldownActive { remaining_secs: i64 },
    /// At least one lookup failed; nothing was committed
    Lookup(LookupError),
    /// The round was cancelled while in flight; its results were dropped
    Superseded,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingIdentifier => write!(f, "Please enter a public key"),
            FetchError::CooldownActive { remaining_secs } => write!(
                f,
                "Please wait {} seconds before fetching again",
                remaining_secs
            ),
            FetchError::Lookup(e) => {
                write!(f, "Failed to fetch miner stats ({}). Please try again", e)
            }
            FetchError::Superseded => write!(f, "Fetch was cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<LookupError> for FetchError {
    fn from(e: LookupError) -> Self {
        FetchError::Lookup(e)
    }
}

/// Invalidates in-flight rounds of the orchestrator it came from.
///
/// Hand this to whatever owns the view; calling [`CancelHandle::cancel`] on
/// teardown makes late completions return [`FetchError::Superseded`] instead
/// of writing state.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    generation: Arc<AtomicU64>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

pub struct FetchOrchestrator {
    gate: CooldownGate,
    recency: Option<RecencyCache>,
    clock: Arc<dyn Clock>,
    generation: CancelHandle,
}

impl FetchOrchestrator {
    pub fn new(gate: CooldownGate, clock: Arc<dyn Clock>) -> Self {
        Self {
            gate,
            recency: None,
            clock,
            generation: CancelHandle::default(),
        }
    }

    /// Successful rounds also feed `recency`.
    pub fn with_recency(mut self, recency: RecencyCache) -> Self {
        self.recency = Some(recency);
        self
    }

    /// Balance/statistics page: own cooldown, remembers queried addresses.
    pub fn balance_page(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            CooldownGate::for_domain(store.clone(), CooldownDomain::BalanceStats),
            clock,
        )
        .with_recency(RecencyCache::with_defaults(store))
    }

    /// Claim page: own cooldown, keyed to the connected wallet, no recent list.
    pub fn claim_page(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            CooldownGate::for_domain(store, CooldownDomain::ClaimRewards),
            clock,
        )
    }

    pub fn gate(&self) -> &CooldownGate {
        &self.gate
    }

    pub fn recency(&self) -> Option<&RecencyCache> {
        self.recency.as_ref()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.generation.clone()
    }

    /// Admission check against the current time. Does not change state.
    pub fn admit(&self) -> Admission {
        self.gate.check(self.clock.now_ms())
    }

    /// Runs `lookups` for `identifier` without checking the cooldown.
    ///
    /// Callers gate this with [`FetchOrchestrator::admit`] (or use
    /// [`FetchOrchestrator::admit_and_run`]). Failed lookups are not retried.
    pub async fn run<L>(&self, identifier: &str, lookups: &L) -> Result<L::Output, FetchError>
    where
        L: LookupSet + ?Sized,
    {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(FetchError::MissingIdentifier);
        }

        let generation = self.generation.current();
        #[cfg(debug_assertions)]
        let started = now();

        #[cfg(debug_assertions)]
        if PRINT_FETCH_SUMMARY {
            log::info!("[fetch] {} for {identifier} started", lookups.signature());
        }

        let outcome = lookups.fetch_all(identifier).await;

        if self.generation.current() != generation {
            log::info!(
                "[fetch] {} for {identifier} finished after cancellation; discarding",
                lookups.signature()
            );
            return Err(FetchError::Superseded);
        }

        let output = outcome.map_err(|e| {
            log::error!("❌ {} fetch for {identifier} failed: {}", lookups.signature(), e);
            FetchError::Lookup(e)
        })?;

        self.gate.record_success(self.clock.now_ms());
        if let Some(recency) = &self.recency {
            recency.remember(identifier);
        }

        #[cfg(debug_assertions)]
        if PRINT_FETCH_SUMMARY {
            log::info!(
                "✅ [fetch] {} for {identifier} completed in {:.2}s",
                lookups.signature(),
                started.elapsed().as_secs_f32()
            );
        }
        Ok(output)
    }

    /// [`FetchOrchestrator::run`] behind the cooldown check.
    pub async fn admit_and_run<L>(
        &self,
        identifier: &str,
        lookups: &L,
    ) -> Result<L::Output, FetchError>
    where
        L: LookupSet + ?Sized,
    {
        let admission = self.admit();
        if !admission.is_admitted() {
            return Err(FetchError::CooldownActive {
                remaining_secs: admission.remaining_secs(),
            });
        }
        self.run(identifier, lookups).await
    }
}

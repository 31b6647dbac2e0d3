use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{ClaimError, ClaimPolicy, MinerRewards};

/// Builds, signs and sends the claim transaction for a wallet.
#[async_trait]
pub trait ClaimSubmitter: Send + Sync {
    /// Returns the transaction signature.
    async fn submit_claim(&self, wallet: &str) -> Result<String>;
}

/// Checks a claim request and keeps at most one claim in flight.
#[derive(Debug, Default)]
pub struct ClaimController {
    policy: ClaimPolicy,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the claim ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ClaimController {
    pub fn new(policy: ClaimPolicy) -> Self {
        Self {
            policy,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn policy(&self) -> &ClaimPolicy {
        &self.policy
    }

    pub fn is_claiming(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether the last fetched rewards allow a claim at all.
    pub fn can_claim(&self, rewards: Option<&MinerRewards>) -> bool {
        rewards.is_some_and(|r| self.policy.meets_minimum(r))
    }

    /// `wallet` is the connected wallet, if any; `rewards` the last fetched
    /// balance, if any.
    pub async fn claim(
        &self,
        wallet: Option<&str>,
        rewards: Option<&MinerRewards>,
        submitter: &dyn ClaimSubmitter,
    ) -> Result<String, ClaimError> {
        let wallet = wallet
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(ClaimError::WalletNotConnected)?;

        if !self.can_claim(rewards) {
            return Err(ClaimError::InsufficientRewards {
                minimum_coal: self.policy.minimum_coal,
                minimum_ore: self.policy.minimum_ore,
            });
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ClaimError::AlreadyClaiming);
        }
        let _guard = InFlight(&self.in_flight);

        match submitter.submit_claim(wallet).await {
            Ok(signature) => {
                log::info!("Claim queued for {wallet}: {signature}");
                Ok(signature)
            }
            Err(e) => {
                log::error!("❌ Claim failed for {wallet}: {:#}", e);
                Err(ClaimError::Submission(format!("{:#}", e)))
            }
        }
    }
}

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;
use std::future::Future;

use crate::domain::{
    EarningRecord, EarningsWindow, LastSubmission, LoyaltyMultiplier, MinerRewards,
    ReprocessEarning, ReprocessSchedule,
};

/// The pool's remote services, one method per request.
///
/// Implementations own transport, timeouts and response decoding; the engine
/// only sees a typed value or an error.
#[async_trait]
pub trait MinerDataSource: Send + Sync {
    async fn miner_rewards(&self, miner: &str) -> Result<MinerRewards>;

    async fn last_submission(&self, miner: &str) -> Result<LastSubmission>;

    async fn chromium_reprocessing_info(&self) -> Result<ReprocessSchedule>;

    async fn diamond_hands_reprocessing_info(&self) -> Result<ReprocessSchedule>;

    async fn last_chromium_earning(&self, miner: &str) -> Result<ReprocessEarning>;

    async fn last_diamond_hands_earning(&self, miner: &str) -> Result<ReprocessEarning>;

    async fn diamond_hands_multiplier(&self, miner: &str) -> Result<LoyaltyMultiplier>;

    async fn earnings_submissions(
        &self,
        miner: &str,
        window: EarningsWindow,
    ) -> Result<Vec<EarningRecord>>;

    /// Pool LP tokens sitting in the miner's wallet.
    async fn lp_wallet_balance(&self, miner: &str) -> Result<Decimal>;

    /// Pool LP tokens the miner has staked.
    async fn lp_stake(&self, miner: &str) -> Result<Decimal>;
}

/// A fixed set of lookups fanned out against one identifier.
#[async_trait]
pub trait LookupSet: Send + Sync {
    type Output: Send;

    /// A short name for logs.
    fn signature(&self) -> &'static str;

    /// Runs every lookup concurrently and waits for all of them. Fails if any
    /// one fails.
    async fn fetch_all(&self, identifier: &str) -> Result<Self::Output, LookupError>;
}

/// A named lookup that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub lookup: &'static str,
    pub message: String,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup '{}' failed: {}", self.lookup, self.message)
    }
}

impl std::error::Error for LookupError {}

/// Tags a lookup future with its name and logs its failure.
pub async fn named<T>(
    lookup: &'static str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T, LookupError> {
    fut.await.map_err(|e| {
        log::warn!("Lookup '{}' failed: {:#}", lookup, e);
        LookupError {
            lookup,
            message: format!("{:#}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn named_tags_failures() {
        let ok = named("a", async { Ok::<_, anyhow::Error>(1) }).await;
        assert_eq!(ok, Ok(1));

        let err = named::<u8>("miner_rewards", async { Err(anyhow!("timeout")) })
            .await
            .unwrap_err();
        assert_eq!(err.lookup, "miner_rewards");
        assert_eq!(err.to_string(), "lookup 'miner_rewards' failed: timeout");
    }
}

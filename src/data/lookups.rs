//! The lookup sets behind each data page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::analysis::{WindowedStats, aggregate};
use crate::config::STATS;
use crate::data::source::{LookupError, LookupSet, MinerDataSource, named};
use crate::domain::{
    EarningRecord, EarningsWindow, LastSubmission, LoyaltyMultiplier, LpBalance, MinerRewards,
    ReprocessEarning, ReprocessSchedule, WindowError,
};

/// Everything shown on the balance tab, fetched in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSnapshot {
    pub rewards: MinerRewards,
    pub last_submission: LastSubmission,
    pub chromium_schedule: ReprocessSchedule,
    pub diamond_hands_schedule: ReprocessSchedule,
    pub chromium_earning: ReprocessEarning,
    pub diamond_hands_earning: ReprocessEarning,
    pub loyalty: LoyaltyMultiplier,
}

pub struct BalanceLookups {
    source: Arc<dyn MinerDataSource>,
}

impl BalanceLookups {
    pub fn new(source: Arc<dyn MinerDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl LookupSet for BalanceLookups {
    type Output = BalanceSnapshot;

    fn signature(&self) -> &'static str {
        "balance"
    }

    async fn fetch_all(&self, identifier: &str) -> Result<BalanceSnapshot, LookupError> {
        let src = self.source.as_ref();
        let (
            rewards,
            last_submission,
            chromium_schedule,
            diamond_hands_schedule,
            chromium_earning,
            diamond_hands_earning,
            loyalty,
        ) = futures::join!(
            named("miner_rewards", src.miner_rewards(identifier)),
            named("last_submission", src.last_submission(identifier)),
            named("chromium_schedule", src.chromium_reprocessing_info()),
            named("diamond_hands_schedule", src.diamond_hands_reprocessing_info()),
            named("chromium_earning", src.last_chromium_earning(identifier)),
            named("diamond_hands_earning", src.last_diamond_hands_earning(identifier)),
            named("diamond_hands_multiplier", src.diamond_hands_multiplier(identifier)),
        );

        Ok(BalanceSnapshot {
            rewards: rewards?,
            last_submission: last_submission?,
            chromium_schedule: chromium_schedule?,
            diamond_hands_schedule: diamond_hands_schedule?,
            chromium_earning: chromium_earning?,
            diamond_hands_earning: diamond_hands_earning?,
            loyalty: loyalty?,
        })
    }
}

/// Submissions tab: the window's records and their statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionsReport {
    pub window: EarningsWindow,
    pub records: Vec<EarningRecord>,
    /// `None` when the window holds no records
    pub stats: Option<WindowedStats>,
}

pub struct SubmissionLookups {
    source: Arc<dyn MinerDataSource>,
    window: EarningsWindow,
}

impl SubmissionLookups {
    pub fn new(source: Arc<dyn MinerDataSource>, window: EarningsWindow) -> Self {
        Self { source, window }
    }

    /// Lookups for the `hours` leading up to `now`.
    pub fn trailing(
        source: Arc<dyn MinerDataSource>,
        now: DateTime<Utc>,
        hours: i64,
    ) -> Result<Self, WindowError> {
        Ok(Self::new(source, EarningsWindow::trailing(now, hours)?))
    }

    /// Lookups for the default trailing window.
    pub fn recent(
        source: Arc<dyn MinerDataSource>,
        now: DateTime<Utc>,
    ) -> Result<Self, WindowError> {
        Self::trailing(source, now, STATS.window_hours)
    }

    pub fn window(&self) -> EarningsWindow {
        self.window
    }
}

#[async_trait]
impl LookupSet for SubmissionLookups {
    type Output = SubmissionsReport;

    fn signature(&self) -> &'static str {
        "submissions"
    }

    async fn fetch_all(&self, identifier: &str) -> Result<SubmissionsReport, LookupError> {
        let records = named(
            "earnings_submissions",
            self.source.earnings_submissions(identifier, self.window),
        )
        .await?;

        let stats = aggregate(&records);
        Ok(SubmissionsReport {
            window: self.window,
            records,
            stats,
        })
    }
}

/// Claim page: claimable rewards and LP positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSnapshot {
    pub rewards: MinerRewards,
    pub lp: LpBalance,
}

pub struct ClaimLookups {
    source: Arc<dyn MinerDataSource>,
}

impl ClaimLookups {
    pub fn new(source: Arc<dyn MinerDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl LookupSet for ClaimLookups {
    type Output = ClaimSnapshot;

    fn signature(&self) -> &'static str {
        "claim"
    }

    async fn fetch_all(&self, identifier: &str) -> Result<ClaimSnapshot, LookupError> {
        let src = self.source.as_ref();
        let (rewards, wallet, staked) = futures::join!(
            named("miner_rewards", src.miner_rewards(identifier)),
            named("lp_wallet_balance", src.lp_wallet_balance(identifier)),
            named("lp_stake", src.lp_stake(identifier)),
        );

        Ok(ClaimSnapshot {
            rewards: rewards?,
            lp: LpBalance {
                wallet: wallet?,
                staked: staked?,
            },
        })
    }
}

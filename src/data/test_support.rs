//! Scriptable in-process `MinerDataSource` for tests.

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use crate::data::source::MinerDataSource;
use crate::domain::{
    EarningRecord, EarningsWindow, LastSubmission, LoyaltyMultiplier, MinerRewards,
    ReprocessEarning, ReprocessSchedule,
};

#[derive(Default)]
pub(crate) struct FakeSource {
    failing: HashSet<&'static str>,
    delays_ms: HashMap<&'static str, u64>,
    records: Vec<EarningRecord>,
    started: Mutex<Vec<&'static str>>,
    finished: Mutex<Vec<&'static str>>,
    last_window: Mutex<Option<EarningsWindow>>,
}

impl FakeSource {
    pub(crate) fn fail(mut self, lookup: &'static str) -> Self {
        self.failing.insert(lookup);
        self
    }

    pub(crate) fn delay(mut self, lookup: &'static str, ms: u64) -> Self {
        self.delays_ms.insert(lookup, ms);
        self
    }

    pub(crate) fn with_records(mut self, records: Vec<EarningRecord>) -> Self {
        self.records = records;
        self
    }

    pub(crate) fn started(&self) -> Vec<&'static str> {
        self.started.lock().unwrap().clone()
    }

    pub(crate) fn finished(&self) -> Vec<&'static str> {
        self.finished.lock().unwrap().clone()
    }

    pub(crate) fn last_window(&self) -> Option<EarningsWindow> {
        *self.last_window.lock().unwrap()
    }

    pub(crate) fn rewards() -> MinerRewards {
        MinerRewards {
            coal: Decimal::from(12),
            ore: Decimal::new(3, 2),
            chromium: Decimal::ONE,
        }
    }

    pub(crate) fn record(id: &str, miner: i64, best: i64) -> EarningRecord {
        EarningRecord {
            challenge_id: id.to_string(),
            miner_hashpower: Decimal::from(miner),
            best_challenge_hashpower: Decimal::from(best),
            timestamp: Utc::now(),
        }
    }

    fn schedule() -> ReprocessSchedule {
        ReprocessSchedule {
            last_reprocess: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            next_reprocess: Utc.with_ymd_and_hms(2024, 5, 8, 0, 0, 0).unwrap(),
        }
    }

    async fn step(&self, lookup: &'static str) -> Result<()> {
        self.started.lock().unwrap().push(lookup);
        if let Some(ms) = self.delays_ms.get(lookup) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing.contains(lookup) {
            bail!("{lookup} unavailable");
        }
        self.finished.lock().unwrap().push(lookup);
        Ok(())
    }
}

#[async_trait]
impl MinerDataSource for FakeSource {
    async fn miner_rewards(&self, _miner: &str) -> Result<MinerRewards> {
        self.step("miner_rewards").await?;
        Ok(Self::rewards())
    }

    async fn last_submission(&self, _miner: &str) -> Result<LastSubmission> {
        self.step("last_submission").await?;
        Ok(LastSubmission {
            difficulty: 21,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        })
    }

    async fn chromium_reprocessing_info(&self) -> Result<ReprocessSchedule> {
        self.step("chromium_schedule").await?;
        Ok(Self::schedule())
    }

    async fn diamond_hands_reprocessing_info(&self) -> Result<ReprocessSchedule> {
        self.step("diamond_hands_schedule").await?;
        Ok(Self::schedule())
    }

    async fn last_chromium_earning(&self, _miner: &str) -> Result<ReprocessEarning> {
        self.step("chromium_earning").await?;
        Ok(ReprocessEarning {
            chromium: Decimal::new(25, 1),
            ..Default::default()
        })
    }

    async fn last_diamond_hands_earning(&self, _miner: &str) -> Result<ReprocessEarning> {
        self.step("diamond_hands_earning").await?;
        Ok(ReprocessEarning {
            coal: Decimal::from(4),
            ingot: Decimal::ONE,
            ..Default::default()
        })
    }

    async fn diamond_hands_multiplier(&self, _miner: &str) -> Result<LoyaltyMultiplier> {
        self.step("diamond_hands_multiplier").await?;
        Ok(LoyaltyMultiplier {
            last_claim: None,
            multiplier: Decimal::new(15, 1),
        })
    }

    async fn earnings_submissions(
        &self,
        _miner: &str,
        window: EarningsWindow,
    ) -> Result<Vec<EarningRecord>> {
        *self.last_window.lock().unwrap() = Some(window);
        self.step("earnings_submissions").await?;
        Ok(self.records.clone())
    }

    async fn lp_wallet_balance(&self, _miner: &str) -> Result<Decimal> {
        self.step("lp_wallet_balance").await?;
        Ok(Decimal::from(7))
    }

    async fn lp_stake(&self, _miner: &str) -> Result<Decimal> {
        self.step("lp_stake").await?;
        Ok(Decimal::from(3))
    }
}

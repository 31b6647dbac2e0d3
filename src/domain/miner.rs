//! Values returned by the pool's remote services.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unclaimed rewards held by the pool for a miner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MinerRewards {
    pub coal: Decimal,
    pub ore: Decimal,
    pub chromium: Decimal,
}

/// Rewards credited by one reprocessing run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReprocessEarning {
    pub coal: Decimal,
    pub ore: Decimal,
    pub chromium: Decimal,
    pub ingot: Decimal,
    pub wood: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LastSubmission {
    pub difficulty: u32,
    pub created_at: DateTime<Utc>,
}

/// When a reprocessing run last happened and when the next one is due.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReprocessSchedule {
    pub last_reprocess: DateTime<Utc>,
    pub next_reprocess: DateTime<Utc>,
}

/// Diamond-hands multiplier; grows while the miner does not claim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LoyaltyMultiplier {
    pub last_claim: Option<DateTime<Utc>>,
    pub multiplier: Decimal,
}

/// Pool LP tokens held in the wallet and staked with the guild.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LpBalance {
    pub wallet: Decimal,
    pub staked: Decimal,
}

/// One challenge the miner earned on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningRecord {
    pub challenge_id: String,
    pub miner_hashpower: Decimal,
    pub best_challenge_hashpower: Decimal,
    pub timestamp: DateTime<Utc>,
}

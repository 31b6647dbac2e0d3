// Domain types and value objects
pub mod claim;
pub mod miner;
pub mod window;

// Re-export commonly used types
pub use claim::{ClaimError, ClaimPolicy, validate_unstake_amount};
pub use miner::{
    EarningRecord, LastSubmission, LoyaltyMultiplier, LpBalance, MinerRewards, ReprocessEarning,
    ReprocessSchedule,
};
pub use window::{EarningsWindow, WindowError};

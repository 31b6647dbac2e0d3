//! Configuration module for the pool dashboard core.

pub mod claim;
pub mod cooldown;
pub mod debug;
pub mod persistence;
pub mod stats;

// Re-export commonly used items
pub use claim::{CLAIM, ClaimConfig};
pub use cooldown::{COOLDOWN, CooldownConfig};
pub use persistence::{PERSISTENCE, RECENCY, PersistenceConfig, RecencyConfig, StoreKeys};
pub use stats::{STATS, StatsConfig};

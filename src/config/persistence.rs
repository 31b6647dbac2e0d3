//! Persisted client-state configuration

/// Keys under which the dashboard stores its client-local state.
pub struct StoreKeys {
    /// Last successful refresh of the balance/statistics page
    pub balance_cooldown: &'static str,
    /// Last successful refresh of the claim-rewards page
    pub claim_cooldown: &'static str,
    /// Recently queried miner addresses
    pub recent_addresses: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub keys: StoreKeys,
    /// Path of the JSON store used by the native binary
    pub store_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    keys: StoreKeys {
        balance_cooldown: "lastBalanceStatsFetchTime",
        claim_cooldown: "lastClaimRewardsFetchTime",
        recent_addresses: "recentAddresses",
    },
    store_path: ".states.json",
};

/// Recent address list configuration
pub struct RecencyConfig {
    // Oldest entries beyond this count are dropped on every write
    pub max_entries: usize,
}

pub const RECENCY: RecencyConfig = RecencyConfig { max_entries: 20 };

//! Refresh cooldown configuration

use crate::utils::TimeUtils;

/// Settings shared by every cooldown domain
pub struct CooldownConfig {
    // Minimum gap between two successful refreshes of the same page (ms)
    pub duration_ms: i64,
    // How often the countdown shown next to the refresh button is recomputed (ms)
    pub tick_interval_ms: i64,
}

pub const COOLDOWN: CooldownConfig = CooldownConfig {
    duration_ms: TimeUtils::MS_IN_MIN,
    tick_interval_ms: TimeUtils::MS_IN_S,
};

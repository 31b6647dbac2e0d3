//! Submission statistics configuration

pub struct StatsConfig {
    // Trailing window requested from the submission history service
    pub window_hours: i64,
}

pub const STATS: StatsConfig = StatsConfig { window_hours: 12 };

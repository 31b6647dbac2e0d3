pub mod windowed_stats;

pub use windowed_stats::{WindowedStats, aggregate};

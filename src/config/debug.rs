//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet even when compiled with `--features debug_assertions`.

/// Emit a line for every cooldown admission decision.
pub const PRINT_COOLDOWN_DECISIONS: bool = false;

/// Emit fan-out start/finish summaries (lookup set, identifier, elapsed).
pub const PRINT_FETCH_SUMMARY: bool = true;

/// Emit details of key-value store reads and writes.
pub const PRINT_STORE_SERDE: bool = false;

/// Emit every countdown tick published by the ticker.
pub const PRINT_COUNTDOWN_TICKS: bool = false;

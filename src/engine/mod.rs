pub mod claim;
pub mod cooldown;
pub mod orchestrator;
pub mod recency;
pub mod ticker;

// Re-export key components
pub use claim::{ClaimController, ClaimSubmitter};
pub use cooldown::{Admission, CooldownDomain, CooldownGate};
pub use orchestrator::{CancelHandle, FetchError, FetchOrchestrator};
pub use recency::{RecencyCache, RecencyEntry};
pub use ticker::CountdownTicker;
#[cfg(not(target_arch = "wasm32"))]
pub use ticker::spawn_countdown;

#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use analysis::{WindowedStats, aggregate};
pub use data::{LookupSet, MinerDataSource};
pub use domain::{EarningRecord, EarningsWindow};
pub use engine::{CooldownDomain, CooldownGate, FetchError, FetchOrchestrator, RecencyCache};
pub use store::{KeyValueStore, SharedStore};
pub use utils::app_time;

// CLI argument parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding the persisted dashboard state
    #[arg(long, default_value = config::PERSISTENCE.store_path)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the remaining refresh cooldown of every page
    Status,
    /// List recently queried miner addresses
    Recent,
    /// Push an address to the front of the recent list
    Remember { address: String },
    /// Aggregate earning records read from a JSON file
    Stats {
        file: PathBuf,
        /// Only keep records from the trailing window of this many hours
        #[arg(long)]
        hours: Option<i64>,
    },
    /// Follow a page's cooldown countdown until it reaches zero
    Watch {
        #[arg(long, value_enum, default_value_t = CooldownDomain::BalanceStats)]
        domain: CooldownDomain,
    },
}

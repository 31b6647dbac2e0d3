// Even though the dashboard core builds for WASM, this binary is native only.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use tokio::runtime::Runtime;
    use pool_dashboard::Cli;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run
    let rt = Runtime::new()?;
    rt.block_on(native::run(args))
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use chrono::Utc;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use strum::IntoEnumIterator;

    use pool_dashboard::config::COOLDOWN;
    use pool_dashboard::engine::{CountdownTicker, spawn_countdown};
    use pool_dashboard::store::JsonFileStore;
    use pool_dashboard::utils::time_utils::epoch_ms_to_utc;
    use pool_dashboard::utils::{Clock, SystemClock};
    use pool_dashboard::{
        Cli, Command, CooldownDomain, CooldownGate, EarningRecord, EarningsWindow, RecencyCache,
        SharedStore, aggregate,
    };

    pub async fn run(args: Cli) -> Result<()> {
        let store = SharedStore::new(JsonFileStore::open(&args.store));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        match args.command {
            Command::Status => {
                let now_ms = clock.now_ms();
                for domain in CooldownDomain::iter() {
                    let gate = CooldownGate::for_domain(store.clone(), domain);
                    match (gate.last_success_at(), gate.remaining_secs(now_ms)) {
                        (None, _) => println!("{domain}: ready (never refreshed)"),
                        (Some(last), 0) => {
                            println!("{domain}: ready (last refresh {})", epoch_ms_to_utc(last))
                        }
                        (Some(last), secs) => println!(
                            "{domain}: {secs}s remaining (last refresh {})",
                            epoch_ms_to_utc(last)
                        ),
                    }
                }
            }
            Command::Recent => {
                let recent = RecencyCache::with_defaults(store).load();
                if recent.is_empty() {
                    println!("No recent addresses");
                }
                for entry in recent {
                    println!("{}", entry.value);
                }
            }
            Command::Remember { address } => {
                let recent = RecencyCache::with_defaults(store).remember(&address);
                println!("{} recent address(es) stored", recent.len());
            }
            Command::Stats { file, hours } => {
                let mut records = read_records(&file)?;
                if let Some(hours) = hours {
                    let window = EarningsWindow::trailing(Utc::now(), hours)
                        .context(format!("Invalid --hours value {hours}"))?;
                    records = window.filter(&records);
                }
                match aggregate(&records) {
                    Some(stats) => println!("{stats}"),
                    None => println!("No submissions in the selected window"),
                }
            }
            Command::Watch { domain } => {
                let gate = CooldownGate::for_domain(store, domain);
                let ticker = CountdownTicker::new(gate, clock);
                let every = Duration::from_millis(COOLDOWN.tick_interval_ms as u64);
                let (mut rx, handle) = spawn_countdown(ticker, every);

                loop {
                    let remaining = *rx.borrow_and_update();
                    if remaining == 0 {
                        println!("{domain}: ready");
                        break;
                    }
                    println!("{domain}: refresh in {remaining}s");
                    rx.changed()
                        .await
                        .context("countdown task stopped unexpectedly")?;
                }

                drop(rx);
                handle.await.context("countdown task panicked")?;
            }
        }
        Ok(())
    }

    fn read_records(path: &Path) -> Result<Vec<EarningRecord>> {
        let file = File::open(path).context(format!("Failed to open: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to parse earning records: {}", path.display()))
    }
}

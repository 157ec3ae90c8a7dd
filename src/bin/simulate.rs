//! Headless market simulator: drives the dashboard store without a window and
//! prints snapshots as a table or JSON.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use clap::Parser;
    use serde::Serialize;
    use tabled::{Table, Tabled, settings::Style};

    use crypto_cards::config::DF;
    use crypto_cards::ui::{format_change, format_price};
    use crypto_cards::utils::AppInstant;
    use crypto_cards::{Asset, AssetFilter, DashboardStore};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Run the market simulator without a window")]
    struct SimArgs {
        /// Number of ticks to run before printing
        #[arg(long, default_value_t = 12)]
        ticks: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// all, crypto, token, stock or etf
        #[arg(long, default_value = "all")]
        filter: AssetFilter,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Keep ticking on the live schedule until Ctrl-C
        #[arg(long, default_value_t = false)]
        follow: bool,
    }

    #[derive(Tabled)]
    struct AssetRow {
        #[tabled(rename = "Symbol")]
        symbol: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Type")]
        kind: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Change")]
        change: String,
        #[tabled(rename = "High")]
        high: String,
        #[tabled(rename = "Low")]
        low: String,
        #[tabled(rename = "Updated")]
        updated: String,
    }

    impl From<&Asset> for AssetRow {
        fn from(a: &Asset) -> Self {
            Self {
                symbol: a.symbol.clone(),
                name: a.name.clone(),
                kind: a.kind.to_string(),
                price: format!("${}", format_price(a.price)),
                change: format_change(a.change_24h()),
                high: format!("${}", format_price(a.high_24h)),
                low: format!("${}", format_price(a.low_24h)),
                updated: a.last_updated.format("%H:%M:%S").to_string(),
            }
        }
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct AssetSnapshot<'a> {
        #[serde(flatten)]
        asset: &'a Asset,
        change_24h: f64,
    }

    #[derive(Serialize)]
    struct Snapshot<'a> {
        revision: u64,
        filter: String,
        assets: Vec<AssetSnapshot<'a>>,
    }

    fn print_snapshot(store: &DashboardStore, filter: AssetFilter, json: bool) -> Result<()> {
        let assets = store.list_assets(filter);
        if json {
            let snapshot = Snapshot {
                revision: store.revision(),
                filter: filter.to_string(),
                assets: assets
                    .iter()
                    .map(|&asset| AssetSnapshot {
                        asset,
                        change_24h: asset.change_24h(),
                    })
                    .collect(),
            };
            let out = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
            println!("{}", out);
        } else {
            let rows: Vec<AssetRow> = assets.into_iter().map(AssetRow::from).collect();
            println!("{} | tick #{}", filter, store.revision());
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
        Ok(())
    }

    /// Tick on the live schedule until `shutdown` resolves. The same future is
    /// polled for the whole loop so a signal during printing is not lost.
    async fn follow(
        store: &mut DashboardStore,
        args: &SimArgs,
        shutdown: impl Future<Output = std::io::Result<()>>,
    ) -> Result<()> {
        tokio::pin!(shutdown);
        loop {
            let Some(deadline) = store.next_deadline() else {
                break;
            };
            tokio::select! {
                _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {
                    if store.poll(AppInstant::now()) {
                        print_snapshot(store, args.filter, args.json)?;
                    }
                }
                signal = &mut shutdown => {
                    signal.context("listening for Ctrl-C")?;
                    log::info!("Ctrl-C received, stopping");
                    break;
                }
            }
        }
        store.teardown();
        Ok(())
    }

    pub(crate) fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let args = SimArgs::parse();
        let mut store = DashboardStore::new(args.seed, AppInstant::now());

        if DF.log_lifecycle {
            log::info!(
                "Simulating {} ticks (seed {:?}, filter {})",
                args.ticks,
                args.seed,
                args.filter
            );
        }
        for _ in 0..args.ticks {
            store.tick();
        }
        print_snapshot(&store, args.filter, args.json)?;

        if args.follow {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("building the follow runtime")?;
            runtime.block_on(follow(&mut store, &args, tokio::signal::ctrl_c()))?;
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn follow_stops_and_tears_down_on_shutdown() {
            let args = SimArgs::parse_from(["simulate", "--seed", "5"]);
            let mut store = DashboardStore::new(args.seed, AppInstant::now());
            follow(&mut store, &args, async { Ok(()) }).await.unwrap();
            assert!(store.is_torn_down());
            assert_eq!(store.revision(), 0);
            assert_eq!(store.next_deadline(), None);
        }

        #[test]
        fn rows_carry_formatted_prices() {
            let store = DashboardStore::new(Some(5), AppInstant::now());
            let btc = store.asset("bitcoin").unwrap();
            let row = AssetRow::from(btc);
            assert_eq!(row.symbol, "BTC");
            assert!(row.price.starts_with('$'));
        }
    }
}

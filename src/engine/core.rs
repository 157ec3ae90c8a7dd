use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

use crate::config::{DF, SIMULATION};
use crate::data::{seed_assets, seed_lending_history, seed_lending_summaries};
use crate::domain::{Asset, AssetFilter, LendingRateHistory, LendingRateSummary};
use crate::utils::{AppInstant, now_timestamp_ms};

use super::lending::jitter_lending;
use super::messages::{RefreshKind, StoreEvent, SubscriptionId};
use super::schedule::{Deferred, Interval, take_if_due};
use super::simulator::MarketSimulator;

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Owns all dashboard state for one session.
///
/// Mutations go through methods and are announced to subscribers afterwards.
/// Time only moves when the caller drives `poll`.
pub struct DashboardStore {
    assets: Vec<Asset>,
    flipped: HashMap<String, bool>,
    active_filter: AssetFilter,

    lending_history: Vec<LendingRateHistory>,
    lending_summaries: BTreeMap<String, LendingRateSummary>,

    simulator: MarketSimulator,

    // Timers
    tick_timer: Interval,
    pending_refresh: Option<Deferred>,
    pending_lending: Option<Deferred>,

    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,

    /// Bumped whenever the asset list changes.
    revision: u64,
    torn_down: bool,
}

impl DashboardStore {
    /// Seed state and start the market tick. `seed` pins the random walk.
    pub fn new(seed: Option<u64>, now: AppInstant) -> Self {
        Self::with_simulator(MarketSimulator::new(seed), now)
    }

    pub fn with_simulator(mut simulator: MarketSimulator, now: AppInstant) -> Self {
        let assets = seed_assets(&mut simulator, Utc::now());
        if DF.log_lifecycle {
            log::info!(
                "Store ready: {} assets, tick every {:?}",
                assets.len(),
                SIMULATION.tick_interval
            );
        }
        Self {
            assets,
            flipped: HashMap::new(),
            active_filter: AssetFilter::default(),
            lending_history: seed_lending_history(),
            lending_summaries: seed_lending_summaries(),
            simulator,
            tick_timer: Interval::start(SIMULATION.tick_interval, now),
            pending_refresh: None,
            pending_lending: None,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
            torn_down: false,
        }
    }

    // ---- Assets ----

    /// Assets matching `filter`, in watchlist order.
    pub fn list_assets(&self, filter: AssetFilter) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| filter.matches(a.kind))
            .collect()
    }

    /// Assets under the active tab.
    pub fn visible_assets(&self) -> Vec<&Asset> {
        self.list_assets(self.active_filter)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Remove the asset and its flip flag. Unknown ids are ignored.
    pub fn delete_asset(&mut self, id: &str) -> bool {
        if self.torn_down {
            return false;
        }
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        if self.assets.len() == before {
            return false;
        }
        self.flipped.remove(id);
        self.revision += 1;
        if DF.log_selection {
            log::info!("Deleted asset {}", id);
        }
        self.notify(StoreEvent::AssetRemoved(id.to_string()));
        true
    }

    /// Flip a card. Returns the new state; unknown ids stay unflipped.
    /// After teardown the current state is returned unchanged.
    pub fn toggle_flip(&mut self, id: &str) -> bool {
        if self.torn_down {
            return self.is_flipped(id);
        }
        if self.asset(id).is_none() {
            return false;
        }
        let flag = self.flipped.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        let flipped = *flag;
        if DF.log_selection {
            log::info!("Card {} flipped: {}", id, flipped);
        }
        self.notify(StoreEvent::FlipToggled {
            id: id.to_string(),
            flipped,
        });
        flipped
    }

    pub fn is_flipped(&self, id: &str) -> bool {
        self.flipped.get(id).copied().unwrap_or(false)
    }

    pub fn active_filter(&self) -> AssetFilter {
        self.active_filter
    }

    pub fn set_filter(&mut self, filter: AssetFilter) {
        if self.torn_down || filter == self.active_filter {
            return;
        }
        self.active_filter = filter;
        if DF.log_selection {
            log::info!("Filter -> {}", filter);
        }
        self.notify(StoreEvent::FilterChanged(filter));
    }

    /// Step every asset once. The new list replaces the old one in a single swap.
    /// Does nothing once the store is torn down.
    pub fn tick(&mut self) {
        if self.torn_down {
            return;
        }
        let now = Utc::now();
        let stepped: Vec<Asset> = self
            .assets
            .iter()
            .map(|a| self.simulator.step_price(a, now))
            .collect();
        self.assets = stepped;
        self.revision += 1;
        if DF.log_ticks {
            log::info!("Tick #{}: {} assets", self.revision, self.assets.len());
        }
        self.notify(StoreEvent::AssetsUpdated {
            revision: self.revision,
        });
    }

    /// Schedule a manual refresh; it commits one tick after the simulated latency.
    /// Returns false if a refresh is already in flight or the store is torn down.
    pub fn refresh(&mut self, now: AppInstant) -> bool {
        if self.torn_down || self.pending_refresh.is_some() {
            return false;
        }
        self.pending_refresh = Some(Deferred::after(SIMULATION.refresh_latency, now));
        if DF.log_refresh {
            log::info!("Asset refresh requested");
        }
        self.notify(StoreEvent::RefreshStarted(RefreshKind::Assets));
        true
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending_refresh.is_some()
    }

    // ---- Lending ----

    /// Schedule a lending-rate refresh. Same in-flight rule as `refresh`.
    pub fn refresh_lending_rates(&mut self, now: AppInstant) -> bool {
        if self.torn_down || self.pending_lending.is_some() {
            return false;
        }
        self.pending_lending = Some(Deferred::after(SIMULATION.lending.refresh_latency, now));
        if DF.log_refresh {
            log::info!("Lending refresh requested");
        }
        self.notify(StoreEvent::RefreshStarted(RefreshKind::Lending));
        true
    }

    pub fn is_lending_loading(&self) -> bool {
        self.pending_lending.is_some()
    }

    fn apply_lending_refresh(&mut self) {
        let report = jitter_lending(
            self.simulator.rng_mut(),
            &mut self.lending_history,
            &mut self.lending_summaries,
            now_timestamp_ms(),
            &SIMULATION.lending,
        );
        self.notify(StoreEvent::LendingRatesUpdated {
            updated: report.updated,
            skipped: report.skipped,
        });
    }

    pub fn lending_history(&self) -> &[LendingRateHistory] {
        &self.lending_history
    }

    /// History rows for one currency, oldest first.
    pub fn lending_history_for(&self, ccy: &str) -> Vec<&LendingRateHistory> {
        let mut rows: Vec<_> = self
            .lending_history
            .iter()
            .filter(|h| h.ccy == ccy)
            .collect();
        rows.sort_by_key(|h| h.ts_ms().unwrap_or(i64::MIN));
        rows
    }

    pub fn lending_summaries(&self) -> &BTreeMap<String, LendingRateSummary> {
        &self.lending_summaries
    }

    pub fn lending_summary(&self, ccy: &str) -> Option<&LendingRateSummary> {
        self.lending_summaries.get(ccy)
    }

    /// Every currency with a summary or history, sorted.
    pub fn currencies(&self) -> Vec<String> {
        let mut out: Vec<String> = self.lending_summaries.keys().cloned().collect();
        for h in &self.lending_history {
            if !out.contains(&h.ccy) {
                out.push(h.ccy.clone());
            }
        }
        out.sort();
        out
    }

    // ---- Timers ----

    /// Run whatever is due at `now`. Returns true if state changed.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        if self.torn_down {
            return false;
        }
        let mut changed = false;

        if self.tick_timer.poll(now) {
            crate::trace_time!("Market tick", 1000, {
                self.tick();
            });
            changed = true;
        }

        if take_if_due(&mut self.pending_refresh, now) {
            if DF.log_refresh {
                log::info!("Asset refresh committed");
            }
            self.tick();
            changed = true;
        }

        if take_if_due(&mut self.pending_lending, now) {
            self.apply_lending_refresh();
            changed = true;
        }

        changed
    }

    /// Earliest instant at which `poll` has work to do.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        [
            self.tick_timer.next_due(),
            self.pending_refresh.as_ref().map(Deferred::due),
            self.pending_lending.as_ref().map(Deferred::due),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Cancel the tick, drop pending commits and release subscribers. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.tick_timer.cancel();
        self.pending_refresh = None;
        self.pending_lending = None;
        if DF.log_lifecycle {
            log::info!("Store torn down at revision {}", self.revision);
        }
        self.notify(StoreEvent::TornDown);
        self.subscribers.clear();
    }

    // ---- Subscriptions ----

    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event);
        }
    }
}

impl Drop for DashboardStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn store() -> (DashboardStore, AppInstant) {
        let t0 = AppInstant::now();
        (DashboardStore::new(Some(17), t0), t0)
    }

    fn recorder(store: &mut DashboardStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        log
    }

    #[test]
    fn delete_removes_asset_and_flip_state() {
        let (mut s, _) = store();
        assert!(s.toggle_flip("bitcoin"));
        assert!(s.delete_asset("bitcoin"));
        assert!(s.asset("bitcoin").is_none());
        assert!(!s.is_flipped("bitcoin"));
        assert_eq!(s.assets().len(), 7);
    }

    #[test]
    fn delete_unknown_is_noop() {
        let (mut s, _) = store();
        assert!(s.toggle_flip("bitcoin"));
        let events = recorder(&mut s);
        let before = s.assets().to_vec();
        assert!(!s.delete_asset("dogecoin"));
        assert_eq!(s.assets(), before.as_slice());
        assert!(s.is_flipped("bitcoin"));
        assert_eq!(s.revision(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn toggle_twice_restores() {
        let (mut s, _) = store();
        assert!(!s.is_flipped("solana"));
        s.toggle_flip("solana");
        s.toggle_flip("solana");
        assert!(!s.is_flipped("solana"));
        assert!(!s.toggle_flip("missing"));
    }

    #[test]
    fn tick_steps_every_asset_once() {
        let (mut s, _) = store();
        let before: Vec<usize> = s.assets().iter().map(|a| a.price_history.len()).collect();
        s.tick();
        assert_eq!(s.revision(), 1);
        for (a, len) in s.assets().iter().zip(before) {
            assert_eq!(a.price_history.len(), len);
            assert_eq!(a.price_history.latest().unwrap().price, a.price);
            assert!(a.low_24h <= a.price && a.price <= a.high_24h);
        }
    }

    #[test]
    fn poll_fires_tick_on_schedule() {
        let (mut s, t0) = store();
        assert!(!s.poll(t0 + Duration::from_secs(4)));
        assert!(s.poll(t0 + SIMULATION.tick_interval));
        assert_eq!(s.revision(), 1);
        assert_eq!(
            s.next_deadline(),
            Some(t0 + SIMULATION.tick_interval * 2)
        );
    }

    #[test]
    fn refresh_commits_after_latency_and_ignores_repeats() {
        let (mut s, t0) = store();
        assert!(s.refresh(t0));
        assert!(!s.refresh(t0));
        assert!(s.is_refreshing());
        assert_eq!(s.next_deadline(), Some(t0 + SIMULATION.refresh_latency));

        assert!(!s.poll(t0 + Duration::from_millis(500)));
        assert!(s.poll(t0 + SIMULATION.refresh_latency));
        assert!(!s.is_refreshing());
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn lending_refresh_restamps_summaries() {
        let (mut s, t0) = store();
        let before = s.lending_summary("BTC").unwrap().ts_ms().unwrap();
        assert!(s.refresh_lending_rates(t0));
        assert!(s.is_lending_loading());
        s.poll(t0 + SIMULATION.lending.refresh_latency);
        assert!(!s.is_lending_loading());
        for summary in s.lending_summaries().values() {
            assert_eq!(summary.avg_rate.split('.').nth(1).unwrap().len(), 6);
        }
        assert!(s.lending_summary("BTC").unwrap().ts_ms().unwrap() > before);
    }

    #[test]
    fn teardown_cancels_everything() {
        let (mut s, t0) = store();
        let events = recorder(&mut s);
        s.refresh(t0);
        s.refresh_lending_rates(t0);
        s.teardown();
        s.teardown();

        assert_eq!(s.next_deadline(), None);
        assert!(!s.poll(t0 + Duration::from_secs(3600)));
        assert_eq!(s.revision(), 0);
        assert!(!s.refresh(t0));
        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::RefreshStarted(RefreshKind::Assets),
                StoreEvent::RefreshStarted(RefreshKind::Lending),
                StoreEvent::TornDown,
            ]
        );
    }

    #[test]
    fn mutators_are_inert_after_teardown() {
        let (mut s, _) = store();
        assert!(s.toggle_flip("ethereum"));
        s.teardown();
        let before = s.assets().to_vec();

        s.tick();
        assert!(!s.delete_asset("spy"));
        assert!(s.toggle_flip("ethereum"));
        s.set_filter(AssetFilter::Etf);

        assert_eq!(s.revision(), 0);
        assert_eq!(s.assets(), before.as_slice());
        assert!(s.is_flipped("ethereum"));
        assert_eq!(s.active_filter(), AssetFilter::All);
    }

    #[test]
    fn subscribers_see_events_in_order_until_unsubscribed() {
        let (mut s, _) = store();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = s.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        s.set_filter(AssetFilter::Token);
        s.set_filter(AssetFilter::Token);
        s.toggle_flip("spx2.0");
        s.delete_asset("spy");
        assert!(s.unsubscribe(id));
        s.tick();

        assert_eq!(
            *log.borrow(),
            vec![
                StoreEvent::FilterChanged(AssetFilter::Token),
                StoreEvent::FlipToggled {
                    id: "spx2.0".into(),
                    flipped: true
                },
                StoreEvent::AssetRemoved("spy".into()),
            ]
        );
        assert!(!s.unsubscribe(id));
    }

    #[test]
    fn currencies_and_history_lookup() {
        let (s, _) = store();
        assert_eq!(s.currencies(), vec!["BTC", "ETH", "SOL", "USDT"]);
        let btc = s.lending_history_for("BTC");
        assert_eq!(btc.len(), 5);
        assert!(btc.windows(2).all(|w| w[0].ts_ms().unwrap() <= w[1].ts_ms().unwrap()));
        assert!(s.lending_history_for("USDT").is_empty());
    }

    #[test]
    fn visible_assets_follow_active_filter() {
        let (mut s, _) = store();
        s.set_filter(AssetFilter::Etf);
        let symbols: Vec<_> = s.visible_assets().iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["QQQ", "SPY"]);
    }
}

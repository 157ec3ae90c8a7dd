use chrono::{DateTime, Duration as ChronoDuration, Local, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::{SIMULATION, VolatilityProfile};
use crate::domain::Asset;
use crate::models::{PriceHistory, PricePoint};
use crate::utils::clock_label;

/// Synthetic market data: bounded random-walk histories and per-tick price steps.
///
/// Randomness is owned by the simulator so a seed reproduces a whole session.
pub struct MarketSimulator<R = Pcg64> {
    rng: R,
}

impl MarketSimulator<Pcg64> {
    /// `Some(seed)` for reproducible runs, `None` to seed from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => Pcg64::seed_from_u64(s),
            None => Pcg64::from_entropy(),
        };
        Self::from_rng(rng)
    }
}

impl<R: Rng> MarketSimulator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// delta = (uniform(-1, 1) * volatility + trend * uniform(0.75, 1.25)) * price
    fn price_delta(&mut self, price: f64, profile: VolatilityProfile) -> f64 {
        let (lo, hi) = SIMULATION.trend_factor_range;
        let shock = self.rng.gen_range(-1.0..1.0);
        let trend_factor = self.rng.gen_range(lo..hi);
        (shock * profile.volatility + profile.trend * trend_factor) * price
    }

    /// `length` samples ending at `end`, spaced `interval_minutes` apart.
    /// Every sample stays within `base_price * (1 +/- history_band)`.
    pub fn generate_history(
        &mut self,
        base_price: f64,
        profile: VolatilityProfile,
        length: usize,
        interval_minutes: i64,
        end: DateTime<Local>,
    ) -> PriceHistory {
        let floor = base_price * (1.0 - SIMULATION.history_band);
        let ceiling = base_price * (1.0 + SIMULATION.history_band);
        let mut current = base_price;

        let samples = (0..length)
            .map(|i| {
                current = (current + self.price_delta(current, profile)).clamp(floor, ceiling);
                let minutes_back = (length - 1 - i) as i64 * interval_minutes;
                let at = end - ChronoDuration::minutes(minutes_back);
                PricePoint::new(current, clock_label(&at))
            })
            .collect();

        PriceHistory::from_samples(samples)
    }

    /// History with the configured window and spacing, ending now.
    pub fn generate_default_history(
        &mut self,
        base_price: f64,
        profile: VolatilityProfile,
    ) -> PriceHistory {
        self.generate_history(
            base_price,
            profile,
            SIMULATION.history_len,
            SIMULATION.history_interval_minutes,
            Local::now(),
        )
    }

    /// One live tick for `asset` using its kind's profile.
    pub fn step_price(&mut self, asset: &Asset, now: DateTime<Utc>) -> Asset {
        self.step_price_with(asset, asset.kind.profile(), now)
    }

    /// One live tick with an explicit profile. Unlike history generation there is no clamp.
    pub fn step_price_with(
        &mut self,
        asset: &Asset,
        profile: VolatilityProfile,
        now: DateTime<Utc>,
    ) -> Asset {
        let new_price = asset.price + self.price_delta(asset.price, profile);

        let mut next = asset.clone();
        next.price = new_price;
        next.price_history.push(PricePoint::new(
            new_price,
            clock_label(&now.with_timezone(&Local)),
        ));
        next.high_24h = asset.high_24h.max(new_price);
        next.low_24h = asset.low_24h.min(new_price);
        next.last_updated = now;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetType;
    use chrono::TimeZone;

    fn flat_asset(kind: AssetType, price: f64) -> Asset {
        Asset {
            id: "flat".into(),
            symbol: "FLAT".into(),
            name: "Flat".into(),
            kind,
            price,
            price_history: PriceHistory::from_samples(
                (0..SIMULATION.history_len)
                    .map(|_| PricePoint::new(price, "00:00"))
                    .collect(),
            ),
            high_24h: price,
            low_24h: price,
            market_cap: 0.0,
            volume_24h: 0.0,
            volume_change_24h: 0.0,
            total_supply: 0.0,
            token: None,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn history_stays_inside_ten_percent_band() {
        let mut sim = MarketSimulator::new(Some(7));
        let end = Local::now();
        for &(vol, trend) in &[(0.05, 0.01), (0.2, 0.05), (0.5, -0.3), (0.0, 1.0)] {
            let h = sim.generate_history(250.0, VolatilityProfile::new(vol, trend), 30, 5, end);
            assert_eq!(h.len(), 30);
            for p in h.prices() {
                assert!((225.0..=275.0).contains(&p), "{p} escaped band");
            }
        }
    }

    #[test]
    fn history_labels_end_at_now_with_five_minute_spacing() {
        let mut sim = MarketSimulator::new(Some(1));
        let end = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let h = sim.generate_history(10.0, VolatilityProfile::FLAT, 4, 5, end);
        let labels: Vec<_> = h.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(labels, vec!["11:45", "11:50", "11:55", "12:00"]);
    }

    #[test]
    fn same_seed_same_history() {
        let end = Local::now();
        let a = MarketSimulator::new(Some(42)).generate_history(
            100.0,
            SIMULATION.default_history_profile,
            30,
            5,
            end,
        );
        let b = MarketSimulator::new(Some(42)).generate_history(
            100.0,
            SIMULATION.default_history_profile,
            30,
            5,
            end,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn flat_profile_leaves_price_and_change_untouched() {
        let mut sim = MarketSimulator::new(Some(3));
        let asset = flat_asset(AssetType::Crypto, 100.0);
        let next = sim.step_price_with(&asset, VolatilityProfile::FLAT, Utc::now());
        assert_eq!(next.price, 100.0);
        assert_eq!(next.change_24h(), 0.0);
        assert_eq!(next.price_history.len(), SIMULATION.history_len);
    }

    #[test]
    fn steps_keep_window_and_extrema() {
        let mut sim = MarketSimulator::new(Some(11));
        let mut asset = flat_asset(AssetType::Token, 0.00042);
        for _ in 0..500 {
            asset = sim.step_price(&asset, Utc::now());
            assert_eq!(asset.price_history.len(), SIMULATION.history_len);
            assert!(asset.low_24h <= asset.price && asset.price <= asset.high_24h);
            assert!(asset.price > 0.0);
        }
    }

    #[test]
    fn step_appends_newest_sample_and_stamps_time() {
        let mut sim = MarketSimulator::new(Some(5));
        let asset = flat_asset(AssetType::Stock, 50.0);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let next = sim.step_price(&asset, now);
        assert_eq!(next.price_history.latest().unwrap().price, next.price);
        assert_eq!(next.last_updated, now);
        let expected = (next.price / 50.0 - 1.0) * 100.0;
        assert!((next.change_24h() - expected).abs() < 1e-9);
    }
}

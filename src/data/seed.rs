//! Fixed seed data the dashboard starts from. A reload always returns here.
use chrono::{DateTime, Local, Utc};
use rand::Rng;
use std::collections::BTreeMap;

use crate::config::{SIMULATION, SPX_CONTRACT, VolatilityProfile};
use crate::domain::{Asset, AssetType, LendingRateHistory, LendingRateSummary, TokenInfo};
use crate::engine::MarketSimulator;

struct TokenSeed {
    contract_address: &'static str,
    buy_tax: f64,
    sell_tax: f64,
    max_tx_amount: f64,
    max_wallet_size: f64,
    verified: bool,
}

struct AssetSeed {
    id: &'static str,
    symbol: &'static str,
    name: &'static str,
    kind: AssetType,
    price: f64,
    market_cap: f64,
    volume_24h: f64,
    volume_change_24h: f64,
    /// Shape of the generated starting history.
    history: VolatilityProfile,
    high_24h: f64,
    low_24h: f64,
    total_supply: f64,
    token: Option<TokenSeed>,
}

const SEED_ASSETS: &[AssetSeed] = &[
    AssetSeed {
        id: "bitcoin",
        symbol: "BTC",
        name: "Bitcoin",
        kind: AssetType::Crypto,
        price: 97_845.0,
        market_cap: 1_920_000_000_000.0,
        volume_24h: 40_000_000_000.0,
        volume_change_24h: 4.2,
        history: VolatilityProfile::new(0.1, 0.03),
        high_24h: 99_000.0,
        low_24h: 96_000.0,
        total_supply: 21_000_000.0,
        token: None,
    },
    AssetSeed {
        id: "ethereum",
        symbol: "ETH",
        name: "Ethereum",
        kind: AssetType::Crypto,
        price: 5_230.0,
        market_cap: 630_000_000_000.0,
        volume_24h: 20_000_000_000.0,
        volume_change_24h: 3.1,
        history: VolatilityProfile::new(0.09, 0.025),
        high_24h: 5_350.0,
        low_24h: 5_150.0,
        total_supply: 120_000_000.0,
        token: None,
    },
    AssetSeed {
        id: "spx2.0",
        symbol: "SPX2.0",
        name: "SPX6900 2.0",
        kind: AssetType::Token,
        price: 0.00042,
        market_cap: 420_000.0,
        volume_24h: 50_000.0,
        volume_change_24h: 22.3,
        history: VolatilityProfile::new(0.2, 0.05),
        high_24h: 0.00045,
        low_24h: 0.00038,
        total_supply: 1_000_000_000.0,
        token: Some(TokenSeed {
            contract_address: SPX_CONTRACT.address,
            buy_tax: 20.0,
            sell_tax: 30.0,
            max_tx_amount: 20_000_000.0,
            max_wallet_size: 20_000_000.0,
            verified: true,
        }),
    },
    AssetSeed {
        id: "solana",
        symbol: "SOL",
        name: "Solana",
        kind: AssetType::Crypto,
        price: 185.5,
        market_cap: 80_000_000_000.0,
        volume_24h: 5_000_000_000.0,
        volume_change_24h: 5.5,
        history: VolatilityProfile::new(0.12, 0.035),
        high_24h: 190.0,
        low_24h: 180.0,
        total_supply: 549_846_983.0,
        token: None,
    },
    AssetSeed {
        id: "aapl",
        symbol: "AAPL",
        name: "Apple Inc.",
        kind: AssetType::Stock,
        price: 175.2,
        market_cap: 2_750_000_000_000.0,
        volume_24h: 55_000_000.0,
        volume_change_24h: 2.2,
        history: VolatilityProfile::new(0.04, 0.015),
        high_24h: 177.5,
        low_24h: 174.0,
        total_supply: 16_000_000_000.0,
        token: None,
    },
    AssetSeed {
        id: "googl",
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        kind: AssetType::Stock,
        price: 152.5,
        market_cap: 1_920_000_000_000.0,
        volume_24h: 35_000_000.0,
        volume_change_24h: 2.5,
        history: VolatilityProfile::new(0.05, 0.02),
        high_24h: 154.0,
        low_24h: 151.0,
        total_supply: 6_600_000_000.0,
        token: None,
    },
    AssetSeed {
        id: "qqq",
        symbol: "QQQ",
        name: "Invesco QQQ Trust",
        kind: AssetType::Etf,
        price: 430.5,
        market_cap: 230_000_000_000.0,
        volume_24h: 88_000_000.0,
        volume_change_24h: 2.3,
        history: VolatilityProfile::new(0.03, 0.01),
        high_24h: 433.0,
        low_24h: 428.0,
        total_supply: 530_000_000.0,
        token: None,
    },
    AssetSeed {
        id: "spy",
        symbol: "SPY",
        name: "SPDR S&P 500 ETF",
        kind: AssetType::Etf,
        price: 505.2,
        market_cap: 455_000_000_000.0,
        volume_24h: 110_000_000.0,
        volume_change_24h: 1.8,
        history: VolatilityProfile::new(0.02, 0.008),
        high_24h: 508.8,
        low_24h: 503.5,
        total_supply: 950_000_000.0,
        token: None,
    },
];

impl AssetSeed {
    fn build<R: Rng>(&self, sim: &mut MarketSimulator<R>, now: DateTime<Utc>) -> Asset {
        let price_history = sim.generate_history(
            self.price,
            self.history,
            SIMULATION.history_len,
            SIMULATION.history_interval_minutes,
            now.with_timezone(&Local),
        );
        // Running extrema must cover every sample the card starts with
        let high_24h = price_history
            .prices()
            .fold(self.high_24h.max(self.price), f64::max);
        let low_24h = price_history
            .prices()
            .fold(self.low_24h.min(self.price), f64::min);
        Asset {
            id: self.id.to_string(),
            symbol: self.symbol.to_string(),
            name: self.name.to_string(),
            kind: self.kind,
            price: self.price,
            price_history,
            high_24h,
            low_24h,
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
            volume_change_24h: self.volume_change_24h,
            total_supply: self.total_supply,
            token: self.token.as_ref().map(|t| TokenInfo {
                contract_address: t.contract_address.to_string(),
                buy_tax: t.buy_tax,
                sell_tax: t.sell_tax,
                max_tx_amount: t.max_tx_amount,
                max_wallet_size: t.max_wallet_size,
                verified: t.verified,
            }),
            last_updated: now,
        }
    }
}

/// The watchlist at startup, histories freshly generated to end at `now`.
pub fn seed_assets<R: Rng>(sim: &mut MarketSimulator<R>, now: DateTime<Utc>) -> Vec<Asset> {
    SEED_ASSETS.iter().map(|s| s.build(sim, now)).collect()
}

const SEED_HISTORY: &[(&str, &str, &str)] = &[
    ("BTC", "0.0012", "1646092800000"),
    ("BTC", "0.0014", "1646179200000"),
    ("BTC", "0.0011", "1646265600000"),
    ("BTC", "0.0013", "1646352000000"),
    ("BTC", "0.0015", "1646438400000"),
    ("ETH", "0.0018", "1646092800000"),
    ("ETH", "0.0020", "1646179200000"),
    ("ETH", "0.0019", "1646265600000"),
    ("ETH", "0.0021", "1646352000000"),
    ("ETH", "0.0022", "1646438400000"),
];

// (ccy, avg, highest, lowest, ts)
const SEED_SUMMARIES: &[(&str, &str, &str, &str, &str)] = &[
    ("BTC", "0.0013", "0.0015", "0.0011", "1646438400000"),
    ("ETH", "0.0020", "0.0022", "0.0018", "1646438400000"),
    ("SOL", "0.0025", "0.0030", "0.0020", "1646438400000"),
    ("USDT", "0.0040", "0.0045", "0.0035", "1646438400000"),
];

pub fn seed_lending_history() -> Vec<LendingRateHistory> {
    SEED_HISTORY
        .iter()
        .map(|&(ccy, rate, ts)| LendingRateHistory::new(ccy, rate, ts))
        .collect()
}

pub fn seed_lending_summaries() -> BTreeMap<String, LendingRateSummary> {
    SEED_SUMMARIES
        .iter()
        .map(|&(ccy, avg, high, low, ts)| {
            (
                ccy.to_string(),
                LendingRateSummary::new(ccy, avg, high, low, ts),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_one_token_with_contract_details() {
        let mut sim = MarketSimulator::new(Some(0));
        let assets = seed_assets(&mut sim, Utc::now());
        assert_eq!(assets.len(), 8);
        let tokens: Vec<_> = assets.iter().filter(|a| a.is_token()).collect();
        assert_eq!(tokens.len(), 1);
        let info = tokens[0].token.as_ref().unwrap();
        assert_eq!(tokens[0].symbol, "SPX2.0");
        assert_eq!((info.buy_tax, info.sell_tax), (20.0, 30.0));
        assert_eq!(info.max_wallet_size, 20_000_000.0);
        assert!(assets.iter().filter(|a| !a.is_token()).all(|a| a.token.is_none()));
    }

    #[test]
    fn seed_extrema_cover_price_and_history() {
        for seed in [0, 1, 42] {
            let mut sim = MarketSimulator::new(Some(seed));
            for a in seed_assets(&mut sim, Utc::now()) {
                assert!(a.low_24h <= a.price && a.price <= a.high_24h, "{}", a.symbol);
                assert_eq!(a.price_history.len(), SIMULATION.history_len);
                for p in a.price_history.prices() {
                    assert!(a.low_24h <= p && p <= a.high_24h, "{} sample {}", a.symbol, p);
                }
            }
        }
    }

    #[test]
    fn seed_extrema_never_narrow_the_table_values() {
        let mut sim = MarketSimulator::new(Some(3));
        let assets = seed_assets(&mut sim, Utc::now());
        for (a, s) in assets.iter().zip(SEED_ASSETS) {
            assert!(a.high_24h >= s.high_24h && a.low_24h <= s.low_24h, "{}", a.symbol);
        }
    }

    #[test]
    fn lending_seed_is_well_formed() {
        let summaries = seed_lending_summaries();
        assert_eq!(
            summaries.keys().cloned().collect::<Vec<_>>(),
            vec!["BTC", "ETH", "SOL", "USDT"]
        );
        assert!(summaries.values().all(|s| s.is_ordered().unwrap()));
        let history = seed_lending_history();
        assert_eq!(history.iter().filter(|h| h.ccy == "ETH").count(), 5);
        assert!(history.iter().all(|h| h.rate_value().is_ok() && h.ts_ms().is_ok()));
    }
}

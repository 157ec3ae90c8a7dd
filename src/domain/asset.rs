use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::{SIMULATION, VolatilityProfile};
use crate::models::PriceHistory;
use crate::utils::percent_change;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AssetType {
    Stock,
    Etf,
    Crypto,
    Token,
}

impl AssetType {
    /// Random-walk profile used by the live tick.
    pub fn profile(self) -> VolatilityProfile {
        match self {
            Self::Token => SIMULATION.token_profile,
            Self::Stock | Self::Etf | Self::Crypto => SIMULATION.standard_profile,
        }
    }
}

/// Watchlist tab. Order of variants is the order of the tabs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AssetFilter {
    #[default]
    #[strum(serialize = "all", to_string = "All Assets")]
    All,
    #[strum(serialize = "crypto", to_string = "Crypto")]
    Crypto,
    #[strum(serialize = "token", to_string = "Tokens")]
    Token,
    #[strum(serialize = "stock", to_string = "Stocks")]
    Stock,
    #[strum(serialize = "etf", to_string = "ETFs")]
    Etf,
}

impl AssetFilter {
    pub fn matches(self, kind: AssetType) -> bool {
        match self {
            Self::All => true,
            Self::Crypto => kind == AssetType::Crypto,
            Self::Token => kind == AssetType::Token,
            Self::Stock => kind == AssetType::Stock,
            Self::Etf => kind == AssetType::Etf,
        }
    }
}

/// On-chain details, only carried by `AssetType::Token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub contract_address: String,
    /// Percent.
    pub buy_tax: f64,
    /// Percent.
    pub sell_tax: f64,
    pub max_tx_amount: f64,
    pub max_wallet_size: f64,
    pub verified: bool,
}

impl TokenInfo {
    /// "0xYour...Here" style abbreviation for card faces.
    pub fn short_address(&self) -> String {
        let addr = &self.contract_address;
        if addr.len() <= 10 || !addr.is_ascii() {
            return addr.clone();
        }
        format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub price: f64,
    pub price_history: PriceHistory,
    pub high_24h: f64,
    pub low_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub volume_change_24h: f64,
    pub total_supply: f64,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenInfo>,
    pub last_updated: DateTime<Utc>,
}

impl Asset {
    /// Percent move from the oldest retained sample to the current price.
    /// The window is `history_len` samples (~2.5h at 5-minute spacing), not a true 24h anchor.
    pub fn change_24h(&self) -> f64 {
        match self.price_history.oldest() {
            Some(oldest) => percent_change(oldest.price, self.price),
            None => 0.0,
        }
    }

    pub fn is_token(&self) -> bool {
        self.kind == AssetType::Token
    }

    pub fn is_up(&self) -> bool {
        self.change_24h() >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricePoint;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn asset(kind: AssetType, price: f64, oldest: f64) -> Asset {
        Asset {
            id: "x".into(),
            symbol: "X".into(),
            name: "X".into(),
            kind,
            price,
            price_history: PriceHistory::from_samples(vec![
                PricePoint::new(oldest, "10:00"),
                PricePoint::new(price, "10:05"),
            ]),
            high_24h: price.max(oldest),
            low_24h: price.min(oldest),
            market_cap: 0.0,
            volume_24h: 0.0,
            volume_change_24h: 0.0,
            total_supply: 0.0,
            token: None,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn change_is_relative_to_oldest_sample() {
        let a = asset(AssetType::Crypto, 110.0, 100.0);
        assert!((a.change_24h() - 10.0).abs() < 1e-9);
        assert!(a.is_up());
        let b = asset(AssetType::Stock, 90.0, 100.0);
        assert!((b.change_24h() + 10.0).abs() < 1e-9);
    }

    #[test]
    fn filters_match_their_kind_only() {
        assert!(AssetFilter::All.matches(AssetType::Etf));
        assert!(AssetFilter::Token.matches(AssetType::Token));
        assert!(!AssetFilter::Token.matches(AssetType::Crypto));
        assert_eq!(AssetFilter::iter().count(), 5);
    }

    #[test]
    fn filters_parse_from_cli_names() {
        assert_eq!(AssetFilter::from_str("token").unwrap(), AssetFilter::Token);
        assert_eq!(AssetFilter::from_str("ETF").unwrap(), AssetFilter::Etf);
        assert_eq!(AssetFilter::All.to_string(), "All Assets");
        assert!(AssetFilter::from_str("bonds").is_err());
    }

    #[test]
    fn tokens_walk_harder_than_stocks() {
        assert!(AssetType::Token.profile().volatility > AssetType::Stock.profile().volatility);
        assert_eq!(AssetType::Etf.profile(), AssetType::Crypto.profile());
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let a = asset(AssetType::Etf, 1.0, 1.0);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["type"], "etf");
        assert!(v.get("high24h").is_some());
        assert!(v.get("volumeChange24h").is_some());
        assert!(v.get("contractAddress").is_none());
    }

    #[test]
    fn short_address_keeps_head_and_tail() {
        let info = TokenInfo {
            contract_address: "0xYourContractAddressHere".into(),
            buy_tax: 20.0,
            sell_tax: 30.0,
            max_tx_amount: 1.0,
            max_wallet_size: 1.0,
            verified: true,
        };
        assert_eq!(info.short_address(), "0xYour...Here");
    }
}

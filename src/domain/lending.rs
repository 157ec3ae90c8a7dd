use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::utils::parse_epoch_ms;

/// Parse a decimal-string rate ("0.0013").
pub fn parse_rate(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid rate {:?}", raw))?;
    if !value.is_finite() || value < 0.0 {
        bail!("rate {:?} is not a non-negative finite number", raw);
    }
    Ok(value)
}

/// Rate as a percentage (0.0013 -> 0.13).
pub fn rate_as_percent(raw: &str) -> Result<f64> {
    Ok(parse_rate(raw)? * 100.0)
}

/// One historical lending-rate observation, OKX field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingRateHistory {
    pub ccy: String,
    pub rate: String,
    pub ts: String,
}

impl LendingRateHistory {
    pub fn new(ccy: &str, rate: &str, ts: &str) -> Self {
        Self {
            ccy: ccy.to_string(),
            rate: rate.to_string(),
            ts: ts.to_string(),
        }
    }

    pub fn rate_value(&self) -> Result<f64> {
        parse_rate(&self.rate).with_context(|| format!("{} history rate", self.ccy))
    }

    pub fn ts_ms(&self) -> Result<i64> {
        parse_epoch_ms(&self.ts)
    }
}

/// Aggregated lending rates for one currency.
/// `lowest_rate <= avg_rate <= highest_rate` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingRateSummary {
    pub ccy: String,
    pub avg_rate: String,
    pub highest_rate: String,
    pub lowest_rate: String,
    pub ts: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SummaryField {
    #[strum(to_string = "Average Rate")]
    Average,
    #[strum(to_string = "Highest Rate")]
    Highest,
    #[strum(to_string = "Lowest Rate")]
    Lowest,
}

impl LendingRateSummary {
    pub fn new(ccy: &str, avg: &str, highest: &str, lowest: &str, ts: &str) -> Self {
        Self {
            ccy: ccy.to_string(),
            avg_rate: avg.to_string(),
            highest_rate: highest.to_string(),
            lowest_rate: lowest.to_string(),
            ts: ts.to_string(),
        }
    }

    pub fn field(&self, field: SummaryField) -> &str {
        match field {
            SummaryField::Average => &self.avg_rate,
            SummaryField::Highest => &self.highest_rate,
            SummaryField::Lowest => &self.lowest_rate,
        }
    }

    pub fn field_mut(&mut self, field: SummaryField) -> &mut String {
        match field {
            SummaryField::Average => &mut self.avg_rate,
            SummaryField::Highest => &mut self.highest_rate,
            SummaryField::Lowest => &mut self.lowest_rate,
        }
    }

    pub fn rate(&self, field: SummaryField) -> Result<f64> {
        parse_rate(self.field(field)).with_context(|| format!("{} {}", self.ccy, field))
    }

    pub fn ts_ms(&self) -> Result<i64> {
        parse_epoch_ms(&self.ts)
    }

    pub fn is_ordered(&self) -> Result<bool> {
        let low = self.rate(SummaryField::Lowest)?;
        let avg = self.rate(SummaryField::Average)?;
        let high = self.rate(SummaryField::Highest)?;
        Ok(low <= avg && avg <= high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(parse_rate("0.0013").unwrap(), 0.0013);
        assert!((rate_as_percent("0.0013").unwrap() - 0.13).abs() < 1e-12);
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("-0.1").is_err());
        assert!(parse_rate("NaN").is_err());
    }

    #[test]
    fn summary_uses_okx_field_names() {
        let s = LendingRateSummary::new("BTC", "0.0013", "0.0015", "0.0011", "1646438400000");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["avgRate"], "0.0013");
        assert_eq!(json["highestRate"], "0.0015");
        assert_eq!(json["lowestRate"], "0.0011");
        assert!(s.is_ordered().unwrap());
        assert_eq!(s.ts_ms().unwrap(), 1_646_438_400_000);
    }

    #[test]
    fn field_accessors_address_the_right_rate() {
        let mut s = LendingRateSummary::new("ETH", "2", "3", "1", "0");
        *s.field_mut(SummaryField::Highest) = "4".into();
        assert_eq!(s.highest_rate, "4");
        assert_eq!(s.rate(SummaryField::Lowest).unwrap(), 1.0);
    }

    #[test]
    fn bad_rate_error_names_the_currency() {
        let h = LendingRateHistory::new("SOL", "n/a", "0");
        let err = h.rate_value().unwrap_err();
        assert!(format!("{err:#}").contains("SOL"));
    }
}

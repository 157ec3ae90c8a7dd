// Domain types and value objects
mod asset;
mod lending;

pub use asset::{Asset, AssetFilter, AssetType, TokenInfo};
pub use lending::{
    LendingRateHistory, LendingRateSummary, SummaryField, parse_rate, rate_as_percent,
};

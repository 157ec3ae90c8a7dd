use std::sync::LazyLock;

pub const ICON_UP: &str = "⏶";
pub const ICON_DOWN: &str = "⏷";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_DELETE: &str = "🗑";
pub const ICON_VERIFIED: &str = "🛡";
pub const ICON_DOLLAR: &str = "💲";
pub const ICON_PERCENT: &str = "％";
pub const ICON_INFO: &str = "ℹ";

pub struct UiText {
    pub icon_up: String,
    pub icon_down: String,
    pub icon_delete: String,
    pub icon_verified: String,

    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,
    pub button_refresh: String,
    pub label_refreshing: String,

    // --- Sections ---
    pub heading_market: String,
    pub heading_lending: String,
    pub heading_technical: String,
    pub label_empty_watchlist: String,

    // --- Card back ---
    pub label_market_cap: String,
    pub label_volume: String,
    pub label_high: String,
    pub label_low: String,
    pub label_total_supply: String,
    pub label_buy_tax: String,
    pub label_sell_tax: String,
    pub label_max_tx: String,
    pub label_max_wallet: String,
    pub label_volume_change: String,
    pub tooltip_flip: String,
    pub tooltip_delete: String,
    pub tooltip_verified: String,

    // --- Lending ---
    pub lending_title: String,
    pub lending_subtitle: String,
    pub lending_rate_comparison: String,
    pub lending_last_updated: String,
    pub lending_no_summary: String,
    pub lending_no_history: String,
    pub lending_col_date: String,
    pub lending_col_rate: String,

    // --- Info tables ---
    pub api_title: String,
    pub api_col_provider: String,
    pub api_col_status: String,
    pub api_col_action: String,
    pub contract_title: String,
    pub contract_col_function: String,
    pub contract_col_data: String,
    pub contract_col_notes: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_up: ICON_UP.to_string(),
    icon_down: ICON_DOWN.to_string(),
    icon_delete: ICON_DELETE.to_string(),
    icon_verified: ICON_VERIFIED.to_string(),

    app_title: "Crypto & Asset Dashboard".to_string(),
    app_subtitle: "Real-time market data with SPX2.0 smart contract integration".to_string(),
    button_refresh: format!("{} Refresh", ICON_REFRESH),
    label_refreshing: "Refreshing...".to_string(),

    heading_market: format!("{} Market Overview", ICON_DOLLAR),
    heading_lending: format!("{} Lending Rates", ICON_PERCENT),
    heading_technical: format!("{} Technical Information", ICON_INFO),
    label_empty_watchlist: "No assets in this category".to_string(),

    label_market_cap: "Market Cap".to_string(),
    label_volume: "24h Volume".to_string(),
    label_high: "24h High".to_string(),
    label_low: "24h Low".to_string(),
    label_total_supply: "Total Supply".to_string(),
    label_buy_tax: "Buy Tax".to_string(),
    label_sell_tax: "Sell Tax".to_string(),
    label_max_tx: "Max Tx".to_string(),
    label_max_wallet: "Max Wallet".to_string(),
    label_volume_change: "Volume Change (24h)".to_string(),
    tooltip_flip: "Click to flip".to_string(),
    tooltip_delete: "Delete from watchlist".to_string(),
    tooltip_verified: "Verified Contract".to_string(),

    lending_title: "Simple Earn Flexible".to_string(),
    lending_subtitle: "OKX lending rates and earning opportunities".to_string(),
    lending_rate_comparison: "Rate Comparison".to_string(),
    lending_last_updated: "Last updated".to_string(),
    lending_no_summary: "No summary data available for".to_string(),
    lending_no_history: "No historical data available for".to_string(),
    lending_col_date: "Date".to_string(),
    lending_col_rate: "Rate".to_string(),

    api_title: "API Configuration".to_string(),
    api_col_provider: "API Provider".to_string(),
    api_col_status: "Status".to_string(),
    api_col_action: "Action Required".to_string(),
    contract_title: "SPX2.0 Smart Contract Integration".to_string(),
    contract_col_function: "Contract Function".to_string(),
    contract_col_data: "Data".to_string(),
    contract_col_notes: "Implementation Notes".to_string(),
});

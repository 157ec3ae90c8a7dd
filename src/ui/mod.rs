mod asset_card;
mod info_tables;
mod lending_panel;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use asset_card::{CardAction, render_asset_card};
pub(crate) use info_tables::{render_api_table, render_contract_table};
pub(crate) use lending_panel::render_lending_panel;
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;

pub use utils::{format_change, format_compact, format_count, format_price};

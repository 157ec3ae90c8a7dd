// src/app/state.rs
use strum_macros::{Display, EnumIter};

/// Tabs of the lending panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub(crate) enum LendingTab {
    #[default]
    Summary,
    #[strum(to_string = "Rate History")]
    History,
}

/// View-only state of the lending panel. Not part of the store.
#[derive(Debug, Clone)]
pub(crate) struct LendingView {
    pub(crate) tab: LendingTab,
    pub(crate) ccy: String,
}

impl Default for LendingView {
    fn default() -> Self {
        Self {
            tab: LendingTab::default(),
            ccy: "BTC".to_string(),
        }
    }
}

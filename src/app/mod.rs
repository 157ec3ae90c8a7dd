mod root;
mod state;

pub(crate) use state::{LendingTab, LendingView};

pub use root::App;

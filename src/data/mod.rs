mod seed;

pub use seed::{seed_assets, seed_lending_history, seed_lending_summaries};

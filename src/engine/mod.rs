mod core;
mod lending;
mod messages;
mod schedule;
mod simulator;

pub use core::DashboardStore;
pub use lending::{JitterReport, jitter_lending, jitter_rate};
pub use messages::{RefreshKind, StoreEvent, SubscriptionId};
pub use schedule::{Deferred, Interval, take_if_due};
pub use simulator::MarketSimulator;

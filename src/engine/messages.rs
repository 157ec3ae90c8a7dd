use crate::domain::AssetFilter;

/// Which deferred refresh a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Assets,
    Lending,
}

/// Emitted by the store after each mutation, in mutation order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Every asset was stepped (tick or committed refresh).
    AssetsUpdated { revision: u64 },
    AssetRemoved(String),
    FlipToggled { id: String, flipped: bool },
    FilterChanged(AssetFilter),
    RefreshStarted(RefreshKind),
    LendingRatesUpdated { updated: usize, skipped: usize },
    TornDown,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

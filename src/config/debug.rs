//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every market tick (asset count, revision).
    pub log_ticks: bool,

    /// Log manual refresh requests and their deferred commits.
    pub log_refresh: bool,

    /// Log lending-rate jitter, including fields that failed to parse.
    pub log_lending: bool,

    /// Deletions, flips, filter changes.
    pub log_selection: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Timer start/cancel/teardown.
    pub log_lifecycle: bool,
}

pub const DF: LogFlags = LogFlags {
    log_ticks: false,
    log_refresh: true,
    log_lending: false,
    log_selection: true,
    log_performance: false,
    log_lifecycle: true,
};

//! Market simulation tuning (cadence, latency, random-walk shape).
use std::time::Duration;

/// Random-walk parameters applied to one price step.
/// `volatility` scales a uniform(-1, 1) shock; `trend` is a drift nudged by
/// a uniform factor from `SIMULATION.trend_factor_range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityProfile {
    pub volatility: f64,
    pub trend: f64,
}

impl VolatilityProfile {
    pub const fn new(volatility: f64, trend: f64) -> Self {
        Self { volatility, trend }
    }

    /// No shock and no drift: every step leaves the price untouched.
    pub const FLAT: Self = Self::new(0.0, 0.0);
}

pub struct LendingSimConfig {
    /// Each rate field is multiplied by a factor in [1 - jitter, 1 + jitter).
    pub jitter: f64,
    /// Decimals written back into the rate strings.
    pub rate_decimals: usize,
    /// Simulated network delay before a lending refresh commits.
    pub refresh_latency: Duration,
}

pub struct SimulationConfig {
    /// Period of the recurring market tick.
    pub tick_interval: Duration,
    /// Simulated network delay before a manual refresh commits.
    pub refresh_latency: Duration,

    /// Samples per asset history window.
    pub history_len: usize,
    /// Nominal spacing between generated history samples.
    pub history_interval_minutes: i64,
    /// Generated histories stay within base * (1 +/- band).
    pub history_band: f64,
    /// Used when a caller generates history without its own profile.
    pub default_history_profile: VolatilityProfile,

    pub trend_factor_range: (f64, f64),

    pub token_profile: VolatilityProfile,
    pub standard_profile: VolatilityProfile,

    pub lending: LendingSimConfig,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    tick_interval: Duration::from_secs(5),
    refresh_latency: Duration::from_secs(1),

    history_len: 30,
    history_interval_minutes: 5,
    history_band: 0.10,
    default_history_profile: VolatilityProfile::new(0.05, 0.01),

    trend_factor_range: (0.75, 1.25),

    // Tokens swing harder than listed instruments
    token_profile: VolatilityProfile::new(0.006, 0.001),
    standard_profile: VolatilityProfile::new(0.003, 0.0005),

    lending: LendingSimConfig {
        jitter: 0.05,
        rate_decimals: 6,
        refresh_latency: Duration::from_secs(1),
    },
};

use anyhow::Result;
use rand::Rng;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::config::{DF, LendingSimConfig};
use crate::domain::{LendingRateHistory, LendingRateSummary, SummaryField, parse_rate};

/// Outcome of one lending refresh pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JitterReport {
    pub updated: usize,
    /// Fields left as-is because their current value did not parse.
    pub skipped: usize,
}

/// Multiply a decimal-string rate by a factor in [1 - jitter, 1 + jitter) and
/// write it back with `rate_decimals` places.
pub fn jitter_rate<R: Rng>(rng: &mut R, raw: &str, cfg: &LendingSimConfig) -> Result<String> {
    let value = parse_rate(raw)?;
    let factor = rng.gen_range((1.0 - cfg.jitter)..(1.0 + cfg.jitter));
    Ok(format!("{:.*}", cfg.rate_decimals, value * factor))
}

fn jitter_in_place<R: Rng>(
    rng: &mut R,
    field: &mut String,
    label: &str,
    cfg: &LendingSimConfig,
    report: &mut JitterReport,
) {
    match jitter_rate(rng, field, cfg) {
        Ok(next) => {
            *field = next;
            report.updated += 1;
        }
        Err(e) => {
            log::warn!("Keeping {} rate {:?}: {:#}", label, field, e);
            report.skipped += 1;
        }
    }
}

/// Jitter every history rate and every summary field; restamp each summary.
/// A summary's new `ts` is `now_ms`, or one past its previous value if the clock lags.
pub fn jitter_lending<R: Rng>(
    rng: &mut R,
    history: &mut [LendingRateHistory],
    summaries: &mut BTreeMap<String, LendingRateSummary>,
    now_ms: i64,
    cfg: &LendingSimConfig,
) -> JitterReport {
    let mut report = JitterReport::default();

    for item in history.iter_mut() {
        let label = format!("{} history", item.ccy);
        jitter_in_place(rng, &mut item.rate, &label, cfg, &mut report);
    }

    for summary in summaries.values_mut() {
        for field in SummaryField::iter() {
            let label = format!("{} {}", summary.ccy, field);
            jitter_in_place(rng, summary.field_mut(field), &label, cfg, &mut report);
        }
        let next_ts = match summary.ts_ms() {
            Ok(prev) => now_ms.max(prev + 1),
            Err(_) => now_ms,
        };
        summary.ts = next_ts.to_string();
    }

    if DF.log_lending {
        log::info!(
            "Lending refresh: {} fields updated, {} skipped",
            report.updated,
            report.skipped
        );
    }
    report
}

use itertools::{Itertools, MinMaxResult};

/// Percentage change from `from` to `to`. Zero when `from` is not positive.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from > 0.0 { (to / from - 1.0) * 100.0 } else { 0.0 }
}

/// Min and max of a series, padded so a flat line still gets a visible band.
pub fn padded_bounds(values: impl IntoIterator<Item = f64>, pad_frac: f64) -> Option<(f64, f64)> {
    let (lo, hi) = match values
        .into_iter()
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    let span = hi - lo;
    let pad = if span > f64::EPSILON {
        span * pad_frac
    } else {
        (hi.abs() * pad_frac).max(f64::EPSILON)
    };
    Some((lo - pad, hi + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_handles_zero_base() {
        assert!((percent_change(100.0, 110.0) - 10.0).abs() < 1e-9);
        assert_eq!(percent_change(100.0, 100.0), 0.0);
        assert_eq!(percent_change(0.0, 5.0), 0.0);
    }

    #[test]
    fn bounds_pad_flat_series() {
        let (lo, hi) = padded_bounds([100.0, 100.0, 100.0], 0.1).unwrap();
        assert!(lo < 100.0 && hi > 100.0);
        assert!(padded_bounds(std::iter::empty(), 0.1).is_none());
    }

    #[test]
    fn bounds_cover_extremes() {
        let (lo, hi) = padded_bounds([3.0, 1.0, 2.0], 0.0).unwrap();
        assert_eq!((lo, hi), (1.0, 3.0));
    }
}

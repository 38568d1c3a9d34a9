//! Visibility-driven axis rescaling.
//!
//! Keeps the value axis tightly framed around only the currently visible
//! series, so toggling a series off does not leave the bounds calibrated to
//! hidden data. This module computes bounds and nothing else; the caller
//! applies them to the axis and triggers the redraw.

use crate::models::DebtSeries;

/// Value-axis bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// Bounds used when no visible, nonzero data exists.
pub const DEFAULT_BOUNDS: AxisBounds = AxisBounds {
    min: 0.0,
    max: 100.0,
};

/// Padding factor below the observed minimum.
pub const MIN_PAD: f64 = 0.95;
/// Padding factor above the observed maximum.
pub const MAX_PAD: f64 = 1.05;

/// Recompute axis bounds from the visible series only.
///
/// Zeros are excluded on the way in: a zero balance means "no debt", not a
/// true minimum. If nothing remains after filtering, the fixed default range
/// `[0, 100]` is returned. Otherwise the observed min/max get a symmetric 5%
/// padding, so the margin scales with the data's magnitude rather than being
/// a fixed pixel amount.
pub fn rescale(series: &[DebtSeries]) -> AxisBounds {
    let values = series
        .iter()
        .filter(|s| s.visible)
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| *v != 0.0);

    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if min.is_infinite() {
        return DEFAULT_BOUNDS;
    }
    AxisBounds {
        min: min * MIN_PAD,
        max: max * MAX_PAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DebtSeries;

    #[test]
    fn hidden_series_do_not_contribute() {
        let mut a = DebtSeries::new("A", vec![10.0, 20.0, 30.0]);
        let b = DebtSeries::new("B", vec![5.0, 15.0, 25.0]);
        a.visible = false;
        let bounds = rescale(&[a, b]);
        assert_eq!(bounds.min, 4.75);
        assert_eq!(bounds.max, 26.25);
    }
}

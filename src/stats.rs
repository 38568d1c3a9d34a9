use crate::models::{DebtSection, DebtSeries};
use serde::{Deserialize, Serialize};

/// Name of the synthetic per-month sum series appended to the chart.
pub const TOTAL_SERIES_NAME: &str = "Total Debt";

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub name: String,
    pub count: usize,
    /// Months with a zero balance ("no debt"; excluded from min/max).
    pub zeros: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Per-month totals across all cards.
pub fn monthly_totals(debt: &DebtSection) -> Vec<f64> {
    (0..debt.months.len())
        .map(|i| debt.cards.values().map(|values| values[i]).sum())
        .collect()
}

/// Compute per-series statistics. Zero balances count toward mean/median but
/// not min/max, mirroring the chart's zero-is-no-data policy.
pub fn series_summary(series: &[DebtSeries]) -> Vec<Summary> {
    let mut out = Vec::with_capacity(series.len());
    for s in series {
        let mut vals: Vec<f64> = s.values.clone();
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let zeros = vals.iter().filter(|v| **v == 0.0).count();
        let nonzero: Vec<f64> = vals.iter().copied().filter(|v| *v != 0.0).collect();
        let min = nonzero.first().cloned();
        let max = nonzero.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(Summary {
            name: s.name.clone(),
            count,
            zeros,
            min,
            max,
            mean,
            median,
        });
    }
    out
}

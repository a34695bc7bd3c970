//! Aggregate models computed over a portfolio view.

use serde::{Deserialize, Serialize};

/// Portfolio-level metrics over a view.
///
/// Only produced for a non-empty view with non-zero total weight. All
/// values are unrounded; presentation-layer rounding (e.g. to 2 decimal
/// places) is the caller's responsibility and must not feed back into
/// further computation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Weighted-average return percentage.
    pub weighted_return_pct: f64,
    /// Weighted-average risk level on the 0-7 scale.
    pub weighted_risk: f64,
    /// Unweighted arithmetic mean of fee percentages.
    pub mean_fee_pct: f64,
    /// Number of records in the view.
    pub fund_count: usize,
}

/// One fund's share of the view's total weight.
///
/// The data behind the portfolio distribution pie: percentages sum to
/// ~100 over the view regardless of how far the raw weights drift from
/// 100 after filtering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightSlice {
    /// Display name of the fund.
    pub name: String,
    /// Share of the view's total weight, in percent.
    pub share_pct: f64,
}

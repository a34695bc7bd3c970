//! Weighted aggregation of fund records.
//!
//! Pure computation: each call receives its full input and returns a
//! complete result. Precondition failures are typed errors, never
//! silently coerced to zero or NaN; the caller decides how to present
//! "no data".

use log::debug;
use thiserror::Error;

use crate::funds::PortfolioView;
use crate::portfolio::{AggregateResult, WeightSlice};

/// Errors raised when aggregation preconditions do not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationError {
    /// The view has no records to aggregate.
    #[error("No records to aggregate")]
    EmptyInput,

    /// Every record's weight is zero, so weighted averages are
    /// undefined (division by zero).
    #[error("Total portfolio weight is zero")]
    ZeroTotalWeight,
}

/// Computes portfolio metrics over a view.
///
/// - weighted-average return = Σ(weightᵢ × returnᵢ) / Σ(weightᵢ)
/// - weighted-average risk = Σ(weightᵢ × riskᵢ) / Σ(weightᵢ)
/// - mean fee = arithmetic mean of feeᵢ (unweighted)
/// - fund count = number of records in the view
///
/// All arithmetic is floating point with no internal rounding.
pub fn compute(view: &PortfolioView) -> Result<AggregateResult, AggregationError> {
    if view.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let total_weight = view.total_weight();
    if total_weight == 0.0 {
        return Err(AggregationError::ZeroTotalWeight);
    }

    let mut weighted_return = 0.0;
    let mut weighted_risk = 0.0;
    let mut fee_sum = 0.0;

    for record in view {
        weighted_return += record.weight_pct * record.return_pct;
        weighted_risk += record.weight_pct * f64::from(record.risk_level);
        fee_sum += record.fee_pct;
    }

    let result = AggregateResult {
        weighted_return_pct: weighted_return / total_weight,
        weighted_risk: weighted_risk / total_weight,
        mean_fee_pct: fee_sum / view.len() as f64,
        fund_count: view.len(),
    };

    debug!(
        "Aggregated {} funds (total weight {:.4})",
        result.fund_count, total_weight
    );

    Ok(result)
}

/// Computes each fund's share of the view's total weight, in view
/// order. Shares the aggregation preconditions: an empty view fails
/// with `EmptyInput`, an all-zero-weight view with `ZeroTotalWeight`.
pub fn weight_distribution(view: &PortfolioView) -> Result<Vec<WeightSlice>, AggregationError> {
    if view.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    let total_weight = view.total_weight();
    if total_weight == 0.0 {
        return Err(AggregationError::ZeroTotalWeight);
    }

    Ok(view
        .iter()
        .map(|record| WeightSlice {
            name: record.name.clone(),
            share_pct: record.weight_pct / total_weight * 100.0,
        })
        .collect())
}

//! Categorical filtering of fund records into portfolio views.

use std::collections::HashSet;

use crate::funds::{CategoryField, FundRecord, PortfolioView};

/// Returns the ordered subsequence of `records` whose value at `field`
/// is a member of `allowed` (case-sensitive exact match).
///
/// An empty `allowed` set yields an empty view. Pure and total; the
/// aggregation preconditions (`EmptyInput`) are reachable through it by
/// filtering down to nothing.
pub fn filter_by_category(
    records: &[FundRecord],
    field: CategoryField,
    allowed: &HashSet<String>,
) -> PortfolioView {
    let filtered: Vec<FundRecord> = records
        .iter()
        .filter(|r| allowed.contains(field.value_of(r)))
        .cloned()
        .collect();
    PortfolioView::new(filtered)
}

impl PortfolioView {
    /// Filters this view by a categorical field, returning a new view.
    /// Filters compose, so a view can be narrowed by manager and then
    /// by fund name.
    pub fn filter_by(&self, field: CategoryField, allowed: &HashSet<String>) -> PortfolioView {
        filter_by_category(self.records(), field, allowed)
    }
}

use serde::{Deserialize, Serialize};

/// One row of the fund portfolio.
///
/// The numeric fields are always present; descriptive text columns
/// (top holdings, geographic split, asset-class split) are carried
/// opaquely and never aggregated. A record with weight 0 is valid and
/// contributes zero to weighted aggregates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    /// Unique security code (ISIN).
    pub isin: String,
    /// Display name of the fund.
    pub name: String,
    /// Manager/provider name. Categorical, used for filtering.
    pub manager: String,
    /// Share of the overall portfolio, in percent. Expected to sum to
    /// ~100 across the full portfolio but not enforced.
    pub weight_pct: f64,
    /// Return percentage, signed.
    pub return_pct: f64,
    /// Risk level on the 0-7 scale.
    pub risk_level: u8,
    /// Annual fee percentage, non-negative.
    pub fee_pct: f64,
    /// Top holdings as a comma-separated list.
    pub top_holdings: String,
    /// Geographic split, e.g. `"Europa: 50%, EUA: 35%, Altres: 15%"`.
    pub geo_split: String,
    /// Asset-class split in the same format. Not present in every
    /// source table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_split: Option<String>,
}

/// Categorical fields a portfolio can be filtered by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CategoryField {
    Manager,
    FundName,
}

impl CategoryField {
    /// The value a record carries for this field.
    pub fn value_of<'a>(&self, record: &'a FundRecord) -> &'a str {
        match self {
            CategoryField::Manager => &record.manager,
            CategoryField::FundName => &record.name,
        }
    }
}

/// An ordered, read-only projection of the fund record set.
///
/// Views are created per query by filtering, never mutated in place,
/// and discarded after use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    records: Vec<FundRecord>,
}

impl PortfolioView {
    /// Creates a view over the given records, preserving their order.
    pub fn new(records: Vec<FundRecord>) -> Self {
        Self { records }
    }

    /// The records in this view, in order.
    pub fn records(&self) -> &[FundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FundRecord> {
        self.records.iter()
    }

    /// Distinct values of a categorical field, in first-seen order.
    /// Drives filter widgets in the (external) presentation layer.
    pub fn distinct_values(&self, field: CategoryField) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            let value = field.value_of(record);
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Distinct manager names, in first-seen order.
    pub fn managers(&self) -> Vec<String> {
        self.distinct_values(CategoryField::Manager)
    }

    /// Distinct fund names, in first-seen order.
    pub fn fund_names(&self) -> Vec<String> {
        self.distinct_values(CategoryField::FundName)
    }

    /// Total portfolio weight of the view, in percent.
    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(|r| r.weight_pct).sum()
    }
}

impl From<Vec<FundRecord>> for PortfolioView {
    fn from(records: Vec<FundRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a PortfolioView {
    type Item = &'a FundRecord;
    type IntoIter = std::slice::Iter<'a, FundRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

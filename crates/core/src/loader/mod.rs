//! Data-loading boundary.
//!
//! Sources supply the full fund record set as an immutable collection,
//! injected into filtering and aggregation rather than read from
//! process-wide state. Schema variance between historical tables is a
//! loader-level concern; the aggregator only ever sees `FundRecord`.

mod csv_source;
mod sample;

pub use csv_source::*;
pub use sample::*;

use thiserror::Error;

use crate::funds::FundRecord;

/// Errors raised while loading fund records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but carries values outside the schema's range.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

/// A source of fund records.
pub trait FundDataSource {
    /// Loads the full record set. The returned collection is owned by
    /// the caller and never mutated by the source.
    fn load(&self) -> Result<Vec<FundRecord>, LoadError>;
}

/// Range checks shared by all sources. Risk stays on the 0-7 scale and
/// fees are non-negative; weight and return are unconstrained.
pub(crate) fn validate_record(record: &FundRecord, row: usize) -> Result<(), LoadError> {
    if record.risk_level > 7 {
        return Err(LoadError::InvalidRecord {
            row,
            message: format!(
                "risk level {} for '{}' is outside the 0-7 scale",
                record.risk_level, record.isin
            ),
        });
    }
    if record.fee_pct < 0.0 {
        return Err(LoadError::InvalidRecord {
            row,
            message: format!("negative fee {} for '{}'", record.fee_pct, record.isin),
        });
    }
    Ok(())
}

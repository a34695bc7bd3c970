//! CSV-backed fund record source.
//!
//! Reads the unified schema: `isin,name,manager,weight_pct,return_pct,
//! risk_level,fee_pct,top_holdings,geo_split,asset_split`. An empty
//! `asset_split` field maps to `None`.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::funds::FundRecord;
use crate::loader::{validate_record, FundDataSource, LoadError};

/// One CSV row in the unified schema. Kept separate from `FundRecord`
/// so the wire headers can evolve without touching the domain model.
#[derive(Debug, Deserialize)]
struct CsvRow {
    isin: String,
    name: String,
    manager: String,
    weight_pct: f64,
    return_pct: f64,
    risk_level: u8,
    fee_pct: f64,
    #[serde(default)]
    top_holdings: String,
    #[serde(default)]
    geo_split: String,
    #[serde(default)]
    asset_split: Option<String>,
}

impl From<CsvRow> for FundRecord {
    fn from(row: CsvRow) -> Self {
        FundRecord {
            isin: row.isin,
            name: row.name,
            manager: row.manager,
            weight_pct: row.weight_pct,
            return_pct: row.return_pct,
            risk_level: row.risk_level,
            fee_pct: row.fee_pct,
            top_holdings: row.top_holdings,
            geo_split: row.geo_split,
            asset_split: row.asset_split.filter(|s| !s.is_empty()),
        }
    }
}

/// Parses fund records from a CSV reader.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<FundRecord>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        // Row numbers are 1-based and include the header line.
        let row_number = index + 2;
        let record: FundRecord = row?.into();
        validate_record(&record, row_number)?;
        records.push(record);
    }

    debug!("Loaded {} fund records from CSV", records.len());
    Ok(records)
}

/// Source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFundSource {
    path: PathBuf,
}

impl CsvFundSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FundDataSource for CsvFundSource {
    fn load(&self) -> Result<Vec<FundRecord>, LoadError> {
        let file = std::fs::File::open(&self.path)?;
        read_csv_records(file)
    }
}

//! Built-in sample portfolio.
//!
//! The ten-fund table the dashboard ships with, kept as a literal so
//! the library is usable without any external data file.

use crate::funds::FundRecord;
use crate::loader::{FundDataSource, LoadError};

/// Source backed by the built-in sample table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePortfolio;

impl FundDataSource for SamplePortfolio {
    fn load(&self) -> Result<Vec<FundRecord>, LoadError> {
        Ok(sample_records())
    }
}

fn fund(
    isin: &str,
    name: &str,
    manager: &str,
    weight_pct: f64,
    return_pct: f64,
    risk_level: u8,
    fee_pct: f64,
    top_holdings: &str,
    geo_split: &str,
) -> FundRecord {
    FundRecord {
        isin: isin.to_string(),
        name: name.to_string(),
        manager: manager.to_string(),
        weight_pct,
        return_pct,
        risk_level,
        fee_pct,
        top_holdings: top_holdings.to_string(),
        geo_split: geo_split.to_string(),
        asset_split: None,
    }
}

/// The sample fund records, in table order.
pub fn sample_records() -> Vec<FundRecord> {
    vec![
        fund(
            "LU0034353002",
            "DWS FLOAT RATE NOTES",
            "Deutsche Bank",
            5.83,
            2.56,
            2,
            0.26,
            "Swedbank, BNP Paribas, Rabobank",
            "Europa: 50%, EUA: 35%, Altres: 15%",
        ),
        fund(
            "LU0113257694",
            "SISF EUR CORPORATE BOND",
            "Schroders",
            4.11,
            1.42,
            2,
            1.04,
            "BMW, MSD Netherlands, Wintershall DEA",
            "Europa: 80%, EUA: 20%",
        ),
        fund(
            "LU0599946893",
            "DWS CONCEPT KALDEMORGEN",
            "DWS",
            22.62,
            7.0,
            5,
            1.56,
            "Alphabet, Microsoft, Allianz",
            "Global: 100%",
        ),
        fund(
            "LU0218171717",
            "JPM US SELECT EQ A EUR",
            "JPMorgan",
            3.97,
            11.5,
            4,
            1.50,
            "Apple, Microsoft, Amazon",
            "EUA: 90%, Altres: 10%",
        ),
        fund(
            "IE00B4468526",
            "POLAR CAPITAL GLOBAL TECHNOLOGY R EUR",
            "Polar Capital",
            2.64,
            18.42,
            6,
            1.62,
            "NVIDIA, Meta, TSMC",
            "EUA: 70%, Àsia: 20%, Altres: 10%",
        ),
        fund(
            "LU1769942233",
            "DWS INVEST CROCI JAPAN",
            "DWS",
            2.63,
            17.54,
            5,
            1.30,
            "Sony, Toyota, Daikin",
            "Japó: 100%",
        ),
        fund(
            "LU0203975437",
            "ROBECO GLOBAL PREMIUM",
            "Robeco",
            3.40,
            6.19,
            4,
            0.95,
            "Roche, Microsoft, ExxonMobil",
            "Global: 100%",
        ),
        fund(
            "LU0171307068",
            "BGF WORLD HEALTHSCIENCE FUND A2 EUR",
            "BlackRock",
            5.09,
            7.84,
            5,
            1.77,
            "UnitedHealth, Eli Lilly, AbbVie",
            "EUA: 85%, Europa: 15%",
        ),
        fund(
            "LU0232524495",
            "AB AMERICAN GROWTH PORTFOLIO",
            "Alliance Bernstein",
            5.66,
            14.8,
            5,
            1.0,
            "Apple, Microsoft, Tesla",
            "EUA: 100%",
        ),
        fund(
            "LU1295551144",
            "CAPITAL GROUP NEW PERSPECTIVE",
            "Capital Group",
            11.42,
            10.5,
            4,
            1.3,
            "Tesla, Alphabet, Roche",
            "Global: 100%",
        ),
    ]
}

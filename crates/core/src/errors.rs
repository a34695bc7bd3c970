//! Core error types for the Cartera library.
//!
//! This module defines the root error enum. Concern-specific errors
//! (aggregation preconditions, breakdown parsing, loading) live next to
//! the code that raises them and are wrapped here via `#[from]`.

use thiserror::Error;

use crate::funds::BreakdownError;
use crate::loader::LoadError;
use crate::portfolio::AggregationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Cartera library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Breakdown parsing failed: {0}")]
    Breakdown(#[from] BreakdownError),

    #[error("Failed to load fund records: {0}")]
    Load(#[from] LoadError),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

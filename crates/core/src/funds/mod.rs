//! Fund records, portfolio views, and categorical filtering.

mod breakdown;
mod fund_filter;
mod fund_model;

pub use breakdown::*;
pub use fund_filter::*;
pub use fund_model::*;

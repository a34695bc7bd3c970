//! Portfolio-level aggregation over filtered views.

mod aggregation_model;
mod aggregation_service;

#[cfg(test)]
mod aggregation_service_tests;

pub use aggregation_model::*;
pub use aggregation_service::*;

//! Domain layer for the mortgage calculator
//!
//! This module contains the loan data model, error taxonomy and port traits.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CalculationError, DomainResult};

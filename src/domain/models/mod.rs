pub mod config;
pub mod loan;

pub use config::{Config, LoggingConfig, ServerConfig};
pub use loan::{Aggregates, CachedLoan, CalculationResult, LoanParams, LoanRequest, Program};

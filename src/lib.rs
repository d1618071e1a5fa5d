//! Mortgage Calculator
//!
//! Computes mortgage aggregates (rate, loan sum, monthly annuity payment,
//! overpayment and last payment date) for a loan request and keeps every
//! distinct request in an in-memory cache with a sequential identifier.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Loan model, errors and port traits
//! - **Service Layer** (`services`): Validation, annuity arithmetic and cache orchestration
//! - **Adapters** (`adapters`): moka-backed cache and the axum HTTP API
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use mortgage_calculator::{FixedClock, InMemoryLoanCache, LoanParams, LoanRequest, MortgageService, Program};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let service = MortgageService::new(Arc::new(InMemoryLoanCache::new()), Arc::new(FixedClock(today)));
//!
//! let request = LoanRequest::new(LoanParams::new(5_000_000, 1_000_000, 240), Program::salary());
//! let loan = service.compute_or_fetch(&request).unwrap();
//! assert_eq!(loan.id, 1);
//! assert_eq!(loan.result.aggregates.monthly_payment, 33_457);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::InMemoryLoanCache;
pub use adapters::http::MortgageHttpServer;
pub use domain::models::{
    Aggregates, CachedLoan, CalculationResult, Config, LoanParams, LoanRequest, LoggingConfig,
    Program, ServerConfig,
};
pub use domain::ports::{Clock, FixedClock, LoanCache, SystemClock};
pub use domain::{CalculationError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::MortgageService;

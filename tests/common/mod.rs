//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use mortgage_calculator::{
    FixedClock, InMemoryLoanCache, LoanParams, LoanRequest, MortgageService, Program,
};

/// The date every fixture clock reports.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// A service over a fresh cache and a clock pinned to [`fixed_today`].
pub fn test_service() -> MortgageService<InMemoryLoanCache> {
    MortgageService::new(
        Arc::new(InMemoryLoanCache::new()),
        Arc::new(FixedClock(fixed_today())),
    )
}

/// Build a request from its raw parts.
pub fn request(object_cost: i64, initial_payment: i64, months: i32, program: Program) -> LoanRequest {
    LoanRequest::new(LoanParams::new(object_cost, initial_payment, months), program)
}

/// The reference salary-program request: 5,000,000 with 1,000,000 down over 240 months.
pub fn salary_request() -> LoanRequest {
    request(5_000_000, 1_000_000, 240, Program::salary())
}

//! Service layer: the calculation engine and the memoizing mortgage service.

pub mod calculator;
pub mod mortgage_service;

pub use mortgage_service::MortgageService;

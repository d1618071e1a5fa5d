//! In-memory caching layer for calculated loans.
//!
//! Uses `moka` for concurrent storage with an atomic compute-if-absent, so
//! each distinct request is calculated and numbered once.

pub mod in_memory_loan_cache;

pub use in_memory_loan_cache::InMemoryLoanCache;

//! CLI command implementations.

pub mod calculate;
pub mod serve;

//! Display helpers for human-readable CLI output.

pub mod table;

pub use table::{detail_table, format_amount};

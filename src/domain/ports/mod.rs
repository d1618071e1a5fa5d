//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - LoanCache: Storage for computed loan aggregates
//! - Clock: Source of the current date
//!
//! These traits keep the calculation services independent of the concrete
//! store and of the system time.

pub mod clock;
pub mod loan_cache;

pub use clock::{Clock, FixedClock, SystemClock};
pub use loan_cache::LoanCache;

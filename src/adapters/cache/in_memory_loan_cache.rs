//! In-memory loan result store backed by a moka concurrent cache.
//!
//! The cache is built without capacity or TTL bounds: entries live for the
//! lifetime of the process. moka's entry API provides the atomic
//! compute-if-absent needed so that concurrent first-time requests for one
//! key compute and number a single entry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use crate::domain::errors::{CalculationError, DomainResult};
use crate::domain::models::{CachedLoan, CalculationResult, LoanRequest};
use crate::domain::ports::LoanCache;

/// Thread-safe in-memory store of calculated loans.
pub struct InMemoryLoanCache {
    entries: Cache<LoanRequest, CachedLoan>,
    /// Last id handed out; ids start at 1.
    sequence: AtomicU64,
}

impl Default for InMemoryLoanCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLoanCache {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
            sequence: AtomicU64::new(0),
        }
    }
}

impl LoanCache for InMemoryLoanCache {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn put(&self, entry: CachedLoan) {
        let key = entry.result.request();
        self.entries.insert(key, entry);
    }

    fn get(&self, request: &LoanRequest) -> Option<CachedLoan> {
        self.entries.get(request)
    }

    fn remove(&self, request: &LoanRequest) {
        self.entries.invalidate(request);
    }

    fn remove_by_id(&self, id: u64) {
        let key = self
            .entries
            .iter()
            .find(|(_, entry)| entry.id == id)
            .map(|(key, _)| key);

        if let Some(key) = key {
            self.entries.invalidate(&*key);
        }
    }

    fn exists(&self, request: &LoanRequest) -> bool {
        self.entries.contains_key(request)
    }

    fn list_sorted(&self) -> Vec<CachedLoan> {
        let mut loans: Vec<CachedLoan> = self.entries.iter().map(|(_, entry)| entry).collect();
        loans.sort_by_key(|entry| entry.id);
        loans
    }

    fn get_or_try_insert_with<F>(
        &self,
        request: &LoanRequest,
        compute: F,
    ) -> DomainResult<(CachedLoan, bool)>
    where
        F: FnOnce() -> DomainResult<CalculationResult>,
    {
        let entry = self
            .entries
            .entry(*request)
            .or_try_insert_with(|| {
                let result = compute()?;
                let id = self.next_id();
                debug!(id, "Storing new loan calculation");
                Ok::<_, CalculationError>(CachedLoan { id, result })
            })
            .map_err(|err: Arc<CalculationError>| (*err).clone())?;

        let fresh = entry.is_fresh();
        Ok((entry.into_value(), fresh))
    }
}

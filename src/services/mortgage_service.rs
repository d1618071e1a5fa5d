use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CachedLoan, CalculationResult, LoanRequest};
use crate::domain::ports::{Clock, LoanCache};
use crate::services::calculator;

/// Service computing mortgage aggregates with memoization.
///
/// Owns the result cache and the clock used for payoff dates. Identical
/// requests are calculated once; later calls reuse the stored figures and
/// only recompute `last_payment_date` against the current date.
pub struct MortgageService<C: LoanCache> {
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<C: LoanCache> Clone for MortgageService<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: LoanCache> MortgageService<C> {
    /// Create a service over the given cache and clock.
    pub fn new(cache: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self { cache, clock }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Compute the aggregates for a request, or fetch them from the cache.
    ///
    /// Validation always runs first, so invalid requests never touch the
    /// cache. The returned entry carries the id assigned when the request was
    /// first calculated.
    #[instrument(skip(self), fields(object_cost = request.params.object_cost, months = request.params.months))]
    pub fn compute_or_fetch(&self, request: &LoanRequest) -> DomainResult<CachedLoan> {
        let rate = calculator::check_request(request).inspect_err(|err| {
            warn!(error = %err, "Rejected loan request");
        })?;

        let today = self.clock.today();
        let (mut entry, inserted) = self.cache.get_or_try_insert_with(request, || {
            let aggregates = calculator::compute_aggregates(&request.params, rate, today)?;
            Ok(CalculationResult {
                params: request.params,
                program: request.program,
                aggregates,
            })
        })?;

        if inserted {
            info!(id = entry.id, "Calculated new loan aggregates");
        } else {
            debug!(id = entry.id, "Loan aggregates served from cache");
            entry.result.aggregates.last_payment_date =
                calculator::last_payment_date(today, request.params.months)?;
        }

        Ok(entry)
    }

    /// All cached calculations in ascending id order.
    pub fn list_all(&self) -> Vec<CachedLoan> {
        self.cache.list_sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryLoanCache;
    use crate::domain::errors::CalculationError;
    use crate::domain::models::{LoanParams, Program};
    use crate::domain::ports::FixedClock;
    use chrono::NaiveDate;

    fn service_at(date: NaiveDate) -> MortgageService<InMemoryLoanCache> {
        MortgageService::new(Arc::new(InMemoryLoanCache::new()), Arc::new(FixedClock(date)))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn salary_request() -> LoanRequest {
        LoanRequest::new(LoanParams::new(5_000_000, 1_000_000, 240), Program::salary())
    }

    #[test]
    fn test_compute_or_fetch_inserts_once() {
        let service = service_at(date(2024, 1, 15));

        let first = service.compute_or_fetch(&salary_request()).unwrap();
        let second = service.compute_or_fetch(&salary_request()).unwrap();

        assert_eq!(first, second);
        assert_eq!(service.list_all().len(), 1);
    }

    #[test]
    fn test_cache_hit_refreshes_payment_date() {
        let cache = Arc::new(InMemoryLoanCache::new());
        let january = MortgageService::new(Arc::clone(&cache), Arc::new(FixedClock(date(2024, 1, 15))));
        let march = MortgageService::new(Arc::clone(&cache), Arc::new(FixedClock(date(2024, 3, 1))));

        let first = january.compute_or_fetch(&salary_request()).unwrap();
        let second = march.compute_or_fetch(&salary_request()).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.result.aggregates.last_payment_date, "2044-01-15");
        assert_eq!(second.result.aggregates.last_payment_date, "2044-03-01");
        assert_eq!(
            first.result.aggregates.monthly_payment,
            second.result.aggregates.monthly_payment
        );
    }

    #[test]
    fn test_invalid_request_is_not_cached() {
        let service = service_at(date(2024, 1, 15));
        let request = LoanRequest::new(LoanParams::new(5_000_000, 1_000_000, 240), Program::default());

        let err = service.compute_or_fetch(&request).unwrap_err();

        assert_eq!(err, CalculationError::NoProgramSelected);
        assert!(service.list_all().is_empty());
        assert!(!service.cache().exists(&request));
    }
}

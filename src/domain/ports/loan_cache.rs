use crate::domain::errors::DomainResult;
use crate::domain::models::{CachedLoan, CalculationResult, LoanRequest};

/// Port for the calculation result store following hexagonal architecture.
///
/// Entries are keyed by the full [`LoanRequest`] and carry an id drawn from
/// the store's own sequence. Implementations must be safe to share between
/// threads and must never expose a partially built entry.
///
/// # Examples
///
/// ```
/// use mortgage_calculator::adapters::cache::InMemoryLoanCache;
/// use mortgage_calculator::domain::models::{LoanParams, LoanRequest, Program};
/// use mortgage_calculator::domain::ports::LoanCache;
///
/// let cache = InMemoryLoanCache::new();
/// let request = LoanRequest::new(LoanParams::new(100, 20, 12), Program::base());
/// assert!(!cache.exists(&request));
/// assert!(cache.get(&request).is_none());
/// assert!(cache.list_sorted().is_empty());
/// ```
pub trait LoanCache: Send + Sync {
    /// Draw the next identifier from the store's sequence.
    ///
    /// Identifiers are strictly increasing and never handed out twice, even
    /// after the entry holding one is removed.
    fn next_id(&self) -> u64;

    /// Insert an entry, replacing any entry stored under the same request.
    fn put(&self, entry: CachedLoan);

    /// Look up the entry for a request.
    fn get(&self, request: &LoanRequest) -> Option<CachedLoan>;

    /// Remove the entry for a request. No-op when absent.
    fn remove(&self, request: &LoanRequest);

    /// Remove the entry holding `id`. No-op when absent.
    fn remove_by_id(&self, id: u64);

    /// Whether an entry is stored for the request.
    fn exists(&self, request: &LoanRequest) -> bool;

    /// All entries in ascending id order.
    fn list_sorted(&self) -> Vec<CachedLoan>;

    /// Return the entry for `request`, computing and inserting it when absent.
    ///
    /// The id is drawn from the sequence only after `compute` succeeds, inside
    /// the same critical section as the insert. Concurrent callers racing on
    /// the same absent key run `compute` at most once; the others wait and
    /// receive the stored entry. When `compute` fails nothing is stored and no
    /// id is consumed.
    ///
    /// The returned flag is `true` when this call inserted the entry.
    fn get_or_try_insert_with<F>(
        &self,
        request: &LoanRequest,
        compute: F,
    ) -> DomainResult<(CachedLoan, bool)>
    where
        F: FnOnce() -> DomainResult<CalculationResult>;
}

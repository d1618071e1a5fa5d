use serde::{Deserialize, Serialize};

/// Borrower-supplied loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanParams {
    /// Cost of the property in whole currency units
    pub object_cost: i64,
    /// Down payment in whole currency units
    pub initial_payment: i64,
    /// Loan term in months
    pub months: i32,
}

impl LoanParams {
    /// Create loan parameters.
    pub const fn new(object_cost: i64, initial_payment: i64, months: i32) -> Self {
        Self {
            object_cost,
            initial_payment,
            months,
        }
    }

    /// Principal borrowed: object cost minus down payment.
    ///
    /// Saturates instead of overflowing so that absurd inputs still fail the
    /// positivity check rather than panicking.
    pub const fn loan_sum(&self) -> i64 {
        self.object_cost.saturating_sub(self.initial_payment)
    }
}

/// Rate program selection.
///
/// Exactly one flag must be set for a request to be accepted. Unset flags are
/// left out of the serialized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    /// Corporate payroll client tier
    #[serde(default, skip_serializing_if = "is_false")]
    pub salary: bool,
    /// Military mortgage tier
    #[serde(default, skip_serializing_if = "is_false")]
    pub military: bool,
    /// Base tier
    #[serde(default, skip_serializing_if = "is_false")]
    pub base: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Program {
    /// Corporate payroll program.
    pub const fn salary() -> Self {
        Self {
            salary: true,
            military: false,
            base: false,
        }
    }

    /// Military program.
    pub const fn military() -> Self {
        Self {
            salary: false,
            military: true,
            base: false,
        }
    }

    /// Base program.
    pub const fn base() -> Self {
        Self {
            salary: false,
            military: false,
            base: true,
        }
    }
}

/// A complete calculation request and the cache key for its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanRequest {
    pub params: LoanParams,
    #[serde(default)]
    pub program: Program,
}

impl LoanRequest {
    /// Create a request from its parts.
    pub const fn new(params: LoanParams, program: Program) -> Self {
        Self { params, program }
    }
}

/// Computed loan figures. Currency amounts are truncated to whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Annual interest rate in percent
    pub rate: i32,
    pub loan_sum: i64,
    pub monthly_payment: i64,
    /// Total interest paid over the term
    pub overpayment: i64,
    /// ISO date (`YYYY-MM-DD`) of the final payment
    pub last_payment_date: String,
}

/// A request echoed together with its aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub params: LoanParams,
    pub program: Program,
    pub aggregates: Aggregates,
}

impl CalculationResult {
    /// The request this result was computed for.
    pub const fn request(&self) -> LoanRequest {
        LoanRequest::new(self.params, self.program)
    }
}

/// A cached calculation with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedLoan {
    pub id: u64,
    pub result: CalculationResult,
}

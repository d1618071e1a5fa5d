//! Domain errors for the mortgage calculator.

use thiserror::Error;

/// Errors raised while validating a loan request or computing its aggregates.
///
/// Every variant is terminal: nothing is retried and nothing is written to the
/// cache before one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("choose program")]
    NoProgramSelected,

    #[error("choose only 1 program")]
    MultiplePrograms,

    #[error("the initial payment should be more than or equal to 20% of the object cost")]
    InitialPaymentTooLow,

    #[error("loan sum must be greater than zero")]
    LoanSumZeroOrNegative,

    #[error("loan term in months should be a positive number")]
    MonthsShouldBePositive,

    #[error("calculation error: denominator is zero")]
    CalculationError,
}

pub type DomainResult<T> = Result<T, CalculationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(CalculationError::NoProgramSelected.to_string(), "choose program");
        assert_eq!(
            CalculationError::MultiplePrograms.to_string(),
            "choose only 1 program"
        );
        assert_eq!(
            CalculationError::LoanSumZeroOrNegative.to_string(),
            "loan sum must be greater than zero"
        );
    }
}

//! Mortgage aggregate calculation.
//!
//! All money arithmetic runs on `rust_decimal::Decimal`; amounts are truncated
//! to whole currency units only when the final [`Aggregates`] are assembled.

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::domain::errors::{CalculationError, DomainResult};
use crate::domain::models::{Aggregates, LoanParams, LoanRequest, Program};

/// Annual rate (percent) for the corporate payroll program.
pub const SALARY_RATE: i32 = 8;
/// Annual rate (percent) for the military program.
pub const MILITARY_RATE: i32 = 9;
/// Annual rate (percent) for the base program.
pub const BASE_RATE: i32 = 10;

/// Minimum share of the object cost that must be paid up front.
const MIN_INITIAL_PAYMENT_RATIO: Decimal = dec!(0.2);

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Map the selected program to its annual interest rate.
pub fn select_rate(program: &Program) -> DomainResult<i32> {
    match (program.salary, program.military, program.base) {
        (true, false, false) => Ok(SALARY_RATE),
        (false, true, false) => Ok(MILITARY_RATE),
        (false, false, true) => Ok(BASE_RATE),
        (false, false, false) => Err(CalculationError::NoProgramSelected),
        _ => Err(CalculationError::MultiplePrograms),
    }
}

/// Check that the down payment covers at least 20% of the object cost.
pub fn validate_request(params: &LoanParams) -> DomainResult<()> {
    let min_initial_payment = Decimal::from(params.object_cost) * MIN_INITIAL_PAYMENT_RATIO;
    let initial_payment = Decimal::from(params.initial_payment);

    if initial_payment < min_initial_payment {
        return Err(CalculationError::InitialPaymentTooLow);
    }
    Ok(())
}

/// Run every acceptance check on a request and return its annual rate.
///
/// Checks run in a fixed order and the first failure wins: down payment,
/// program, loan sum, term.
pub fn check_request(request: &LoanRequest) -> DomainResult<i32> {
    validate_request(&request.params)?;
    let rate = select_rate(&request.program)?;

    if request.params.loan_sum() <= 0 {
        return Err(CalculationError::LoanSumZeroOrNegative);
    }
    if request.params.months <= 0 {
        return Err(CalculationError::MonthsShouldBePositive);
    }

    Ok(rate)
}

/// Convert an annual percentage into a monthly fraction: `rate / 100 / 12`.
pub fn monthly_rate(annual_rate_percent: i32) -> Decimal {
    Decimal::from(annual_rate_percent) / dec!(100) / dec!(12)
}

/// Compute the fixed monthly payment with the annuity formula.
///
/// `P = S * r * (1 + r)^n / ((1 + r)^n - 1)`, or `S / n` when `r` is zero.
pub fn calculate_monthly_payment(
    loan_sum: Decimal,
    monthly_rate: Decimal,
    months: Decimal,
) -> DomainResult<Decimal> {
    if loan_sum <= Decimal::ZERO || months <= Decimal::ZERO {
        return Err(CalculationError::CalculationError);
    }

    if monthly_rate.is_zero() {
        return loan_sum
            .checked_div(months)
            .ok_or(CalculationError::CalculationError);
    }

    let base = Decimal::ONE + monthly_rate;
    let compound = match months.to_u64().filter(|_| months.fract().is_zero()) {
        Some(n) => base.checked_powu(n),
        None => base.checked_powd(months),
    }
    .ok_or(CalculationError::CalculationError)?;

    let numerator = loan_sum
        .checked_mul(monthly_rate)
        .and_then(|value| value.checked_mul(compound))
        .ok_or(CalculationError::CalculationError)?;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        return Err(CalculationError::CalculationError);
    }

    numerator
        .checked_div(denominator)
        .ok_or(CalculationError::CalculationError)
}

/// Date of the final payment: `today` advanced by `months` calendar months.
///
/// Day-of-month overflow clamps to the last day of the target month.
pub fn last_payment_date(today: NaiveDate, months: i32) -> DomainResult<String> {
    let months = u32::try_from(months).map_err(|_| CalculationError::MonthsShouldBePositive)?;
    today
        .checked_add_months(Months::new(months))
        .map(|date| date.format(DATE_FORMAT).to_string())
        .ok_or(CalculationError::CalculationError)
}

/// Compute the aggregates for a request that already passed [`check_request`].
pub fn compute_aggregates(
    params: &LoanParams,
    rate: i32,
    today: NaiveDate,
) -> DomainResult<Aggregates> {
    let loan_sum = Decimal::from(params.loan_sum());
    let months = Decimal::from(params.months);

    let monthly_payment = calculate_monthly_payment(loan_sum, monthly_rate(rate), months)?;
    let total_payment = monthly_payment
        .checked_mul(months)
        .ok_or(CalculationError::CalculationError)?;
    let overpayment = total_payment - loan_sum;

    Ok(Aggregates {
        rate,
        loan_sum: params.loan_sum(),
        monthly_payment: to_currency_units(monthly_payment)?,
        overpayment: to_currency_units(overpayment)?,
        last_payment_date: last_payment_date(today, params.months)?,
    })
}

/// Validate a request and compute its aggregates in one step.
pub fn calculate(request: &LoanRequest, today: NaiveDate) -> DomainResult<Aggregates> {
    let rate = check_request(request)?;
    compute_aggregates(&request.params, rate, today)
}

fn to_currency_units(amount: Decimal) -> DomainResult<i64> {
    amount
        .trunc()
        .to_i64()
        .ok_or(CalculationError::CalculationError)
}

//! Implementation of the `mortgage-calculator calculate` command.

use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;

use crate::adapters::cache::InMemoryLoanCache;
use crate::cli::display::{detail_table, format_amount};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{CachedLoan, LoanParams, LoanRequest, Program};
use crate::domain::ports::SystemClock;
use crate::services::MortgageService;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Cost of the property
    #[arg(long)]
    pub object_cost: i64,

    /// Down payment (at least 20% of the object cost)
    #[arg(long)]
    pub initial_payment: i64,

    /// Loan term in months
    #[arg(long, allow_hyphen_values = true)]
    pub months: i32,

    /// Corporate payroll program (8%)
    #[arg(long)]
    pub salary: bool,

    /// Military program (9%)
    #[arg(long)]
    pub military: bool,

    /// Base program (10%)
    #[arg(long)]
    pub base: bool,
}

impl CalculateArgs {
    /// The loan request described by these arguments.
    pub const fn to_request(&self) -> LoanRequest {
        LoanRequest::new(
            LoanParams::new(self.object_cost, self.initial_payment, self.months),
            Program {
                salary: self.salary,
                military: self.military,
                base: self.base,
            },
        )
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CalculationOutput {
    #[serde(flatten)]
    pub loan: CachedLoan,
}

impl CommandOutput for CalculationOutput {
    fn to_human(&self) -> String {
        let result = &self.loan.result;
        let aggregates = &result.aggregates;
        let table = detail_table([
            ("Object cost", format_amount(result.params.object_cost)),
            ("Initial payment", format_amount(result.params.initial_payment)),
            ("Term (months)", result.params.months.to_string()),
            ("Rate", format!("{}%", aggregates.rate)),
            ("Loan sum", format_amount(aggregates.loan_sum)),
            ("Monthly payment", format_amount(aggregates.monthly_payment)),
            ("Overpayment", format_amount(aggregates.overpayment)),
            ("Last payment", aggregates.last_payment_date.clone()),
        ]);
        format!("Calculation #{}\n{table}", self.loan.id)
    }
}

pub fn execute(args: &CalculateArgs, json_mode: bool) -> Result<()> {
    let service = MortgageService::new(Arc::new(InMemoryLoanCache::new()), Arc::new(SystemClock));

    let loan = service
        .compute_or_fetch(&args.to_request())
        .context("Calculation error")?;

    output(&CalculationOutput { loan }, json_mode);
    Ok(())
}

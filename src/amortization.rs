use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::LoanTerms;

/// schedule periods materialized when the caller does not pick a window
pub const DEFAULT_PREVIEW_MONTHS: u32 = 12;

/// one period of the amortization ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub interest_paid: Money,
    pub principal_paid: Money,
    pub remaining_balance: Money,
}

/// fixed payment plus a bounded prefix of the amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePreview {
    pub payment: Money,
    pub rows: Vec<ScheduleRow>,
}

impl SchedulePreview {
    /// interest paid across the previewed periods
    pub fn total_interest(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.interest_paid)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// principal repaid across the previewed periods
    pub fn total_principal(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.principal_paid)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// fixed monthly payment via the ordinary annuity formula, rounded to cents
pub fn monthly_payment(terms: &LoanTerms) -> Result<Money> {
    let rate = terms.monthly_rate().as_decimal();
    let months = terms.term_months();

    // the annuity denominator vanishes at r = 0; amortize linearly instead
    if rate.is_zero() {
        return Ok(Money::from_decimal(terms.principal() / Decimal::from(months)));
    }

    let principal_times_rate = terms
        .principal()
        .checked_mul(rate)
        .ok_or_else(|| LoanError::CalculationError {
            message: "monthly payment exceeds representable range".to_string(),
        })?;

    match growth_factor(rate, months) {
        Some(growth) => {
            let numerator = principal_times_rate
                .checked_mul(growth)
                .ok_or_else(|| LoanError::CalculationError {
                    message: "monthly payment exceeds representable range".to_string(),
                })?;
            let denominator = growth - Decimal::ONE;
            let payment = numerator
                .checked_div(denominator)
                .ok_or_else(|| LoanError::CalculationError {
                    message: "monthly payment exceeds representable range".to_string(),
                })?;
            Ok(Money::from_decimal(payment))
        }
        // (1 + r)^n overflowed; growth / (growth - 1) is 1 at cent
        // precision by then, leaving the interest-only limit
        None => Ok(Money::from_decimal(principal_times_rate)),
    }
}

/// month-by-month replay of the first min(term, preview) periods
pub fn schedule_preview(terms: &LoanTerms, preview_months: u32) -> Result<SchedulePreview> {
    // payment computed once, reused every period; the rounded balance feeds
    // the next period
    let payment = monthly_payment(terms)?;
    let monthly_rate = terms.monthly_rate().as_decimal();
    let months = terms.term_months().min(preview_months);

    let mut rows = Vec::new();
    let mut balance = Money::from_decimal(terms.principal());

    for month in 1..=months {
        let interest = balance * monthly_rate;
        let mut principal_portion = payment - interest;
        // the fixed payment can overshoot what remains in the final period
        if principal_portion > balance {
            principal_portion = balance;
        }
        balance = balance - principal_portion;

        rows.push(ScheduleRow {
            month,
            interest_paid: interest,
            principal_paid: principal_portion,
            remaining_balance: balance,
        });
    }

    Ok(SchedulePreview { payment, rows })
}

/// (1 + r)^n by repeated decimal multiplication, None on overflow
fn growth_factor(monthly_rate: Decimal, term_months: u32) -> Option<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..term_months {
        compound = compound.checked_mul(base)?;
    }
    Some(compound)
}

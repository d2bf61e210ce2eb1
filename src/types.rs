use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};

/// unique identifier for a stored scenario
pub type ScenarioId = Uuid;

/// highest annual rate accepted at the record-keeping boundary, in percent
pub const MAX_ANNUAL_RATE_PERCENT: Decimal = dec!(100);

/// longest term accepted at the record-keeping boundary, in months
pub const MAX_TERM_MONTHS: u32 = 480;

/// loan input parameter, used to report which one failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputField {
    Principal,
    AnnualRatePercent,
    TermMonths,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Principal => "principal",
            InputField::AnnualRatePercent => "annual_rate_percent",
            InputField::TermMonths => "term_months",
        };
        write!(f, "{}", name)
    }
}

/// validated loan terms: principal, annual rate in percent, term in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanTerms")]
pub struct LoanTerms {
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
}

/// unvalidated wire shape; deserialization funnels through the constructor
#[derive(Deserialize)]
struct RawLoanTerms {
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
}

impl TryFrom<RawLoanTerms> for LoanTerms {
    type Error = LoanError;

    fn try_from(raw: RawLoanTerms) -> Result<Self> {
        LoanTerms::new(raw.principal, raw.annual_rate_percent, raw.term_months)
    }
}

impl LoanTerms {
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, term_months: u32) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::InvalidInput {
                field: InputField::Principal,
                reason: "must be greater than zero".to_string(),
            });
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(LoanError::InvalidInput {
                field: InputField::AnnualRatePercent,
                reason: "must not be negative".to_string(),
            });
        }
        if term_months == 0 {
            return Err(LoanError::InvalidInput {
                field: InputField::TermMonths,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    /// original loan amount
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// nominal yearly rate in percent (5.5 means 5.5%)
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// number of monthly payments
    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// annual rate as a decimal fraction
    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }

    /// per-period rate: percent / 100 / 12
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate().monthly_rate()
    }

    /// range checks applied at the record-keeping boundary, not in the math
    pub fn validate_limits(&self) -> Result<()> {
        if self.annual_rate_percent > MAX_ANNUAL_RATE_PERCENT {
            return Err(LoanError::InvalidInput {
                field: InputField::AnnualRatePercent,
                reason: format!("must not exceed {}", MAX_ANNUAL_RATE_PERCENT),
            });
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(LoanError::InvalidInput {
                field: InputField::TermMonths,
                reason: format!("must not exceed {} months", MAX_TERM_MONTHS),
            });
        }
        Ok(())
    }
}

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::error::SipError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::SipResult;

const METHODOLOGY: &str =
    "Future value of an ordinary annuity with month-end contributions, compounded monthly";

/// Horizons beyond this attract a warning in the projection envelope.
const REALISTIC_HORIZON_YEARS: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a systematic investment plan projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Fixed amount contributed at the end of each month.
    pub monthly_contribution: Money,
    /// Expected annual return as a percentage (12.0 = 12%).
    pub annual_rate_percent: Decimal,
    /// Investment horizon in years. May be fractional; the yearly
    /// breakdown covers whole years only.
    pub years: Years,
}

/// Full-horizon maturity summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub total_invested: Money,
    pub estimated_returns: Money,
    pub total_value: Money,
}

/// Cumulative figures as if the horizon ended at `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub invested_to_date: Money,
    pub returns_to_date: Money,
    pub value_to_date: Money,
}

/// Top-level output from `project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipProjection {
    pub summary: InvestmentSummary,
    pub yearly_breakdown: Vec<YearlyRow>,
}

impl InvestmentInput {
    /// Build a validated input from typed values.
    pub fn new(
        monthly_contribution: Money,
        annual_rate_percent: Decimal,
        years: Years,
    ) -> SipResult<Self> {
        let input = Self {
            monthly_contribution,
            annual_rate_percent,
            years,
        };
        input.validate()?;
        Ok(input)
    }

    /// Parse three raw text values (as received from a form or CLI flag)
    /// into a validated input.
    pub fn parse(monthly: &str, rate: &str, years: &str) -> SipResult<Self> {
        Self::new(
            parse_field("monthly_contribution", monthly)?,
            parse_field("annual_rate_percent", rate)?,
            parse_field("years", years)?,
        )
    }

    /// All three fields must be strictly positive: the annuity formula
    /// divides by the monthly rate, and non-positive contributions or
    /// horizons are meaningless.
    pub fn validate(&self) -> SipResult<()> {
        require_positive("monthly_contribution", self.monthly_contribution)?;
        require_positive("annual_rate_percent", self.annual_rate_percent)?;
        require_positive("years", self.years)
    }

    fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(100) / dec!(12)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_field(field: &str, raw: &str) -> SipResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SipError::InvalidInput {
            field: field.into(),
            reason: "value is required".into(),
        });
    }
    Decimal::from_str(trimmed).map_err(|_| SipError::InvalidInput {
        field: field.into(),
        reason: format!("'{trimmed}' is not a valid number"),
    })
}

fn require_positive(field: &str, value: Decimal) -> SipResult<()> {
    if value <= Decimal::ZERO {
        return Err(SipError::InvalidInput {
            field: field.into(),
            reason: "must be > 0".into(),
        });
    }
    Ok(())
}

fn overflow(context: &str) -> SipError {
    SipError::Overflow {
        context: context.into(),
    }
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
/// Extreme rate/horizon combinations exceed Decimal's range and surface as
/// an overflow error rather than a panic.
fn compound(rate: Rate, n: u32) -> SipResult<Decimal> {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| overflow("growth factor"))?;
    }
    Ok(result)
}

/// (1 + monthly_rate)^months. Whole-month horizons compound iteratively;
/// fractional horizons fall back to powd.
fn growth_factor(monthly_rate: Rate, months: Decimal) -> SipResult<Decimal> {
    match months.fract().is_zero().then(|| months.to_u32()).flatten() {
        Some(n) => compound(monthly_rate, n),
        None => (Decimal::ONE + monthly_rate)
            .checked_powd(months)
            .ok_or_else(|| overflow("growth factor")),
    }
}

/// Annuity future value over `months` periods. No validation; callers have
/// already checked the input.
fn summary_for_months(input: &InvestmentInput, months: Decimal) -> SipResult<InvestmentSummary> {
    let monthly_rate = input.monthly_rate();
    let factor = growth_factor(monthly_rate, months)?;
    let total_value = input
        .monthly_contribution
        .checked_mul(factor - Decimal::ONE)
        .and_then(|v| v.checked_mul(Decimal::ONE + monthly_rate))
        .and_then(|v| v.checked_div(monthly_rate))
        .ok_or_else(|| overflow("maturity value"))?;
    let total_invested = input
        .monthly_contribution
        .checked_mul(months)
        .ok_or_else(|| overflow("total invested"))?;

    Ok(InvestmentSummary {
        total_invested,
        estimated_returns: total_value - total_invested,
        total_value,
    })
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Project the maturity value of the full (possibly fractional) horizon.
pub fn compute_summary(input: &InvestmentInput) -> SipResult<InvestmentSummary> {
    input.validate()?;
    summary_for_months(input, input.years * dec!(12))
}

/// One row per completed year, each recomputed from scratch over `year * 12`
/// months rather than accumulated incrementally, so every row is
/// independently correct. A partial final year gets no row; the summary
/// still covers it.
pub fn compute_yearly_breakdown(input: &InvestmentInput) -> SipResult<Vec<YearlyRow>> {
    input.validate()?;

    let whole_years = input.years.floor().to_u32().unwrap_or(0);
    let mut rows = Vec::with_capacity(whole_years as usize);

    for year in 1..=whole_years {
        let summary = summary_for_months(input, Decimal::from(year) * dec!(12))?;
        rows.push(YearlyRow {
            year,
            invested_to_date: summary.total_invested,
            returns_to_date: summary.estimated_returns,
            value_to_date: summary.total_value,
        });
    }

    Ok(rows)
}

/// Full projection: summary plus yearly breakdown, wrapped in the standard
/// output envelope.
pub fn project(input: &InvestmentInput) -> SipResult<ComputationOutput<SipProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let summary = compute_summary(input)?;
    let yearly_breakdown = compute_yearly_breakdown(input)?;

    if input.years > REALISTIC_HORIZON_YEARS {
        warnings.push(format!(
            "Horizon of {} years exceeds the realistic bound of {} years",
            input.years, REALISTIC_HORIZON_YEARS
        ));
    }

    let result = SipProjection {
        summary,
        yearly_breakdown,
    };

    Ok(with_metadata(
        METHODOLOGY,
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

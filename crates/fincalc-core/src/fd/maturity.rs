use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{
    round2, with_metadata, CompoundingFrequency, ComputationOutput, Money, Rate,
};
use crate::FincalcResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Parameters of a fixed deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: Money,
    /// Annual rate as a percentage (6.5 = 6.5%).
    pub annual_rate_pct: Rate,
    pub tenure_months: u32,
    #[serde(default)]
    pub compounding: CompoundingFrequency,
}

/// One year of deposit growth. A tenure that is not a whole number of years
/// gets a final entry covering the fractional remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdYearlyBreakdown {
    pub year: u32,
    pub opening_balance: Money,
    pub interest_earned: Money,
    pub closing_balance: Money,
}

/// Maturity summary plus the year-by-year breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdResult {
    pub maturity_amount: Money,
    pub total_interest: Money,
    /// Annualized effective yield in percent, independent of tenure.
    pub effective_yield_pct: Money,
    pub yearly_breakdown: Vec<FdYearlyBreakdown>,
}

impl FdResult {
    pub(crate) fn zeroed() -> Self {
        FdResult {
            maturity_amount: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            effective_yield_pct: Decimal::ZERO,
            yearly_breakdown: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

fn is_degenerate(input: &FdInput) -> bool {
    input.principal <= Decimal::ZERO
        || input.annual_rate_pct <= Decimal::ZERO
        || input.tenure_months == 0
}

/// Calculate fixed-deposit maturity, total interest, effective annual yield,
/// and the year-by-year growth breakdown.
///
/// Compounding continues smoothly through partial years: a 30-month deposit
/// accrues 2 full years plus a half-year stub at the same periodic rate.
/// The same zero-result convention as the EMI side applies to non-positive
/// inputs.
pub fn calculate_fd(input: &FdInput) -> FincalcResult<ComputationOutput<FdResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let assumptions = serde_json::json!({
        "compounding": input.compounding.to_string(),
        "effective_yield": "((1 + r/n)^n - 1) * 100, independent of tenure",
        "rounding": "2dp, half away from zero, per reported figure",
    });

    if is_degenerate(input) {
        warnings.push(
            "Non-positive principal, rate, or tenure; returning the zero result.".into(),
        );
        let elapsed = start.elapsed().as_micros() as u64;
        return Ok(with_metadata(
            "Compound interest: A = P * (1 + r/n)^(n*t)",
            &assumptions,
            warnings,
            elapsed,
            FdResult::zeroed(),
        ));
    }

    let periods_per_year = input.compounding.periods_per_year();
    let n = Decimal::from(periods_per_year);
    let periodic_rate = input.annual_rate_pct / dec!(100) / n;

    // t in years, possibly fractional; the exponent n*t then counts periods.
    let total_years = Decimal::from(input.tenure_months) / dec!(12);
    let maturity_factor = time_value::compound_factor(periodic_rate, n * total_years)?;
    let maturity_amount = input.principal * maturity_factor;
    let total_interest = maturity_amount - input.principal;

    let one_year_factor = time_value::compound(periodic_rate, periods_per_year);
    let effective_yield_pct = (one_year_factor - Decimal::ONE) * dec!(100);

    let full_years = input.tenure_months / 12;
    let fractional_months = input.tenure_months % 12;

    let mut yearly_breakdown = Vec::with_capacity(full_years as usize + 1);
    let mut balance = input.principal;

    for year in 1..=full_years {
        let opening = balance;
        let closing = opening * one_year_factor;

        yearly_breakdown.push(FdYearlyBreakdown {
            year,
            opening_balance: round2(opening),
            interest_earned: round2(closing - opening),
            closing_balance: round2(closing),
        });

        balance = closing;
    }

    if fractional_months > 0 {
        let opening = balance;
        let stub_periods = n * Decimal::from(fractional_months) / dec!(12);
        let closing = opening * time_value::compound_factor(periodic_rate, stub_periods)?;

        yearly_breakdown.push(FdYearlyBreakdown {
            year: full_years + 1,
            opening_balance: round2(opening),
            interest_earned: round2(closing - opening),
            closing_balance: round2(closing),
        });
    }

    let result = FdResult {
        maturity_amount: round2(maturity_amount),
        total_interest: round2(total_interest),
        effective_yield_pct: round2(effective_yield_pct),
        yearly_breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound interest: A = P * (1 + r/n)^(n*t)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_year_quarterly() {
        let output = calculate_fd(&FdInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(6),
            tenure_months: 12,
            compounding: CompoundingFrequency::Quarterly,
        })
        .unwrap();

        let r = &output.result;
        // 100000 * 1.015^4 = 106136.3550625
        assert_eq!(r.maturity_amount, dec!(106136.36));
        assert_eq!(r.total_interest, dec!(6136.36));
        assert_eq!(r.yearly_breakdown.len(), 1);
        assert_eq!(r.yearly_breakdown[0].closing_balance, r.maturity_amount);
    }

    #[test]
    fn test_yearly_compounding_is_simple_growth() {
        let output = calculate_fd(&FdInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(6),
            tenure_months: 12,
            compounding: CompoundingFrequency::Yearly,
        })
        .unwrap();

        // One yearly period: maturity is exactly P * (1 + r/100).
        assert_eq!(output.result.maturity_amount, dec!(106000.00));
        assert_eq!(output.result.effective_yield_pct, dec!(6.00));
    }

    #[test]
    fn test_effective_yield_ignores_tenure() {
        let base = FdInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(7.1),
            tenure_months: 12,
            compounding: CompoundingFrequency::Quarterly,
        };
        let longer = FdInput {
            tenure_months: 24,
            ..base.clone()
        };

        let short_yield = calculate_fd(&base).unwrap().result.effective_yield_pct;
        let long_yield = calculate_fd(&longer).unwrap().result.effective_yield_pct;
        assert_eq!(short_yield, long_yield);
    }

    #[test]
    fn test_fractional_year_gets_stub_row() {
        let output = calculate_fd(&FdInput {
            principal: dec!(200000),
            annual_rate_pct: dec!(6.5),
            tenure_months: 18,
            compounding: CompoundingFrequency::Quarterly,
        })
        .unwrap();

        let rows = &output.result.yearly_breakdown;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].year, 2);
        // The stub row closes within a cent of the directly computed maturity.
        assert!(
            (rows[1].closing_balance - output.result.maturity_amount).abs() <= dec!(0.01),
        );
    }

    #[test]
    fn test_openings_chain_to_closings() {
        let output = calculate_fd(&FdInput {
            principal: dec!(50000),
            annual_rate_pct: dec!(7),
            tenure_months: 36,
            compounding: CompoundingFrequency::HalfYearly,
        })
        .unwrap();

        let rows = &output.result.yearly_breakdown;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].opening_balance, dec!(50000));
        for pair in rows.windows(2) {
            // Each side rounds the same unrounded running balance.
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
        }
    }

    #[test]
    fn test_zero_rate_gives_zero_result() {
        let output = calculate_fd(&FdInput {
            principal: dec!(100000),
            annual_rate_pct: Decimal::ZERO,
            tenure_months: 12,
            compounding: CompoundingFrequency::Quarterly,
        })
        .unwrap();

        let r = &output.result;
        assert_eq!(r.maturity_amount, Decimal::ZERO);
        assert_eq!(r.effective_yield_pct, Decimal::ZERO);
        assert!(r.yearly_breakdown.is_empty());
        assert_eq!(output.warnings.len(), 1);
    }
}

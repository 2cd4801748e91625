use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{round2, with_metadata, ComputationOutput, Money, Rate};
use crate::FincalcResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Parameters of an amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: Money,
    /// Annual rate as a percentage (10 = 10%).
    pub annual_rate_pct: Rate,
    pub tenure_months: u32,
}

/// One month of the amortization schedule. Every field is rounded to 2
/// decimal places at record time; the schedule itself iterates on the
/// unrounded running balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub month: u32,
    pub emi: Money,
    pub principal: Money,
    pub interest: Money,
    /// Remaining principal after this month's payment, floored at 0.
    pub balance: Money,
}

/// EMI summary plus the full month-by-month schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub monthly_breakdown: Vec<MonthlyBreakdown>,
}

impl EmiResult {
    /// The sentinel result for non-positive inputs: every figure 0, no rows.
    pub(crate) fn zeroed() -> Self {
        EmiResult {
            emi: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            monthly_breakdown: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

pub(crate) fn is_degenerate(input: &EmiInput) -> bool {
    input.principal <= Decimal::ZERO
        || input.annual_rate_pct <= Decimal::ZERO
        || input.tenure_months == 0
}

fn monthly_rate(annual_rate_pct: Rate) -> Rate {
    annual_rate_pct / dec!(12) / dec!(100)
}

/// Build the schedule without the output envelope. Shared with the
/// balance-transfer comparison, which embeds two plain `EmiResult`s.
pub(crate) fn build_schedule(input: &EmiInput) -> FincalcResult<EmiResult> {
    if is_degenerate(input) {
        return Ok(EmiResult::zeroed());
    }

    let rate = monthly_rate(input.annual_rate_pct);
    let n = input.tenure_months;

    let emi = time_value::annuity_payment(input.principal, rate, n)?;

    // Totals derive from the unrounded EMI; rounding happens once at output.
    let total_payment = emi * Decimal::from(n);
    let total_interest = total_payment - input.principal;

    let mut monthly_breakdown = Vec::with_capacity(n as usize);
    let mut balance = input.principal;

    for month in 1..=n {
        let interest = balance * rate;
        let principal_part = emi - interest;
        balance -= principal_part;

        monthly_breakdown.push(MonthlyBreakdown {
            month,
            emi: round2(emi),
            principal: round2(principal_part),
            interest: round2(interest),
            balance: round2(balance).max(Decimal::ZERO),
        });
    }

    Ok(EmiResult {
        emi: round2(emi),
        total_interest: round2(total_interest),
        total_payment: round2(total_payment),
        monthly_breakdown,
    })
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Calculate the EMI, total interest and payment, and the month-by-month
/// amortization schedule for a loan.
///
/// Non-positive principal, rate, or tenure yields the all-zero result with a
/// warning rather than an error; callers that need to distinguish invalid
/// input from a zero-cost loan check the envelope's warnings.
pub fn calculate_emi(input: &EmiInput) -> FincalcResult<ComputationOutput<EmiResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if is_degenerate(input) {
        warnings.push(
            "Non-positive principal, rate, or tenure; returning the zero result.".into(),
        );
    }

    let result = build_schedule(input)?;

    let assumptions = serde_json::json!({
        "monthly_rate": "annual_rate_pct / 12 / 100",
        "rounding": "2dp, half away from zero, per reported figure",
        "totals_from": "unrounded EMI",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-payment amortization: EMI = P * r * (1+r)^n / ((1+r)^n - 1)",
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

    fn standard_loan() -> EmiInput {
        EmiInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(10),
            tenure_months: 12,
        }
    }

    #[test]
    fn test_standard_loan_emi() {
        let output = calculate_emi(&standard_loan()).unwrap();
        let r = &output.result;

        assert_eq!(r.emi, dec!(8791.59));
        // Total payment comes off the unrounded EMI, so it lands a couple of
        // cents under 12x the rounded figure.
        assert!((r.total_payment - dec!(105499.06)).abs() <= dec!(0.02));
        assert!((r.total_interest - dec!(5499.06)).abs() <= dec!(0.02));
        assert_eq!(r.monthly_breakdown.len(), 12);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_final_balance_is_zero() {
        let output = calculate_emi(&standard_loan()).unwrap();
        let last = output.result.monthly_breakdown.last().unwrap();
        assert_eq!(last.balance, Decimal::ZERO);
    }

    #[test]
    fn test_balance_never_negative_and_monotonic() {
        let output = calculate_emi(&EmiInput {
            principal: dec!(250000),
            annual_rate_pct: dec!(8.5),
            tenure_months: 60,
        })
        .unwrap();

        let rows = &output.result.monthly_breakdown;
        for pair in rows.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
        }
        assert!(rows.iter().all(|row| row.balance >= Decimal::ZERO));
    }

    #[test]
    fn test_principal_parts_sum_to_principal() {
        let input = EmiInput {
            principal: dec!(500000),
            annual_rate_pct: dec!(9),
            tenure_months: 24,
        };
        let output = calculate_emi(&input).unwrap();

        let total_principal: Decimal = output
            .result
            .monthly_breakdown
            .iter()
            .map(|row| row.principal)
            .sum();

        // Each of the 24 rows is rounded independently, so allow a cent per row.
        let tolerance = dec!(0.01) * Decimal::from(input.tenure_months);
        assert!((total_principal - input.principal).abs() <= tolerance);
    }

    #[test]
    fn test_zero_principal_gives_zero_result() {
        let output = calculate_emi(&EmiInput {
            principal: Decimal::ZERO,
            annual_rate_pct: dec!(10),
            tenure_months: 12,
        })
        .unwrap();

        let r = &output.result;
        assert_eq!(r.emi, Decimal::ZERO);
        assert_eq!(r.total_payment, Decimal::ZERO);
        assert!(r.monthly_breakdown.is_empty());
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_negative_rate_gives_zero_result() {
        let output = calculate_emi(&EmiInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(-1),
            tenure_months: 12,
        })
        .unwrap();

        assert!(output.result.monthly_breakdown.is_empty());
        assert!(!output.warnings.is_empty());
    }
}

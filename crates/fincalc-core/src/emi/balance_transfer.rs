use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::schedule::{build_schedule, is_degenerate, EmiInput, EmiResult};
use crate::types::{round2, with_metadata, ComputationOutput, Money, Rate};
use crate::FincalcResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Terms of an existing loan and the refinancing offer it is measured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransferInput {
    pub loan_amount: Money,
    pub current_rate_pct: Rate,
    pub current_tenure_months: u32,
    pub new_rate_pct: Rate,
    pub new_tenure_months: u32,
    /// One-time foreclosure charge on the existing loan.
    pub exit_charge: Money,
    /// One-time processing fee on the new loan.
    pub processing_charge: Money,
}

/// Side-by-side cost comparison of staying put vs refinancing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransferComparison {
    pub current: EmiResult,
    pub new_loan: EmiResult,
    pub exit_charge: Money,
    pub processing_charge: Money,
    pub current_total_cost: Money,
    pub new_total_cost: Money,
    pub savings: Money,
    /// Strictly positive savings; breaking even does not justify a transfer.
    pub is_transfer_beneficial: bool,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compare the total cost of the current loan against refinancing the same
/// amount at new terms, including the one-time exit and processing charges.
pub fn compare_balance_transfer(
    input: &BalanceTransferInput,
) -> FincalcResult<ComputationOutput<BalanceTransferComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let current_terms = EmiInput {
        principal: input.loan_amount,
        annual_rate_pct: input.current_rate_pct,
        tenure_months: input.current_tenure_months,
    };
    let new_terms = EmiInput {
        principal: input.loan_amount,
        annual_rate_pct: input.new_rate_pct,
        tenure_months: input.new_tenure_months,
    };

    if is_degenerate(&current_terms) {
        warnings.push("Current loan has non-positive terms; its cost is zero.".into());
    }
    if is_degenerate(&new_terms) {
        warnings.push("New loan has non-positive terms; its cost is zero.".into());
    }

    let current = build_schedule(&current_terms)?;
    let new_loan = build_schedule(&new_terms)?;

    let current_total_cost = current.total_payment;
    let new_total_cost = new_loan.total_payment + input.exit_charge + input.processing_charge;
    let savings = current_total_cost - new_total_cost;

    let comparison = BalanceTransferComparison {
        current,
        new_loan,
        exit_charge: input.exit_charge,
        processing_charge: input.processing_charge,
        current_total_cost: round2(current_total_cost),
        new_total_cost: round2(new_total_cost),
        savings: round2(savings),
        is_transfer_beneficial: savings > Decimal::ZERO,
    };

    let assumptions = serde_json::json!({
        "current_total_cost": "current loan total payment",
        "new_total_cost": "new loan total payment + exit charge + processing charge",
        "beneficial_when": "savings > 0",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Total-cost comparison of the existing loan vs a refinanced loan plus one-time charges",
        &assumptions,
        warnings,
        elapsed,
        comparison,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transfer_input() -> BalanceTransferInput {
        BalanceTransferInput {
            loan_amount: dec!(500000),
            current_rate_pct: dec!(11),
            current_tenure_months: 60,
            new_rate_pct: dec!(9),
            new_tenure_months: 60,
            exit_charge: dec!(5000),
            processing_charge: dec!(2500),
        }
    }

    #[test]
    fn test_cheaper_rate_is_beneficial() {
        let output = compare_balance_transfer(&transfer_input()).unwrap();
        let c = &output.result;

        assert!(c.savings > Decimal::ZERO);
        assert!(c.is_transfer_beneficial);
        assert_eq!(
            c.new_total_cost,
            round2(c.new_loan.total_payment + dec!(5000) + dec!(2500)),
        );
    }

    #[test]
    fn test_identical_terms_break_even_is_not_beneficial() {
        let mut input = transfer_input();
        input.new_rate_pct = input.current_rate_pct;
        input.new_tenure_months = input.current_tenure_months;
        input.exit_charge = Decimal::ZERO;
        input.processing_charge = Decimal::ZERO;

        let output = compare_balance_transfer(&input).unwrap();
        let c = &output.result;

        assert_eq!(c.savings, Decimal::ZERO);
        assert!(!c.is_transfer_beneficial);
    }

    #[test]
    fn test_charges_eat_into_savings() {
        let without_charges = {
            let mut input = transfer_input();
            input.exit_charge = Decimal::ZERO;
            input.processing_charge = Decimal::ZERO;
            compare_balance_transfer(&input).unwrap().result.savings
        };
        let with_charges = compare_balance_transfer(&transfer_input())
            .unwrap()
            .result
            .savings;

        assert_eq!(without_charges - with_charges, dec!(7500));
    }

    #[test]
    fn test_degenerate_current_loan_warns() {
        let mut input = transfer_input();
        input.current_tenure_months = 0;

        let output = compare_balance_transfer(&input).unwrap();
        assert!(output.result.current.monthly_breakdown.is_empty());
        assert_eq!(output.result.current_total_cost, Decimal::ZERO);
        assert!(!output.warnings.is_empty());
    }
}

use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::emi::balance_transfer::{self, BalanceTransferInput};
use fincalc_core::emi::schedule::{self, EmiInput};

use crate::input;

/// Arguments for the EMI schedule calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 10.5 for 10.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan tenure in months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the balance-transfer comparison
#[derive(Args)]
pub struct BalanceTransferArgs {
    /// Outstanding loan amount being refinanced
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual rate of the existing loan (percentage)
    #[arg(long)]
    pub current_rate: Option<Decimal>,

    /// Remaining tenure of the existing loan in months
    #[arg(long)]
    pub current_tenure: Option<u32>,

    /// Annual rate offered on the new loan (percentage)
    #[arg(long)]
    pub new_rate: Option<Decimal>,

    /// Tenure of the new loan in months
    #[arg(long)]
    pub new_tenure: Option<u32>,

    /// One-time foreclosure charge on the existing loan
    #[arg(long)]
    pub exit_charge: Option<Decimal>,

    /// One-time processing fee on the new loan
    #[arg(long)]
    pub processing_charge: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EmiInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
        }
    };

    let result = schedule::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_balance_transfer(args: BalanceTransferArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bt_input: BalanceTransferInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BalanceTransferInput {
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            current_rate_pct: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            current_tenure_months: args
                .current_tenure
                .ok_or("--current-tenure is required (or provide --input)")?,
            new_rate_pct: args
                .new_rate
                .ok_or("--new-rate is required (or provide --input)")?,
            new_tenure_months: args
                .new_tenure
                .ok_or("--new-tenure is required (or provide --input)")?,
            exit_charge: args.exit_charge.unwrap_or(Decimal::ZERO),
            processing_charge: args.processing_charge.unwrap_or(Decimal::ZERO),
        }
    };

    let result = balance_transfer::compare_balance_transfer(&bt_input)?;
    Ok(serde_json::to_value(result)?)
}

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::fd::maturity::{self, FdInput};
use fincalc_core::CompoundingFrequency;

use crate::input;

/// CLI-side mirror of the core compounding enum so clap can parse it.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompoundingArg {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl From<CompoundingArg> for CompoundingFrequency {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::Monthly => CompoundingFrequency::Monthly,
            CompoundingArg::Quarterly => CompoundingFrequency::Quarterly,
            CompoundingArg::HalfYearly => CompoundingFrequency::HalfYearly,
            CompoundingArg::Yearly => CompoundingFrequency::Yearly,
        }
    }
}

/// Arguments for the fixed-deposit calculation
#[derive(Args)]
pub struct FdArgs {
    /// Deposit amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 6.5 for 6.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Deposit tenure in months
    #[arg(long, alias = "tenure")]
    pub tenure_months: Option<u32>,

    /// Compounding frequency (defaults to quarterly)
    #[arg(long)]
    pub compounding: Option<CompoundingArg>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_fd(args: FdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: FdInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FdInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or provide --input)")?,
            compounding: args
                .compounding
                .map(CompoundingFrequency::from)
                .unwrap_or_default(),
        }
    };

    let result = maturity::calculate_fd(&fd_input)?;
    Ok(serde_json::to_value(result)?)
}

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::emi::{BalanceTransferArgs, EmiArgs};
use commands::fd::FdArgs;

/// Loan EMI and fixed-deposit calculations
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Loan EMI and fixed-deposit calculations",
    long_about = "A CLI for loan and deposit arithmetic with decimal precision. \
                  Computes EMI amortization schedules, balance-transfer \
                  comparisons, and fixed-deposit maturity with yearly breakdowns."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate EMI and the monthly amortization schedule
    Emi(EmiArgs),
    /// Compare an existing loan against a refinancing offer
    BalanceTransfer(BalanceTransferArgs),
    /// Calculate fixed-deposit maturity and yearly breakdown
    Fd(FdArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::BalanceTransfer(args) => commands::emi::run_balance_transfer(args),
        Commands::Fd(args) => commands::fd::run_fd(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

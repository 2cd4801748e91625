pub mod balance_transfer;
pub mod schedule;

pub use balance_transfer::{
    compare_balance_transfer, BalanceTransferComparison, BalanceTransferInput,
};
pub use schedule::{calculate_emi, EmiInput, EmiResult, MonthlyBreakdown};

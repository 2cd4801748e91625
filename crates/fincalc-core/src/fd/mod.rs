pub mod maturity;

pub use maturity::{calculate_fd, FdInput, FdResult, FdYearlyBreakdown};

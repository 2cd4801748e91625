pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "fd")]
pub mod fd;

pub use error::FincalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;

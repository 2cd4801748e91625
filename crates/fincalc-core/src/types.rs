use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates. Public inputs carry them as percentages (10 = 10%);
/// internal helpers work with per-period decimal rates.
pub type Rate = Decimal;

/// How often deposit interest is compounded per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    /// 12 compounding periods per year
    Monthly,
    /// 4 periods per year. Standard for bank fixed deposits.
    #[default]
    Quarterly,
    /// 2 periods per year
    HalfYearly,
    /// 1 period per year
    Yearly,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Yearly => 1,
        }
    }

    /// Number of months covered by one compounding period.
    pub fn months_per_period(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 1,
            CompoundingFrequency::Quarterly => 3,
            CompoundingFrequency::HalfYearly => 6,
            CompoundingFrequency::Yearly => 12,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::HalfYearly => "half-yearly",
            CompoundingFrequency::Yearly => "yearly",
        };
        write!(f, "{name}")
    }
}

/// Round to 2 decimal places, half away from zero. Applied to every reported
/// figure independently, never to the running values a schedule iterates on.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::HalfYearly.periods_per_year(), 2);
        assert_eq!(CompoundingFrequency::Yearly.periods_per_year(), 1);
    }

    #[test]
    fn test_default_is_quarterly() {
        assert_eq!(
            CompoundingFrequency::default(),
            CompoundingFrequency::Quarterly
        );
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&CompoundingFrequency::HalfYearly).unwrap();
        assert_eq!(json, "\"half-yearly\"");

        let parsed: CompoundingFrequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, CompoundingFrequency::Monthly);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(-2.675)), dec!(-2.68));
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(1.004)), dec!(1.00));
    }
}

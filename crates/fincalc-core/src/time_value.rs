use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::FincalcError;
use crate::types::{Money, Rate};
use crate::FincalcResult;

/// Compute (1 + rate)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Compute (1 + rate)^periods where the period count may be fractional,
/// e.g. quarterly compounding over 7 months. Integral counts take the exact
/// iterative path; fractional ones go through powd.
pub fn compound_factor(rate: Rate, periods: Decimal) -> FincalcResult<Decimal> {
    if periods.fract().is_zero() {
        if let Some(n) = periods.to_u32() {
            return Ok(compound(rate, n));
        }
    }

    (Decimal::ONE + rate)
        .checked_powd(periods)
        .ok_or_else(|| FincalcError::Overflow {
            context: format!("compound factor over {periods} periods"),
        })
}

/// Level payment amortizing `principal` over `periods` at `periodic_rate`:
/// P * r * (1+r)^n / ((1+r)^n - 1).
///
/// The denominator vanishes only at a zero periodic rate, which callers are
/// expected to have screened out; it is still guarded here because Decimal
/// has no infinities to fall back on.
pub fn annuity_payment(principal: Money, periodic_rate: Rate, periods: u32) -> FincalcResult<Money> {
    let factor = compound(periodic_rate, periods);
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(FincalcError::DivisionByZero {
            context: "annuity denominator ((1+r)^n - 1)".into(),
        });
    }

    Ok(principal * periodic_rate * factor / denominator)
}

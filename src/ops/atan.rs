//! Arctangent.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_POWER_RADIX;
use crate::ops::asin::AsinPrimitive;
use crate::ops::asin::TaylorAsin;
use crate::ops::asin::ASIN_GUARD_DIGITS;
use crate::ops::consts::Consts;
use crate::ops::muldiv::divide;
use crate::ops::root::root;
use crate::ops::round::round_dp;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;
use num_traits::Zero;

/// Computes the arctangent of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn atan(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    atan_with(&TaylorAsin, x, dp, rm, cc)
}

/// Computes the arctangent of `x` using the inverse sine primitive `primitive`.
/// See `atan` for details.
pub fn atan_with<P: AsinPrimitive>(
    primitive: &P,
    x: &BigDecimal,
    dp: i64,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return round_dp(x, dp, rm);
    }

    if x.is_negative() {
        return Ok(-atan_with(primitive, &x.abs(), dp, rm.invert(), cc)?);
    }

    let dp_w = dp.max(0) + ASIN_GUARD_DIGITS;

    let ret = if *x > *ONE {
        // atan(x) = π/2 - atan(1/x)
        let r = divide(&ONE, x, -(dp_w + 2), RoundingMode::HalfEven)?;
        let half_pi = cc.half_pi(dp_w + 1, RoundingMode::HalfEven)?;
        half_pi - atan_unit(primitive, &r, dp_w, cc)?
    } else {
        atan_unit(primitive, x, dp_w, cc)?
    };

    round_dp(&ret, dp, rm)
}

// atan(x) = asin(x / sqrt(1 + x^2)), 0 <= x <= 1
fn atan_unit<P: AsinPrimitive>(primitive: &P, x: &BigDecimal, dp_w: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let dp_i = dp_w + 2;
    let h = root(&(&*ONE + x * x), &BigInt::from(2), DEFAULT_POWER_RADIX, dp_i, RoundingMode::HalfEven)?;
    let s = divide(x, &h, -dp_i, RoundingMode::HalfEven)?;

    primitive.asin(&s, dp_w, cc)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_arctangent() {
        let mut cc = Consts::new().unwrap();

        assert_eq!(atan(&d("0"), 5, RoundingMode::HalfUp, &mut cc).unwrap(), d("0"));
        assert_eq!(atan(&d("1"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.78539816339744830962"));
        assert_eq!(atan(&d("0.5"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.46364760900080611621"));
        assert_eq!(atan(&d("-3"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("-1.24904577239825442583"));
        assert_eq!(atan(&d("-3"), 20, RoundingMode::Ceiling, &mut cc).unwrap(), d("-1.24904577239825442582"));
        assert_eq!(atan(&d("1000"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.56979632712822975256"));

        // approaches π/2
        assert_eq!(atan(&d("1e50"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.57079632679489661923"));
    }
}

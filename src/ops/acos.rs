//! Arccosine.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ops::asin::AsinPrimitive;
use crate::ops::asin::TaylorAsin;
use crate::ops::asin::ASIN_GUARD_DIGITS;
use crate::ops::consts::Consts;
use crate::ops::round::round_dp;
use bigdecimal::BigDecimal;
use num_traits::Signed;
use num_traits::Zero;

/// Computes the arccosine of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - InvalidArgument: `x` is greater than 1 or smaller than -1.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn acos(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    acos_with(&TaylorAsin, x, dp, rm, cc)
}

/// Computes the arccosine of `x` as `π/2 - asin(x)` using the inverse sine primitive `primitive`.
/// See `acos` for details.
pub fn acos_with<P: AsinPrimitive>(
    primitive: &P,
    x: &BigDecimal,
    dp: i64,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<BigDecimal, Error> {
    let ax = x.abs();

    if ax > *ONE {
        return Err(Error::InvalidArgument);
    }

    if ax == *ONE {
        return if x.is_positive() {
            round_dp(&BigDecimal::zero(), dp, rm)
        } else {
            cc.pi(dp, rm)
        };
    }

    let dp_w = dp.max(0) + ASIN_GUARD_DIGITS;

    let half_pi = cc.half_pi(dp_w + 1, RoundingMode::HalfEven)?;
    let ret = half_pi - primitive.asin(x, dp_w, cc)?;

    round_dp(&ret, dp, rm)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_arccosine() {
        let mut cc = Consts::new().unwrap();

        assert_eq!(acos(&d("1"), 10, RoundingMode::HalfUp, &mut cc).unwrap(), d("0"));
        assert_eq!(acos(&d("-1"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("3.14159265358979323846"));
        assert_eq!(acos(&d("0"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.57079632679489661923"));
        assert_eq!(acos(&d("0.3"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.26610367277949911126"));
        assert_eq!(acos(&d("0.3"), 20, RoundingMode::Down, &mut cc).unwrap(), d("1.26610367277949911125"));

        assert_eq!(acos(&d("1.5"), 5, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
        assert_eq!(acos(&d("-1.000001"), 5, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
    }
}

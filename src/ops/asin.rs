//! Arcsine.

use crate::common::consts::ASIN_REDUCTION_THRES;
use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_POWER_RADIX;
use crate::ops::consts::Consts;
use crate::ops::root::root;
use crate::ops::round::round_dp;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;
use num_traits::Zero;

// Decimal places computed beyond the requested ones.
pub(crate) const ASIN_GUARD_DIGITS: i64 = 5;

/// Inverse sine primitive used by `asin`, `acos`, and `atan`.
pub trait AsinPrimitive {
    /// Returns the arcsine of `x`, where `-1 <= x <= 1`, with at least `dp` correct decimal places.
    /// The value is not required to be correctly rounded.
    fn asin(&self, x: &BigDecimal, dp: i64, cc: &mut Consts) -> Result<BigDecimal, Error>;
}

/// Arcsine computed with the Taylor series `x + 1/2 * x^3/3 + 1*3/(2*4) * x^5/5 + ...`.
/// Arguments above 0.7 by absolute value are reduced using `asin(x) = π/2 - asin(sqrt(1 - x^2))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaylorAsin;

// Polynomial coefficient generator: (2k)! / (4^k * (k!)^2 * (2k + 1)).
struct AsinPolycoeffGen {
    k: usize,
}

impl PolycoeffGen for AsinPolycoeffGen {
    fn next(&mut self, cc: &mut Consts) -> Result<(BigInt, BigInt), Error> {
        self.k += 1;
        let k = self.k;

        let num = cc.factorial(2 * k).clone();
        let fk = cc.factorial(k).clone();
        let den = cc.power_of_two(2 * k) * &fk * &fk * BigInt::from(2 * k + 1);

        Ok((num, den))
    }
}

impl AsinPrimitive for TaylorAsin {
    fn asin(&self, x: &BigDecimal, dp: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
        if x.is_zero() {
            return Ok(BigDecimal::zero());
        }

        if x.is_negative() {
            return Ok(-self.asin(&x.abs(), dp, cc)?);
        }

        if *x > *ONE {
            return Err(Error::InvalidArgument);
        }

        let dp_w = dp + ASIN_GUARD_DIGITS;

        if *x > *ASIN_REDUCTION_THRES {
            // asin(x) = π/2 - asin(sqrt(1 - x^2))
            let half_pi = cc.half_pi(dp_w, RoundingMode::HalfEven)?;
            let y = &*ONE - x * x;
            let y = root(&y, &BigInt::from(2), DEFAULT_POWER_RADIX, dp_w, RoundingMode::HalfEven)?;
            return Ok(half_pi - asin_series(&y, dp_w, cc)?);
        }

        asin_series(x, dp_w, cc)
    }
}

fn asin_series(x: &BigDecimal, dp_w: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let x_step = round_dp(&(x * x), dp_w, RoundingMode::HalfEven)?; // x^2
    let x_first = round_dp(&(x * &x_step), dp_w, RoundingMode::HalfEven)?; // x^3

    let mut polycoeff_gen = AsinPolycoeffGen { k: 0 };
    series_run(x.clone(), x_first, &x_step, &mut polycoeff_gen, -dp_w, cc)
}

/// Computes the arcsine of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - InvalidArgument: `x` is greater than 1 or smaller than -1.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn asin(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    asin_with(&TaylorAsin, x, dp, rm, cc)
}

/// Computes the arcsine of `x` using the inverse sine primitive `primitive`.
/// See `asin` for details.
///
/// ## Errors
///
///  - InvalidArgument: `x` is greater than 1 or smaller than -1.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn asin_with<P: AsinPrimitive>(
    primitive: &P,
    x: &BigDecimal,
    dp: i64,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<BigDecimal, Error> {
    if x.abs() > *ONE {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() {
        return round_dp(x, dp, rm);
    }

    let ret = primitive.asin(x, dp.max(0) + ASIN_GUARD_DIGITS, cc)?;

    round_dp(&ret, dp, rm)
}

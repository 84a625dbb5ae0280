//! Rounding to an order of magnitude.

use crate::common::util::count_digits;
use crate::common::util::rescale;
use crate::defs::Error;
use crate::defs::Oom;
use crate::defs::RoundingMode;
use bigdecimal::BigDecimal;
use num_traits::Zero;

/// Rounds `x` to the resolution `10^oom` using the rounding mode `rm` and strips trailing zeros.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and `x` has nonzero digits below `oom`.
pub fn round(x: &BigDecimal, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
    Ok(rescale(x, -oom, rm)?.normalized())
}

/// Rounds `x` to `dp` decimal places using the rounding mode `rm`.
/// Unlike `round` the result always has the scale `dp`.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and `x` has more than `dp` nonzero decimal places.
pub fn round_dp(x: &BigDecimal, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    rescale(x, dp, rm)
}

/// Rounds `x` to `sig` significant digits. Values which already fit are returned unchanged.
pub(crate) fn round_sig(x: &BigDecimal, sig: u64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return Ok(x.clone());
    }

    let scale = sig as i64 - 1 - oom_msd(x);
    if x.as_bigint_and_exponent().1 <= scale {
        Ok(x.clone())
    } else {
        rescale(x, scale, rm)
    }
}

/// Returns the order of magnitude of the most significant digit of `x`.
/// E.g. 123.4 gives 2, 0.05 gives -2. Zero gives 0.
pub fn oom_msd(x: &BigDecimal) -> Oom {
    if x.is_zero() {
        return 0;
    }

    let (u, s) = x.as_bigint_and_exponent();
    count_digits(&u) as Oom - 1 - s
}

/// Returns the order of magnitude of the least significant nonzero digit of `x`.
/// E.g. 123.4 gives -1, 1200 gives 2. Zero gives 0.
pub fn oom_lsd(x: &BigDecimal) -> Oom {
    if x.is_zero() {
        return 0;
    }

    -x.normalized().as_bigint_and_exponent().1
}

/// Truncates `x` to its most significant digit, e.g. 0.375 gives 0.3.
pub fn floor_significant_digit(x: &BigDecimal) -> BigDecimal {
    if x.is_zero() {
        return x.clone();
    }

    x.with_scale(-oom_msd(x))
}

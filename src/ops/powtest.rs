//! Comparison of a power with a threshold without computing the power in full when possible.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ops::pow::powi;
use crate::ops::pow::RadixPowers;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;

/// Returns true if `x^n` is greater than `compare`.
///
/// Partial powers of the radix `div` decomposition of `n` are compared with `compare`
/// and the test returns as soon as one of them decides the outcome. Otherwise the full power
/// rounded to `dp` decimal places using the rounding mode `rm` is compared.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero and `n` is negative.
///  - RoundingNecessary: `rm` is `Unnecessary` and the power can't be represented with `dp` decimal places.
pub fn power_test_above(
    compare: &BigDecimal,
    x: &BigDecimal,
    n: &BigInt,
    div: u32,
    dp: i64,
    rm: RoundingMode,
) -> Result<bool, Error> {
    Ok(power_cmp(compare, x, n, div, dp, rm)? == Ordering::Greater)
}

/// Returns true if `x^n` is less than `compare`.
/// See `power_test_above` for details.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero and `n` is negative.
///  - RoundingNecessary: `rm` is `Unnecessary` and the power can't be represented with `dp` decimal places.
pub fn power_test_below(
    compare: &BigDecimal,
    x: &BigDecimal,
    n: &BigInt,
    div: u32,
    dp: i64,
    rm: RoundingMode,
) -> Result<bool, Error> {
    Ok(power_cmp(compare, x, n, div, dp, rm)? == Ordering::Less)
}

/// Compares `x^n` with `compare`.
pub(crate) fn power_cmp(
    compare: &BigDecimal,
    x: &BigDecimal,
    n: &BigInt,
    div: u32,
    dp: i64,
    rm: RoundingMode,
) -> Result<Ordering, Error> {
    if !x.is_positive() || !n.is_positive() || x.is_one() {
        let p = powi(x, n, div, dp, rm)?;
        return Ok(p.cmp(compare));
    }

    let sig = (oom_msd(compare).max(0) + dp + 2).max(2) as u64;

    // partial powers grow for x > 1 and shrink for x < 1,
    // so lower bounds decide "above" early in the first case and upper bounds decide "below" in the second.
    let above_one = *x > BigDecimal::one();
    let bound_rm = if above_one { RoundingMode::Floor } else { RoundingMode::Ceiling };

    let mut last = None;
    for p in RadixPowers::new(x, n, div, sig, bound_rm)? {
        let p = p?;

        if above_one && p > *compare {
            return Ok(Ordering::Greater);
        }

        if !above_one && p < *compare {
            return Ok(Ordering::Less);
        }

        last = Some(p);
    }

    match last {
        Some(p) => Ok(round_dp(&p, dp, rm)?.cmp(compare)),
        None => Err(Error::InvalidArgument),
    }
}

//! Logarithms.

use crate::common::util::count_digits;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::LOG_MAX_ITERATIONS;
use crate::ops::consts::Consts;
use crate::ops::muldiv::divide;
use crate::ops::muldiv::divide_sig;
use crate::ops::muldiv::reciprocal_sig;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use crate::ops::round::round_sig;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

// Decimal places computed beyond the requested ones.
const LOG_GUARD_DIGITS: i64 = 5;

/// Computes the logarithm of `x` to the base `base`.
/// The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - InvalidArgument: `x` or `base` is not positive.
///  - DivisionByZero: `base` is 1.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn log(base: &BigDecimal, x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if !x.is_positive() || !base.is_positive() {
        return Err(Error::InvalidArgument);
    }

    if base.is_one() {
        return Err(Error::DivisionByZero);
    }

    if x.is_one() {
        return round_dp(&BigDecimal::zero(), dp, rm);
    }

    if x == base {
        return round_dp(&BigDecimal::one(), dp, rm);
    }

    let one = BigDecimal::one();
    let dp_w = working_dp(base, x, dp);
    let sig = sig_for(dp_w, base);

    // log_b(x) = -log_(1/b)(x) = -log_b(1/x)
    let mut negate = false;
    let base = if *base < one {
        negate = !negate;
        reciprocal_sig(base, sig, RoundingMode::HalfEven)?
    } else {
        base.clone()
    };

    let x = if *x < one {
        negate = !negate;
        reciprocal_sig(x, sig, RoundingMode::HalfEven)?
    } else {
        x.clone()
    };

    let ret = log_above_one(&base, &x, dp_w, sig, cc)?;

    if negate {
        Ok(-round_dp(&ret, dp, rm.invert())?)
    } else {
        round_dp(&ret, dp, rm)
    }
}

/// Computes the natural logarithm of `x`.
/// The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - InvalidArgument: `x` is not positive.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn ln(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if !x.is_positive() {
        return Err(Error::InvalidArgument);
    }

    // relative error of e turns into absolute error proportional to ln(x).
    let guard = count_digits(&BigInt::from(oom_msd(x).abs() + 1)) as i64 + LOG_GUARD_DIGITS;
    let e = cc.e(-(dp.max(0) + guard), RoundingMode::HalfEven)?;

    log(&e, x, dp, rm, cc)
}

/// Computes the logarithm of `x` to the base 2.
///
/// ## Errors
///
///  - InvalidArgument: `x` is not positive.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn log2(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    log(&BigDecimal::from(2), x, dp, rm, cc)
}

/// Computes the logarithm of `x` to the base 10.
///
/// ## Errors
///
///  - InvalidArgument: `x` is not positive.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn log10(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    log(&BigDecimal::from(10), x, dp, rm, cc)
}

// Decimal places of the unrounded result. A base close to 1 and a large integer part need more digits.
fn working_dp(base: &BigDecimal, x: &BigDecimal, dp: i64) -> i64 {
    let near_one = (-oom_msd(&(base - BigDecimal::one()))).max(0);
    let int_part = count_digits(&BigInt::from(oom_msd(x).abs() + oom_msd(base).abs() + 1)) as i64;
    dp.max(0) + LOG_GUARD_DIGITS + near_one + int_part
}

fn sig_for(dp_w: i64, base: &BigDecimal) -> u64 {
    (dp_w + oom_msd(base).abs() + 1) as u64
}

// log_b(x) for b > 1, x >= 1 with dp_w decimal places.
fn log_above_one(base: &BigDecimal, x: &BigDecimal, dp_w: i64, sig: u64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    // integer part: galloping over b^(2^j).
    let mut powers = vec![base.clone()];
    while let Some(p) = powers.last() {
        if p > x || powers.len() > LOG_MAX_ITERATIONS {
            break;
        }
        let sq = round_sig(&(p * p), sig, RoundingMode::HalfEven)?;
        powers.push(sq);
    }

    let mut y = x.clone();
    let mut int_part = BigInt::zero();
    for (j, p) in powers.iter().enumerate().rev() {
        if y >= *p {
            y = divide_sig(&y, p, sig, RoundingMode::HalfEven)?;
            int_part += cc.power_of_two(j);
        }
    }

    // y can slightly exceed the base after rounding.
    if y >= *base {
        y = divide_sig(&y, base, sig, RoundingMode::HalfEven)?;
        int_part += 1;
    }

    // fractional part: bits of log_b(y) by repeated squaring, 1 <= y < b.
    let max_bits = (dp_w as usize * 3322 / 1000 + 2).max(1);
    let bits_limit = max_bits.min(LOG_MAX_ITERATIONS);
    if max_bits > LOG_MAX_ITERATIONS {
        tracing::warn!(iterations = LOG_MAX_ITERATIONS, dp = dp_w, "logarithm iteration limit reached");
    }

    let one = BigDecimal::one();
    let mut bits = BigInt::zero();
    let mut nbits = 0;
    while nbits < bits_limit && y > one {
        y = round_sig(&(&y * &y), sig, RoundingMode::HalfEven)?;
        bits <<= 1;
        nbits += 1;

        if y >= *base {
            y = divide_sig(&y, base, sig, RoundingMode::HalfEven)?;
            bits += 1;
        }
    }

    let fract = if bits.is_zero() {
        BigDecimal::zero()
    } else {
        let den = cc.power_of_two(nbits).clone();
        divide(&BigDecimal::from(bits), &BigDecimal::from(den), -dp_w, RoundingMode::HalfEven)?
    };

    Ok(BigDecimal::from(int_part) + fract)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_log() {
        let mut cc = Consts::new().unwrap();

        let r = log(&d("10"), &d("1000"), 5, RoundingMode::HalfUp, &mut cc).unwrap();
        assert_eq!(r.as_bigint_and_exponent(), (300000.into(), 5));

        assert_eq!(log(&d("10"), &d("1000"), 5, RoundingMode::Unnecessary, &mut cc).unwrap(), d("3"));
        assert_eq!(log(&d("4"), &d("2"), 3, RoundingMode::Unnecessary, &mut cc).unwrap(), d("0.5"));
        assert_eq!(log(&d("2"), &d("0.125"), 3, RoundingMode::HalfUp, &mut cc).unwrap(), d("-3"));
        assert_eq!(log(&d("0.5"), &d("8"), 3, RoundingMode::HalfUp, &mut cc).unwrap(), d("-3"));
        assert_eq!(log(&d("0.1"), &d("0.01"), 3, RoundingMode::HalfUp, &mut cc).unwrap(), d("2"));

        assert_eq!(log(&d("10"), &d("2"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.30102999566398119521"));
        assert_eq!(log(&d("3"), &d("100"), 15, RoundingMode::HalfUp, &mut cc).unwrap(), d("4.191806548578769"));
        assert_eq!(log(&d("1.001"), &d("2"), 10, RoundingMode::HalfUp, &mut cc).unwrap(), d("693.4936964168"));
        assert_eq!(log(&d("10"), &d("0.2"), 10, RoundingMode::Floor, &mut cc).unwrap(), d("-0.6989700044"));
        assert_eq!(log(&d("10"), &d("0.2"), 10, RoundingMode::Ceiling, &mut cc).unwrap(), d("-0.6989700043"));

        // special cases
        assert_eq!(log(&d("7"), &d("1"), 2, RoundingMode::HalfUp, &mut cc).unwrap(), d("0"));
        assert_eq!(log(&d("7.5"), &d("7.5"), 2, RoundingMode::HalfUp, &mut cc).unwrap(), d("1"));
        assert_eq!(log(&d("10"), &d("0"), 2, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
        assert_eq!(log(&d("10"), &d("-5"), 2, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
        assert_eq!(log(&d("-10"), &d("5"), 2, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
        assert_eq!(log(&d("1"), &d("5"), 2, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_ln() {
        let mut cc = Consts::new().unwrap();

        assert_eq!(ln(&d("2"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.69314718055994530942"));
        assert_eq!(ln(&d("0.5"), 20, RoundingMode::HalfUp, &mut cc).unwrap(), d("-0.69314718055994530942"));
        assert_eq!(ln(&d("1e50"), 10, RoundingMode::HalfUp, &mut cc).unwrap(), d("115.1292546497"));
        assert_eq!(ln(&d("1"), 10, RoundingMode::HalfUp, &mut cc).unwrap(), d("0"));
        assert_eq!(ln(&d("0"), 10, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);

        assert_eq!(log2(&d("1024"), 3, RoundingMode::Unnecessary, &mut cc).unwrap(), d("10"));
        assert_eq!(log2(&d("3"), 12, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.584962500721"));
        assert_eq!(log10(&d("0.001"), 3, RoundingMode::Unnecessary, &mut cc).unwrap(), d("-3"));
    }
}

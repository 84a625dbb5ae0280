//! Exponential function.

use crate::common::util::count_digits;
use crate::common::util::split_int_fract;
use crate::defs::Error;
use crate::defs::Oom;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_POWER_RADIX;
use crate::ops::consts::Consts;
use crate::ops::muldiv::divide;
use crate::ops::pow::powi_sig;
use crate::ops::round::round;
use crate::ops::round::round_sig;
use crate::ops::series::series_run;
use crate::ops::series::ExpPolycoeffGen;
use bigdecimal::BigDecimal;
use num_traits::One;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

// Significant digits computed beyond the requested ones.
const EXP_GUARD_DIGITS: u64 = 5;

/// Computes `e` to the power of `x`. The result is rounded to the order of magnitude `oom`
/// using the rounding mode `rm` with trailing zeros stripped.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - InvalidArgument: the integer part of `x` is too large.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with resolution `10^oom`.
pub fn exp(x: &BigDecimal, oom: Oom, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return round(&BigDecimal::one(), oom, rm);
    }

    if x.is_one() {
        return cc.e(oom, rm);
    }

    // e^x has its most significant digit at floor(x * log10(e)) or one position lower,
    // log10(e) = 0.43429...
    let (n, _) = split_int_fract(&x.abs());
    let n = n.to_i64().ok_or(Error::InvalidArgument)?;

    if x.is_negative() {
        let msd_lower = n.checked_mul(4342).ok_or(Error::InvalidArgument)? / 10000;
        let sig = (-msd_lower).checked_sub(oom).ok_or(Error::InvalidArgument)?.saturating_add(2).max(1) as u64;
        let p = exp_sig(&x.abs(), sig, cc)?;
        Ok(divide(&BigDecimal::one(), &p, oom, rm)?.normalized())
    } else {
        let msd_upper = n.checked_mul(4343).ok_or(Error::InvalidArgument)? / 10000 + 1;
        let sig = msd_upper.checked_sub(oom).ok_or(Error::InvalidArgument)?.saturating_add(2).max(1) as u64;
        let p = exp_sig(x, sig, cc)?;
        round(&p, oom, rm)
    }
}

/// e^x for non-negative x with at least sig significant digits.
pub(crate) fn exp_sig(x: &BigDecimal, sig: u64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    let (n, f) = split_int_fract(x);
    let sig = sig + EXP_GUARD_DIGITS;

    // e^f, 1 <= e^f < e
    let e_f = if f.is_zero() {
        BigDecimal::one()
    } else {
        let oom = -(sig as Oom);
        let f = round(&f, oom, RoundingMode::HalfEven)?;
        let x_first = round(&(&f * &f), oom, RoundingMode::HalfEven)?;
        let acc = BigDecimal::one() + &f;
        let mut polycoeff_gen = ExpPolycoeffGen::new();
        series_run(acc, x_first, &f, &mut polycoeff_gen, oom, cc)?
    };

    if n.is_zero() {
        return round_sig(&e_f, sig, RoundingMode::HalfEven);
    }

    // e^n, relative error of e is multiplied by n.
    let oom_e = -(sig as Oom + count_digits(&n) as Oom + 1);
    let e = cc.e(oom_e, RoundingMode::HalfEven)?;
    let e_n = powi_sig(&e, &n, DEFAULT_POWER_RADIX, sig, RoundingMode::HalfEven)?;

    round_sig(&(e_n * e_f), sig, RoundingMode::HalfEven)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exp() {
        let mut cc = Consts::new().unwrap();

        assert_eq!(exp(&d("0"), -5, RoundingMode::HalfUp, &mut cc).unwrap(), d("1"));
        assert_eq!(exp(&d("1"), -10, RoundingMode::HalfUp, &mut cc).unwrap(), d("2.7182818285"));
        assert_eq!(exp(&d("1"), -10, RoundingMode::Down, &mut cc).unwrap(), d("2.7182818284"));
        assert_eq!(exp(&d("2.5"), -20, RoundingMode::HalfUp, &mut cc).unwrap(), d("12.18249396070347343807"));
        assert_eq!(exp(&d("10"), -10, RoundingMode::HalfUp, &mut cc).unwrap(), d("22026.4657948067"));
        assert_eq!(exp(&d("10"), 2, RoundingMode::HalfUp, &mut cc).unwrap(), d("22000"));
        assert_eq!(exp(&d("0.001"), -15, RoundingMode::HalfUp, &mut cc).unwrap(), d("1.001000500166708"));

        // negative arguments
        assert_eq!(exp(&d("-1"), -15, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.367879441171442"));
        assert_eq!(exp(&d("-20.5"), -15, RoundingMode::HalfUp, &mut cc).unwrap(), d("0.000000001250153"));
        assert_eq!(exp(&d("-20.5"), -5, RoundingMode::HalfUp, &mut cc).unwrap(), d("0"));
        assert_eq!(exp(&d("-20.5"), -5, RoundingMode::Up, &mut cc).unwrap(), d("0.00001"));

        // trailing zeros are stripped
        let r = exp(&d("0"), -5, RoundingMode::HalfUp, &mut cc).unwrap();
        assert_eq!(r.as_bigint_and_exponent(), (1.into(), 0));
    }

    #[test]
    fn test_exp_huge_argument() {
        let mut cc = Consts::new().unwrap();

        // the magnitude estimate of the result does not fit into i64
        let x = d("3000000000000000");
        assert_eq!(exp(&x, 0, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
        assert_eq!(exp(&-x, 0, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);

        let x = d("100000000000000000000");
        assert_eq!(exp(&x, 0, RoundingMode::HalfUp, &mut cc).unwrap_err(), Error::InvalidArgument);
    }
}

//! N-th root.

use crate::common::util::count_digits;
use crate::common::util::ten_pow;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::NEWTON_MAX_ITERATIONS;
use crate::defs::ROOT_BISECT_ITERATIONS;
use crate::ops::muldiv::divide;
use crate::ops::pow::powi_sig;
use crate::ops::powtest::power_test_above;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

// Decimal places computed beyond the requested ones.
const ROOT_GUARD_DIGITS: i64 = 6;

// Newton-Raphson stops when the step is below 10^-(dp + NEWTON_TOLERANCE_DIGITS).
const NEWTON_TOLERANCE_DIGITS: i64 = 3;

// Values below one with a longer padded numerator are rooted directly.
const ROOT_SPLIT_MAX_DIGITS: u64 = 1024;

// Exactness of the result is checked only if the power has fewer digits.
const ROOT_EXACT_MAX_DIGITS: u64 = 100_000;

/// Computes the `n`-th root of `x`. Powers are computed by splitting exponents using the radix `div`.
/// The result has `dp` decimal places and is rounded using the rounding mode `rm`.
///
/// If the root lies within one unit of the last place above 1, the correctly rounded neighbour of 1 is returned
/// without iterating.
///
/// ## Errors
///
///  - InvalidArgument: `n` is not positive, or `x` is negative and `n` is even.
///  - RoundingNecessary: `rm` is `Unnecessary` and the root can't be represented with `dp` decimal places.
pub fn root(x: &BigDecimal, n: &BigInt, div: u32, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if !n.is_positive() {
        return Err(Error::InvalidArgument);
    }

    if x.is_negative() {
        return if n.is_even() {
            Err(Error::InvalidArgument)
        } else {
            Ok(-root(&x.abs(), n, div, dp, rm.invert())?)
        };
    }

    if x.is_zero() || x.is_one() || n.is_one() {
        return round_dp(x, dp, rm);
    }

    if *x > BigDecimal::one() && dp >= 0 {
        if let Some(r) = near_one(x, n, div, dp, rm)? {
            return Ok(r);
        }
    }

    let r = root_core(x, n, div, dp + ROOT_GUARD_DIGITS)?;

    // exact roots are returned regardless of the rounding mode.
    let c = round_dp(&r, dp, RoundingMode::HalfEven)?;
    if is_exact_root(&c, n, x) {
        return Ok(c);
    }

    if rm == RoundingMode::Unnecessary {
        return Err(Error::RoundingNecessary);
    }

    round_dp(&r, dp, rm)
}

// For x > 1 checks if the root is closer to 1 than the resolution 10^-dp allows to distinguish,
// and returns the rounded root in that case.
fn near_one(x: &BigDecimal, n: &BigInt, div: u32, dp: i64, rm: RoundingMode) -> Result<Option<BigDecimal>, Error> {
    let one = BigDecimal::one();
    let ulp = BigDecimal::new(BigInt::one(), dp);

    let threshold = match rm {
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            &one + BigDecimal::new(BigInt::from(5), dp + 1)
        }
        _ => &one + &ulp,
    };

    let dp_cmp = x.as_bigint_and_exponent().1.max(dp) + ROOT_GUARD_DIGITS;
    if !power_test_above(x, &threshold, n, div, dp_cmp, RoundingMode::HalfEven)? {
        return Ok(None);
    }

    tracing::debug!(dp, ?rm, "root is within one unit of the last place above 1");

    let ret = match rm {
        RoundingMode::Up | RoundingMode::Ceiling => one + ulp,
        RoundingMode::Unnecessary => return Err(Error::RoundingNecessary),
        _ => one,
    };

    Ok(Some(round_dp(&ret, dp, RoundingMode::Down)?))
}

// Root of positive x != 1, n >= 2 with dp_w decimal places, not rounded.
fn root_core(x: &BigDecimal, n: &BigInt, div: u32, dp_w: i64) -> Result<BigDecimal, Error> {
    if *x > BigDecimal::one() {
        let r0 = bracket_above_one(x, n, div, dp_w)?;
        return newton(x, n, div, r0, dp_w, true);
    }

    let (u, s) = x.as_bigint_and_exponent();

    // x = v * 10^-s_pad where s_pad is a multiple of n, then root(x) = root(v) * 10^(-s_pad/n).
    let split = n.to_i64().and_then(|nu| {
        let shift = s.checked_add(nu - 1)? / nu;
        let s_pad = shift.checked_mul(nu)?;
        Some((shift, s_pad))
    });

    if let Some((shift, s_pad)) = split {
        let digits = count_digits(&u).saturating_add((s_pad - s) as u64);

        if digits <= ROOT_SPLIT_MAX_DIGITS {
            let v = BigDecimal::from(u * ten_pow((s_pad - s) as u64));
            let r = if v.is_one() {
                BigDecimal::one()
            } else {
                root_core(&v, n, div, dp_w + shift)?
            };
            let (ru, rs) = r.as_bigint_and_exponent();
            return Ok(BigDecimal::new(ru, rs + shift));
        }
    }

    let (r0, dp_n) = bracket_below_one(x, n, div, dp_w)?;
    newton(x, n, div, r0, dp_n, false)
}

// 10^e where e is floor(m / n) or ceil(m / n).
fn ten_pow_div(m: i64, n: &BigInt, ceil: bool) -> Result<(BigDecimal, i64), Error> {
    let m = BigInt::from(m);
    let e = if ceil { -((-m).div_floor(n)) } else { m.div_floor(n) };
    let e = e.to_i64().ok_or(Error::InvalidArgument)?;
    Ok((BigDecimal::new(BigInt::one(), -e), e))
}

// Narrows [lo, hi] containing the root with the power oracle. Returns the upper end.
fn bisect(
    x: &BigDecimal,
    n: &BigInt,
    div: u32,
    mut lo: BigDecimal,
    mut hi: BigDecimal,
    dp_w: i64,
) -> Result<BigDecimal, Error> {
    let two = BigDecimal::from(2);

    for _ in 0..ROOT_BISECT_ITERATIONS {
        let mid = divide(&(&lo + &hi), &two, -dp_w, RoundingMode::HalfEven)?;
        if mid <= lo || mid >= hi {
            break;
        }

        if power_test_above(x, &mid, n, div, dp_w, RoundingMode::HalfEven)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(hi)
}

fn bracket_above_one(x: &BigDecimal, n: &BigInt, div: u32, dp_w: i64) -> Result<BigDecimal, Error> {
    let msd = oom_msd(x);

    let (lo, _) = ten_pow_div(msd, n, false)?;
    let (hi, _) = ten_pow_div(msd + 1, n, true)?;

    // Bernoulli: (1 + (x - 1)/n)^n >= x
    let one = BigDecimal::one();
    let bernoulli = &one + divide(&(x - &one), &BigDecimal::from(n.clone()), -dp_w, RoundingMode::Ceiling)?;
    let hi = if bernoulli < hi { bernoulli } else { hi };

    bisect(x, n, div, lo, hi, dp_w)
}

// Returns the initial value and the number of decimal places which keeps enough significant digits of the root.
fn bracket_below_one(x: &BigDecimal, n: &BigInt, div: u32, dp_w: i64) -> Result<(BigDecimal, i64), Error> {
    let msd = oom_msd(x);

    let (lo, lo_exp) = ten_pow_div(msd, n, false)?;
    let (hi, _) = ten_pow_div(msd + 1, n, true)?;

    let lo = if *x > lo { x.clone() } else { lo };
    let one = BigDecimal::one();
    let hi = if hi > one { one } else { hi };

    let dp_n = dp_w.max(ROOT_GUARD_DIGITS - lo_exp);

    Ok((bisect(x, n, div, lo, hi, dp_n)?, dp_n))
}

// Newton-Raphson iteration for r^n = x with dp_w decimal places.
fn newton(x: &BigDecimal, n: &BigInt, div: u32, r0: BigDecimal, dp_w: i64, above_one: bool) -> Result<BigDecimal, Error> {
    let oom = -dp_w;
    let tol = BigDecimal::new(BigInt::one(), dp_w - ROOT_GUARD_DIGITS + NEWTON_TOLERANCE_DIGITS);

    let n1 = n - BigInt::one();
    let n_dec = BigDecimal::from(n.clone());
    let n1_dec = BigDecimal::from(n1.clone());

    let mut r = r0;
    for _ in 0..NEWTON_MAX_ITERATIONS {
        let sig = (dp_w + oom_msd(&r) + 2).max(2) as u64;
        let p = powi_sig(&r, &n1, div, sig, RoundingMode::HalfEven)?;

        let r_next = if above_one {
            // r - (r^n - x) / (n * r^(n-1))
            let f = &p * &r - x;
            &r - divide(&f, &(&n_dec * &p), oom, RoundingMode::HalfEven)?
        } else {
            // ((n-1) * r + x / r^(n-1)) / n
            let q = divide(x, &p, oom, RoundingMode::HalfEven)?;
            divide(&(&n1_dec * &r + q), &n_dec, oom, RoundingMode::HalfEven)?
        };

        let step = (&r_next - &r).abs();
        r = r_next;

        if step <= tol {
            return Ok(r);
        }
    }

    tracing::warn!(iterations = NEWTON_MAX_ITERATIONS, dp = dp_w, "root did not converge");

    Ok(r)
}

// Checks c^n == x when the power is small enough to be computed exactly.
fn is_exact_root(c: &BigDecimal, n: &BigInt, x: &BigDecimal) -> bool {
    let n = match n.to_u32() {
        Some(n) => n,
        None => return false,
    };

    let (u, s) = c.as_bigint_and_exponent();
    if u.is_zero() || count_digits(&u) * n as u64 > ROOT_EXACT_MAX_DIGITS {
        return false;
    }

    BigDecimal::new(num_traits::pow(u, n as usize), s * n as i64) == *x
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn n(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_root() {
        assert_eq!(root(&d("8"), &n(3), 64, 10, RoundingMode::HalfUp).unwrap(), d("2"));
        assert_eq!(root(&d("8"), &n(3), 64, 10, RoundingMode::Unnecessary).unwrap(), d("2"));
        assert_eq!(root(&d("2"), &n(2), 64, 20, RoundingMode::HalfUp).unwrap(), d("1.41421356237309504880"));
        assert_eq!(root(&d("2"), &n(2), 64, 20, RoundingMode::Up).unwrap(), d("1.41421356237309504881"));
        assert_eq!(root(&d("10"), &n(3), 64, 15, RoundingMode::HalfUp).unwrap(), d("2.154434690031884"));
        assert_eq!(root(&d("1000000"), &n(6), 2, 5, RoundingMode::HalfUp).unwrap(), d("10"));
        assert_eq!(root(&d("1.21"), &n(2), 64, 1, RoundingMode::Ceiling).unwrap(), d("1.1"));

        // below one
        assert_eq!(root(&d("0.008"), &n(3), 64, 10, RoundingMode::HalfUp).unwrap(), d("0.2"));
        assert_eq!(root(&d("0.5"), &n(2), 64, 20, RoundingMode::HalfUp).unwrap(), d("0.70710678118654752440"));
        assert_eq!(root(&d("0.00002"), &n(5), 64, 12, RoundingMode::HalfUp).unwrap(), d("0.114869835500"));

        // long numerator below one
        let mut s = String::from("0.25");
        s.push_str(&"0".repeat(1095));
        s.push('1');
        let x = d(&s);
        assert_eq!(root(&x, &n(2), 64, 20, RoundingMode::HalfUp).unwrap(), d("0.5"));

        // negative
        assert_eq!(root(&d("-8"), &n(3), 64, 10, RoundingMode::HalfUp).unwrap(), d("-2"));
        assert_eq!(root(&d("-10"), &n(3), 64, 3, RoundingMode::Floor).unwrap(), d("-2.155"));
        assert_eq!(root(&d("-8"), &n(2), 64, 10, RoundingMode::HalfUp).unwrap_err(), Error::InvalidArgument);
        assert_eq!(root(&d("8"), &n(0), 64, 10, RoundingMode::HalfUp).unwrap_err(), Error::InvalidArgument);
        assert_eq!(root(&d("8"), &n(-2), 64, 10, RoundingMode::HalfUp).unwrap_err(), Error::InvalidArgument);

        // special values
        assert_eq!(root(&d("0"), &n(3), 64, 10, RoundingMode::HalfUp).unwrap(), d("0"));
        assert_eq!(root(&d("1"), &n(7), 64, 10, RoundingMode::HalfUp).unwrap(), d("1"));
        assert_eq!(root(&d("3.14159"), &n(1), 64, 3, RoundingMode::HalfUp).unwrap(), d("3.142"));
        assert_eq!(root(&d("2"), &n(2), 64, 5, RoundingMode::Unnecessary).unwrap_err(), Error::RoundingNecessary);
    }

    #[test]
    fn test_root_near_one() {
        let x = d("1.0000000001");
        assert_eq!(root(&x, &n(2), 64, 5, RoundingMode::HalfUp).unwrap(), d("1"));
        assert_eq!(root(&x, &n(2), 64, 5, RoundingMode::Down).unwrap(), d("1"));
        assert_eq!(root(&x, &n(2), 64, 5, RoundingMode::Up).unwrap(), d("1.00001"));
        assert_eq!(root(&x, &n(2), 64, 5, RoundingMode::Unnecessary).unwrap_err(), Error::RoundingNecessary);

        let r = root(&x, &n(2), 64, 5, RoundingMode::HalfEven).unwrap();
        assert_eq!(r.as_bigint_and_exponent().1, 5);

        // root of a huge power of ten
        let x = BigDecimal::new(BigInt::one(), -60);
        assert_eq!(root(&x, &n(1000), 64, 10, RoundingMode::HalfUp).unwrap(), d("1.1481536215"));
    }

    #[test]
    fn test_root_huge_degree() {
        // 0.25^(1/n) = 1 - 1.5e-19 for n = i64::MAX, the scale split can't pad the numerator
        let r = root(&d("0.25"), &n(i64::MAX), 64, 5, RoundingMode::HalfUp).unwrap();
        assert_eq!(r, d("1"));
        assert_eq!(r.as_bigint_and_exponent().1, 5);

        let r = root(&d("0.5"), &n(i64::MAX - 1), 64, 5, RoundingMode::HalfEven).unwrap();
        assert_eq!(r, d("1"));
    }
}

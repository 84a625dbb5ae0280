//! Multiplication and division with the result rounded to an order of magnitude.

use crate::common::util::rescale;
use crate::common::util::round_quotient;
use crate::common::util::ten_pow;
use crate::defs::Error;
use crate::defs::Oom;
use crate::defs::RoundingMode;
use crate::ops::round::oom_msd;
use bigdecimal::BigDecimal;
use num_integer::Integer;
use num_traits::Zero;

// Number of digits kept below the requested order of magnitude when operands are rounded before multiplication.
const PRIOR_ROUND_GUARD_DIGITS: i64 = 3;

/// Divides `x` by `y`. The result has resolution `10^oom` and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - DivisionByZero: `y` is zero.
///  - RoundingNecessary: `rm` is `Unnecessary` and the quotient can't be represented with resolution `10^oom`.
pub fn divide(x: &BigDecimal, y: &BigDecimal, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if y.is_zero() {
        return Err(Error::DivisionByZero);
    }

    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    let (a, sa) = x.as_bigint_and_exponent();
    let (b, sb) = y.as_bigint_and_exponent();

    // x / y = a / b * 10^(sb - sa); the unscaled quotient at scale -oom is a * 10^k / b.
    let scale = -oom;
    let k = sb - sa + scale;
    let (n, d) = if k >= 0 {
        (a * ten_pow(k as u64), b)
    } else {
        (a, b * ten_pow((-k) as u64))
    };

    let (q, r) = n.div_rem(&d);

    Ok(BigDecimal::new(round_quotient(q, &r, &d, rm)?, scale))
}

/// Multiplies `x` by `y`. The result has resolution `10^oom` and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and the product has nonzero digits below `oom`.
pub fn multiply(x: &BigDecimal, y: &BigDecimal, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
    rescale(&(x * y), -oom, rm)
}

/// Multiplies `x` by `y` like `multiply`, but first drops the digits of each operand
/// which can't influence the product at resolution `10^oom`.
/// The result can differ from the one of `multiply` by a unit in the last place.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and the product has nonzero digits below `oom`.
///    Operands are not rounded in this case.
pub fn multiply_prior_round(x: &BigDecimal, y: &BigDecimal, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if x.is_zero() || y.is_zero() {
        return Ok(BigDecimal::zero());
    }

    // dropped digits would hide an inexact product.
    if rm == RoundingMode::Unnecessary {
        return multiply(x, y, oom, rm);
    }

    let x = prior_round(x, y, oom)?;
    let y = prior_round(y, &x, oom)?;

    multiply(&x, &y, oom, rm)
}

// Drops digits of `x` below 10^(oom - msd(other) - 1 - guard).
fn prior_round(x: &BigDecimal, other: &BigDecimal, oom: Oom) -> Result<BigDecimal, Error> {
    let scale = oom_msd(other) + 1 - oom + PRIOR_ROUND_GUARD_DIGITS;
    if x.as_bigint_and_exponent().1 > scale {
        rescale(x, scale, RoundingMode::HalfEven)
    } else {
        Ok(x.clone())
    }
}

/// Divides `x` by `y` keeping `sig` significant digits in the quotient.
pub(crate) fn divide_sig(x: &BigDecimal, y: &BigDecimal, sig: u64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if y.is_zero() {
        return Err(Error::DivisionByZero);
    }

    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }

    // the quotient's most significant digit is at msd(x) - msd(y) or one position lower,
    // the truncated quotient with two digits tells which one.
    let head = divide(x, y, oom_msd(x) - oom_msd(y) - 1, RoundingMode::Down)?;
    let oom = oom_msd(&head) - sig as Oom + 1;

    divide(x, y, oom, rm)
}

/// Returns 1 / `x` with `sig` significant digits.
pub(crate) fn reciprocal_sig(x: &BigDecimal, sig: u64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    divide_sig(&BigDecimal::from(1), x, sig, rm)
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(&d("1"), &d("3"), -5, RoundingMode::HalfUp).unwrap(), d("0.33333"));
        assert_eq!(divide(&d("2"), &d("3"), -5, RoundingMode::HalfUp).unwrap(), d("0.66667"));
        assert_eq!(divide(&d("2"), &d("3"), -5, RoundingMode::Down).unwrap(), d("0.66666"));
        assert_eq!(divide(&d("-2"), &d("3"), -5, RoundingMode::Floor).unwrap(), d("-0.66667"));
        assert_eq!(divide(&d("1000"), &d("0.004"), 3, RoundingMode::HalfUp).unwrap(), d("250000"));
        assert_eq!(divide(&d("12345"), &d("1"), 2, RoundingMode::HalfEven).unwrap(), d("12300"));
        assert_eq!(divide(&d("1"), &d("8"), -3, RoundingMode::Unnecessary).unwrap(), d("0.125"));
        assert_eq!(divide(&d("1"), &d("8"), -2, RoundingMode::Unnecessary).unwrap_err(), Error::RoundingNecessary);

        // zero dividend and divizor
        assert_eq!(divide(&d("0"), &d("7"), -2, RoundingMode::HalfUp).unwrap(), BigDecimal::zero());
        assert_eq!(divide(&d("7"), &d("0"), -2, RoundingMode::HalfUp).unwrap_err(), Error::DivisionByZero);
        assert_eq!(divide(&d("0"), &d("0.000"), -2, RoundingMode::HalfUp).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(&d("1.25"), &d("1.25"), -2, RoundingMode::HalfEven).unwrap(), d("1.56"));
        assert_eq!(multiply(&d("1.25"), &d("1.25"), -2, RoundingMode::Up).unwrap(), d("1.57"));
        assert_eq!(multiply(&d("-1.25"), &d("1.25"), -4, RoundingMode::Unnecessary).unwrap(), d("-1.5625"));

        let x = d("123456789.123456789123456789");
        let y = d("0.000000001234567891234");
        let exact = multiply(&x, &y, -10, RoundingMode::HalfEven).unwrap();
        let pre = multiply_prior_round(&x, &y, -10, RoundingMode::HalfEven).unwrap();
        assert!((exact - pre).abs() <= d("0.0000000001"));
        assert_eq!(multiply_prior_round(&x, &d("0"), -10, RoundingMode::HalfEven).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn test_multiply_prior_round_unnecessary() {
        // 1.00001 * 1 has a digit below units, rounding the operands first would hide it
        let rm = RoundingMode::Unnecessary;
        assert_eq!(multiply_prior_round(&d("1.00001"), &d("1"), 0, rm).unwrap_err(), Error::RoundingNecessary);
        assert_eq!(
            multiply_prior_round(&d("0.00000001"), &d("3"), -7, rm).unwrap_err(),
            Error::RoundingNecessary
        );
        assert_eq!(multiply_prior_round(&d("1.5"), &d("2.5"), -2, rm).unwrap(), d("3.75"));
        assert_eq!(multiply_prior_round(&d("1.5"), &d("2.5"), -2, rm).unwrap().as_bigint_and_exponent().1, 2);
    }

    #[test]
    fn test_sig() {
        assert_eq!(divide_sig(&d("1"), &d("3"), 4, RoundingMode::HalfEven).unwrap(), d("0.3333"));
        assert_eq!(divide_sig(&d("9"), &d("0.003"), 2, RoundingMode::HalfEven).unwrap(), d("3000"));
        assert_eq!(reciprocal_sig(&d("7"), 3, RoundingMode::HalfEven).unwrap(), d("0.143"));
        assert_eq!(reciprocal_sig(&d("0.0004"), 3, RoundingMode::HalfEven).unwrap(), d("2500"));

        // a single rounding: 2.4992 / 2 = 1.2496 is 1.2, not 1.25 rounded again to 1.3
        assert_eq!(divide_sig(&d("2.4992"), &d("2"), 2, RoundingMode::HalfUp).unwrap(), d("1.2"));
        assert_eq!(divide_sig(&d("2.4992"), &d("2"), 3, RoundingMode::HalfUp).unwrap(), d("1.25"));
        assert_eq!(divide_sig(&d("0.999"), &d("1"), 2, RoundingMode::HalfEven).unwrap(), d("1"));
        assert_eq!(divide_sig(&d("-1"), &d("8"), 2, RoundingMode::Floor).unwrap(), d("-0.13"));
        assert_eq!(divide_sig(&d("1"), &d("8"), 2, RoundingMode::Unnecessary).unwrap_err(), Error::RoundingNecessary);
        assert_eq!(divide_sig(&d("1"), &d("8"), 3, RoundingMode::Unnecessary).unwrap(), d("0.125"));
        assert_eq!(divide_sig(&d("0"), &d("8"), 3, RoundingMode::HalfEven).unwrap(), d("0"));
        assert_eq!(divide_sig(&d("1"), &d("0"), 3, RoundingMode::HalfEven).unwrap_err(), Error::DivisionByZero);
    }
}

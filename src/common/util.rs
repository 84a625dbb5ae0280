//! Auxiliary functions.

use crate::defs::Error;
use crate::defs::RoundingMode;
use bigdecimal::BigDecimal;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::One;
use num_traits::Zero;

/// Number of decimal digits of the absolute value of `n`. Zero has one digit.
pub fn count_digits(n: &BigInt) -> u64 {
    if n.is_zero() {
        return 1;
    }

    BigDecimal::new(n.clone(), 0).digits()
}

/// 10 to the power of `e`.
pub fn ten_pow(e: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), e as usize)
}

// Rounding mode of `bigdecimal`, `Unnecessary` has no counterpart.
fn bigdecimal_mode(rm: RoundingMode) -> Option<bigdecimal::RoundingMode> {
    match rm {
        RoundingMode::Up => Some(bigdecimal::RoundingMode::Up),
        RoundingMode::Down => Some(bigdecimal::RoundingMode::Down),
        RoundingMode::Ceiling => Some(bigdecimal::RoundingMode::Ceiling),
        RoundingMode::Floor => Some(bigdecimal::RoundingMode::Floor),
        RoundingMode::HalfUp => Some(bigdecimal::RoundingMode::HalfUp),
        RoundingMode::HalfDown => Some(bigdecimal::RoundingMode::HalfDown),
        RoundingMode::HalfEven => Some(bigdecimal::RoundingMode::HalfEven),
        RoundingMode::Unnecessary => None,
    }
}

/// Rounds the quotient `q` of the truncating division of some `n` by `d`, where `r` is the remainder.
pub fn round_quotient(q: BigInt, r: &BigInt, d: &BigInt, rm: RoundingMode) -> Result<BigInt, Error> {
    if r.is_zero() {
        return Ok(q);
    }

    let positive = (r.sign() == Sign::Minus) == (d.sign() == Sign::Minus);
    let twice_rem: BigUint = r.magnitude() << 1;
    let half = twice_rem.cmp(d.magnitude());

    let away = match rm {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => positive,
        RoundingMode::Floor => !positive,
        RoundingMode::HalfUp => half != Ordering::Less,
        RoundingMode::HalfDown => half == Ordering::Greater,
        RoundingMode::HalfEven => half == Ordering::Greater || (half == Ordering::Equal && q.is_odd()),
        RoundingMode::Unnecessary => return Err(Error::RoundingNecessary),
    };

    Ok(if !away {
        q
    } else if positive {
        q + BigInt::one()
    } else {
        q - BigInt::one()
    })
}

/// Changes the scale of `x` to `scale` rounding it using the rounding mode `rm` if digits are dropped.
pub fn rescale(x: &BigDecimal, scale: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if scale >= x.as_bigint_and_exponent().1 {
        return Ok(x.with_scale(scale));
    }

    match bigdecimal_mode(rm) {
        Some(mode) => Ok(x.with_scale_round(scale, mode)),
        None => {
            // digits are dropped toward zero, the value survives only if they are all zeros.
            let ret = x.with_scale(scale);
            if ret == *x {
                Ok(ret)
            } else {
                Err(Error::RoundingNecessary)
            }
        }
    }
}

/// Returns true if `x` has no fractional part.
pub fn is_integer(x: &BigDecimal) -> bool {
    let (u, s) = x.as_bigint_and_exponent();
    if s <= 0 || u.is_zero() {
        true
    } else {
        (u % ten_pow(s as u64)).is_zero()
    }
}

/// Splits `x` into the integer part (rounded toward negative infinity) and the fractional part in [0, 1).
pub fn split_int_fract(x: &BigDecimal) -> (BigInt, BigDecimal) {
    let (u, s) = x.as_bigint_and_exponent();
    if s <= 0 {
        return (u * ten_pow((-s) as u64), BigDecimal::zero());
    }

    let (q, r) = u.div_mod_floor(&ten_pow(s as u64));
    (q, BigDecimal::new(r, s))
}

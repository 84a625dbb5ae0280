//! Power series computation appliance.

use crate::defs::Error;
use crate::defs::Oom;
use crate::defs::RoundingMode;
use crate::defs::SERIES_MAX_TERMS;
use crate::ops::consts::Consts;
use crate::ops::muldiv::divide;
use crate::ops::muldiv::multiply;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

//
// Public part
//

/// Generator of polynomial coefficients.
pub trait PolycoeffGen {
    /// Returns the next polynomial coefficient as a pair of numerator and denominator.
    fn next(&mut self, cc: &mut Consts) -> Result<(BigInt, BigInt), Error>;
}

/// Computes `acc + c1 * x_first + c2 * x_first * x_step + c3 * x_first * x_step^2 + ...`
/// where `c1, c2, ...` are produced by `polycoeff_gen`.
///
/// Every term and partial power is rounded to the order of magnitude `oom`,
/// and the summation stops when a term rounds to zero. The caller is responsible for providing guard digits.
/// The magnitude of the terms must decrease, e.g. `|x_step| <= 1` and the coefficients shrink.
pub fn series_run<T: PolycoeffGen>(
    mut acc: BigDecimal,
    x_first: BigDecimal,
    x_step: &BigDecimal,
    polycoeff_gen: &mut T,
    oom: Oom,
    cc: &mut Consts,
) -> Result<BigDecimal, Error> {
    let mut x_pow = x_first;

    for _ in 0..SERIES_MAX_TERMS {
        if x_pow.is_zero() {
            return Ok(acc);
        }

        let (num, den) = polycoeff_gen.next(cc)?;
        let part = divide(&(&x_pow * BigDecimal::from(num)), &BigDecimal::from(den), oom, RoundingMode::HalfEven)?;

        if part.is_zero() {
            return Ok(acc);
        }

        acc += part;
        x_pow = multiply(&x_pow, x_step, oom, RoundingMode::HalfEven)?;
    }

    tracing::warn!(terms = SERIES_MAX_TERMS, oom, "series did not converge");

    Ok(acc)
}

//
// Coefficient generators shared by several functions.
//

/// Coefficients `1/2!, 1/3!, 1/4!, ...`
pub struct ExpPolycoeffGen {
    n: usize,
}

impl ExpPolycoeffGen {
    pub fn new() -> Self {
        ExpPolycoeffGen { n: 1 }
    }
}

impl PolycoeffGen for ExpPolycoeffGen {
    fn next(&mut self, cc: &mut Consts) -> Result<(BigInt, BigInt), Error> {
        self.n += 1;
        Ok((BigInt::from(1), cc.factorial(self.n).clone()))
    }
}

/// Alternating coefficients `-1/(s+2)!, 1/(s+4)!, -1/(s+6)!, ...`
/// The start `s` is 1 for sine and 0 for cosine.
pub struct AlternatingPolycoeffGen {
    n: usize,
    sign: i8,
}

impl AlternatingPolycoeffGen {
    pub fn sin() -> Self {
        AlternatingPolycoeffGen { n: 1, sign: 1 }
    }

    pub fn cos() -> Self {
        AlternatingPolycoeffGen { n: 0, sign: 1 }
    }
}

impl PolycoeffGen for AlternatingPolycoeffGen {
    fn next(&mut self, cc: &mut Consts) -> Result<(BigInt, BigInt), Error> {
        self.n += 2;
        self.sign = -self.sign;
        Ok((BigInt::from(self.sign), cc.factorial(self.n).clone()))
    }
}

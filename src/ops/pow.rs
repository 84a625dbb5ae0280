//! Exponentiation.

use crate::common::util::count_digits;
use crate::common::util::is_integer;
use crate::common::util::split_int_fract;
use crate::common::util::ten_pow;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::POWER_RADIX_MAX;
use crate::defs::POWER_RADIX_MIN;
use crate::ops::muldiv::divide;
use crate::ops::root::root;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use crate::ops::round::round_sig;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;
use smallvec::SmallVec;

// Digits added on top of the per-level headroom of the radix walk.
pub(crate) const POW_GUARD_DIGITS: u64 = 3;

// Significant digits of the pass estimating the magnitude of the result.
const POW_ESTIMATE_SIG: u64 = 6;

/// Clamps the radix used to split exponents to the supported range.
pub(crate) fn clamp_radix(div: u32) -> u32 {
    div.clamp(POWER_RADIX_MIN, POWER_RADIX_MAX)
}

// x^m for a small m using left-to-right square-and-multiply.
fn powi_small(x: &BigDecimal, m: u32, sig: u64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if m == 0 {
        return Ok(BigDecimal::one());
    }

    let mut bit_pos = 31 - m.leading_zeros();
    let mut ret = x.clone();

    while bit_pos > 0 {
        bit_pos -= 1;
        ret = round_sig(&(&ret * &ret), sig, rm)?;
        if m & (1 << bit_pos) != 0 {
            ret = round_sig(&(&ret * x), sig, rm)?;
        }
    }

    Ok(ret)
}

/// Successive partial powers `x^e1, x^e2, ..., x^n` where `e(k+1) = e(k) * div + d(k+1)`
/// and `d1, d2, ...` are the digits of `n` in radix `div`, most significant first.
///
/// All values are rounded to a fixed number of significant digits using the rounding mode `rm`,
/// so directed rounding modes produce bounds of the exact partial powers.
pub(crate) struct RadixPowers {
    x: BigDecimal,
    acc: Option<BigDecimal>,
    digits: SmallVec<[u32; 32]>,
    div: u32,
    sig: u64,
    rm: RoundingMode,
}

impl RadixPowers {
    /// `x` must be positive and `n` must be positive.
    /// `sig` is the number of significant digits expected in the last partial power;
    /// the headroom for the levels of the decomposition is added internally.
    pub(crate) fn new(x: &BigDecimal, n: &BigInt, div: u32, sig: u64, rm: RoundingMode) -> Result<Self, Error> {
        if !x.is_positive() || !n.is_positive() {
            return Err(Error::InvalidArgument);
        }

        let div = clamp_radix(div);

        // explicit digit stack, least significant digit at the bottom.
        let mut digits = SmallVec::<[u32; 32]>::new();
        let radix = BigInt::from(div);
        let mut rest = n.clone();
        while !rest.is_zero() {
            let (q, r) = rest.div_rem(&radix);
            digits.push(r.to_u32().ok_or(Error::InvalidArgument)?);
            rest = q;
        }

        let levels = digits.len() as u64;
        let sig = sig.max(1) + levels * count_digits(&radix) + POW_GUARD_DIGITS;

        Ok(RadixPowers {
            x: round_sig(x, sig, rm)?,
            acc: None,
            digits,
            div,
            sig,
            rm,
        })
    }

    fn step(&mut self, d: u32) -> Result<BigDecimal, Error> {
        let mut ret = match &self.acc {
            Some(acc) => powi_small(acc, self.div, self.sig, self.rm)?,
            None => BigDecimal::one(),
        };

        if d > 0 {
            let xd = powi_small(&self.x, d, self.sig, self.rm)?;
            ret = round_sig(&(ret * xd), self.sig, self.rm)?;
        }

        self.acc = Some(ret.clone());

        Ok(ret)
    }
}

impl Iterator for RadixPowers {
    type Item = Result<BigDecimal, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.digits.pop()?;
        Some(self.step(d))
    }
}

/// Computes `x^n` for positive `x` and `n` keeping at least `sig` significant digits.
/// The returned value carries the guard digits of the computation.
pub(crate) fn powi_sig(x: &BigDecimal, n: &BigInt, div: u32, sig: u64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    let mut ret = BigDecimal::one();
    for p in RadixPowers::new(x, n, div, sig, rm)? {
        ret = p?;
    }
    Ok(ret)
}

/// Computes `x` to the power of the integer `n`. The exponent is split using the radix `div`
/// clamped to [2, 256]. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero and `n` is negative.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn powi(x: &BigDecimal, n: &BigInt, div: u32, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if n.is_zero() {
        return round_dp(&BigDecimal::one(), dp, rm);
    }

    if x.is_zero() {
        return if n.is_negative() {
            Err(Error::InvalidArgument)
        } else {
            round_dp(x, dp, rm)
        };
    }

    if n.is_one() {
        return round_dp(x, dp, rm);
    }

    if x.is_negative() {
        return if n.is_odd() {
            Ok(-powi(&x.abs(), n, div, dp, rm.invert())?)
        } else {
            powi(&x.abs(), n, div, dp, rm)
        };
    }

    if x.is_one() {
        return round_dp(x, dp, rm);
    }

    let m = n.abs();

    if rm == RoundingMode::Unnecessary {
        return powi_exact(x, n, div, dp);
    }

    let est = powi_sig(x, &m, div, POW_ESTIMATE_SIG, RoundingMode::HalfEven)?;
    let msd = oom_msd(&est);

    if n.is_negative() {
        // 1/x^m has its most significant digit at -msd - 1 or -msd.
        let sig = (dp - msd + 1).max(1) as u64 + POW_GUARD_DIGITS;
        let p = powi_sig(x, &m, div, sig, RoundingMode::HalfEven)?;
        divide(&BigDecimal::one(), &p, -dp, rm)
    } else {
        let sig = (msd + dp + 2).max(1) as u64 + POW_GUARD_DIGITS;
        let p = powi_sig(x, &m, div, sig, RoundingMode::HalfEven)?;
        round_dp(&p, dp, rm)
    }
}

// x^n for positive x other than 1 which must fit into dp decimal places without rounding.
fn powi_exact(x: &BigDecimal, n: &BigInt, div: u32, dp: i64) -> Result<BigDecimal, Error> {
    let m = n.abs();

    if n.is_negative() {
        let r = exact_reciprocal(x).ok_or(Error::RoundingNecessary)?;
        return powi(&r, &m, div, dp, RoundingMode::Unnecessary);
    }

    // u * 10^-s with u not divisible by 10 raised to m has exactly s * m decimal places.
    let (_, s) = x.normalized().as_bigint_and_exponent();
    if s > 0 && BigInt::from(s) * &m > BigInt::from(dp) {
        return Err(Error::RoundingNecessary);
    }

    // enough digits to hold every partial power exactly.
    let est = powi_sig(x, &m, div, POW_ESTIMATE_SIG, RoundingMode::HalfEven)?;
    let sig = (oom_msd(&est) + dp.max(0) + 3).max(1) as u64 + POW_GUARD_DIGITS;
    let p = powi_sig(x, &m, div, sig, RoundingMode::HalfEven)?;

    round_dp(&p, dp, RoundingMode::Unnecessary)
}

// 1/x if it has a finite decimal representation, i.e. the digits of x have no prime factors other than 2 and 5.
fn exact_reciprocal(x: &BigDecimal) -> Option<BigDecimal> {
    let (u, s) = x.normalized().as_bigint_and_exponent();

    let mut rest = u.abs();
    let mut k = 0;
    for p in [2u32, 5] {
        let p = BigInt::from(p);
        let mut e = 0;
        while rest.is_multiple_of(&p) {
            rest /= &p;
            e += 1;
        }
        k = k.max(e);
    }

    if !rest.is_one() {
        return None;
    }

    // 1/x = 10^s / u = (10^k / u) * 10^(s - k)
    let q = ten_pow(k) / &u;
    Some(BigDecimal::new(q, k as i64 - s))
}

/// Computes `x` to the power of `y`. Integer parts of exponents are split using the radix `div`
/// clamped to [2, 256], fractional parts are computed as products of successive tenth roots of `x`.
/// The result has `dp` decimal places and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidArgument: `x` is zero and `y` is negative, or `x` is negative and `y` is not an integer.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn pow(x: &BigDecimal, y: &BigDecimal, div: u32, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
    if is_integer(y) {
        let (n, _) = split_int_fract(y);
        return powi(x, &n, div, dp, rm);
    }

    if x.is_negative() {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() {
        return if y.is_negative() {
            Err(Error::InvalidArgument)
        } else {
            round_dp(x, dp, rm)
        };
    }

    if x.is_one() {
        return round_dp(x, dp, rm);
    }

    let y_abs = y.abs();
    let est = pow_sig(x, &y_abs, div, POW_ESTIMATE_SIG)?;
    let msd = oom_msd(&est);

    if y.is_negative() {
        let sig = (dp - msd + 1).max(1) as u64 + POW_GUARD_DIGITS;
        let p = pow_sig(x, &y_abs, div, sig)?;
        divide(&BigDecimal::one(), &p, -dp, rm)
    } else {
        let sig = (msd + dp + 2).max(1) as u64 + POW_GUARD_DIGITS;
        let p = pow_sig(x, &y_abs, div, sig)?;
        round_dp(&p, dp, rm)
    }
}

// x^y for positive x and y with sig significant digits.
fn pow_sig(x: &BigDecimal, y: &BigDecimal, div: u32, sig: u64) -> Result<BigDecimal, Error> {
    let (int, fract) = split_int_fract(y);
    let sig = sig + POW_GUARD_DIGITS;

    let mut ret = if int.is_zero() {
        BigDecimal::one()
    } else {
        powi_sig(x, &int, div, sig, RoundingMode::HalfEven)?
    };

    if !fract.is_zero() {
        let xf = pow_fract(x, &fract, div, sig)?;
        ret = round_sig(&(ret * xf), sig, RoundingMode::HalfEven)?;
    }

    Ok(ret)
}

// x^f for 0 < f < 1: f = d1/10 + d2/100 + ..., x^f = r1^d1 * r2^d2 * ..., where r(k+1) is the tenth root of r(k).
fn pow_fract(x: &BigDecimal, fract: &BigDecimal, div: u32, sig: u64) -> Result<BigDecimal, Error> {
    let msd = oom_msd(x);

    // digits of the exponent beyond k_max change the result by less than 10^(-sig) relatively.
    let k_max = sig as i64 + count_digits(&BigInt::from(msd.abs() + 1)) as i64 + 1;
    let f = fract.with_scale(k_max).normalized();
    let (u, s) = f.as_bigint_and_exponent();
    if u.is_zero() || s <= 0 {
        return Ok(BigDecimal::one());
    }

    let (_, mut digits) = u.to_radix_be(10);
    while (digits.len() as i64) < s {
        digits.insert(0, 0);
    }

    // every root lies between x and 1.
    let dp_root = sig as i64 + (-msd).max(0) + 1;
    let ten = BigInt::from(10);

    let mut rho = x.clone();
    let mut ret = BigDecimal::one();
    for d in digits {
        rho = root(&rho, &ten, div, dp_root, RoundingMode::HalfEven)?;
        if d > 0 {
            let p = powi_small(&rho, d as u32, sig, RoundingMode::HalfEven)?;
            ret = round_sig(&(ret * p), sig, RoundingMode::HalfEven)?;
        }
    }

    Ok(ret)
}

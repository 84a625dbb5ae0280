//! π number

use crate::common::util::ten_pow;
use crate::defs::Error;
use crate::ops::muldiv::divide;
use crate::ops::muldiv::multiply;
use crate::ops::round::round_dp;
use crate::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;

// Number of decimal places computed beyond the requested ones.
const PI_GUARD_DIGITS: i64 = 4;

// Each term of the Chudnovsky series adds about 14.18 decimal digits.
const DIGITS_PER_TERM: i64 = 14;

fn pqr(a: usize, b: usize) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let n0 = BigInt::from(6 * b - 5);
        let n1 = BigInt::from(2 * b - 1);
        let n2 = BigInt::from(6 * b - 1);

        let r = n0 * n1 * n2;

        let n0 = BigInt::from(10939058860032000u64);
        let n1 = BigInt::from(b);
        let q = n0 * &n1 * &n1 * &n1;

        let n0 = BigInt::from(13591409u64 + 545140134u64 * b as u64);
        let mut p = &r * n0;

        if b & 1 != 0 {
            p = -p;
        }

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let p = pa * &qb + pb * &ra;
        let q = qa * qb;
        let r = ra * rb;

        (p, q, r)
    }
}

fn pqr_inc(pa: &BigInt, qa: &BigInt, ra: &BigInt, m: usize) -> (BigInt, BigInt, BigInt, usize) {
    let b = m * 2;

    let (pb, qb, rb) = pqr(m, b);

    let p = pa * &qb + pb * ra;
    let q = qa * qb;
    let r = ra * rb;

    (p, q, r, b)
}

// Value of a constant together with the number of decimal places it is valid to.
struct Scaled {
    val: BigDecimal,
    dp: i64,
}

/// Holds value of currently computed π and its multiples used for argument reduction.
pub struct PiCache {
    b: usize,
    pk: BigInt,
    qk: BigInt,
    rk: BigInt,
    pi: Scaled,
    half_pi: Option<Scaled>,
    quarter_pi: Option<Scaled>,
    two_pi: Option<Scaled>,
}

impl PiCache {
    fn calc_pi(p: &BigInt, q: &BigInt, dp: i64) -> Result<BigDecimal, Error> {
        // pi = 426880 * sqrt(10005) * q / (13591409 * q + p)
        //    = 4270934400 * q / (sqrt(10005) * (13591409 * q + p))

        let s = dp + PI_GUARD_DIGITS;
        let sq = (BigInt::from(10005u32) * ten_pow(2 * s as u64)).sqrt();

        let n0 = q * BigInt::from(4270934400u64) * ten_pow(s as u64);
        let n1 = (q * BigInt::from(13591409u32) + p) * sq;

        divide(&BigDecimal::from(n0), &BigDecimal::from(n1), -dp, RoundingMode::HalfEven)
    }

    // Decimal places the current partial sum is valid to.
    fn valid_dp(b: usize) -> i64 {
        b as i64 * DIGITS_PER_TERM - PI_GUARD_DIGITS
    }

    pub fn new() -> Result<Self, Error> {
        let b = 2;
        let (p01, q01, r01) = pqr(0, b);
        let dp = Self::valid_dp(b);
        let val = Self::calc_pi(&p01, &q01, dp)?;

        Ok(PiCache {
            b,
            pk: p01,
            qk: q01,
            rk: r01,
            pi: Scaled { val, dp },
            half_pi: None,
            quarter_pi: None,
            two_pi: None,
        })
    }

    fn extend(&mut self, dp: i64) -> Result<(), Error> {
        let dp_ext = dp + PI_GUARD_DIGITS;

        if self.pi.dp < dp_ext {
            let mut pk;
            let mut qk;
            let mut rk;
            let mut bb;

            (pk, qk, rk, bb) = pqr_inc(&self.pk, &self.qk, &self.rk, self.b);

            while Self::valid_dp(bb) < dp_ext {
                (pk, qk, rk, bb) = pqr_inc(&pk, &qk, &rk, bb);
            }

            let valid = Self::valid_dp(bb);

            tracing::trace!(terms = bb, dp = valid, "extending pi");

            self.pi = Scaled {
                val: Self::calc_pi(&pk, &qk, valid)?,
                dp: valid,
            };
            self.half_pi = None;
            self.quarter_pi = None;
            self.two_pi = None;

            self.pk = pk;
            self.qk = qk;
            self.rk = rk;
            self.b = bb;
        }

        Ok(())
    }

    /// Return value of π with `dp` decimal places.
    pub fn for_dp(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.extend(dp)?;
        round_dp(&self.pi.val, dp, rm)
    }

    /// Return value of π/2 with `dp` decimal places.
    pub fn half_for_dp(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.extend(dp)?;
        let pi = &self.pi;
        let c = Self::derived(&mut self.half_pi, pi, |v, dp| divide(v, &BigDecimal::from(2), -dp, RoundingMode::HalfEven))?;
        round_dp(&c.val, dp, rm)
    }

    /// Return value of π/4 with `dp` decimal places.
    pub fn quarter_for_dp(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.extend(dp)?;
        let pi = &self.pi;
        let c = Self::derived(&mut self.quarter_pi, pi, |v, dp| divide(v, &BigDecimal::from(4), -dp, RoundingMode::HalfEven))?;
        round_dp(&c.val, dp, rm)
    }

    /// Return value of 2π with `dp` decimal places.
    pub fn two_for_dp(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.extend(dp)?;
        let pi = &self.pi;
        let c = Self::derived(&mut self.two_pi, pi, |v, dp| multiply(v, &BigDecimal::from(2), -dp, RoundingMode::HalfEven))?;
        round_dp(&c.val, dp, rm)
    }

    // Recomputes a derived constant if it is missing or less precise than π.
    fn derived<'a, F>(slot: &'a mut Option<Scaled>, pi: &Scaled, f: F) -> Result<&'a Scaled, Error>
    where
        F: Fn(&BigDecimal, i64) -> Result<BigDecimal, Error>,
    {
        if slot.as_ref().map_or(true, |c| c.dp < pi.dp) {
            *slot = Some(Scaled {
                val: f(&pi.val, pi.dp)?,
                dp: pi.dp,
            });
        }

        slot.as_ref().ok_or(Error::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    const PI_120: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067982148086513282306647";

    #[test]
    fn test_pi_const() {
        let mut pi = PiCache::new().unwrap();

        let c = pi.for_dp(10, RoundingMode::HalfEven).unwrap();
        assert_eq!(c, BigDecimal::from_str("3.1415926536").unwrap());

        let c = pi.for_dp(100, RoundingMode::Down).unwrap();
        assert_eq!(c, BigDecimal::from_str(&PI_120[..102]).unwrap());

        let c = pi.half_for_dp(20, RoundingMode::HalfEven).unwrap();
        assert_eq!(c, BigDecimal::from_str("1.57079632679489661923").unwrap());

        let c = pi.quarter_for_dp(20, RoundingMode::HalfEven).unwrap();
        assert_eq!(c, BigDecimal::from_str("0.78539816339744830962").unwrap());

        let c = pi.two_for_dp(20, RoundingMode::HalfEven).unwrap();
        assert_eq!(c, BigDecimal::from_str("6.28318530717958647693").unwrap());

        // derived constants follow the extension of π
        let c = pi.two_for_dp(110, RoundingMode::Down).unwrap();
        let expected = BigDecimal::from_str(&PI_120[..112]).unwrap() * BigDecimal::from(2);
        assert!((c - expected).abs() <= BigDecimal::from_str("1e-109").unwrap());
    }
}

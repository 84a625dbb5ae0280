//! Euler's number

use crate::common::util::count_digits;
use crate::defs::Error;
use crate::defs::Oom;
use crate::ops::muldiv::divide;
use crate::ops::round::round;
use crate::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;

// Number of digits computed beyond the requested order of magnitude.
const E_GUARD_DIGITS: Oom = 2;

// p / q = sum of b! / k! for k = a+1..b, divided by b! / a!
fn pq(a: usize, b: usize) -> (BigInt, BigInt) {
    if a == b - 1 {
        (BigInt::one(), BigInt::from(b))
    } else {
        let m = (a + b) / 2;

        let (pa, qa) = pq(a, m);
        let (pb, qb) = pq(m, b);

        let q = &qa * &qb;
        let p = pa * &qb + pb;

        (p, q)
    }
}

fn pq_inc(pa: &BigInt, qa: &BigInt, m: usize) -> (BigInt, BigInt, usize) {
    let b = m * 2;

    let (pb, qb) = pq(m, b);

    let q = qa * &qb;
    let p = pa * &qb + pb;

    (p, q, b)
}

/// Holds value of currently computed e.
pub struct ECache {
    b: usize,
    pk: BigInt,
    qk: BigInt,
    val: BigDecimal,
    oom: Oom,
}

impl ECache {
    fn calc_e(p: &BigInt, q: &BigInt, oom: Oom) -> Result<BigDecimal, Error> {
        // 1 + pk / qk
        let f0 = divide(&BigDecimal::from(p.clone()), &BigDecimal::from(q.clone()), oom, RoundingMode::Down)?;
        Ok(f0 + BigDecimal::one())
    }

    pub fn new() -> Result<Self, Error> {
        let b = 32;
        let (p01, q01) = pq(0, b);
        let oom = Self::valid_oom(&q01);
        let val = Self::calc_e(&p01, &q01, oom)?;

        Ok(ECache {
            b,
            pk: p01,
            qk: q01,
            val,
            oom,
        })
    }

    // The remainder of the series after b terms is less than 2 / (b+1)!, and qk = b!.
    fn valid_oom(q: &BigInt) -> Oom {
        E_GUARD_DIGITS - count_digits(q) as Oom
    }

    /// Returns the order of magnitude to which the cached value is valid.
    pub fn oom(&self) -> Oom {
        self.oom
    }

    /// Return value of e rounded to the order of magnitude `oom`.
    pub fn for_oom(&mut self, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
        let oom_ext = oom - E_GUARD_DIGITS;

        if self.oom > oom_ext {
            let mut pk;
            let mut qk;
            let mut bb;

            (pk, qk, bb) = pq_inc(&self.pk, &self.qk, self.b);

            while Self::valid_oom(&qk) > oom_ext {
                (pk, qk, bb) = pq_inc(&pk, &qk, bb);
            }

            let valid = Self::valid_oom(&qk);

            tracing::trace!(terms = bb, oom = valid, "extending e");

            self.val = Self::calc_e(&pk, &qk, valid - E_GUARD_DIGITS)?;
            self.oom = valid;
            self.pk = pk;
            self.qk = qk;
            self.b = bb;
        }

        round(&self.val, oom, rm)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::str::FromStr;

    const E_100: &str = "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274";

    #[test]
    fn test_e_const() {
        let mut e = ECache::new().unwrap();

        let c = e.for_oom(-10, RoundingMode::HalfEven).unwrap();
        assert_eq!(c, BigDecimal::from_str("2.7182818285").unwrap());

        let c = e.for_oom(-100, RoundingMode::Down).unwrap();
        assert_eq!(c, BigDecimal::from_str(&E_100[..102]).unwrap());
        assert!(e.oom() <= -102);

        // cached value is reused for coarser requests
        let oom = e.oom();
        let c = e.for_oom(-3, RoundingMode::Up).unwrap();
        assert_eq!(c, BigDecimal::from_str("2.719").unwrap());
        assert_eq!(oom, e.oom());
    }
}

mod e;
mod pi;
mod tables;

use crate::defs::Oom;
use crate::ops::consts::e::ECache;
use crate::ops::consts::pi::PiCache;
use crate::ops::consts::tables::IntTable;
use crate::Error;
use crate::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Constants cache contains arbitrary-precision mathematical constants
/// and the integer tables used by the series evaluators.
pub struct Consts {
    pi: PiCache,
    e: ECache,
    factorials: IntTable,
    powers_of_two: IntTable,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed. Every cached value only grows in precision.
impl Consts {
    /// Initializes the constants cache.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the initial values could not be computed.
    pub fn new() -> Result<Self, Error> {
        Ok(Consts {
            pi: PiCache::new()?,
            e: ECache::new()?,
            factorials: IntTable::factorials(),
            powers_of_two: IntTable::powers_of_two(),
        })
    }

    /// Returns `n!`.
    pub fn factorial(&mut self, n: usize) -> &BigInt {
        self.factorials.get(n)
    }

    /// Returns `2^n`.
    pub fn power_of_two(&mut self, n: usize) -> &BigInt {
        self.powers_of_two.get(n)
    }

    /// Returns the value of the pi number with `dp` decimal places using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - RoundingNecessary: `rm` is `Unnecessary`.
    pub fn pi(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.pi.for_dp(dp, rm)
    }

    /// Returns the value of π/2 with `dp` decimal places using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - RoundingNecessary: `rm` is `Unnecessary`.
    pub fn half_pi(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.pi.half_for_dp(dp, rm)
    }

    /// Returns the value of π/4 with `dp` decimal places using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - RoundingNecessary: `rm` is `Unnecessary`.
    pub fn quarter_pi(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.pi.quarter_for_dp(dp, rm)
    }

    /// Returns the value of 2π with `dp` decimal places using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - RoundingNecessary: `rm` is `Unnecessary`.
    pub fn two_pi(&mut self, dp: i64, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.pi.two_for_dp(dp, rm)
    }

    /// Returns the value of the Euler number rounded to the order of magnitude `oom` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - RoundingNecessary: `rm` is `Unnecessary`.
    pub fn e(&mut self, oom: Oom, rm: RoundingMode) -> Result<BigDecimal, Error> {
        self.e.for_oom(oom, rm)
    }

    /// Returns the order of magnitude to which the cached Euler number is currently valid.
    pub fn e_oom(&self) -> Oom {
        self.e.oom()
    }
}

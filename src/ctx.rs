//! Operations performed with the parameters of a context.

use crate::defs::Error;
use crate::defs::Oom;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_DP;
use crate::defs::DEFAULT_POWER_RADIX;
use crate::defs::DEFAULT_RM;
use crate::ops;
use crate::ops::clamp_radix;
use crate::ops::consts::Consts;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default parameters of the operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of decimal places of the results.
    pub dp: i64,

    /// Rounding mode of the results.
    pub rm: RoundingMode,

    /// Radix used to split integer exponents.
    pub power_radix: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dp: DEFAULT_DP,
            rm: DEFAULT_RM,
            power_radix: DEFAULT_POWER_RADIX,
        }
    }
}

impl Config {
    /// Order of magnitude of the results.
    pub fn oom(&self) -> Oom {
        -self.dp
    }
}

/// Context supplies the precision, the rounding mode, the power radix, and the constants cache to all operations.
/// Contexts can share a constants cache, also between threads.
#[derive(Clone)]
pub struct Context {
    cc: Arc<Mutex<Consts>>,
    config: Config,
}

impl Context {
    /// Creates a new context with default parameters.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the constants cache could not be initialized.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Creates a new context with parameters `config`.
    /// The power radix is clamped to the allowed range.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the constants cache could not be initialized.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let mut ctx = Context {
            cc: Arc::new(Mutex::new(Consts::new()?)),
            config,
        };
        ctx.power_radix(config.power_radix);
        Ok(ctx)
    }

    /// Sets the number of decimal places of the context.
    pub fn precision(&mut self, dp: i64) -> &mut Self {
        self.config.dp = dp;
        self
    }

    /// Sets the rounding mode of the context.
    pub fn rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.config.rm = rm;
        self
    }

    /// Sets the power radix of the context. Values outside of `[POWER_RADIX_MIN, POWER_RADIX_MAX]` are clamped.
    pub fn power_radix(&mut self, div: u32) -> &mut Self {
        self.config.power_radix = clamp_radix(div);
        self
    }

    /// Sets the constant cache of the context.
    pub fn constant_cache(&mut self, cc: Arc<Mutex<Consts>>) -> &mut Self {
        self.cc = cc;
        self
    }

    /// Returns the number of decimal places of the context.
    pub fn get_precision(&self) -> i64 {
        self.config.dp
    }

    /// Returns the rounding mode of the context.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.config.rm
    }

    /// Returns the power radix of the context.
    pub fn get_power_radix(&self) -> u32 {
        self.config.power_radix
    }

    /// Returns the parameters of the context.
    pub fn get_config(&self) -> Config {
        self.config
    }

    /// Returns the constant cache of the context.
    pub fn get_consts(&self) -> Arc<Mutex<Consts>> {
        self.cc.clone()
    }

    /// Returns `x` rounded to the precision of the context with trailing zeros removed.
    pub fn round(&self, x: &BigDecimal) -> Result<BigDecimal, Error> {
        ops::round(x, self.config.oom(), self.config.rm)
    }

    /// Returns the value of the pi number.
    pub fn pi(&self) -> Result<BigDecimal, Error> {
        self.cc.lock().pi(self.config.dp, self.config.rm)
    }

    /// Returns the value of the Euler number.
    pub fn e(&self) -> Result<BigDecimal, Error> {
        self.cc.lock().e(self.config.oom(), self.config.rm)
    }

    /// Returns `x` to the power of `n`.
    pub fn powi(&self, x: &BigDecimal, n: &BigInt) -> Result<BigDecimal, Error> {
        ops::powi(x, n, self.config.power_radix, self.config.dp, self.config.rm)
    }

    /// Returns `x` to the power of `y`.
    pub fn pow(&self, x: &BigDecimal, y: &BigDecimal) -> Result<BigDecimal, Error> {
        ops::pow(x, y, self.config.power_radix, self.config.dp, self.config.rm)
    }

    /// Returns the `n`-th root of `x`.
    pub fn root(&self, x: &BigDecimal, n: &BigInt) -> Result<BigDecimal, Error> {
        ops::root(x, n, self.config.power_radix, self.config.dp, self.config.rm)
    }

    /// Returns true if `x^n` is greater than `compare`.
    pub fn power_test_above(&self, compare: &BigDecimal, x: &BigDecimal, n: &BigInt) -> Result<bool, Error> {
        ops::power_test_above(compare, x, n, self.config.power_radix, self.config.dp, self.config.rm)
    }

    /// Returns true if `x^n` is less than `compare`.
    pub fn power_test_below(&self, compare: &BigDecimal, x: &BigDecimal, n: &BigInt) -> Result<bool, Error> {
        ops::power_test_below(compare, x, n, self.config.power_radix, self.config.dp, self.config.rm)
    }

    /// Returns the logarithm of `x` with base `base`.
    pub fn log(&self, base: &BigDecimal, x: &BigDecimal) -> Result<BigDecimal, Error> {
        ops::log(base, x, self.config.dp, self.config.rm, &mut self.cc.lock())
    }

    /// Returns the exponent of `x`.
    pub fn exp(&self, x: &BigDecimal) -> Result<BigDecimal, Error> {
        ops::exp(x, self.config.oom(), self.config.rm, &mut self.cc.lock())
    }
}

macro_rules! impl_fun_oom_rm {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(&self, x: &BigDecimal, y: &BigDecimal) -> Result<BigDecimal, Error> {
            ops::$fname(x, y, self.config.oom(), self.config.rm)
        }
    };
}

macro_rules! impl_fun_dp_rm_cc {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(&self, x: &BigDecimal) -> Result<BigDecimal, Error> {
            ops::$fname(x, self.config.dp, self.config.rm, &mut self.cc.lock())
        }
    };
}

impl Context {
    impl_fun_oom_rm!("Returns the quotient of `x` and `y`.", divide);
    impl_fun_oom_rm!("Returns the product of `x` and `y`.", multiply);

    impl_fun_dp_rm_cc!("Returns the natural logarithm of a number.", ln);
    impl_fun_dp_rm_cc!("Returns the logarithm base two of a number.", log2);
    impl_fun_dp_rm_cc!("Returns the logarithm base ten of a number.", log10);

    impl_fun_dp_rm_cc!("Returns the sine of a number.", sin);
    impl_fun_dp_rm_cc!("Returns the cosine of a number.", cos);
    impl_fun_dp_rm_cc!("Returns the tangent of a number.", tan);
    impl_fun_dp_rm_cc!("Returns the arcsine of a number.", asin);
    impl_fun_dp_rm_cc!("Returns the arccosine of a number.", acos);
    impl_fun_dp_rm_cc!("Returns the arctangent of a number.", atan);
}

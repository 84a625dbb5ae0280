//! Definitions.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An order of magnitude. `-1` selects resolution `0.1`, `0` selects units, `1` selects tens.
pub type Oom = i64;

/// Default number of decimal places.
pub const DEFAULT_DP: i64 = 40;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::HalfUp;

/// Default radix used to split integer exponents.
pub const DEFAULT_POWER_RADIX: u32 = 64;

/// Minimum radix used to split integer exponents.
pub const POWER_RADIX_MIN: u32 = 2;

/// Maximum radix used to split integer exponents.
pub const POWER_RADIX_MAX: u32 = 256;

/// Maximum number of bisection steps before a root is refined with Newton-Raphson.
pub const ROOT_BISECT_ITERATIONS: usize = 10;

/// Maximum number of Newton-Raphson steps.
pub const NEWTON_MAX_ITERATIONS: usize = 1000;

/// Maximum number of squarings when computing the fractional part of a logarithm.
pub const LOG_MAX_ITERATIONS: usize = 100_000;

/// Maximum number of terms of a Taylor series.
pub const SERIES_MAX_TERMS: usize = 100_000;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Divizor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// Rounding mode `Unnecessary` was requested, but the value can't be represented exactly.
    RoundingNecessary,

    /// The function is not defined for the argument, e.g. tangent of pi/2.
    Undefined,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::RoundingNecessary => f.write_str("rounding necessary"),
            Error::Undefined => f.write_str("value is undefined"),
        }
    }
}

impl std::error::Error for Error {}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round half away from zero.
    HalfUp,

    /// Round half toward zero.
    HalfDown,

    /// Round half to even.
    HalfEven,

    /// Round away from zero.
    Up,

    /// Round toward zero.
    Down,

    /// Round toward positive infinity.
    Ceiling,

    /// Round toward negative infinity.
    Floor,

    /// Rounding must not be needed, otherwise the operation fails with `Error::RoundingNecessary`.
    Unnecessary,
}

impl RoundingMode {
    /// Returns the mode which rounds the negated value the same way as `self` rounds the value.
    pub fn invert(&self) -> Self {
        match *self {
            RoundingMode::Ceiling => RoundingMode::Floor,
            RoundingMode::Floor => RoundingMode::Ceiling,
            rm => rm,
        }
    }
}
